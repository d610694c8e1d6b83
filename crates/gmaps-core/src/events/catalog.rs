//! Event name catalog.
//!
//! Names are shared with the frontend listeners, so each value matches its
//! key to keep logs greppable.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::EventError;

/// Emitted when a map figure could not be downloaded.
pub const MAP_DOWNLOAD_ERROR: &str = "MAP_DOWNLOAD_ERROR";

/// Typed view of the catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventName {
    /// See [`MAP_DOWNLOAD_ERROR`].
    #[serde(rename = "MAP_DOWNLOAD_ERROR")]
    MapDownloadError,
}

impl EventName {
    /// Every catalog entry, in declaration order.
    pub const ALL: &'static [Self] = &[Self::MapDownloadError];

    /// Wire name of the event.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::MapDownloadError => MAP_DOWNLOAD_ERROR,
        }
    }

    /// Resolve a wire name. Matching is exact and case-sensitive.
    pub fn parse(name: &str) -> Result<Self, EventError> {
        Self::ALL
            .iter()
            .copied()
            .find(|event| event.as_str() == name)
            .ok_or_else(|| EventError::unknown_event(name))
    }
}

impl FromStr for EventName {
    type Err = EventError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for EventName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    /// Frontend listeners subscribe by these literal strings.
    #[test]
    fn map_event_names_are_stable() {
        assert_eq!(MAP_DOWNLOAD_ERROR, "MAP_DOWNLOAD_ERROR");
        assert_eq!(EventName::MapDownloadError.as_str(), "MAP_DOWNLOAD_ERROR");
        assert_eq!(EventName::MapDownloadError.to_string(), "MAP_DOWNLOAD_ERROR");
    }

    #[test]
    fn test_names_are_unique() {
        let names: HashSet<_> = EventName::ALL.iter().map(EventName::as_str).collect();
        assert_eq!(names.len(), EventName::ALL.len());
    }

    #[test]
    fn test_parse() {
        assert_eq!(
            "MAP_DOWNLOAD_ERROR".parse::<EventName>(),
            Ok(EventName::MapDownloadError)
        );
        assert_eq!(
            EventName::parse("map_download_error"),
            Err(EventError::unknown_event("map_download_error"))
        );
        assert!(EventName::parse("").is_err());
    }

    #[test]
    fn test_serde_uses_wire_name() {
        let json = serde_json::to_string(&EventName::MapDownloadError).unwrap();
        assert_eq!(json, "\"MAP_DOWNLOAD_ERROR\"");
    }
}
