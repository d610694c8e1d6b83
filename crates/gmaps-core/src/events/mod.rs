//! Map events shared between producers and frontend listeners.
//!
//! # Structure
//!
//! - `catalog` - Event names (`MAP_DOWNLOAD_ERROR`, ...)
//! - `download` - Download error payload and its builder
//!
//! # Wire Format
//!
//! A bus receives the event name and the payload as separate arguments:
//!
//! ```json
//! "MAP_DOWNLOAD_ERROR", { "errorMessage": "network timeout" }
//! ```
//!
//! `MapEvent` itself serializes as a tagged envelope for transports that
//! carry a single value:
//!
//! ```json
//! { "type": "MAP_DOWNLOAD_ERROR", "payload": { "errorMessage": "network timeout" } }
//! ```

mod catalog;
mod download;

use serde::{Deserialize, Serialize};

use crate::errors::EventError;

pub use catalog::{EventName, MAP_DOWNLOAD_ERROR};
pub use download::{DownloadErrorPayload, MapEvents};

/// A map event paired with its payload.
///
/// Each variant belongs to exactly one catalog name, so a payload cannot be
/// published under the wrong event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload")]
pub enum MapEvent {
    /// A map figure could not be downloaded.
    #[serde(rename = "MAP_DOWNLOAD_ERROR")]
    DownloadError(DownloadErrorPayload),
}

/// An event split into the arguments a publish call takes.
#[derive(Debug, Clone, PartialEq)]
pub struct WireEvent {
    /// Catalog name used as the topic.
    pub name: &'static str,
    /// JSON payload.
    pub payload: serde_json::Value,
}

impl MapEvent {
    /// Catalog entry for this event.
    pub const fn name(&self) -> EventName {
        match self {
            Self::DownloadError(_) => EventName::MapDownloadError,
        }
    }

    /// Get the event name for wire protocols.
    pub const fn event_name(&self) -> &'static str {
        self.name().as_str()
    }

    /// Encode the payload for publishing under [`Self::event_name`].
    pub fn to_wire(&self) -> Result<WireEvent, EventError> {
        let payload = match self {
            Self::DownloadError(payload) => serde_json::to_value(payload),
        }
        .map_err(|e| EventError::from_serde_error(&e))?;

        Ok(WireEvent {
            name: self.event_name(),
            payload,
        })
    }

    /// Decode an event received from a bus.
    ///
    /// Fails if `name` is not in the catalog or `payload` does not match the
    /// event's payload shape.
    pub fn from_wire(name: &str, payload: serde_json::Value) -> Result<Self, EventError> {
        let event = EventName::parse(name)?;
        let decoded = match event {
            EventName::MapDownloadError => {
                serde_json::from_value::<DownloadErrorPayload>(payload).map(Self::DownloadError)
            }
        };

        decoded.map_err(|e| {
            tracing::debug!(event = %event, error = %e, "Rejected map event payload");
            EventError::invalid_payload(event.as_str(), e.to_string())
        })
    }
}

impl TryFrom<WireEvent> for MapEvent {
    type Error = EventError;

    fn try_from(wire: WireEvent) -> Result<Self, Self::Error> {
        Self::from_wire(wire.name, wire.payload)
    }
}
