//! Map download events.

use serde::{Deserialize, Deserializer, Serialize};

use super::MapEvent;
use crate::ports::MapEventEmitter;

/// Payload published under [`MAP_DOWNLOAD_ERROR`](super::MAP_DOWNLOAD_ERROR).
///
/// Wire shape: `{ "errorMessage": "..." }`. A missing or `null` field decodes
/// to an empty message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DownloadErrorPayload {
    /// Human-readable reason the download failed, kept verbatim.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub error_message: String,
}

fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl DownloadErrorPayload {
    /// Build a payload from any error's display text.
    #[must_use]
    pub fn from_error(err: &dyn std::error::Error) -> Self {
        MapEvents::download_error(err.to_string())
    }
}

/// Payload builders, one per map event.
#[derive(Debug, Clone, Copy, Default)]
pub struct MapEvents;

impl MapEvents {
    /// Build the payload for a failed map download.
    ///
    /// The message is not validated or trimmed. Every call returns a new,
    /// independently owned payload.
    pub fn download_error(error_message: impl Into<String>) -> DownloadErrorPayload {
        DownloadErrorPayload {
            error_message: error_message.into(),
        }
    }

    /// Build a download error event and hand it to `emitter`.
    pub fn publish_download_error(emitter: &dyn MapEventEmitter, error_message: impl Into<String>) {
        emitter.emit(MapEvent::download_error(error_message));
    }
}

impl MapEvent {
    /// Create a map download error event.
    pub fn download_error(error_message: impl Into<String>) -> Self {
        Self::DownloadError(MapEvents::download_error(error_message))
    }
}

impl From<DownloadErrorPayload> for MapEvent {
    fn from(payload: DownloadErrorPayload) -> Self {
        Self::DownloadError(payload)
    }
}
