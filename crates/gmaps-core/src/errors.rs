//! Map event error types.
//!
//! Building payloads and reading the catalog cannot fail. These errors only
//! come out of the wire codec, when a name or payload arrives from outside.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error type for encoding and decoding map events.
///
/// Serializable so adapters can forward it to a frontend unchanged.
#[derive(Clone, Debug, Error, Serialize, Deserialize, PartialEq, Eq)]
pub enum EventError {
    /// The event name is not part of the catalog.
    #[error("Unknown map event: {name}")]
    UnknownEvent {
        /// The name that failed to resolve.
        name: String,
    },

    /// The payload does not match the shape expected for the event.
    #[error("Invalid payload for {event}: {message}")]
    InvalidPayload {
        /// Catalog name of the event being decoded.
        event: String,
        /// Decoder message.
        message: String,
    },

    /// Encoding a payload to JSON failed.
    #[error("Serialization error: {message}")]
    Serialization {
        /// Encoder message.
        message: String,
    },
}

impl EventError {
    /// Create an unknown-event error.
    pub fn unknown_event(name: impl Into<String>) -> Self {
        Self::UnknownEvent { name: name.into() }
    }

    /// Create an invalid-payload error for the given event name.
    pub fn invalid_payload(event: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidPayload {
            event: event.into(),
            message: message.into(),
        }
    }

    /// Capture a `serde_json` encoding failure.
    #[must_use]
    pub fn from_serde_error(err: &serde_json::Error) -> Self {
        Self::Serialization {
            message: err.to_string(),
        }
    }
}
