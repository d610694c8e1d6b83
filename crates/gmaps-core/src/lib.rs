//! Map event names and payloads for gmaps.
//!
//! Producers build payloads with [`MapEvents`] and publish them under the
//! matching name from the catalog, either directly or through a
//! [`MapEventEmitter`] implemented by the host's event bus.
//!
//! ```
//! use gmaps_core::{MapEvent, MapEvents, MAP_DOWNLOAD_ERROR};
//!
//! let payload = MapEvents::download_error("network timeout");
//! assert_eq!(payload.error_message, "network timeout");
//!
//! let event = MapEvent::from(payload);
//! assert_eq!(event.event_name(), MAP_DOWNLOAD_ERROR);
//! ```
#![deny(unused_crate_dependencies)]

pub mod errors;
pub mod events;
pub mod ports;
pub mod settings;

pub use errors::EventError;
pub use events::{
    DownloadErrorPayload, EventName, MAP_DOWNLOAD_ERROR, MapEvent, MapEvents, WireEvent,
};
pub use ports::{LoggingEmitter, MapEventEmitter, NoopEmitter};
pub use settings::{DEFAULT_EVENT_LOG_LEVEL, LogLevel, LoggingEmitterConfig};
