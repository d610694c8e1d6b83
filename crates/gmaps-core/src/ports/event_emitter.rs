//! Event emitter port for publishing map events.
//!
//! The bus that delivers events to listeners lives outside this crate.
//! Producers talk to it through `MapEventEmitter`; adapters decide how the
//! name and payload reach the other side.

use crate::events::MapEvent;
use crate::settings::{LogLevel, LoggingEmitterConfig};

/// Trait for emitting map events.
///
/// # Implementations
///
/// - `NoopEmitter` - For tests and contexts without listeners
/// - `LoggingEmitter` - Writes events through `tracing`
/// - Adapter-specific implementations (widget comms, Tauri, SSE, etc.)
///
/// # Example
///
/// ```ignore
/// fn on_download_failed(emitter: &dyn MapEventEmitter, err: &dyn std::error::Error) {
///     emitter.emit(DownloadErrorPayload::from_error(err).into());
/// }
/// ```
pub trait MapEventEmitter: Send + Sync {
    /// Emit a map event.
    ///
    /// Fire-and-forget: implementations handle delivery failures internally
    /// and must not block.
    fn emit(&self, event: MapEvent);

    /// Clone this emitter into a boxed trait object.
    fn clone_box(&self) -> Box<dyn MapEventEmitter>;
}

/// A no-op event emitter.
#[derive(Debug, Clone, Default)]
pub struct NoopEmitter;

impl NoopEmitter {
    /// Create a new no-op emitter.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl MapEventEmitter for NoopEmitter {
    fn emit(&self, _event: MapEvent) {
        // Intentionally do nothing
    }

    fn clone_box(&self) -> Box<dyn MapEventEmitter> {
        Box::new(self.clone())
    }
}

/// Emitter that records every event as a `tracing` event.
///
/// Useful in CLI and headless contexts where nothing subscribes to map
/// events but failures should still show up in the logs.
#[derive(Debug, Clone, Default)]
pub struct LoggingEmitter {
    config: LoggingEmitterConfig,
}

impl LoggingEmitter {
    /// Create a logging emitter with the given settings.
    #[must_use]
    pub const fn new(config: LoggingEmitterConfig) -> Self {
        Self { config }
    }

    /// Level events are written at.
    #[must_use]
    pub const fn level(&self) -> LogLevel {
        self.config.effective_level()
    }

    fn payload_text(&self, event: &MapEvent) -> String {
        if !self.config.effective_include_payload() {
            return String::new();
        }
        match event.to_wire() {
            Ok(wire) => wire.payload.to_string(),
            Err(e) => {
                let name = event.event_name();
                tracing::warn!(event = %name, error = %e, "Failed to encode map event payload");
                String::new()
            }
        }
    }
}

impl MapEventEmitter for LoggingEmitter {
    fn emit(&self, event: MapEvent) {
        let name = event.event_name();
        let payload = self.payload_text(&event);
        match self.level() {
            LogLevel::Debug => tracing::debug!(event = %name, payload = %payload, "Map event"),
            LogLevel::Info => tracing::info!(event = %name, payload = %payload, "Map event"),
            LogLevel::Warn => tracing::warn!(event = %name, payload = %payload, "Map event"),
            LogLevel::Error => tracing::error!(event = %name, payload = %payload, "Map event"),
        }
    }

    fn clone_box(&self) -> Box<dyn MapEventEmitter> {
        Box::new(self.clone())
    }
}
