//! Ports to collaborators outside this crate.

mod event_emitter;

pub use event_emitter::{LoggingEmitter, MapEventEmitter, NoopEmitter};
