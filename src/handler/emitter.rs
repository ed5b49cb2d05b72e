use std::sync::Mutex;

use event_emitter_rs::EventEmitter;

use super::sink::{Notification, NotificationSink, SinkError};

/// A sink that emits notifications via an EventEmitter for in-process
/// listeners. Each notification is emitted under its event name (for example
/// `ItemCreated`) with the JSON encoding as payload.
///
/// Requires the `emitter` feature to be enabled.
pub struct EmitterSink {
    emitter: Mutex<EventEmitter>,
}

impl Default for EmitterSink {
    fn default() -> Self {
        Self::new(EventEmitter::new())
    }
}

impl EmitterSink {
    pub fn new(emitter: EventEmitter) -> Self {
        EmitterSink {
            emitter: Mutex::new(emitter),
        }
    }

    /// Register a listener for an event name. Returns the listener id.
    pub fn on<F>(&self, event: &str, listener: F) -> Result<String, SinkError>
    where
        F: Fn(String) + Send + Sync + 'static,
    {
        let mut emitter = self
            .emitter
            .lock()
            .map_err(|_| SinkError::EmitterPoisoned)?;
        Ok(emitter.on(event, listener))
    }
}

impl NotificationSink for EmitterSink {
    fn notify(&self, notification: &Notification) -> Result<(), SinkError> {
        let payload =
            serde_json::to_string(notification).map_err(|e| SinkError::Encode(e.to_string()))?;
        let mut emitter = self
            .emitter
            .lock()
            .map_err(|_| SinkError::EmitterPoisoned)?;
        // Listeners run on their own threads; the join handles are dropped.
        emitter.emit(&notification.event_name(), payload);
        Ok(())
    }
}
