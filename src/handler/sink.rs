use std::sync::{Arc, Mutex};

use serde::Serialize;
use thiserror::Error;

use super::outcome::Operation;
use crate::repository::RecordId;
use crate::validation::ValidationErrors;

/// Observational notice raised by the handler. Sinks receive these after the
/// outcome is decided; nothing a sink does changes the outcome.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Notification {
    NotFound {
        label: &'static str,
        operation: Operation,
        id: RecordId,
    },
    ValidationFailed {
        label: &'static str,
        operation: Operation,
        errors: ValidationErrors,
    },
    Created {
        label: &'static str,
        id: RecordId,
    },
    Updated {
        label: &'static str,
        id: RecordId,
    },
    Deleted {
        label: &'static str,
        id: RecordId,
    },
    InternalError {
        label: &'static str,
        operation: Operation,
        cause: String,
    },
}

impl Notification {
    /// Event name for this notice, e.g. `ItemCreated`.
    pub fn event_name(&self) -> String {
        let (label, suffix) = match self {
            Notification::NotFound { label, .. } => (label, "NotFound"),
            Notification::ValidationFailed { label, .. } => (label, "ValidationFailed"),
            Notification::Created { label, .. } => (label, "Created"),
            Notification::Updated { label, .. } => (label, "Updated"),
            Notification::Deleted { label, .. } => (label, "Deleted"),
            Notification::InternalError { label, .. } => (label, "InternalError"),
        };
        format!("{}{}", label, suffix)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SinkError {
    #[error("sink buffer poisoned")]
    BufferPoisoned,
    #[error("sink emitter poisoned")]
    EmitterPoisoned,
    #[error("notification encode failed: {0}")]
    Encode(String),
}

/// Receiver for handler notifications. Implementations must return promptly.
pub trait NotificationSink: Send + Sync {
    fn notify(&self, notification: &Notification) -> Result<(), SinkError>;
}

/// Sink that writes notifications as `tracing` events, optionally mirroring
/// each line into a shared buffer.
#[derive(Default)]
pub struct LogSink {
    buffer: Option<Arc<Mutex<Vec<String>>>>,
}

impl LogSink {
    pub fn new() -> Self {
        LogSink { buffer: None }
    }

    pub fn with_buffer(buffer: Arc<Mutex<Vec<String>>>) -> Self {
        LogSink {
            buffer: Some(buffer),
        }
    }
}

impl NotificationSink for LogSink {
    fn notify(&self, notification: &Notification) -> Result<(), SinkError> {
        let line = match notification {
            Notification::NotFound {
                label,
                operation,
                id,
            } => {
                tracing::warn!(label, %operation, id, "record not found");
                format!("{} with id {} not found during {}", label, id, operation)
            }
            Notification::ValidationFailed {
                label,
                operation,
                errors,
            } => {
                tracing::warn!(label, %operation, ?errors, "validation failed");
                format!("{} validation failed during {}: {:?}", label, operation, errors)
            }
            Notification::Created { label, id } => {
                tracing::info!(label, id, "created successfully");
                format!("{} created with id {}", label, id)
            }
            Notification::Updated { label, id } => {
                tracing::info!(label, id, "updated successfully");
                format!("{} with id {} updated", label, id)
            }
            Notification::Deleted { label, id } => {
                tracing::info!(label, id, "deleted successfully");
                format!("{} with id {} deleted", label, id)
            }
            Notification::InternalError {
                label,
                operation,
                cause,
            } => {
                tracing::error!(label, %operation, %cause, "operation failed");
                format!("{} {} failed: {}", label, operation, cause)
            }
        };

        if let Some(buffer) = &self.buffer {
            let mut buffer = buffer.lock().map_err(|_| SinkError::BufferPoisoned)?;
            buffer.push(line);
        }
        Ok(())
    }
}
