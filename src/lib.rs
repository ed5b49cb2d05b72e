//! Concurrent in-memory repository with server-assigned ids, a request
//! handler that turns repository results into typed outcomes, and an HTTP
//! transport for the `Item` record kind.

mod handler;
mod item;
mod repository;
mod validation;

#[cfg(feature = "http")]
pub mod http;

#[cfg(feature = "emitter")]
pub use handler::EmitterSink;
pub use handler::{
    LogSink, Notification, NotificationSink, Operation, Outcome, RecordHandler, SinkError,
};
pub use item::{min_price, Item, ITEM_LABEL, NAME_MAX_CHARS};
pub use repository::{InMemoryRepository, Record, RecordId, Repository, RepositoryError};
pub use validation::{Validate, ValidationErrors};

// Re-export the EventEmitter from the event_emitter_rs crate
#[cfg(feature = "emitter")]
pub use event_emitter_rs::EventEmitter;

/// Handler over the in-memory item repository, as wired by the service binary.
pub type ItemHandler = RecordHandler<InMemoryRepository<Item>>;
