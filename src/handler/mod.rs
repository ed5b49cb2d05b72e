//! handler - maps CRUD requests onto a repository and repository results onto
//! a closed set of outcomes.
//!
//! The handler is stateless: it holds a shared repository handle and an
//! optional notification sink, nothing else. Transports (see the `http`
//! module) turn each [`Outcome`] into a wire response.
//!
//! ## Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use item_repository::{InMemoryRepository, Item, LogSink, Outcome, RecordHandler};
//!
//! let repo = Arc::new(InMemoryRepository::<Item>::new("Item"));
//! let handler = RecordHandler::new(repo).with_sink(Arc::new(LogSink::new()));
//!
//! match handler.create(item) {
//!     Outcome::Success(created) => println!("created {}", created.id),
//!     Outcome::ValidationFailed(errors) => println!("{:?}", errors),
//!     other => println!("{:?}", other),
//! }
//! ```

#[cfg(feature = "emitter")]
mod emitter;
mod handler;
mod outcome;
mod sink;

#[cfg(feature = "emitter")]
pub use emitter::EmitterSink;
pub use handler::RecordHandler;
pub use outcome::{Operation, Outcome};
pub use sink::{LogSink, Notification, NotificationSink, SinkError};
