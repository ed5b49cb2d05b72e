use std::sync::Arc;

use super::outcome::{Operation, Outcome};
use super::sink::{Notification, NotificationSink};
use crate::repository::{Record, RecordId, Repository, RepositoryError};
use crate::validation::{Validate, ValidationErrors};

/// Request handler over a shared repository.
///
/// Each method performs at most one repository call and always ends in an
/// [`Outcome`]; repository errors never escape.
pub struct RecordHandler<S> {
    repo: Arc<S>,
    sink: Option<Arc<dyn NotificationSink>>,
}

impl<S> Clone for RecordHandler<S> {
    fn clone(&self) -> Self {
        Self {
            repo: Arc::clone(&self.repo),
            sink: self.sink.clone(),
        }
    }
}

impl<S> RecordHandler<S>
where
    S: Repository,
    S::Record: Validate,
{
    pub fn new(repo: Arc<S>) -> Self {
        Self { repo, sink: None }
    }

    /// Attach a sink that receives notifications for every handled request.
    pub fn with_sink(mut self, sink: Arc<dyn NotificationSink>) -> Self {
        self.sink = Some(sink);
        self
    }

    pub fn repo(&self) -> &Arc<S> {
        &self.repo
    }

    pub fn label(&self) -> &'static str {
        self.repo.label()
    }

    pub fn list(&self) -> Outcome<Vec<S::Record>> {
        match self.repo.list() {
            Ok(records) => Outcome::Success(records),
            Err(err) => self.fail(Operation::List, err),
        }
    }

    /// Number of stored records. Not part of the CRUD surface; used by
    /// health checks.
    pub fn count(&self) -> Outcome<usize> {
        match self.repo.count() {
            Ok(count) => Outcome::Success(count),
            Err(err) => self.fail(Operation::List, err),
        }
    }

    pub fn get(&self, id: RecordId) -> Outcome<S::Record> {
        match self.repo.get(id) {
            Ok(Some(record)) => Outcome::Success(record),
            Ok(None) => self.not_found(Operation::Get, id),
            Err(err) => self.fail(Operation::Get, err),
        }
    }

    /// Validate and store a new record. The returned record carries its
    /// assigned id.
    pub fn create(&self, candidate: S::Record) -> Outcome<S::Record> {
        if let Err(errors) = candidate.validate() {
            return self.invalid(Operation::Create, errors);
        }

        match self.repo.create(candidate) {
            Ok(created) => {
                self.notify(Notification::Created {
                    label: self.label(),
                    id: created.id(),
                });
                Outcome::Success(created)
            }
            Err(err) => self.fail(Operation::Create, err),
        }
    }

    /// Replace the record at `route_id`. The body must carry the same id.
    pub fn update(&self, route_id: RecordId, candidate: S::Record) -> Outcome<()> {
        if candidate.id() != route_id {
            return Outcome::BadRequest(format!(
                "{} ID in route does not match {} ID in body.",
                self.label(),
                self.label().to_lowercase()
            ));
        }

        if let Err(errors) = candidate.validate() {
            return self.invalid(Operation::Update, errors);
        }

        match self.repo.update(candidate) {
            Ok(()) => {
                self.notify(Notification::Updated {
                    label: self.label(),
                    id: route_id,
                });
                Outcome::Success(())
            }
            Err(err) => self.fail(Operation::Update, err),
        }
    }

    pub fn delete(&self, id: RecordId) -> Outcome<()> {
        match self.repo.delete(id) {
            Ok(()) => {
                self.notify(Notification::Deleted {
                    label: self.label(),
                    id,
                });
                Outcome::Success(())
            }
            Err(err) => self.fail(Operation::Delete, err),
        }
    }

    fn not_found<T>(&self, operation: Operation, id: RecordId) -> Outcome<T> {
        self.notify(Notification::NotFound {
            label: self.label(),
            operation,
            id,
        });
        Outcome::NotFound
    }

    fn invalid<T>(&self, operation: Operation, errors: ValidationErrors) -> Outcome<T> {
        self.notify(Notification::ValidationFailed {
            label: self.label(),
            operation,
            errors: errors.clone(),
        });
        Outcome::ValidationFailed(errors)
    }

    fn fail<T>(&self, operation: Operation, err: RepositoryError) -> Outcome<T> {
        match err {
            RepositoryError::NotFound { id, .. } if operation.reports_not_found() => {
                self.not_found(operation, id)
            }
            other => {
                self.notify(Notification::InternalError {
                    label: self.label(),
                    operation,
                    cause: other.to_string(),
                });
                Outcome::InternalError
            }
        }
    }

    fn notify(&self, notification: Notification) {
        if let Some(sink) = &self.sink {
            if let Err(err) = sink.notify(&notification) {
                tracing::debug!(error = %err, event = %notification.event_name(), "sink dropped notification");
            }
        }
    }
}
