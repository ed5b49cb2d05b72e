use std::fmt;

use serde::Serialize;

use crate::validation::ValidationErrors;

/// The logical operation a request asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    List,
    Get,
    Create,
    Update,
    Delete,
}

impl Operation {
    /// Whether a missing id is a normal outcome for this operation rather
    /// than a storage fault.
    pub fn reports_not_found(self) -> bool {
        matches!(self, Operation::Get | Operation::Update | Operation::Delete)
    }

    /// Generic message shown to callers when the operation fails internally.
    pub fn failure_message(self, label: &str) -> String {
        let label = label.to_lowercase();
        match self {
            Operation::List => format!("Error listing {}s.", label),
            Operation::Get => format!("Error retrieving {}.", label),
            Operation::Create => format!("Error creating {}.", label),
            Operation::Update => format!("Error updating {}.", label),
            Operation::Delete => format!("Error deleting {}.", label),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operation::List => "list",
            Operation::Get => "get",
            Operation::Create => "create",
            Operation::Update => "update",
            Operation::Delete => "delete",
        };
        f.write_str(name)
    }
}

/// Result of handling one request.
///
/// `Success(())` stands for "no content" on update and delete.
/// `InternalError` carries nothing on purpose: the cause goes to the sink,
/// never to the caller.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<T> {
    Success(T),
    NotFound,
    BadRequest(String),
    ValidationFailed(ValidationErrors),
    InternalError,
}

impl<T> Outcome<T> {
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    /// Map this outcome to an HTTP-style status code. `success` is the code
    /// the operation uses on success (200, 201 or 204).
    pub fn status_code(&self, success: u16) -> u16 {
        match self {
            Outcome::Success(_) => success,
            Outcome::NotFound => 404,
            Outcome::BadRequest(_) => 400,
            Outcome::ValidationFailed(_) => 400,
            Outcome::InternalError => 500,
        }
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Outcome<U> {
        match self {
            Outcome::Success(value) => Outcome::Success(f(value)),
            Outcome::NotFound => Outcome::NotFound,
            Outcome::BadRequest(reason) => Outcome::BadRequest(reason),
            Outcome::ValidationFailed(errors) => Outcome::ValidationFailed(errors),
            Outcome::InternalError => Outcome::InternalError,
        }
    }

    pub fn success(self) -> Option<T> {
        match self {
            Outcome::Success(value) => Some(value),
            _ => None,
        }
    }
}
