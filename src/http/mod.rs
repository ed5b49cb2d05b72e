//! HTTP transport - maps REST requests onto a [`RecordHandler`] and outcomes
//! onto status codes.
//!
//! Requires the `http` feature. Uses axum for routing.
//!
//! ## Routes
//!
//! For a repository labelled `Item` the collection lives at `/api/item`:
//!
//! - `GET /api/item` - list all records (200).
//! - `GET /api/item/:id` - one record (200) or 404.
//! - `POST /api/item` - create (201 with `Location`), 400 on validation.
//! - `PUT /api/item/:id` - replace (204), 400 on id mismatch or validation, 404.
//! - `DELETE /api/item/:id` - remove (204) or 404.
//! - `GET /health` - `{ "ok": true, "label": "Item", "count": n }`.
//!
//! ## Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use item_repository::{http, InMemoryRepository, Item, RecordHandler, ITEM_LABEL};
//!
//! let handler = RecordHandler::new(Arc::new(InMemoryRepository::<Item>::new(ITEM_LABEL)));
//!
//! // Get the router to compose with other axum routes
//! let app = http::router(handler.clone());
//!
//! // Or serve directly
//! http::serve(handler, "0.0.0.0:5000").await?;
//! ```

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::json;

use crate::handler::{Operation, Outcome, RecordHandler};
use crate::repository::{Record, RecordId, Repository};
use crate::validation::{Validate, ValidationErrors};

/// Path of the collection for a record label, e.g. `/api/item`.
pub fn collection_path(label: &str) -> String {
    format!("/api/{}", label.to_lowercase())
}

/// Build an axum `Router` serving CRUD routes for the handler's repository.
pub fn router<S>(handler: RecordHandler<S>) -> Router
where
    S: Repository + 'static,
    S::Record: Validate + Serialize + DeserializeOwned + 'static,
{
    let collection = collection_path(handler.label());
    let member = format!("{}/:id", collection);

    Router::new()
        .route("/health", get(health_handler::<S>))
        .route(
            &collection,
            get(list_handler::<S>).post(create_handler::<S>),
        )
        .route(
            &member,
            get(get_handler::<S>)
                .put(update_handler::<S>)
                .delete(delete_handler::<S>),
        )
        .with_state(handler)
}

/// Serve the handler over HTTP at the given address (e.g. `"0.0.0.0:5000"`).
pub async fn serve<S>(handler: RecordHandler<S>, addr: &str) -> Result<(), std::io::Error>
where
    S: Repository + 'static,
    S::Record: Validate + Serialize + DeserializeOwned + 'static,
{
    let app = router(handler);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(addr = %listener.local_addr()?, "listening");
    axum::serve(listener, app).await
}

async fn health_handler<S>(State(handler): State<RecordHandler<S>>) -> Response
where
    S: Repository + 'static,
    S::Record: Validate,
{
    let label = handler.label();
    render(handler.count(), Operation::List, label, |count| {
        Json(json!({ "ok": true, "label": label, "count": count })).into_response()
    })
}

async fn list_handler<S>(State(handler): State<RecordHandler<S>>) -> Response
where
    S: Repository + 'static,
    S::Record: Validate + Serialize,
{
    render(handler.list(), Operation::List, handler.label(), |records| {
        (StatusCode::OK, Json(records)).into_response()
    })
}

async fn get_handler<S>(
    State(handler): State<RecordHandler<S>>,
    path: Result<Path<RecordId>, PathRejection>,
) -> Response
where
    S: Repository + 'static,
    S::Record: Validate + Serialize,
{
    let outcome = match path {
        Ok(Path(id)) => handler.get(id),
        Err(rejection) => unroutable(Operation::Get, rejection),
    };
    render(outcome, Operation::Get, handler.label(), |record| {
        (StatusCode::OK, Json(record)).into_response()
    })
}

async fn create_handler<S>(
    State(handler): State<RecordHandler<S>>,
    body: Result<Json<S::Record>, JsonRejection>,
) -> Response
where
    S: Repository + 'static,
    S::Record: Validate + Serialize + DeserializeOwned,
{
    let outcome = match body {
        Ok(Json(candidate)) => handler.create(candidate),
        Err(rejection) => undecodable(Operation::Create, rejection),
    };
    let label = handler.label();
    render(outcome, Operation::Create, label, |record| {
        let location = format!("{}/{}", collection_path(label), record.id());
        (
            StatusCode::CREATED,
            [(header::LOCATION, location)],
            Json(record),
        )
            .into_response()
    })
}

async fn update_handler<S>(
    State(handler): State<RecordHandler<S>>,
    path: Result<Path<RecordId>, PathRejection>,
    body: Result<Json<S::Record>, JsonRejection>,
) -> Response
where
    S: Repository + 'static,
    S::Record: Validate + DeserializeOwned,
{
    let outcome = match (path, body) {
        (Err(rejection), _) => unroutable(Operation::Update, rejection),
        (Ok(_), Err(rejection)) => undecodable(Operation::Update, rejection),
        (Ok(Path(id)), Ok(Json(candidate))) => handler.update(id, candidate),
    };
    render(outcome, Operation::Update, handler.label(), |()| {
        StatusCode::NO_CONTENT.into_response()
    })
}

async fn delete_handler<S>(
    State(handler): State<RecordHandler<S>>,
    path: Result<Path<RecordId>, PathRejection>,
) -> Response
where
    S: Repository + 'static,
    S::Record: Validate,
{
    let outcome = match path {
        Ok(Path(id)) => handler.delete(id),
        Err(rejection) => unroutable(Operation::Delete, rejection),
    };
    render(outcome, Operation::Delete, handler.label(), |()| {
        StatusCode::NO_CONTENT.into_response()
    })
}

/// A route id that does not parse never reaches the handler.
fn unroutable<T>(operation: Operation, rejection: PathRejection) -> Outcome<T> {
    tracing::warn!(%operation, error = %rejection.body_text(), "route id rejected");
    Outcome::BadRequest(rejection.body_text())
}

/// A body that cannot be decoded is reported like any other field failure,
/// under the `body` key.
fn undecodable<T>(operation: Operation, rejection: JsonRejection) -> Outcome<T> {
    tracing::warn!(%operation, error = %rejection.body_text(), "request body rejected");
    let mut errors = ValidationErrors::new();
    errors.add("body", rejection.body_text());
    Outcome::ValidationFailed(errors)
}

fn render<T, F>(outcome: Outcome<T>, operation: Operation, label: &str, success: F) -> Response
where
    F: FnOnce(T) -> Response,
{
    let status = StatusCode::from_u16(outcome.status_code(200))
        .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    match outcome {
        Outcome::Success(value) => success(value),
        Outcome::NotFound => status.into_response(),
        Outcome::BadRequest(reason) => (status, Json(json!({ "error": reason }))).into_response(),
        Outcome::ValidationFailed(errors) => {
            (status, Json(json!({ "errors": errors }))).into_response()
        }
        Outcome::InternalError => {
            let body = json!({ "error": operation.failure_message(label) });
            (status, Json(body)).into_response()
        }
    }
}
