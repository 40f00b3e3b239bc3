use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use tracing::debug;

use super::repository::PointsRepository;
use super::service::{ReceiptPointsService, ReceiptServiceError};
use super::validation::ReceiptRejection;

/// Router builder exposing receipt submission and points lookup.
pub fn receipt_router<R>(service: Arc<ReceiptPointsService<R>>) -> Router
where
    R: PointsRepository + 'static,
{
    Router::new()
        .route("/receipts/process", post(process_handler::<R>))
        .route("/receipts/:id/points", get(points_handler::<R>))
        .with_state(service)
}

pub(crate) async fn process_handler<R>(
    State(service): State<Arc<ReceiptPointsService<R>>>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Response
where
    R: PointsRepository + 'static,
{
    // Bodies that are not JSON at all get the same answer as non-object documents.
    let document = match payload {
        Ok(Json(document)) => document,
        Err(rejection) => {
            debug!(%rejection, "receipt payload is not JSON");
            return invalid_receipt(ReceiptRejection::NotAnObject);
        }
    };

    match service.process(&document) {
        Ok(processed) => {
            let payload = json!({ "id": processed.id });
            (StatusCode::CREATED, Json(payload)).into_response()
        }
        Err(ReceiptServiceError::Rejected(rejection)) => invalid_receipt(rejection),
        Err(other) => internal_error(other),
    }
}

pub(crate) async fn points_handler<R>(
    State(service): State<Arc<ReceiptPointsService<R>>>,
    Path(id): Path<String>,
) -> Response
where
    R: PointsRepository + 'static,
{
    match service.points(&id) {
        Ok(points) => (StatusCode::OK, Json(json!({ "points": points }))).into_response(),
        Err(ReceiptServiceError::NotFound { reason }) => {
            let payload = json!({
                "error": "No receipt found for that id",
                "message": reason,
            });
            (StatusCode::NOT_FOUND, Json(payload)).into_response()
        }
        Err(other) => internal_error(other),
    }
}

fn invalid_receipt(rejection: ReceiptRejection) -> Response {
    let payload = json!({
        "error": "The receipt is invalid",
        "message": rejection.to_string(),
    });
    (StatusCode::BAD_REQUEST, Json(payload)).into_response()
}

fn internal_error(error: ReceiptServiceError) -> Response {
    let payload = json!({
        "error": error.to_string(),
    });
    (StatusCode::INTERNAL_SERVER_ERROR, Json(payload)).into_response()
}
