use std::sync::Arc;

use axum::response::Response;
use serde_json::{json, Value};

use crate::receipts::domain::{Points, ReceiptId};
use crate::receipts::repository::{InMemoryPointsRepository, PointsRepository, RepositoryError};
use crate::receipts::{parse_receipt, Receipt, ReceiptPointsService};

pub(super) fn canonical_items() -> Value {
    json!([
        { "shortDescription": "Mountain Dew 12PK", "price": "6.49" },
        { "shortDescription": "Emils Cheese Pizza", "price": "12.25" },
        { "shortDescription": "Knorr Creamy Chicken", "price": "1.26" },
        { "shortDescription": "Doritos Nacho Cheese", "price": "3.35" },
        { "shortDescription": "   Klarbrunn 12-PK 12 FL OZ  ", "price": "12.00" }
    ])
}

pub(super) fn canonical_document() -> Value {
    json!({
        "retailer": "Target",
        "purchaseDate": "2022-01-01",
        "purchaseTime": "13:01",
        "items": canonical_items(),
        "total": "35.35"
    })
}

pub(super) fn corner_market_document() -> Value {
    json!({
        "retailer": "M&M-Corner-Market",
        "purchaseDate": "2022-03-20",
        "purchaseTime": "14:33",
        "items": [
            { "shortDescription": "Gatorade", "price": "2.25" },
            { "shortDescription": "Gatorade", "price": "2.25" },
            { "shortDescription": "Gatorade", "price": "2.25" },
            { "shortDescription": "Gatorade", "price": "2.25" }
        ],
        "total": "9.00"
    })
}

/// Canonical document with one top-level field replaced.
pub(super) fn document_with(field: &str, value: Value) -> Value {
    let mut document = canonical_document();
    document[field] = value;
    document
}

/// Canonical document with one top-level field removed.
pub(super) fn document_without(field: &str) -> Value {
    let mut document = canonical_document();
    if let Some(fields) = document.as_object_mut() {
        fields.remove(field);
    }
    document
}

pub(super) fn typed(document: &Value) -> Receipt {
    parse_receipt(document).expect("fixture is a valid receipt")
}

pub(super) fn build_service() -> (
    ReceiptPointsService<InMemoryPointsRepository>,
    InMemoryPointsRepository,
) {
    let repository = InMemoryPointsRepository::default();
    let service = ReceiptPointsService::new(Arc::new(repository.clone()));
    (service, repository)
}

#[derive(Default)]
pub(super) struct ConflictRepository;

impl PointsRepository for ConflictRepository {
    fn insert(&self, _id: ReceiptId, _points: Points) -> Result<(), RepositoryError> {
        Err(RepositoryError::Conflict)
    }

    fn fetch(&self, _id: &ReceiptId) -> Result<Option<Points>, RepositoryError> {
        Ok(None)
    }
}

#[derive(Default)]
pub(super) struct UnavailableRepository;

impl PointsRepository for UnavailableRepository {
    fn insert(&self, _id: ReceiptId, _points: Points) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn fetch(&self, _id: &ReceiptId) -> Result<Option<Points>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
