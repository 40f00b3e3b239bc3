//! Receipt intake: validation of untyped documents, points scoring, storage, and the HTTP
//! routes that expose them.

pub mod domain;
pub mod repository;
pub mod router;
pub mod scoring;
pub mod service;
pub mod validation;

#[cfg(test)]
mod tests;

pub use domain::{Amount, Item, Points, PurchaseDate, Receipt, ReceiptId};
pub use repository::{InMemoryPointsRepository, PointsRepository, RepositoryError};
pub use router::receipt_router;
pub use scoring::{score, PointsBreakdown, ScoreComponent, ScoringError, ScoringRule};
pub use service::{ProcessedReceipt, ReceiptPointsService, ReceiptServiceError};
pub use validation::{
    is_receipt_id_valid, parse_receipt, validate, ReceiptRejection, ValidationResult,
};
