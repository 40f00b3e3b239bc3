use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, error, info};

use super::domain::{Points, ReceiptId};
use super::repository::{PointsRepository, RepositoryError};
use super::scoring::{self, PointsBreakdown, ScoringError};
use super::validation::{self, ReceiptRejection};

/// Outcome of a successful submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessedReceipt {
    pub id: ReceiptId,
    pub breakdown: PointsBreakdown,
}

/// Service composing validation, scoring, id minting and storage.
pub struct ReceiptPointsService<R> {
    repository: Arc<R>,
}

impl<R> ReceiptPointsService<R>
where
    R: PointsRepository + 'static,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Validate and score a document, storing the points under a fresh identifier.
    /// Rejected documents never touch the repository.
    pub fn process(&self, document: &Value) -> Result<ProcessedReceipt, ReceiptServiceError> {
        let receipt = validation::parse_receipt(document).inspect_err(|rejection| {
            debug!(%rejection, "receipt rejected");
        })?;

        let breakdown = scoring::score(&receipt).inspect_err(|err| {
            error!(%err, retailer = %receipt.retailer, "validated receipt could not be scored");
        })?;

        let id = ReceiptId::generate();
        self.repository.insert(id.clone(), breakdown.total)?;

        info!(receipt_id = %id, points = %breakdown.total, "receipt processed");
        Ok(ProcessedReceipt { id, breakdown })
    }

    /// Look up the points stored for `id`. Malformed and unknown ids both report `NotFound`.
    pub fn points(&self, id: &str) -> Result<Points, ReceiptServiceError> {
        let verdict = validation::is_receipt_id_valid(id);
        if !verdict.is_valid {
            return Err(ReceiptServiceError::NotFound {
                reason: verdict.message.unwrap_or_default(),
            });
        }

        self.repository
            .fetch(&ReceiptId(id.to_string()))?
            .ok_or_else(|| ReceiptServiceError::NotFound {
                reason: "receipt id is not known".to_string(),
            })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ReceiptServiceError {
    #[error(transparent)]
    Rejected(#[from] ReceiptRejection),
    #[error("no receipt found: {reason}")]
    NotFound { reason: String },
    #[error(transparent)]
    Scoring(#[from] ScoringError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
