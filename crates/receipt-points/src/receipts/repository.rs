use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use super::domain::{Points, ReceiptId};

/// Storage abstraction for scored receipts so the service can be exercised in isolation.
pub trait PointsRepository: Send + Sync {
    /// Store a new entry. Identifiers are never overwritten.
    fn insert(&self, id: ReceiptId, points: Points) -> Result<(), RepositoryError>;
    fn fetch(&self, id: &ReceiptId) -> Result<Option<Points>, RepositoryError>;
}

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record already exists")]
    Conflict,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

/// Process-lifetime table guarded by a mutex.
#[derive(Debug, Default, Clone)]
pub struct InMemoryPointsRepository {
    records: Arc<Mutex<HashMap<ReceiptId, Points>>>,
}

impl InMemoryPointsRepository {
    pub fn len(&self) -> usize {
        self.records.lock().map(|guard| guard.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl PointsRepository for InMemoryPointsRepository {
    fn insert(&self, id: ReceiptId, points: Points) -> Result<(), RepositoryError> {
        let mut guard = self
            .records
            .lock()
            .map_err(|_| RepositoryError::Unavailable("points mutex poisoned".to_string()))?;
        if guard.contains_key(&id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(id, points);
        Ok(())
    }

    fn fetch(&self, id: &ReceiptId) -> Result<Option<Points>, RepositoryError> {
        let guard = self
            .records
            .lock()
            .map_err(|_| RepositoryError::Unavailable("points mutex poisoned".to_string()))?;
        Ok(guard.get(id).copied())
    }
}
