//! InMemoryRepository - HashMap-backed repository with an atomic id counter.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use super::{Record, RecordId, Repository, RepositoryError};

/// In-memory repository for a single record kind.
///
/// Ids come from a counter that only ever moves forward, so an id freed by
/// `delete` is never handed out again. The counter is bumped while the write
/// lock is held, which keeps id order equal to insertion order.
///
/// Clone-friendly via Arc: clones share storage and the counter.
#[derive(Clone)]
pub struct InMemoryRepository<R> {
    label: &'static str,
    storage: Arc<RwLock<HashMap<RecordId, R>>>,
    next_id: Arc<AtomicU64>,
}

impl<R: Record> InMemoryRepository<R> {
    /// Create an empty repository. `label` names the record kind in logs.
    pub fn new(label: &'static str) -> Self {
        Self {
            label,
            storage: Arc::new(RwLock::new(HashMap::new())),
            next_id: Arc::new(AtomicU64::new(1)),
        }
    }

    /// Number of records currently present.
    pub fn len(&self) -> Result<usize, RepositoryError> {
        Ok(self.read("len")?.len())
    }

    pub fn is_empty(&self) -> Result<bool, RepositoryError> {
        Ok(self.read("is_empty")?.is_empty())
    }

    fn read(
        &self,
        operation: &'static str,
    ) -> Result<RwLockReadGuard<'_, HashMap<RecordId, R>>, RepositoryError> {
        self.storage
            .read()
            .map_err(|_| RepositoryError::LockPoisoned(operation))
    }

    fn write(
        &self,
        operation: &'static str,
    ) -> Result<RwLockWriteGuard<'_, HashMap<RecordId, R>>, RepositoryError> {
        self.storage
            .write()
            .map_err(|_| RepositoryError::LockPoisoned(operation))
    }

    fn not_found(&self, id: RecordId) -> RepositoryError {
        RepositoryError::NotFound {
            label: self.label,
            id,
        }
    }
}

impl<R: Record> Repository for InMemoryRepository<R> {
    type Record = R;

    fn label(&self) -> &'static str {
        self.label
    }

    fn list(&self) -> Result<Vec<R>, RepositoryError> {
        tracing::debug!(label = self.label, "listing records");
        let storage = self.read("list")?;
        Ok(storage.values().cloned().collect())
    }

    fn count(&self) -> Result<usize, RepositoryError> {
        self.len()
    }

    fn get(&self, id: RecordId) -> Result<Option<R>, RepositoryError> {
        tracing::debug!(label = self.label, id, "getting record");
        let storage = self.read("get")?;
        Ok(storage.get(&id).cloned())
    }

    fn create(&self, mut record: R) -> Result<R, RepositoryError> {
        {
            let mut storage = self.write("create")?;
            let id = self.next_id.fetch_add(1, Ordering::SeqCst);
            record.set_id(id);
            storage.insert(id, record.clone());
        }
        tracing::info!(label = self.label, id = record.id(), "added record");
        Ok(record)
    }

    fn update(&self, record: R) -> Result<(), RepositoryError> {
        let id = record.id();
        {
            let mut storage = self.write("update")?;
            match storage.get_mut(&id) {
                Some(slot) => *slot = record,
                None => return Err(self.not_found(id)),
            }
        }
        tracing::info!(label = self.label, id, "updated record");
        Ok(())
    }

    fn delete(&self, id: RecordId) -> Result<(), RepositoryError> {
        let removed = self.write("delete")?.remove(&id);
        match removed {
            Some(_) => {
                tracing::info!(label = self.label, id, "deleted record");
                Ok(())
            }
            None => Err(self.not_found(id)),
        }
    }
}
