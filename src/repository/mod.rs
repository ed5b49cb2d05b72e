//! Repository - generic concurrent storage for records with server-assigned ids.
//!
//! A repository owns the canonical copy of every record. Callers get clones
//! back and submit whole records for replacement.
//!
//! ## Example
//!
//! ```ignore
//! use item_repository::{InMemoryRepository, Item, Repository};
//!
//! let repo = InMemoryRepository::<Item>::new("Item");
//! let created = repo.create(Item::new("Widget", price, 5))?;
//! assert_eq!(created.id, 1);
//! let loaded = repo.get(created.id)?;
//! ```

mod error;
mod in_memory;

pub use error::RepositoryError;
pub use in_memory::InMemoryRepository;

/// Identifier assigned by a repository on create.
pub type RecordId = u64;

/// A record kind that can live in a repository.
pub trait Record: Clone + Send + Sync {
    /// The identifier currently carried by this record.
    fn id(&self) -> RecordId;

    /// Overwrite the identifier. Only repositories call this, on create.
    fn set_id(&mut self, id: RecordId);
}

/// CRUD storage for one record kind.
pub trait Repository: Send + Sync {
    type Record: Record;

    /// Static label for the record kind, used in logs and messages.
    fn label(&self) -> &'static str;

    /// Snapshot of every record currently present. Order is unspecified.
    fn list(&self) -> Result<Vec<Self::Record>, RepositoryError>;

    /// Number of records currently present.
    fn count(&self) -> Result<usize, RepositoryError> {
        self.list().map(|records| records.len())
    }

    /// Get a record by id. Returns None if it is absent.
    fn get(&self, id: RecordId) -> Result<Option<Self::Record>, RepositoryError>;

    /// Store a new record under a freshly allocated id and return it with the
    /// id populated. Any id the caller put on the record is ignored.
    fn create(&self, record: Self::Record) -> Result<Self::Record, RepositoryError>;

    /// Replace an existing record. Fails with `NotFound` if the id is absent.
    fn update(&self, record: Self::Record) -> Result<(), RepositoryError>;

    /// Remove a record. Fails with `NotFound` if the id is absent.
    fn delete(&self, id: RecordId) -> Result<(), RepositoryError>;
}
