//! Persistence for the `locations` collection.
//!
//! The server opens one [`SqliteLocationStore`] at start-up and shares it as
//! `Arc<dyn LocationStore>`; tests substitute [`MemoryLocationStore`]. Both
//! keep the same contract:
//!
//! - listings and searches are ordered by `updated_at` descending, newest
//!   insert first on ties;
//! - name matching is case-insensitive;
//! - `insert` refuses a second record whose name matches an existing one
//!   case-insensitively, so racing creates cannot both succeed;
//! - each method is atomic with respect to every other.

#[cfg(test)]
mod memory;
mod sqlite;

#[cfg(test)]
pub use memory::MemoryLocationStore;
pub use sqlite::SqliteLocationStore;

use chrono::{DateTime, Utc};
use common::model::location::Location;
use common::model::session::SessionUser;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("a location named '{0}' already exists")]
    Duplicate(String),

    #[error("database error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("store lock poisoned by a panicked request")]
    Poisoned,
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Everything needed to insert a record; the store assigns the id.
#[derive(Debug, Clone)]
pub struct NewLocation {
    pub name: String,
    pub jam_link: String,
    pub creator: SessionUser,
    pub created_at: DateTime<Utc>,
}

pub trait LocationStore: Send + Sync {
    /// One window of the listing plus the total record count.
    fn list_page(&self, offset: u64, limit: u64) -> StoreResult<(Vec<Location>, u64)>;

    /// Records whose name contains `needle`, ignoring case.
    fn search(&self, needle: &str) -> StoreResult<Vec<Location>>;

    fn find_by_id(&self, id: &str) -> StoreResult<Option<Location>>;

    /// Case-insensitive exact name match.
    fn find_by_name(&self, name: &str) -> StoreResult<Option<Location>>;

    fn insert(&self, new: NewLocation) -> StoreResult<Location>;

    /// Sets the link and editor stamp. `None` when the id is unknown, in
    /// which case nothing is written.
    fn update_link(
        &self,
        id: &str,
        jam_link: &str,
        editor: &SessionUser,
        at: DateTime<Utc>,
    ) -> StoreResult<Option<Location>>;

    /// `false` when the id is unknown.
    fn delete(&self, id: &str) -> StoreResult<bool>;
}

fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}
