//! Write capability traits
//!
//! Both backends implement these traits so the apply engine never needs to
//! know which one it is talking to. The only behavioral difference surfaces
//! through [`Rollback`]: the PostgreSQL backend can undo a session, the REST
//! backend cannot.

use crate::domain::{PlaceUpdate, PriorPlace, Result, TargetTable};
use async_trait::async_trait;

/// Outcome of a rollback request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rollback {
    /// Every write made in the session was undone
    RolledBack,
    /// The backend has no cross-row transaction; prior writes remain applied
    Unsupported,
}

impl Rollback {
    pub fn rolled_back(&self) -> bool {
        matches!(self, Rollback::RolledBack)
    }
}

/// A place store that can be written to
#[async_trait]
pub trait PlaceStore: Send {
    /// Short backend name for logs
    fn backend_name(&self) -> &'static str;

    /// Find which of the candidate table names exists
    ///
    /// # Errors
    ///
    /// Returns `StoreError::TargetNotFound` if neither exists and
    /// `StoreError::Unauthorized` if probing was rejected.
    async fn resolve_target_table(&mut self) -> Result<TargetTable>;

    /// Open a write session against `table`
    async fn begin<'a>(&'a mut self, table: TargetTable) -> Result<Box<dyn WriteSession + 'a>>;
}

/// A sequence of updates that is committed or rolled back as a unit
/// (as far as the backend allows)
#[async_trait]
pub trait WriteSession: Send {
    /// Update the place with `id`
    ///
    /// Returns the prior state of every row the update touched. An empty
    /// vector means no place has that id.
    async fn update_by_id(&mut self, id: &str, update: &PlaceUpdate) -> Result<Vec<PriorPlace>>;

    /// Make the session's writes permanent
    async fn commit(self: Box<Self>) -> Result<()>;

    /// Undo the session's writes if the backend supports it
    async fn rollback(self: Box<Self>) -> Result<Rollback>;
}
