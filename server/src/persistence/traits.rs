//! Repository trait definitions for the persistence layer.
//!
//! [`Record`] is the static description every stored entity carries: its key,
//! the fields callers may filter on and the fields they may sort by. One
//! generic [`Repository`] implementation works for any `Record`, so adding an
//! entity means describing it rather than writing another repository.
//!
//! Methods return `impl Future + Send` rather than using `async fn` so that
//! the futures are guaranteed `Send`, which axum handlers require.

use std::future::Future;

use super::{Field, PersistenceError, SearchQuery};

/// Static description of a stored entity.
pub trait Record: Send + Sync + Unpin + 'static {
    /// Singular label used in messages, e.g. `"Log"`.
    const NAME: &'static str;
    /// Primary key. Also the default and fallback sort field.
    const KEY: &'static Field;
    /// Fields accepted as equality filters, in the order they appear in links.
    const FILTERS: &'static [Field];
    /// Sort allow-list.
    const SORTABLE: &'static [Field];

    fn key(&self) -> i64;
}

/// CRUD and search over one entity type.
///
/// Implementations borrow a request-scoped connection; nothing here is
/// shared between requests.
pub trait Repository: Send {
    type Entity: Record;

    fn get_by_id(
        &mut self,
        id: i64,
    ) -> impl Future<Output = Result<Self::Entity, PersistenceError>> + Send;

    /// Every row, ordered by key. An empty table yields an empty vector.
    fn get_all(
        &mut self,
    ) -> impl Future<Output = Result<Vec<Self::Entity>, PersistenceError>> + Send;

    /// Insert a row and return the key the store assigned. The entity's own
    /// key is ignored.
    fn add(
        &mut self,
        entity: &Self::Entity,
    ) -> impl Future<Output = Result<i64, PersistenceError>> + Send;

    /// Replace every non-key column of the row identified by `entity.key()`.
    fn update(
        &mut self,
        entity: &Self::Entity,
    ) -> impl Future<Output = Result<(), PersistenceError>> + Send;

    fn delete(&mut self, id: i64) -> impl Future<Output = Result<(), PersistenceError>> + Send;

    /// One page of matching rows plus the number of rows matching the filters.
    fn search(
        &mut self,
        query: &SearchQuery,
    ) -> impl Future<Output = Result<(Vec<Self::Entity>, u64), PersistenceError>> + Send;
}
