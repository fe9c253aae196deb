//! Request-scoped unit of work.

use sqlx::pool::PoolConnection;
use sqlx::{Sqlite, SqlitePool};

use super::{SqliteRepository, Table};
use crate::persistence::PersistenceError;

/// One pooled connection, held for the duration of a request.
///
/// Repositories borrow the connection mutably, so a session serves one
/// operation at a time. The connection goes back to the pool when the
/// session is dropped, whether the request succeeded or not.
pub struct Session {
    conn: PoolConnection<Sqlite>,
}

impl Session {
    pub(crate) async fn acquire(pool: &SqlitePool) -> Result<Self, PersistenceError> {
        let conn = pool.acquire().await?;
        tracing::trace!("session acquired");
        Ok(Self { conn })
    }

    /// Repository for entity `E` on this session's connection.
    pub fn repository<E: Table>(&mut self) -> SqliteRepository<'_, E> {
        SqliteRepository::new(&mut self.conn)
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        tracing::trace!("session released");
    }
}
