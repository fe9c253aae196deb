//! SQLite-backed persistence.
//!
//! ## Database setup
//!
//! [`Database`] wraps a `sqlx::SqlitePool` configured with:
//! - **WAL mode**: one writer and multiple concurrent readers.
//! - **Foreign keys enabled**: enforced at the connection level, so deleting
//!   a parent row cascades to its dependents.
//! - **Embedded migrations**: `sqlx::migrate!` runs `migrations/` when
//!   [`Database::open`] is called.
//!
//! ## Repositories
//!
//! A [`Session`] checks one connection out of the pool. Its
//! [`Session::repository`] hands out a [`SqliteRepository`] for any entity
//! implementing [`Table`]:
//!
//! | Entity | Table |
//! |--------|-------|
//! | `DailyLog` | `daily_logs` |
//! | `Score` | `scores` |
//! | `Prediction` | `predictions` |
//! | `Limit` | `limits` |
//!
//! Search filters and paging values are always bound parameters. Column names
//! only ever come from the static field lists on each entity.

mod database;
mod repository;
mod session;
mod tables;
#[cfg(test)]
pub(crate) mod fixtures;

pub use database::Database;
pub use repository::{SqliteRepository, Table};
pub use session::Session;
