mod models;
mod query;
pub mod sqlite;
mod traits;

pub use models::{
    DailyLog, Limit, LimitId, LogId, Prediction, PredictionId, Score, ScoreId, StatusRiskId,
    UserId,
};
pub use query::{ColumnKind, Field, Filter, FilterValue, SearchQuery, SortDirection, SortOrder};
pub use traits::{Record, Repository};

/// Errors from the persistence layer.
#[derive(Debug, thiserror::Error)]
pub enum PersistenceError {
    #[error("{entity} with id {id} not found.")]
    NotFound { entity: &'static str, id: i64 },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("Migration error: {0}")]
    Migration(String),
}

#[cfg(test)]
impl PersistenceError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message_embeds_id() {
        let err = PersistenceError::NotFound {
            entity: "Log",
            id: 42,
        };
        assert_eq!(err.to_string(), "Log with id 42 not found.");
        assert!(err.is_not_found());
    }

    #[test]
    fn test_storage_failures_are_not_not_found() {
        let err = PersistenceError::Database(sqlx::Error::RowNotFound);
        assert!(!err.is_not_found());
    }
}
