//! Column layouts of the four exposed tables.

use super::repository::{SqliteQuery, Table};
use crate::persistence::{DailyLog, Limit, Prediction, Score};

impl Table for DailyLog {
    const TABLE: &'static str = "daily_logs";
    const COLUMNS: &'static [&'static str] = &["work_hours", "meetings", "log_date", "id_user"];

    fn bind_columns<'q>(&self, query: SqliteQuery<'q>) -> SqliteQuery<'q> {
        query
            .bind(self.work_hours)
            .bind(self.meetings)
            .bind(self.log_date)
            .bind(self.id_user)
    }
}

impl Table for Score {
    const TABLE: &'static str = "scores";
    const COLUMNS: &'static [&'static str] = &[
        "date_score",
        "score_value",
        "time_recommendation",
        "created_at",
        "id_status_risk",
        "id_user",
        "id_log",
    ];

    fn bind_columns<'q>(&self, query: SqliteQuery<'q>) -> SqliteQuery<'q> {
        query
            .bind(self.date_score)
            .bind(self.score_value)
            .bind(self.time_recommendation)
            .bind(self.created_at)
            .bind(self.id_status_risk)
            .bind(self.id_user)
            .bind(self.id_log)
    }
}

impl Table for Prediction {
    const TABLE: &'static str = "predictions";
    const COLUMNS: &'static [&'static str] = &[
        "stress_predicted",
        "message",
        "date_predicted",
        "id_user",
        "id_scores",
        "id_status_risk",
    ];

    fn bind_columns<'q>(&self, query: SqliteQuery<'q>) -> SqliteQuery<'q> {
        query
            .bind(self.stress_predicted)
            .bind(self.message.clone())
            .bind(self.date_predicted)
            .bind(self.id_user)
            .bind(self.id_scores)
            .bind(self.id_status_risk)
    }
}

impl Table for Limit {
    const TABLE: &'static str = "limits";
    const COLUMNS: &'static [&'static str] = &["limit_hours", "limit_meetings", "created_at"];

    fn bind_columns<'q>(&self, query: SqliteQuery<'q>) -> SqliteQuery<'q> {
        query
            .bind(self.limit_hours)
            .bind(self.limit_meetings)
            .bind(self.created_at)
    }
}
