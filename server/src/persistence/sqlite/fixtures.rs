//! Seed helpers shared by the persistence, service and HTTP tests.

use chrono::{DateTime, TimeZone, Utc};

use super::Database;
use crate::persistence::{
    DailyLog, Limit, LimitId, LogId, Prediction, PredictionId, Score, ScoreId, StatusRiskId,
    UserId,
};

pub fn ts(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 9, 0, 0).unwrap()
}

/// Insert a user with id `id_user`, together with the role and limit row it
/// references.
pub async fn seed_user(db: &Database, id_user: i64) {
    sqlx::query("INSERT OR IGNORE INTO roles (id_role, role_name) VALUES (1, 'member')")
        .execute(db.pool())
        .await
        .unwrap();
    let limit = sqlx::query(
        "INSERT INTO limits (limit_hours, limit_meetings, created_at) VALUES (8, 4, ?)",
    )
    .bind(ts(2025, 1, 1))
    .execute(db.pool())
    .await
    .unwrap()
    .last_insert_rowid();
    sqlx::query(
        "INSERT INTO users (id_user, name_user, email_user, password_user, status, id_role, id_limits)
         VALUES (?, ?, ?, 'x', 'A', 1, ?)",
    )
    .bind(id_user)
    .bind(format!("User {id_user}"))
    .bind(format!("user{id_user}@example.com"))
    .bind(limit)
    .execute(db.pool())
    .await
    .unwrap();
}

pub async fn seed_status_risk(db: &Database, id: i64, name: &str) {
    sqlx::query("INSERT INTO status_risk (id_status_risk, status_name_risk) VALUES (?, ?)")
        .bind(id)
        .bind(name)
        .execute(db.pool())
        .await
        .unwrap();
}

pub fn log(id_user: i64, work_hours: i32, day: u32) -> DailyLog {
    DailyLog {
        id_log: LogId(0),
        work_hours,
        meetings: 2,
        log_date: ts(2025, 11, day),
        id_user: UserId(id_user),
    }
}

pub fn score(id_user: i64, id_log: i64, id_status_risk: i64, day: u32) -> Score {
    Score {
        id_scores: ScoreId(0),
        date_score: ts(2025, 11, day),
        score_value: 61.5,
        time_recommendation: 30,
        created_at: ts(2025, 11, day),
        id_status_risk: StatusRiskId(id_status_risk),
        id_user: UserId(id_user),
        id_log: LogId(id_log),
    }
}

pub fn prediction(id_user: i64, id_scores: i64, id_status_risk: i64) -> Prediction {
    Prediction {
        id_prediction: PredictionId(0),
        stress_predicted: 72.25,
        message: "Take a break this afternoon".to_string(),
        date_predicted: ts(2025, 11, 29),
        id_user: UserId(id_user),
        id_scores: ScoreId(id_scores),
        id_status_risk: StatusRiskId(id_status_risk),
    }
}

pub fn limit(limit_hours: i32, limit_meetings: i32) -> Limit {
    Limit {
        id_limits: LimitId(0),
        limit_hours,
        limit_meetings,
        created_at: ts(2025, 10, 1),
    }
}
