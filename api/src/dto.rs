//! Flat transfer objects, one per exposed entity.
//!
//! Foreign keys travel as plain ids; nothing here carries a nested entity.
//! The key field may be omitted on create and is ignored by the server.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Anything addressable by a numeric key.
pub trait Identified {
    fn id(&self) -> i64;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyLogDto {
    #[serde(default)]
    pub id_log: i64,
    pub work_hours: i32,
    pub meetings: i32,
    pub log_date: DateTime<Utc>,
    pub id_user: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreDto {
    #[serde(default)]
    pub id_scores: i64,
    pub date_score: DateTime<Utc>,
    pub score_value: f64,
    /// Recommended rest time, in minutes.
    pub time_recommendation: i32,
    pub created_at: DateTime<Utc>,
    pub id_status_risk: i64,
    pub id_user: i64,
    pub id_log: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionDto {
    #[serde(default)]
    pub id_prediction: i64,
    pub stress_predicted: f64,
    pub message: String,
    pub date_predicted: DateTime<Utc>,
    pub id_user: i64,
    pub id_scores: i64,
    pub id_status_risk: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LimitDto {
    #[serde(default)]
    pub id_limits: i64,
    pub limit_hours: i32,
    pub limit_meetings: i32,
    pub created_at: DateTime<Utc>,
}

impl Identified for DailyLogDto {
    fn id(&self) -> i64 {
        self.id_log
    }
}

impl Identified for ScoreDto {
    fn id(&self) -> i64 {
        self.id_scores
    }
}

impl Identified for PredictionDto {
    fn id(&self) -> i64 {
        self.id_prediction
    }
}

impl Identified for LimitDto {
    fn id(&self) -> i64 {
        self.id_limits
    }
}
