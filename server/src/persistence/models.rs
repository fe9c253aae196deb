//! Stored entities and the typed keys that link them.

use chrono::{DateTime, Utc};

use super::{Field, Record};

macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, sqlx::Type)]
        #[sqlx(transparent)]
        pub struct $name(pub i64);

        impl From<i64> for $name {
            fn from(id: i64) -> Self {
                Self(id)
            }
        }

        impl From<$name> for i64 {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

entity_id!(
    /// Key of a `daily_logs` row.
    LogId
);
entity_id!(
    /// Key of a `scores` row.
    ScoreId
);
entity_id!(
    /// Key of a `predictions` row.
    PredictionId
);
entity_id!(
    /// Key of a `limits` row.
    LimitId
);
entity_id!(
    /// Key of a `users` row.
    UserId
);
entity_id!(
    /// Key of a `status_risk` lookup row.
    StatusRiskId
);

/// Hours worked and meetings attended by a user on one day.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct DailyLog {
    pub id_log: LogId,
    pub work_hours: i32,
    pub meetings: i32,
    pub log_date: DateTime<Utc>,
    pub id_user: UserId,
}

/// Stress score computed from exactly one daily log.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct Score {
    pub id_scores: ScoreId,
    pub date_score: DateTime<Utc>,
    pub score_value: f64,
    /// Recommended rest time, in minutes.
    pub time_recommendation: i32,
    pub created_at: DateTime<Utc>,
    pub id_status_risk: StatusRiskId,
    pub id_user: UserId,
    pub id_log: LogId,
}

#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct Prediction {
    pub id_prediction: PredictionId,
    pub stress_predicted: f64,
    pub message: String,
    pub date_predicted: DateTime<Utc>,
    pub id_user: UserId,
    pub id_scores: ScoreId,
    pub id_status_risk: StatusRiskId,
}

/// Workload ceiling owned by exactly one user.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct Limit {
    pub id_limits: LimitId,
    pub limit_hours: i32,
    pub limit_meetings: i32,
    pub created_at: DateTime<Utc>,
}

impl Record for DailyLog {
    const NAME: &'static str = "Log";
    const KEY: &'static Field = &Field::integer("idLog", "id_log");
    const FILTERS: &'static [Field] = &[
        Field::integer("idLog", "id_log"),
        Field::integer("workHours", "work_hours"),
        Field::integer("idUser", "id_user"),
    ];
    const SORTABLE: &'static [Field] = &[
        Field::integer("idLog", "id_log"),
        Field::integer("workHours", "work_hours"),
        Field::integer("idUser", "id_user"),
    ];

    fn key(&self) -> i64 {
        self.id_log.0
    }
}

impl Record for Score {
    const NAME: &'static str = "Score";
    const KEY: &'static Field = &Field::integer("idScores", "id_scores");
    const FILTERS: &'static [Field] = &[
        Field::integer("idScores", "id_scores"),
        Field::timestamp("dateScore", "date_score"),
        Field::timestamp("createdAt", "created_at"),
        Field::integer("idStatusRisk", "id_status_risk"),
        Field::integer("idUser", "id_user"),
    ];
    const SORTABLE: &'static [Field] = &[
        Field::integer("idScores", "id_scores"),
        Field::timestamp("dateScore", "date_score"),
        Field::timestamp("createdAt", "created_at"),
        Field::integer("idStatusRisk", "id_status_risk"),
        Field::integer("idUser", "id_user"),
    ];

    fn key(&self) -> i64 {
        self.id_scores.0
    }
}

impl Record for Prediction {
    const NAME: &'static str = "Prediction";
    const KEY: &'static Field = &Field::integer("idPrediction", "id_prediction");
    const FILTERS: &'static [Field] = &[
        Field::integer("idPrediction", "id_prediction"),
        Field::timestamp("datePredicted", "date_predicted"),
        Field::integer("idUser", "id_user"),
        Field::integer("idScores", "id_scores"),
        Field::integer("idStatusRisk", "id_status_risk"),
    ];
    const SORTABLE: &'static [Field] = &[
        Field::integer("idPrediction", "id_prediction"),
        Field::timestamp("datePredicted", "date_predicted"),
        Field::integer("idUser", "id_user"),
        Field::integer("idScores", "id_scores"),
        Field::integer("idStatusRisk", "id_status_risk"),
    ];

    fn key(&self) -> i64 {
        self.id_prediction.0
    }
}

impl Record for Limit {
    const NAME: &'static str = "Limit";
    const KEY: &'static Field = &Field::integer("idLimits", "id_limits");
    const FILTERS: &'static [Field] = &[
        Field::integer("idLimits", "id_limits"),
        Field::integer("limitHours", "limit_hours"),
        Field::integer("limitMeetings", "limit_meetings"),
        Field::timestamp("createdAt", "created_at"),
    ];
    const SORTABLE: &'static [Field] = &[
        Field::integer("idLimits", "id_limits"),
        Field::integer("limitHours", "limit_hours"),
        Field::integer("limitMeetings", "limit_meetings"),
        Field::timestamp("createdAt", "created_at"),
    ];

    fn key(&self) -> i64 {
        self.id_limits.0
    }
}
