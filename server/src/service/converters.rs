//! Conversions between stored entities and their transfer objects

use neurotrack_api::{DailyLogDto, Identified, LimitDto, PredictionDto, ScoreDto};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::persistence::{
    DailyLog, Limit, LimitId, LogId, Prediction, PredictionId, Record, Score, ScoreId,
    StatusRiskId, UserId,
};

/// Two-way mapping between an entity and its flat transfer shape.
pub trait Transfer: Record + Sized {
    type Dto: Identified + Serialize + DeserializeOwned + Send + Sync + 'static;

    fn to_dto(&self) -> Self::Dto;
    fn from_dto(dto: Self::Dto) -> Self;
}

impl Transfer for DailyLog {
    type Dto = DailyLogDto;

    fn to_dto(&self) -> DailyLogDto {
        DailyLogDto {
            id_log: self.id_log.0,
            work_hours: self.work_hours,
            meetings: self.meetings,
            log_date: self.log_date,
            id_user: self.id_user.0,
        }
    }

    fn from_dto(dto: DailyLogDto) -> Self {
        Self {
            id_log: LogId(dto.id_log),
            work_hours: dto.work_hours,
            meetings: dto.meetings,
            log_date: dto.log_date,
            id_user: UserId(dto.id_user),
        }
    }
}

impl Transfer for Score {
    type Dto = ScoreDto;

    fn to_dto(&self) -> ScoreDto {
        ScoreDto {
            id_scores: self.id_scores.0,
            date_score: self.date_score,
            score_value: self.score_value,
            time_recommendation: self.time_recommendation,
            created_at: self.created_at,
            id_status_risk: self.id_status_risk.0,
            id_user: self.id_user.0,
            id_log: self.id_log.0,
        }
    }

    fn from_dto(dto: ScoreDto) -> Self {
        Self {
            id_scores: ScoreId(dto.id_scores),
            date_score: dto.date_score,
            score_value: dto.score_value,
            time_recommendation: dto.time_recommendation,
            created_at: dto.created_at,
            id_status_risk: StatusRiskId(dto.id_status_risk),
            id_user: UserId(dto.id_user),
            id_log: LogId(dto.id_log),
        }
    }
}

impl Transfer for Prediction {
    type Dto = PredictionDto;

    fn to_dto(&self) -> PredictionDto {
        PredictionDto {
            id_prediction: self.id_prediction.0,
            stress_predicted: self.stress_predicted,
            message: self.message.clone(),
            date_predicted: self.date_predicted,
            id_user: self.id_user.0,
            id_scores: self.id_scores.0,
            id_status_risk: self.id_status_risk.0,
        }
    }

    fn from_dto(dto: PredictionDto) -> Self {
        Self {
            id_prediction: PredictionId(dto.id_prediction),
            stress_predicted: dto.stress_predicted,
            message: dto.message,
            date_predicted: dto.date_predicted,
            id_user: UserId(dto.id_user),
            id_scores: ScoreId(dto.id_scores),
            id_status_risk: StatusRiskId(dto.id_status_risk),
        }
    }
}

impl Transfer for Limit {
    type Dto = LimitDto;

    fn to_dto(&self) -> LimitDto {
        LimitDto {
            id_limits: self.id_limits.0,
            limit_hours: self.limit_hours,
            limit_meetings: self.limit_meetings,
            created_at: self.created_at,
        }
    }

    fn from_dto(dto: LimitDto) -> Self {
        Self {
            id_limits: LimitId(dto.id_limits),
            limit_hours: dto.limit_hours,
            limit_meetings: dto.limit_meetings,
            created_at: dto.created_at,
        }
    }
}
