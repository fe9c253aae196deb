use super::ApiResource;
use crate::persistence::DailyLog;

impl ApiResource for DailyLog {
    const PATH: &'static str = "/api/DailyLogs";
    const LABEL: &'static str = "Daily log";
}
