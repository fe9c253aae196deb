use super::ApiResource;
use crate::persistence::Limit;

impl ApiResource for Limit {
    const PATH: &'static str = "/api/Limits";
    const LABEL: &'static str = "Limit";
}
