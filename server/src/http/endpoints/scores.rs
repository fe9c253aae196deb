use super::ApiResource;
use crate::persistence::Score;

impl ApiResource for Score {
    const PATH: &'static str = "/api/Scores";
    const LABEL: &'static str = "Score";
}
