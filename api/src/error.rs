//! Error bodies returned by the API.

use serde::{Deserialize, Serialize};

/// Body of a 404 response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotFoundBody {
    pub status_code: u16,
    pub error_type: String,
    pub message: String,
}

/// Body of 400 and 500 responses. `details` is only present on 500s.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}
