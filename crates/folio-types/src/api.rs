use serde::{Deserialize, Serialize};

use crate::validate::FieldError;

// -- Portfolio --

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavePortfolioResponse {
    pub message: String,
    pub portfolio_id: i64,
}

// -- Contact --

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendContactResponse {
    pub message: String,
    pub contact_id: i64,
}

// -- Projects --

#[derive(Debug, Serialize, Deserialize)]
pub struct ProjectsInfoResponse {
    pub message: String,
    pub note: String,
}

// -- Errors --

/// Body of every non-2xx response. `errors` is only present for
/// validation failures.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<FieldError>>,
}
