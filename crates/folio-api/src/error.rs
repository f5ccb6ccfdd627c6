use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::{error, warn};

use folio_types::ValidationError;
use folio_types::api::ErrorResponse;

/// Every way a request can fail, mapped onto a status code in
/// [`IntoResponse`].
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Body was not parseable JSON.
    #[error("{0}")]
    InvalidBody(String),

    #[error("Invalid portfolio ID")]
    MalformedId,

    #[error("Portfolio not found")]
    NotFound,

    /// `context` is what the client sees; `cause` is only logged.
    #[error("{context}")]
    Unexpected {
        context: &'static str,
        cause: anyhow::Error,
    },
}

impl ApiError {
    pub fn unexpected(context: &'static str, cause: anyhow::Error) -> Self {
        Self::Unexpected { context, cause }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::InvalidBody(_) | Self::MalformedId => {
                StatusCode::BAD_REQUEST
            }
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Unexpected { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::InvalidBody(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match self {
            Self::Validation(err) => {
                warn!("Rejected payload: {}", err);
                ErrorResponse {
                    message: err.to_string(),
                    errors: Some(err.errors),
                }
            }
            Self::Unexpected { context, cause } => {
                error!("{}: {:#}", context, cause);
                ErrorResponse {
                    message: context.to_string(),
                    errors: None,
                }
            }
            other => ErrorResponse {
                message: other.to_string(),
                errors: None,
            },
        };
        (status, Json(body)).into_response()
    }
}
