use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use serde_json::Value;
use tracing::{info, warn};

use folio_types::ContactSubmission;
use folio_types::api::SendContactResponse;
use folio_types::validate::validate_contact_form;

use crate::error::ApiError;
use crate::portfolio::parse_id;
use crate::state::{AppState, OrphanContactPolicy};

const SEND_FAILED: &str = "Failed to send message";

/// POST /api/contact — form fields are checked before `portfolioId`.
pub async fn send_message(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(raw) = payload?;
    let form = validate_contact_form(&raw)?;
    let portfolio_id = read_portfolio_id(&raw).ok_or(ApiError::MalformedId)?;

    if state.config.orphan_contacts == OrphanContactPolicy::Reject {
        let exists = state
            .db
            .get_portfolio(portfolio_id)
            .map_err(|e| ApiError::unexpected(SEND_FAILED, e))?
            .is_some();
        if !exists {
            warn!("Contact message for unknown portfolio {} rejected", portfolio_id);
            return Err(ApiError::NotFound);
        }
    }

    let message = state
        .db
        .save_contact_message(ContactSubmission { portfolio_id, form })
        .map_err(|e| ApiError::unexpected(SEND_FAILED, e))?;

    info!("Contact message {} stored for portfolio {}", message.id, portfolio_id);

    Ok((
        StatusCode::CREATED,
        Json(SendContactResponse {
            message: "Message sent successfully".into(),
            contact_id: message.id,
        }),
    ))
}

/// Accepts `1` or `"1"`; anything else is malformed.
fn read_portfolio_id(raw: &Value) -> Option<i64> {
    match raw.get("portfolioId")? {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => parse_id(s),
        _ => None,
    }
}
