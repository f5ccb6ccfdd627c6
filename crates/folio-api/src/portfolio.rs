use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use serde_json::Value;
use tracing::info;

use folio_types::api::SavePortfolioResponse;
use folio_types::validate::validate_portfolio;

use crate::error::ApiError;
use crate::state::AppState;

/// POST /api/portfolio — validate the whole payload, then store it.
pub async fn save_portfolio(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(raw) = payload?;
    let data = validate_portfolio(&raw)?;

    let portfolio = state
        .db
        .save_portfolio(data)
        .map_err(|e| ApiError::unexpected("Failed to save portfolio", e))?;

    info!("Portfolio {} saved", portfolio.id);

    Ok((
        StatusCode::CREATED,
        Json(SavePortfolioResponse {
            message: "Portfolio saved successfully".into(),
            portfolio_id: portfolio.id,
        }),
    ))
}

/// GET /api/portfolio/{id} — the stored data, without the wrapper record.
pub async fn get_portfolio(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let id = parse_id(&id).ok_or(ApiError::MalformedId)?;

    let portfolio = state
        .db
        .get_portfolio(id)
        .map_err(|e| ApiError::unexpected("Failed to retrieve portfolio", e))?
        .ok_or(ApiError::NotFound)?;

    Ok(Json(portfolio.data))
}

pub(crate) fn parse_id(raw: &str) -> Option<i64> {
    raw.trim().parse().ok()
}
