pub mod contact;
pub mod error;
pub mod portfolio;
pub mod projects;
pub mod state;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// All API routes, without transport layers (CORS, tracing, body limits).
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/portfolio", post(portfolio::save_portfolio))
        .route("/api/portfolio/{id}", get(portfolio::get_portfolio))
        .route("/api/contact", post(contact::send_message))
        .route("/api/projects", get(projects::projects_info))
        .route("/health", get(health))
        .with_state(state)
}

pub async fn health() -> &'static str {
    "ok"
}
