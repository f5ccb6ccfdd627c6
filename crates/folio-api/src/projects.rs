use axum::Json;

use folio_types::api::ProjectsInfoResponse;

/// GET /api/projects — placeholder until projects come from an external
/// source; portfolio projects are served with the portfolio itself.
pub async fn projects_info() -> Json<ProjectsInfoResponse> {
    Json(ProjectsInfoResponse {
        message: "Projects data endpoint ready for integration with GitHub API".into(),
        note: "Projects are currently managed as part of each portfolio".into(),
    })
}
