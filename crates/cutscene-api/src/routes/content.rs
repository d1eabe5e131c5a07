//! Routes for script content.

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use cutscene_content::application::query_handlers::{self, ContentSummaryView};

use crate::state::AppState;

/// GET /
async fn get_summary(State(state): State<AppState>) -> Json<ContentSummaryView> {
    let content = &state.content;
    Json(query_handlers::get_content_summary(
        content.source.as_ref(),
        &content.origin,
        content.version_hash.as_deref(),
    ))
}

/// Returns the router for script content.
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(get_summary))
}
