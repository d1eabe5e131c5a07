//! Routes for the field scene.

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use cutscene_field::application::query_handlers::{self, EncounterTimelineView};

use crate::state::AppState;

/// GET /timeline
async fn get_timeline(State(state): State<AppState>) -> Json<EncounterTimelineView> {
    Json(query_handlers::get_encounter_timeline(
        state.content.source.as_ref(),
        state.pacing.encounter_config(),
    ))
}

/// Returns the router for the field scene.
pub fn router() -> Router<AppState> {
    Router::new().route("/timeline", get(get_timeline))
}
