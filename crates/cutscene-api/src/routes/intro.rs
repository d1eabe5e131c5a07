//! Routes for the intro scene.

use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};
use cutscene_core::error::DomainError;
use cutscene_intro::application::query_handlers::{self, IntroTimelineView};
use serde::Deserialize;

use crate::config::MAX_TICK_MS;
use crate::error::ApiError;
use crate::state::AppState;

/// Query string for GET /timeline.
#[derive(Debug, Default, Deserialize)]
pub struct TimelineQuery {
    /// Overrides the configured tick interval; must be in
    /// `1..=MAX_TICK_MS`.
    pub tick_ms: Option<u64>,
}

/// GET /timeline
async fn get_timeline(
    State(state): State<AppState>,
    Query(query): Query<TimelineQuery>,
) -> Result<Json<IntroTimelineView>, ApiError> {
    let mut pacing = state.pacing;
    if let Some(tick_ms) = query.tick_ms {
        if !(1..=MAX_TICK_MS).contains(&tick_ms) {
            return Err(DomainError::Validation(format!("tick_ms must be between 1 and {MAX_TICK_MS}")).into());
        }
        pacing.tick_ms = tick_ms;
    }
    Ok(Json(query_handlers::get_intro_timeline(
        state.content.source.as_ref(),
        pacing.intro_config(),
    )))
}

/// Returns the router for the intro scene.
pub fn router() -> Router<AppState> {
    Router::new().route("/timeline", get(get_timeline))
}
