//! Routes for character selection.

use axum::extract::State;
use axum::routing::{delete, get, post};
use axum::{Json, Router};
use cutscene_character::application::command_handlers;
use cutscene_character::application::query_handlers::{self, RosterView, SelectionView};
use cutscene_character::domain::commands;
use serde::Deserialize;
use tracing::instrument;
use uuid::Uuid;

use crate::error::ApiError;
use crate::state::AppState;

/// Request body for POST /select.
#[derive(Debug, Deserialize)]
pub struct SelectRequest {
    /// Roster index to select.
    pub index: u8,
}

/// GET /
async fn list_characters(State(state): State<AppState>) -> Json<RosterView> {
    let holder = state.selection.lock().await;
    Json(query_handlers::list_characters(&holder))
}

/// POST /select
#[instrument(skip(state, request), fields(index = request.index))]
async fn select_character(
    State(state): State<AppState>,
    Json(request): Json<SelectRequest>,
) -> Result<Json<SelectionView>, ApiError> {
    let command = commands::SelectCharacter {
        correlation_id: Uuid::new_v4(),
        index: request.index,
    };

    let mut holder = state.selection.lock().await;
    command_handlers::handle_select_character(
        &command,
        &mut holder,
        state.clock.as_ref(),
        state.store.as_ref(),
    )
    .await?;

    Ok(Json(query_handlers::get_selection(&holder)))
}

/// POST /reset
async fn reset_selection(State(state): State<AppState>) -> Json<SelectionView> {
    let command = commands::ResetSelection {
        correlation_id: Uuid::new_v4(),
    };

    let mut holder = state.selection.lock().await;
    command_handlers::handle_reset_selection(&command, &mut holder);

    Json(query_handlers::get_selection(&holder))
}

/// DELETE /selection
async fn forget_selection(State(state): State<AppState>) -> Json<SelectionView> {
    let command = commands::ForgetSelection {
        correlation_id: Uuid::new_v4(),
    };

    let mut holder = state.selection.lock().await;
    command_handlers::handle_forget_selection(&command, &mut holder, state.store.as_ref()).await;

    Json(query_handlers::get_selection(&holder))
}

/// Returns the router for character selection.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_characters))
        .route("/select", post(select_character))
        .route("/reset", post(reset_selection))
        .route("/selection", delete(forget_selection))
}
