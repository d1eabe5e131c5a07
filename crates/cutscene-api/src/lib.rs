//! Cutscene engine — HTTP API.
//!
//! Exposes the character selection and the computed scene timelines over
//! HTTP. Real-time playback runs through `cutscene-runtime`; see the
//! `cutscene-play` binary.

use axum::Router;

pub mod config;
pub mod error;
pub mod routes;
pub mod state;

use crate::state::AppState;

/// Builds the router with every route and `state` attached.
pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(routes::health::router())
        .nest("/api/v1/characters", routes::characters::router())
        .nest("/api/v1/intro", routes::intro::router())
        .nest("/api/v1/field", routes::field::router())
        .nest("/api/v1/content", routes::content::router())
        .with_state(state)
}
