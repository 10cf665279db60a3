/// Liveness probe
use crate::{error::Result, state::AppState};
use axum::{extract::State, Json};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    /// Records currently held by the user service
    pub users: usize,
}

/// GET /api/health
pub async fn health(State(app_state): State<AppState>) -> Result<Json<HealthResponse>> {
    let users = app_state.users.list_users().await?.len();

    Ok(Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        users,
    }))
}
