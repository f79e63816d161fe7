use axum::{extract::State, Json};
use serde::Serialize;

use crate::admin::AdminState;
use crate::health::state::ServiceSnapshot;

#[derive(Serialize)]
pub struct SystemStatus {
    pub version: &'static str,
    pub status: &'static str,
    pub services: usize,
    pub down: Vec<String>,
}

pub async fn get_status(State(state): State<AdminState>) -> Json<SystemStatus> {
    let down = state.board.down();
    Json(SystemStatus {
        version: env!("CARGO_PKG_VERSION"),
        status: if down.is_empty() { "operational" } else { "degraded" },
        services: state.board.load().len(),
        down,
    })
}

pub async fn get_services(State(state): State<AdminState>) -> Json<Vec<ServiceSnapshot>> {
    Json((*state.board.load()).clone())
}
