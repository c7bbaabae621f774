use axum::extract::State;
use axum::response::Response;
use serde::Serialize;

use crate::auth::Session;
use crate::nav::navigation;
use crate::state::AppState;
use crate::utils::response::success;

pub mod events;
pub mod review;
pub mod submissions;

#[derive(Serialize)]
struct HealthPayload {
    status: &'static str,
    service: &'static str,
    pending_events: usize,
}

pub async fn health_check(State(state): State<AppState>) -> Response {
    let payload = HealthPayload {
        status: "ok",
        service: "sponsorgo-api",
        pending_events: state.store.pending().await.len(),
    };

    success(payload, "Health check successful")
}

pub async fn nav(session: Session) -> Response {
    success(navigation(session), "Navigation loaded")
}
