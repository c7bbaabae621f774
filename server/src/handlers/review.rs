use axum::extract::State;
use axum::response::Response;

use crate::auth::AdminSession;
use crate::state::AppState;
use crate::utils::error::AppResult;
use crate::utils::extract::ApiPath;
use crate::utils::response::success;

pub async fn pending_events(_admin: AdminSession, State(state): State<AppState>) -> Response {
    let pending = state.store.pending().await;
    let message = if pending.is_empty() {
        "No pending events to review."
    } else {
        "Pending events loaded"
    };
    success(pending, message)
}

pub async fn approve_event(
    _admin: AdminSession,
    State(state): State<AppState>,
    ApiPath(id): ApiPath<String>,
) -> AppResult<Response> {
    let approved = state.store.approve(&id).await?;
    Ok(success(
        approved,
        "The event has been approved and is now public.",
    ))
}

pub async fn reject_event(
    _admin: AdminSession,
    State(state): State<AppState>,
    ApiPath(id): ApiPath<String>,
) -> AppResult<Response> {
    let rejected = state.store.reject(&id).await?;
    Ok(success(
        rejected,
        "The event has been rejected and won't be published.",
    ))
}
