use axum::extract::State;
use axum::response::Response;

use crate::catalog::detail::find_detail;
use crate::catalog::{filter_options, EventFilter, SearchResult};
use crate::state::AppState;
use crate::utils::error::{AppError, AppResult};
use crate::utils::extract::{ApiPath, ApiQuery};
use crate::utils::response::success;

const FEATURED_COUNT: usize = 3;

pub async fn list_events(
    State(state): State<AppState>,
    ApiQuery(filter): ApiQuery<EventFilter>,
) -> Response {
    let result = SearchResult::new(filter.apply(&state.catalog));
    tracing::debug!(?filter, total = result.total, "Catalog search");

    let message = match result.total {
        1 => "1 Event Available".to_string(),
        n => format!("{} Events Available", n),
    };
    success(result, message)
}

pub async fn event_filters(State(state): State<AppState>) -> Response {
    success(filter_options(&state.catalog), "Filter options loaded")
}

pub async fn featured_events(State(state): State<AppState>) -> Response {
    let featured: Vec<_> = state.catalog.iter().take(FEATURED_COUNT).cloned().collect();
    success(featured, "Featured events loaded")
}

pub async fn public_events(State(state): State<AppState>) -> Response {
    success(state.store.public().await, "Public events loaded")
}

pub async fn event_detail(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<u32>,
) -> AppResult<Response> {
    let detail = find_detail(&state.catalog, id)
        .ok_or_else(|| AppError::NotFound(format!("Event with id '{}' was not found", id)))?;
    Ok(success(detail, "Event loaded"))
}
