use axum::extract::{Path, Query, State};
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use uuid::Uuid;

use crate::models::event::{EVENT_COLUMNS, EVENT_STATUS_APPROVED};
use crate::models::{Event, EventSearchResult};
use crate::search;
use crate::search::request::{SearchFilters, SearchParams};
use crate::state::AppState;
use crate::utils::error::AppError;
use crate::utils::response::success;

#[derive(Serialize)]
struct HealthPayload {
    status: &'static str,
    service: &'static str,
}

pub async fn health_check() -> Response {
    let payload = HealthPayload {
        status: "ok",
        service: "eventure-api",
    };

    success(payload, "Health check successful").into_response()
}

/// Public, unauthenticated proximity search. All parameters are
/// optional; validation happens once, at the boundary, and invalid
/// geographic input yields an empty list rather than a 400.
pub async fn search_events(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Response, AppError> {
    let filters = SearchFilters::from_params(params);
    let results = search::execute(&state.pool, filters).await?;

    Ok(success(results, "Events retrieved successfully").into_response())
}

/// Read one approved, public event with its RSVP count. Events in any
/// other moderation state are indistinguishable from missing ones.
pub async fn get_event(
    State(state): State<AppState>,
    Path(event_id): Path<String>,
) -> Result<Response, AppError> {
    let id = Uuid::parse_str(&event_id)
        .map_err(|_| AppError::ValidationError(format!("'{}' is not a valid event id", event_id)))?;

    let query = format!(
        "SELECT {} FROM events WHERE id = $1 AND status = $2 AND is_public = TRUE",
        EVENT_COLUMNS
    );
    let event: Event = sqlx::query_as(&query)
        .bind(id)
        .bind(EVENT_STATUS_APPROVED)
        .fetch_optional(&state.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Event with id '{}' was not found", event_id)))?;

    let counts = search::attendance::going_counts(&state.pool, &[event.id]).await?;
    let rsvp_count = counts.get(&event.id).copied().unwrap_or(0);

    Ok(success(
        EventSearchResult { event, rsvp_count },
        "Event retrieved successfully",
    )
    .into_response())
}
