use std::collections::HashMap;

use sqlx::PgPool;
use uuid::Uuid;

use crate::models::rsvp::RSVP_STATUS_GOING;
use crate::utils::error::AppError;

/// Grouped count of confirmed RSVPs per event. Events absent from the
/// returned map have no `going` rows; the merge site reports those as 0.
/// Recomputed on every search call, no incremental maintenance.
pub async fn going_counts(
    pool: &PgPool,
    event_ids: &[Uuid],
) -> Result<HashMap<Uuid, i64>, AppError> {
    if event_ids.is_empty() {
        return Ok(HashMap::new());
    }

    let rows: Vec<(Uuid, i64)> = sqlx::query_as(
        "SELECT event_id, COUNT(*) FROM rsvps \
         WHERE status = $1 AND event_id = ANY($2) \
         GROUP BY event_id",
    )
    .bind(RSVP_STATUS_GOING)
    .bind(event_ids)
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().collect())
}
