use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// The only persisted RSVP state. Cancellation deletes the row, so
/// attendance for an event is simply the count of its `going` rows.
pub const RSVP_STATUS_GOING: &str = "going";

#[allow(dead_code)]
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Rsvp {
    pub user_id: Uuid,
    pub event_id: Uuid,
    pub status: String,
    pub created_at: DateTime<Utc>,
}
