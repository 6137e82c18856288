use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Moderation states an event moves through. Stored as TEXT; only
/// approved events are eligible for public search.
pub const EVENT_STATUS_PENDING: &str = "pending";
pub const EVENT_STATUS_APPROVED: &str = "approved";
pub const EVENT_STATUS_DECLINED: &str = "declined";

/// Column list shared by every query that hydrates an [`Event`].
pub const EVENT_COLUMNS: &str = "id, created_by, title, description, category, status, \
     is_public, starts_at, ends_at, capacity, venue, address_line1, address_line2, \
     city, state, zip_code, lat, lng, created_at, updated_at";

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Event {
    pub id: Uuid,
    pub created_by: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub category: String,
    pub status: String,
    pub is_public: bool,
    pub starts_at: DateTime<Utc>,
    pub ends_at: Option<DateTime<Utc>>,
    pub capacity: Option<i32>,
    pub venue: Option<String>,
    pub address_line1: Option<String>,
    pub address_line2: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<String>,
    /// Resolved coordinate; NULL when geocoding never succeeded. Events
    /// without both components are invisible to radius searches.
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// An event as returned by the search path, with its confirmed RSVP
/// count joined in. Events with no RSVPs report 0, never null.
#[derive(Debug, Clone, Serialize)]
pub struct EventSearchResult {
    #[serde(flatten)]
    pub event: Event,
    pub rsvp_count: i64,
}
