//! Event proximity search.
//!
//! One stateless read path: validated filters in, ordered events with
//! attendance counts out. A search either returns a complete result set
//! from one logical query or fails entirely; invalid geographic input
//! short-circuits to an empty set per the fail-soft policy in
//! [`request::GeoRequest::SoftEmpty`].

pub mod attendance;
pub mod geo;
pub mod query;
pub mod request;
pub mod zip_index;

use std::collections::HashMap;

use sqlx::PgPool;
use uuid::Uuid;

use crate::models::{Event, EventSearchResult};
use crate::utils::error::AppError;

use query::ResolvedGeo;
use request::{GeoRequest, SearchFilters};

pub async fn execute(
    pool: &PgPool,
    filters: SearchFilters,
) -> Result<Vec<EventSearchResult>, AppError> {
    let geo = match &filters.geo {
        GeoRequest::Unfiltered => None,
        GeoRequest::SoftEmpty => {
            tracing::debug!("invalid geo input, returning empty result set");
            return Ok(Vec::new());
        }
        GeoRequest::Radius { zip, radius_miles } => match zip_index::resolve(pool, zip).await? {
            Some(center) => Some(ResolvedGeo {
                center,
                radius_miles: *radius_miles,
            }),
            None => {
                tracing::debug!(zip = %zip, "unknown zip, returning empty result set");
                return Ok(Vec::new());
            }
        },
    };

    let mut qb = query::build_query(&filters, geo);
    let events: Vec<Event> = qb.build_query_as().fetch_all(pool).await?;

    let ids: Vec<Uuid> = events.iter().map(|e| e.id).collect();
    let counts = attendance::going_counts(pool, &ids).await?;

    Ok(merge_counts(events, &counts))
}

/// Attach the grouped RSVP counts to their events. Events absent from
/// the map had no `going` rows and report 0.
fn merge_counts(events: Vec<Event>, counts: &HashMap<Uuid, i64>) -> Vec<EventSearchResult> {
    events
        .into_iter()
        .map(|event| {
            let rsvp_count = counts.get(&event.id).copied().unwrap_or(0);
            EventSearchResult { event, rsvp_count }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use request::{Order, OrderBy};

    fn sample_event(id: Uuid) -> Event {
        Event {
            id,
            created_by: Uuid::new_v4(),
            title: "Waterfire".to_string(),
            description: None,
            category: "Arts".to_string(),
            status: "approved".to_string(),
            is_public: true,
            starts_at: Utc::now(),
            ends_at: None,
            capacity: None,
            venue: None,
            address_line1: None,
            address_line2: None,
            city: Some("Providence".to_string()),
            state: Some("RI".to_string()),
            zip_code: Some("02903".to_string()),
            lat: Some(41.8240),
            lng: Some(-71.4128),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn events_without_rsvps_report_zero() {
        let with_rsvps = Uuid::new_v4();
        let without_rsvps = Uuid::new_v4();
        let counts = HashMap::from([(with_rsvps, 3)]);

        let results = merge_counts(
            vec![sample_event(with_rsvps), sample_event(without_rsvps)],
            &counts,
        );

        assert_eq!(results[0].rsvp_count, 3);
        assert_eq!(results[1].rsvp_count, 0);
    }

    #[tokio::test]
    async fn invalid_geo_input_short_circuits_before_any_query() {
        // connect_lazy never opens a connection; if the short-circuit
        // regressed, the query attempt would error rather than return
        // an empty set.
        let pool = PgPool::connect_lazy("postgres://localhost/eventure_unreachable")
            .expect("lazy pool construction should not fail");

        let filters = SearchFilters {
            category: None,
            geo: GeoRequest::SoftEmpty,
            order_by: OrderBy::StartsAt,
            order: Order::Asc,
            limit: None,
        };

        let results = execute(&pool, filters).await.expect("fail-soft, not an error");
        assert!(results.is_empty());
    }

    #[test]
    fn merge_preserves_event_order() {
        let ids: Vec<Uuid> = (0..4).map(|_| Uuid::new_v4()).collect();
        let events: Vec<Event> = ids.iter().map(|id| sample_event(*id)).collect();

        let results = merge_counts(events, &HashMap::new());
        let result_ids: Vec<Uuid> = results.iter().map(|r| r.event.id).collect();
        assert_eq!(result_ids, ids);
    }
}
