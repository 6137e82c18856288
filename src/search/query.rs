//! Predicate composition for the event search.
//!
//! Every clause is assembled through [`QueryBuilder`] with bound
//! parameters; the approved/public predicates are seeded
//! unconditionally, so no caller input can widen visibility. The
//! distance predicate is the same spherical-law-of-cosines formula as
//! [`super::geo::distance_meters`], pushed down into SQL and computed
//! per candidate row. That scan is O(n) over approved events; beyond a
//! few thousand rows it would need a bounding-box pre-filter or a
//! spatial index, which this service does not implement.

use sqlx::{Postgres, QueryBuilder};

use crate::models::event::{EVENT_COLUMNS, EVENT_STATUS_APPROVED};
use crate::models::Coordinate;

use super::geo::METERS_PER_MILE;
use super::request::SearchFilters;

/// A radius request whose zip has been resolved to a coordinate.
#[derive(Debug, Clone, Copy)]
pub struct ResolvedGeo {
    pub center: Coordinate,
    pub radius_miles: u32,
}

pub fn build_query<'a>(
    filters: &'a SearchFilters,
    geo: Option<ResolvedGeo>,
) -> QueryBuilder<'a, Postgres> {
    let mut qb: QueryBuilder<Postgres> =
        QueryBuilder::new(format!("SELECT {} FROM events WHERE status = ", EVENT_COLUMNS));
    qb.push_bind(EVENT_STATUS_APPROVED);
    qb.push(" AND is_public = TRUE");

    if let Some(category) = &filters.category {
        qb.push(" AND category = ");
        qb.push_bind(category.as_str());
    }

    if let Some(geo) = geo {
        // Rows without a geocoded coordinate never match a radius search.
        qb.push(" AND lat IS NOT NULL AND lng IS NOT NULL");
        qb.push(" AND 6371000.0 * acos(LEAST(");
        qb.push("cos(radians(lat)) * cos(radians(");
        qb.push_bind(geo.center.lat);
        qb.push(")) * cos(radians(");
        qb.push_bind(geo.center.lng);
        qb.push(") - radians(lng)) + sin(radians(lat)) * sin(radians(");
        qb.push_bind(geo.center.lat);
        qb.push(")), 1.0)) <= ");
        qb.push_bind(f64::from(geo.radius_miles) * METERS_PER_MILE);
    }

    qb.push(" ORDER BY ");
    qb.push(filters.order_by.column());
    qb.push(" ");
    qb.push(filters.order.keyword());

    if let Some(limit) = filters.limit {
        qb.push(" LIMIT ");
        qb.push_bind(limit);
    }

    qb
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::request::{GeoRequest, Order, OrderBy};

    fn base_filters() -> SearchFilters {
        SearchFilters {
            category: None,
            geo: GeoRequest::Unfiltered,
            order_by: OrderBy::StartsAt,
            order: Order::Asc,
            limit: None,
        }
    }

    fn providence() -> ResolvedGeo {
        ResolvedGeo {
            center: Coordinate {
                lat: 41.8240,
                lng: -71.4128,
            },
            radius_miles: 25,
        }
    }

    #[test]
    fn visibility_predicates_are_always_present() {
        let filters = base_filters();
        let mut qb = build_query(&filters, None);
        let sql = qb.sql();
        assert!(sql.contains("WHERE status = $1 AND is_public = TRUE"));
        assert!(sql.ends_with("ORDER BY starts_at ASC"));
    }

    #[test]
    fn category_adds_a_bound_predicate() {
        let filters = SearchFilters {
            category: Some("Music".to_string()),
            ..base_filters()
        };
        let mut qb = build_query(&filters, None);
        assert!(qb.sql().contains("AND category = $2"));
    }

    #[test]
    fn geo_requires_non_null_coordinates() {
        let filters = base_filters();
        let mut qb = build_query(&filters, Some(providence()));
        let sql = qb.sql();
        assert!(sql.contains("lat IS NOT NULL AND lng IS NOT NULL"));
        assert!(sql.contains("acos(LEAST("));
        // center lat, center lng, center lat again, radius meters
        assert!(sql.contains("$5"));
    }

    #[test]
    fn no_geo_clause_without_a_resolved_center() {
        let filters = base_filters();
        let mut qb = build_query(&filters, None);
        assert!(!qb.sql().contains("acos"));
    }

    #[test]
    fn ordering_and_limit_are_rendered() {
        let filters = SearchFilters {
            order_by: OrderBy::CreatedAt,
            order: Order::Desc,
            limit: Some(50),
            ..base_filters()
        };
        let mut qb = build_query(&filters, None);
        let sql = qb.sql();
        assert!(sql.contains("ORDER BY created_at DESC"));
        assert!(sql.contains("LIMIT $2"));
    }
}
