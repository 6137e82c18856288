//! Boundary validation for search query parameters.
//!
//! Parameters arrive as raw strings and are validated exactly once,
//! here, into [`SearchFilters`]. Bad geographic input never produces an
//! error response: the product behavior is "no results", not a 400, so
//! malformed zips and unrecognized radii resolve to
//! [`GeoRequest::SoftEmpty`] and the search short-circuits to an empty
//! set. Unrecognized ordering values fall back to the defaults.

use serde::Deserialize;

/// Radii (miles) the search accepts. Anything else is treated the same
/// as a missing radius.
pub const VALID_RADII_MILES: [u32; 8] = [5, 10, 15, 20, 25, 30, 40, 50];

/// Hard cap on caller-supplied result limits.
pub const MAX_LIMIT: i64 = 200;

/// Category value that means "no category filter".
const CATEGORY_ALL: &str = "All";

/// Raw query-string parameters as they arrive over HTTP. Everything is
/// an optional string so that a malformed value (e.g. `limit=abc`)
/// reaches the validation logic instead of failing extraction.
#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    pub zip: Option<String>,
    pub radius: Option<String>,
    pub category: Option<String>,
    #[serde(rename = "orderBy")]
    pub order_by: Option<String>,
    pub order: Option<String>,
    pub limit: Option<String>,
}

/// Geographic portion of a validated search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GeoRequest {
    /// No zip supplied; no geographic filter applies.
    Unfiltered,
    /// Fail-soft policy: a zip that is not exactly 5 ASCII digits, or a
    /// radius outside [`VALID_RADII_MILES`], makes the whole search
    /// return an empty result set rather than an error.
    SoftEmpty,
    /// A well-formed zip and radius, still to be resolved against the
    /// zip location index.
    Radius { zip: String, radius_miles: u32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderBy {
    StartsAt,
    CreatedAt,
}

impl OrderBy {
    pub fn column(self) -> &'static str {
        match self {
            OrderBy::StartsAt => "starts_at",
            OrderBy::CreatedAt => "created_at",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Order {
    Asc,
    Desc,
}

impl Order {
    pub fn keyword(self) -> &'static str {
        match self {
            Order::Asc => "ASC",
            Order::Desc => "DESC",
        }
    }
}

/// Fully validated search input. Constructing one of these is the only
/// way parameters reach the query builder.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchFilters {
    /// None when the caller asked for "All" (or nothing).
    pub category: Option<String>,
    pub geo: GeoRequest,
    pub order_by: OrderBy,
    pub order: Order,
    /// None means no limit; always <= [`MAX_LIMIT`] when present.
    pub limit: Option<i64>,
}

impl SearchFilters {
    pub fn from_params(params: SearchParams) -> Self {
        SearchFilters {
            category: normalize_category(params.category),
            geo: validate_geo(params.zip, params.radius),
            order_by: parse_order_by(params.order_by.as_deref()),
            order: parse_order(params.order.as_deref()),
            limit: parse_limit(params.limit.as_deref()),
        }
    }
}

fn normalize_category(category: Option<String>) -> Option<String> {
    category.filter(|c| !c.is_empty() && c != CATEGORY_ALL)
}

fn validate_geo(zip: Option<String>, radius: Option<String>) -> GeoRequest {
    let Some(zip) = zip else {
        return GeoRequest::Unfiltered;
    };
    if !is_five_digit_zip(&zip) {
        return GeoRequest::SoftEmpty;
    }
    match radius.and_then(|r| r.parse::<u32>().ok()) {
        Some(miles) if VALID_RADII_MILES.contains(&miles) => GeoRequest::Radius {
            zip,
            radius_miles: miles,
        },
        _ => GeoRequest::SoftEmpty,
    }
}

fn is_five_digit_zip(zip: &str) -> bool {
    zip.len() == 5 && zip.bytes().all(|b| b.is_ascii_digit())
}

fn parse_order_by(value: Option<&str>) -> OrderBy {
    match value {
        Some("created_at") => OrderBy::CreatedAt,
        _ => OrderBy::StartsAt,
    }
}

fn parse_order(value: Option<&str>) -> Order {
    match value {
        Some("DESC") => Order::Desc,
        _ => Order::Asc,
    }
}

fn parse_limit(value: Option<&str>) -> Option<i64> {
    let raw = value?;
    match raw.parse::<i64>() {
        Ok(n) if n > 0 => Some(n.min(MAX_LIMIT)),
        Ok(_) => None,
        // A run of digits too long for i64 is still a positive number;
        // it gets capped, not waved through as "no limit".
        Err(_) if !raw.is_empty() && raw.bytes().all(|b| b.is_ascii_digit()) => Some(MAX_LIMIT),
        Err(_) => None,
    }
}
