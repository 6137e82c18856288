use sqlx::PgPool;

use crate::models::{Coordinate, ZipLocation};
use crate::utils::error::AppError;

/// Single-key lookup of a zip code's representative coordinate. The
/// caller has already validated the zip as exactly 5 ASCII digits; no
/// normalization or fuzzy matching happens here. `None` means the zip
/// is unknown, which the search path turns into an empty result set.
pub async fn resolve(pool: &PgPool, zip: &str) -> Result<Option<Coordinate>, AppError> {
    let row: Option<ZipLocation> =
        sqlx::query_as("SELECT zip_code, lat, lng FROM zip_locations WHERE zip_code = $1")
            .bind(zip)
            .fetch_optional(pool)
            .await?;

    Ok(row.map(|z| z.coordinate()))
}
