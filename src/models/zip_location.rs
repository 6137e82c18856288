use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A point in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

/// Static reference row mapping a 5-digit postal code to its
/// representative coordinate. Loaded out of band; never mutated
/// through the API.
#[allow(dead_code)]
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ZipLocation {
    pub zip_code: String,
    pub lat: f64,
    pub lng: f64,
}

impl ZipLocation {
    pub fn coordinate(&self) -> Coordinate {
        Coordinate {
            lat: self.lat,
            lng: self.lng,
        }
    }
}
