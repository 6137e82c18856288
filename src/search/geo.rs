use crate::models::Coordinate;

/// Mean Earth radius in meters. Sphere, not ellipsoid; the error is
/// negligible for the <= 50 mile radii this service accepts.
pub const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

pub const METERS_PER_MILE: f64 = 1_609.34;

/// Great-circle distance between two coordinates via the spherical law
/// of cosines. The acos argument is clamped at 1.0: for identical or
/// near-identical points, floating point drift can push it past 1 and
/// turn the result into NaN.
pub fn distance_meters(a: Coordinate, b: Coordinate) -> f64 {
    let lat1 = a.lat.to_radians();
    let lat2 = b.lat.to_radians();
    let delta_lng = (b.lng - a.lng).to_radians();

    let arg = (lat1.cos() * lat2.cos() * delta_lng.cos() + lat1.sin() * lat2.sin()).min(1.0);
    EARTH_RADIUS_METERS * arg.acos()
}

pub fn is_within_radius(center: Coordinate, point: Coordinate, radius_miles: f64) -> bool {
    distance_meters(center, point) <= radius_miles * METERS_PER_MILE
}
