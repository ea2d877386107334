//! Distance estimators over decimal-degree coordinates.
//!
//! [`haversine_km`] is the canonical edge-weight source and the canonical
//! admissible heuristic for guided search. The projected estimators exist as
//! alternative heuristics; their admissibility contracts are documented on
//! [`crate::Heuristic`].

/// Mean Earth radius in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Kilometres spanned by one degree along a meridian at the equator, the
/// minimum over the WGS84 ellipsoid. Scaling degree deltas by this keeps the
/// projected estimators from exceeding the great-circle arc for pure
/// north-south displacements.
const MIN_KM_PER_DEGREE: f64 = 110.574;

/// Great-circle surface distance between two points, in kilometres.
///
/// Pure and total for any finite coordinate pair; no failure modes.
pub fn haversine_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let lat1_rad = lat1.to_radians();
    let lat2_rad = lat2.to_radians();
    let dlat = (lat2 - lat1).to_radians();
    let dlon = (lon2 - lon1).to_radians();

    let a = (dlat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (dlon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().asin();

    EARTH_RADIUS_KM * c
}

/// Straight-line chord distance through the sphere, in kilometres.
///
/// The chord between two surface points is never longer than the arc between
/// them, so this estimate stays below [`haversine_km`] everywhere.
pub fn euclidean_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let (x1, y1, z1) = unit_vector(lat1, lon1);
    let (x2, y2, z2) = unit_vector(lat2, lon2);

    let dx = x2 - x1;
    let dy = y2 - y1;
    let dz = z2 - z1;

    EARTH_RADIUS_KM * (dx * dx + dy * dy + dz * dz).sqrt()
}

/// Axis-aligned sum of scaled coordinate deltas, in kilometres.
///
/// Longitude deltas wrap across the antimeridian and are scaled by the
/// cosine of the mean latitude. The sum of the two components can exceed the
/// great-circle distance by up to a factor of sqrt(2), so this estimator is
/// not admissible in general.
pub fn manhattan_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let dlat = (lat2 - lat1).abs();
    let dlon = wrap_degrees((lon2 - lon1).abs());
    let mean_lat = ((lat1 + lat2) / 2.0).to_radians();

    (dlat + dlon * mean_lat.cos()) * MIN_KM_PER_DEGREE
}

fn unit_vector(lat: f64, lon: f64) -> (f64, f64, f64) {
    let lat_rad = lat.to_radians();
    let lon_rad = lon.to_radians();
    (
        lat_rad.cos() * lon_rad.cos(),
        lat_rad.cos() * lon_rad.sin(),
        lat_rad.sin(),
    )
}

fn wrap_degrees(dlon: f64) -> f64 {
    if dlon > 180.0 {
        360.0 - dlon
    } else {
        dlon
    }
}
