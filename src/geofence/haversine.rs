use crate::domain::Coordinate;

/// Mean earth radius used for all distance calculations.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance in kilometers between two coordinates, using the haversine formula.
/// See https://en.wikipedia.org/wiki/Haversine_formula.
pub fn haversine_km(from: &Coordinate, to: &Coordinate) -> f64 {
    let d_lat = (to.latitude() - from.latitude()).to_radians();
    let d_lon = (to.longitude() - from.longitude()).to_radians();

    let a = (d_lat / 2.0).sin().powi(2) + from.latitude().to_radians().cos() * to.latitude().to_radians().cos() * (d_lon / 2.0).sin().powi(2);

    // Rounding can push `a` slightly above 1 for antipodal points
    2.0 * EARTH_RADIUS_KM * a.sqrt().min(1.0).asin()
}
