use crate::domain::{Coordinate, OfficeZone};
use crate::geofence::haversine_km;
use std::fmt::{Display, Formatter};
use tracing::{debug, instrument};

/// Decides whether a device location lies within the configured office zone.
#[derive(Clone, Debug)]
pub struct GeofenceEvaluator {
    zone: OfficeZone,
}

impl GeofenceEvaluator {
    pub fn new(zone: OfficeZone) -> Self {
        GeofenceEvaluator { zone }
    }

    pub fn distance_km(&self, point: &Coordinate) -> f64 {
        haversine_km(point, self.zone.center())
    }

    /// A point exactly on the boundary counts as inside.
    pub fn is_within_office(&self, point: &Coordinate) -> bool {
        self.evaluate(point).within_office()
    }

    #[instrument(skip_all, fields(point = %point))]
    pub fn evaluate(&self, point: &Coordinate) -> GeofenceEvaluation {
        let distance_km = self.distance_km(point);
        let evaluation = GeofenceEvaluation::new(distance_km, distance_km <= self.zone.radius_km());
        debug!(radius_km = self.zone.radius_km(), "📐 {}", evaluation);
        evaluation
    }
}

/// The boundary verdict together with the distance it was derived from.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeofenceEvaluation {
    distance_km: f64,
    within_office: bool,
}

impl GeofenceEvaluation {
    pub fn new(distance_km: f64, within_office: bool) -> Self {
        GeofenceEvaluation { distance_km, within_office }
    }

    pub fn distance_km(&self) -> f64 {
        self.distance_km
    }

    pub fn within_office(&self) -> bool {
        self.within_office
    }
}

impl Display for GeofenceEvaluation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let verdict = if self.within_office { "inside office" } else { "outside office" };
        write!(f, "{} ({:.2} km)", verdict, self.distance_km)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    const OFFICE_LATITUDE: f64 = 18.641478153875;
    const OFFICE_LONGITUDE: f64 = 73.79522807016143;

    #[test]
    fn office_center_is_within_office() {
        let evaluator = evaluator(5.0);

        assert!(evaluator.is_within_office(&coordinate(OFFICE_LATITUDE, OFFICE_LONGITUDE)));
    }

    #[test]
    fn office_center_is_within_a_zero_radius() {
        let evaluator = evaluator(0.0);

        assert!(evaluator.is_within_office(&coordinate(OFFICE_LATITUDE, OFFICE_LONGITUDE)));
    }

    #[rstest]
    #[case::ten_meters_away(18.6414, 73.7952, true)]
    #[case::nine_kilometers_away(18.70, 73.85, false)]
    fn concrete_points(#[case] latitude: f64, #[case] longitude: f64, #[case] expected: bool) {
        assert_eq!(evaluator(5.0).is_within_office(&coordinate(latitude, longitude)), expected);
    }

    #[rstest]
    #[case(5.0)]
    #[case(1_000.0)]
    #[case(19_999.0)]
    fn antipode_is_outside_office(#[case] radius_km: f64) {
        let antipode = coordinate(-OFFICE_LATITUDE, OFFICE_LONGITUDE - 180.0);

        assert!(!evaluator(radius_km).is_within_office(&antipode));
    }

    #[test]
    fn point_exactly_on_the_boundary_is_within_office() {
        let point = coordinate(18.66, 73.82);
        let center = coordinate(OFFICE_LATITUDE, OFFICE_LONGITUDE);
        let radius_km = haversine_km(&point, &center);
        let zone = OfficeZone::new(center, radius_km).unwrap();

        assert!(GeofenceEvaluator::new(zone).is_within_office(&point));
    }

    #[test]
    fn point_just_beyond_the_boundary_is_outside_office() {
        let point = coordinate(18.66, 73.82);
        let center = coordinate(OFFICE_LATITUDE, OFFICE_LONGITUDE);
        let radius_km = haversine_km(&point, &center) - 1e-9;
        let zone = OfficeZone::new(center, radius_km).unwrap();

        assert!(!GeofenceEvaluator::new(zone).is_within_office(&point));
    }

    #[rstest]
    #[case(0.5)]
    #[case(5.0)]
    #[case(500.0)]
    fn verdict_never_returns_inside_once_outside_along_a_meridian(#[case] radius_km: f64) {
        let evaluator = evaluator(radius_km);
        let mut previous_distance = -1.0;
        let mut left_zone = false;

        for step in 0..700 {
            let point = coordinate(OFFICE_LATITUDE + step as f64 * 0.1, OFFICE_LONGITUDE);
            let distance = evaluator.distance_km(&point);
            assert!(distance > previous_distance, "distance decreased at step {}", step);
            previous_distance = distance;

            let within = evaluator.is_within_office(&point);
            assert!(!(left_zone && within), "re-entered the zone at step {}", step);
            left_zone |= !within;
        }

        assert!(left_zone);
    }

    #[test]
    fn evaluate_returns_distance_and_verdict() {
        let evaluation = evaluator(5.0).evaluate(&coordinate(18.70, 73.85));

        assert!(!evaluation.within_office());
        assert!((evaluation.distance_km() - 8.697).abs() < 0.01);
        assert_eq!(evaluation.to_string(), "outside office (8.70 km)");
    }

    fn evaluator(radius_km: f64) -> GeofenceEvaluator {
        let zone = OfficeZone::new(coordinate(OFFICE_LATITUDE, OFFICE_LONGITUDE), radius_km).unwrap();
        GeofenceEvaluator::new(zone)
    }

    fn coordinate(latitude: f64, longitude: f64) -> Coordinate {
        Coordinate::new(latitude, longitude).unwrap()
    }
}
