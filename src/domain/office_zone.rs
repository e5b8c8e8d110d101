use crate::domain::Coordinate;
use thiserror::Error;

/// The permitted attendance area: everything within `radius_km` of `center`.
#[derive(Clone, Debug, PartialEq)]
pub struct OfficeZone {
    center: Coordinate,
    radius_km: f64,
}

impl OfficeZone {
    pub fn new(center: Coordinate, radius_km: f64) -> Result<Self, OfficeZoneError> {
        if !(radius_km.is_finite() && radius_km >= 0.0) {
            return Err(OfficeZoneError::InvalidRadius(radius_km));
        }

        Ok(OfficeZone { center, radius_km })
    }

    pub fn center(&self) -> &Coordinate {
        &self.center
    }

    pub fn radius_km(&self) -> f64 {
        self.radius_km
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum OfficeZoneError {
    #[error("invalid office radius: {0} km, must be a finite non-negative number")]
    InvalidRadius(f64),
}
