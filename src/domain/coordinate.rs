use serde::Serialize;
use std::fmt::{Display, Formatter};
use thiserror::Error;

/// A point on the earth's surface in decimal degrees.
///
/// Only constructed through [`Coordinate::new`] or deserialization, so every instance holds a finite latitude in [-90, 90] and
/// a finite longitude in [-180, 180].
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Coordinate {
    latitude: f64,
    longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, CoordinateError> {
        if !latitude.is_finite() || !longitude.is_finite() {
            return Err(CoordinateError::NotFinite { latitude, longitude });
        }

        if !(-90.0..=90.0).contains(&latitude) {
            return Err(CoordinateError::OutOfRange {
                field: "latitude",
                value: latitude,
                limit: 90.0,
            });
        }

        if !(-180.0..=180.0).contains(&longitude) {
            return Err(CoordinateError::OutOfRange {
                field: "longitude",
                value: longitude,
                limit: 180.0,
            });
        }

        Ok(Coordinate { latitude, longitude })
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }
}

impl Display for Coordinate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.latitude, self.longitude)
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum CoordinateError {
    #[error("invalid coordinate ({latitude}, {longitude}), latitude and longitude must be finite numbers")]
    NotFinite { latitude: f64, longitude: f64 },
    #[error("invalid {field}: {value}, must be between -{limit} and {limit}")]
    OutOfRange { field: &'static str, value: f64, limit: f64 },
}
