use crate::domain::Coordinate;
use async_trait::async_trait;
use std::fmt::Debug;
use std::time::Duration;
use thiserror::Error;

/// Source of the device's current location.
#[async_trait]
pub trait LocationProvider: Debug + Send + Sync {
    async fn current_location(&self) -> Result<Coordinate, LocationError>;
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LocationError {
    #[error("location permission denied")]
    PermissionDenied,
    #[error("location unavailable: {0}")]
    Unavailable(String),
    #[error("no location received within {0:?}")]
    Timeout(Duration),
}

impl LocationError {
    /// A denied permission will not change by asking again.
    pub fn is_retryable(&self) -> bool {
        !matches!(self, LocationError::PermissionDenied)
    }
}

/// Provides a location that is known up front, e.g. passed on the command line.
#[derive(Debug)]
pub struct FixedLocationProvider {
    location: Option<Coordinate>,
}

impl FixedLocationProvider {
    pub fn new(location: Option<Coordinate>) -> Self {
        FixedLocationProvider { location }
    }
}

#[async_trait]
impl LocationProvider for FixedLocationProvider {
    async fn current_location(&self) -> Result<Coordinate, LocationError> {
        self.location.ok_or_else(|| LocationError::Unavailable("no coordinate supplied".to_string()))
    }
}
