use crate::domain::{AttendanceStatus, Coordinate};
use crate::geofence::GeofenceEvaluation;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// The outcome of a single attendance-marking attempt, ready to be handed to a sink.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AttendanceRecord {
    status: AttendanceStatus,
    marked_at: DateTime<Utc>,
    location: Option<Coordinate>,
    distance_km: Option<f64>,
    outside_boundary: bool,
    needs_review: bool,
}

impl AttendanceRecord {
    /// A record whose location was acquired and checked against the office zone.
    ///
    /// Claiming presence from outside the zone is still recorded, but flagged for review.
    pub fn verified(status: AttendanceStatus, marked_at: DateTime<Utc>, location: Coordinate, evaluation: &GeofenceEvaluation) -> Self {
        let outside_boundary = !evaluation.within_office();
        AttendanceRecord {
            status,
            marked_at,
            location: Some(location),
            distance_km: Some(evaluation.distance_km()),
            outside_boundary,
            needs_review: outside_boundary && status.requires_presence(),
        }
    }

    /// A record for which no device location could be acquired.
    ///
    /// Nothing is known about the boundary, so a presence claim cannot be verified and goes to review.
    pub fn unverified(status: AttendanceStatus, marked_at: DateTime<Utc>) -> Self {
        AttendanceRecord {
            status,
            marked_at,
            location: None,
            distance_km: None,
            outside_boundary: false,
            needs_review: status.requires_presence(),
        }
    }

    pub fn status(&self) -> AttendanceStatus {
        self.status
    }

    pub fn location(&self) -> Option<&Coordinate> {
        self.location.as_ref()
    }

    pub fn distance_km(&self) -> Option<f64> {
        self.distance_km
    }

    pub fn outside_boundary(&self) -> bool {
        self.outside_boundary
    }

    pub fn needs_review(&self) -> bool {
        self.needs_review
    }
}
