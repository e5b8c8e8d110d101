mod location_provider;
mod marker;
mod sink;

pub use location_provider::{FixedLocationProvider, LocationError, LocationProvider};
pub use marker::{AttendanceMarker, MarkAttendanceError};
pub use sink::{AttendanceSink, LogSink, SinkError};
