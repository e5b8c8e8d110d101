use crate::domain::{AttendanceStatus, Coordinate, CoordinateError};
use clap::{Parser, ValueEnum};

/// Mark attendance after checking the device location against the office geofence.
#[derive(Parser, Debug)]
#[command(version)]
pub struct Cli {
    /// Device latitude in decimal degrees; omit together with --longitude when no location is available
    #[arg(long, requires = "longitude", allow_negative_numbers = true)]
    pub latitude: Option<f64>,

    /// Device longitude in decimal degrees
    #[arg(long, requires = "latitude", allow_negative_numbers = true)]
    pub longitude: Option<f64>,

    /// Requested attendance status
    #[arg(long, value_enum, default_value_t = StatusArg::Present)]
    pub status: StatusArg,

    /// Log at debug level
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn location(&self) -> Result<Option<Coordinate>, CoordinateError> {
        match (self.latitude, self.longitude) {
            (Some(latitude), Some(longitude)) => Coordinate::new(latitude, longitude).map(Some),
            _ => Ok(None),
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq)]
pub enum StatusArg {
    Present,
    HalfDay,
    Absent,
    WorkFromHome,
}

impl From<StatusArg> for AttendanceStatus {
    fn from(status: StatusArg) -> Self {
        match status {
            StatusArg::Present => AttendanceStatus::Present,
            StatusArg::HalfDay => AttendanceStatus::HalfDay,
            StatusArg::Absent => AttendanceStatus::Absent,
            StatusArg::WorkFromHome => AttendanceStatus::WorkFromHome,
        }
    }
}
