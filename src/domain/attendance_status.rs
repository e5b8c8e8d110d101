use crate::domain::AttendanceStatus::*;
use serde::Serialize;
use std::fmt::{Display, Formatter};

/// The status an employee asks to be recorded with.
#[derive(PartialEq, Eq, Hash, Debug, Clone, Copy, Serialize)]
pub enum AttendanceStatus {
    Present,
    #[serde(rename = "Half Day")]
    HalfDay,
    Absent,
    #[serde(rename = "Work From Home")]
    WorkFromHome,
}

impl AttendanceStatus {
    /// Whether the status claims the employee is physically at the office.
    pub fn requires_presence(&self) -> bool {
        matches!(self, Present | HalfDay)
    }
}

impl Display for AttendanceStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Present => write!(f, "Present"),
            HalfDay => write!(f, "Half Day"),
            Absent => write!(f, "Absent"),
            WorkFromHome => write!(f, "Work From Home"),
        }
    }
}
