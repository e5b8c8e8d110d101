mod attendance_record;
mod attendance_status;
mod coordinate;
mod office_zone;

pub use attendance_record::AttendanceRecord;
pub use attendance_status::AttendanceStatus;
pub use coordinate::{Coordinate, CoordinateError};
pub use office_zone::OfficeZone;
