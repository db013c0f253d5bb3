pub mod access;
pub mod attendance_status;
pub mod calendar;
pub mod change_request;
pub mod course_type;
pub mod days;
pub mod holiday_type;
pub mod hours;
pub mod validation;

pub use access::AccessType;
pub use attendance_status::AttendanceStatus;
pub use calendar::{CalendarPeriod, CalendarType};
pub use change_request::{ChangeType, ValidationStatus};
pub use course_type::CourseType;
pub use days::DayOfWeek;
pub use holiday_type::HolidayType;
pub use hours::HourRange;
pub use validation::ValidationError;
