pub mod attendance;
pub mod calendar;
pub mod calendar_class;
pub mod calendar_course;
pub mod calendar_saturday;
pub mod class;
pub mod class_change_request;
pub mod class_schedule;
pub mod class_schedule_detail;
pub mod course;
pub mod course_class;
pub mod course_discipline;
pub mod discipline;
pub mod holiday;
pub mod hour;
pub mod school_saturday;
pub mod user;
