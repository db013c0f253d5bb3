pub mod attendance;
pub mod calendar;
pub mod catalog;
pub mod change_request;
pub mod report;
pub mod schedule;
pub mod user;
