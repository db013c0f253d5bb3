pub mod attendances;
pub mod calendars;
pub mod change_requests;
pub mod classes;
pub mod courses;
pub mod disciplines;
pub mod health;
pub mod holidays;
pub mod hours;
pub mod reports;
pub mod root;
pub mod schedules;
pub mod school_saturdays;
pub mod users;

use crate::state::AppState;
use axum::{
    Router,
    routing::{delete, get, post, put},
};

/// Routes served without a bearer token
pub fn public() -> Router<AppState> {
    Router::new()
        .route("/", get(root::root))
        .route("/health", get(health::health))
}

/// Routes that read the caller from the token claims
pub fn api() -> Router<AppState> {
    Router::new()
        .route("/users", get(users::list_users).post(users::create_user))
        .route("/users/me", get(users::me))
        .route(
            "/users/{id}",
            get(users::get_user)
                .put(users::update_user)
                .delete(users::delete_user),
        )
        .route("/users/{id}/timetable", get(users::timetable))
        .route(
            "/courses",
            get(courses::list_courses).post(courses::create_course),
        )
        .route(
            "/courses/{id}",
            get(courses::get_course)
                .put(courses::update_course)
                .delete(courses::delete_course),
        )
        .route(
            "/courses/{id}/disciplines",
            get(courses::list_course_disciplines).post(courses::add_course_discipline),
        )
        .route(
            "/courses/{id}/disciplines/{discipline_id}",
            put(courses::update_course_discipline).delete(courses::remove_course_discipline),
        )
        .route("/courses/{id}/classes", get(courses::list_course_classes))
        .route(
            "/disciplines",
            get(disciplines::list_disciplines).post(disciplines::create_discipline),
        )
        .route(
            "/disciplines/{id}",
            get(disciplines::get_discipline)
                .put(disciplines::update_discipline)
                .delete(disciplines::delete_discipline),
        )
        .route(
            "/classes",
            get(classes::list_active_classes).post(classes::create_class),
        )
        .route("/classes-all", get(classes::list_all_classes))
        .route(
            "/classes/{id}",
            get(classes::get_class).put(classes::update_class),
        )
        .route(
            "/classes/{id}/courses/{course_id}",
            post(classes::link_course).put(classes::set_course_status),
        )
        .route("/hours", get(hours::list_hours).post(hours::create_hour))
        .route(
            "/hours/{id}",
            get(hours::get_hour)
                .put(hours::update_hour)
                .delete(hours::delete_hour),
        )
        .route(
            "/calendars",
            get(calendars::list_calendars).post(calendars::create_calendar),
        )
        .route(
            "/calendars/{id}",
            get(calendars::get_calendar)
                .put(calendars::update_calendar)
                .delete(calendars::delete_calendar),
        )
        .route(
            "/calendars/{id}/classes/{class_id}",
            post(calendars::add_class).delete(calendars::remove_class),
        )
        .route(
            "/calendars/{id}/courses/{course_id}",
            post(calendars::add_course).delete(calendars::remove_course),
        )
        .route(
            "/calendars/{id}/saturdays/{saturday_id}",
            post(calendars::attach_saturday).delete(calendars::detach_saturday),
        )
        .route(
            "/school-saturdays",
            get(school_saturdays::list_school_saturdays)
                .post(school_saturdays::create_school_saturday),
        )
        .route(
            "/school-saturdays/{id}",
            delete(school_saturdays::delete_school_saturday),
        )
        .route(
            "/holidays",
            get(holidays::list_holidays).post(holidays::create_holiday),
        )
        .route(
            "/holidays/{id}",
            get(holidays::get_holiday)
                .put(holidays::update_holiday)
                .delete(holidays::delete_holiday),
        )
        .route(
            "/schedules",
            get(schedules::list_schedules).post(schedules::create_schedule),
        )
        .route(
            "/schedules/{id}",
            get(schedules::get_schedule).delete(schedules::delete_schedule),
        )
        .route("/schedules/{id}/professor", put(schedules::set_professor))
        .route(
            "/schedules/{id}/details",
            get(schedules::list_details).post(schedules::add_detail),
        )
        .route(
            "/schedule-details/{id}",
            get(schedules::get_detail).delete(schedules::delete_detail),
        )
        .route(
            "/attendances",
            get(attendances::list_attendances).post(attendances::create_attendance),
        )
        .route(
            "/attendances/{id}",
            get(attendances::get_attendance)
                .put(attendances::update_attendance)
                .delete(attendances::delete_attendance),
        )
        .route(
            "/change-requests",
            get(change_requests::list_change_requests)
                .post(change_requests::create_change_request),
        )
        .route(
            "/change-requests/{id}",
            get(change_requests::get_change_request)
                .delete(change_requests::delete_change_request),
        )
        .route(
            "/change-requests/{id}/validation",
            put(change_requests::validate_change_request),
        )
        .route("/reports/attendance", get(reports::attendance_report))
        .route(
            "/reports/absences-by-professor",
            get(reports::absences_by_professor),
        )
        .route(
            "/reports/change-requests",
            get(reports::change_request_report),
        )
        .route(
            "/reports/course-workload",
            get(reports::course_workload_report),
        )
}
