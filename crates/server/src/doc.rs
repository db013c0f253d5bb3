use crate::{
    error::ErrorResponse,
    routes::{
        attendances, calendars, change_requests, classes, courses, disciplines, health, holidays,
        hours, reports, root, schedules, school_saturdays, users,
    },
};
use utoipa::{
    Modify, OpenApi,
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
};

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "jwt",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

/// API Documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        root::root,
        health::health,
        users::list_users,
        users::me,
        users::get_user,
        users::create_user,
        users::update_user,
        users::delete_user,
        users::timetable,
        courses::list_courses,
        courses::get_course,
        courses::create_course,
        courses::update_course,
        courses::delete_course,
        courses::list_course_disciplines,
        courses::add_course_discipline,
        courses::update_course_discipline,
        courses::remove_course_discipline,
        courses::list_course_classes,
        disciplines::list_disciplines,
        disciplines::get_discipline,
        disciplines::create_discipline,
        disciplines::update_discipline,
        disciplines::delete_discipline,
        classes::list_active_classes,
        classes::list_all_classes,
        classes::get_class,
        classes::create_class,
        classes::update_class,
        classes::link_course,
        classes::set_course_status,
        hours::list_hours,
        hours::get_hour,
        hours::create_hour,
        hours::update_hour,
        hours::delete_hour,
        calendars::list_calendars,
        calendars::get_calendar,
        calendars::create_calendar,
        calendars::update_calendar,
        calendars::delete_calendar,
        calendars::add_class,
        calendars::remove_class,
        calendars::add_course,
        calendars::remove_course,
        calendars::attach_saturday,
        calendars::detach_saturday,
        school_saturdays::list_school_saturdays,
        school_saturdays::create_school_saturday,
        school_saturdays::delete_school_saturday,
        holidays::list_holidays,
        holidays::get_holiday,
        holidays::create_holiday,
        holidays::update_holiday,
        holidays::delete_holiday,
        schedules::list_schedules,
        schedules::get_schedule,
        schedules::create_schedule,
        schedules::set_professor,
        schedules::delete_schedule,
        schedules::list_details,
        schedules::add_detail,
        schedules::get_detail,
        schedules::delete_detail,
        attendances::list_attendances,
        attendances::get_attendance,
        attendances::create_attendance,
        attendances::update_attendance,
        attendances::delete_attendance,
        change_requests::list_change_requests,
        change_requests::get_change_request,
        change_requests::create_change_request,
        change_requests::validate_change_request,
        change_requests::delete_change_request,
        reports::attendance_report,
        reports::absences_by_professor,
        reports::change_request_report,
        reports::course_workload_report
    ),
    components(schemas(ErrorResponse)),
    modifiers(&SecurityAddon),
    tags(
        (name = "Health", description = "Service status"),
        (name = "Users", description = "Registered users and their timetables"),
        (name = "Courses", description = "Courses and their disciplines"),
        (name = "Disciplines", description = "Discipline catalog"),
        (name = "Classes", description = "Classes and their course links"),
        (name = "Hours", description = "Daily class periods"),
        (name = "Calendars", description = "Academic terms and school Saturdays"),
        (name = "Holidays", description = "Days without lessons"),
        (name = "Schedules", description = "Weekly timetable"),
        (name = "Attendance", description = "Lesson attendance"),
        (name = "Change requests", description = "Anticipation and make-up requests"),
        (name = "Reports", description = "Read-only aggregations"),
    ),
    info(
        title = "Academic Management API",
        version = "1.0.0",
        description = "Courses, classes, timetables, attendance and change requests",
        license(
            name = "MIT OR Apache-2.0",
        )
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_document_lists_routes_and_bearer_scheme() {
        let doc = ApiDoc::openapi();

        for path in [
            "/classes-all",
            "/change-requests/{id}/validation",
            "/reports/course-workload",
        ] {
            assert!(doc.paths.paths.contains_key(path), "{path}");
        }

        let components = doc.components.expect("components");
        assert!(components.security_schemes.contains_key("jwt"));
    }
}
