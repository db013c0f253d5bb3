//! Table and column identifiers shared by every migration

use sea_orm_migration::prelude::*;

#[derive(Iden)]
pub enum Users {
    Table,
    Id,
    Subject,
    Name,
    Email,
    AccessType,
    CreatedAt,
}

#[derive(Iden)]
pub enum Courses {
    Table,
    Id,
    Name,
    Acronym,
    CourseType,
    CoordinatorId,
}

#[derive(Iden)]
pub enum Disciplines {
    Table,
    Id,
    Name,
    Acronym,
}

#[derive(Iden)]
pub enum Classes {
    Table,
    Id,
    Semester,
}

#[derive(Iden)]
pub enum Hours {
    Table,
    Id,
    HourStart,
    HourEnd,
}

#[derive(Iden)]
pub enum CourseDisciplines {
    Table,
    Id,
    CourseId,
    DisciplineId,
    Workload,
}

#[derive(Iden)]
pub enum CourseClasses {
    Table,
    Id,
    CourseId,
    ClassId,
    IsActive,
}

#[derive(Iden)]
pub enum Calendars {
    Table,
    Id,
    CalendarType,
    Year,
    Period,
}

#[derive(Iden)]
pub enum CalendarClasses {
    Table,
    Id,
    CalendarId,
    ClassId,
}

#[derive(Iden)]
pub enum CalendarCourses {
    Table,
    Id,
    CalendarId,
    CourseId,
}

#[derive(Iden)]
pub enum SchoolSaturdays {
    Table,
    Id,
    DayOfWeek,
    Date,
}

#[derive(Iden)]
pub enum CalendarSaturdays {
    Table,
    Id,
    CalendarId,
    SchoolSaturdayId,
}

#[derive(Iden)]
pub enum Holidays {
    Table,
    Id,
    Name,
    Date,
    HolidayType,
}

#[derive(Iden)]
pub enum ClassSchedules {
    Table,
    Id,
    CalendarId,
    ClassId,
    CourseId,
    DisciplineId,
    ProfessorId,
    DayOfWeek,
    HourId,
}

#[derive(Iden)]
pub enum ClassScheduleDetails {
    Table,
    Id,
    ClassScheduleId,
    DisciplineId,
    UserId,
    HourId,
    DayOfWeek,
}

#[derive(Iden)]
pub enum Attendances {
    Table,
    Id,
    ClassScheduleDetailId,
    Date,
    Status,
    RegisteredBy,
    Latitude,
    Longitude,
    Justification,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
pub enum ClassChangeRequests {
    Table,
    Id,
    UserId,
    CourseClassId,
    DisciplineId,
    ChangeType,
    Quantity,
    Date,
    Annex,
    Observation,
    Validated,
    ObservationCoordinator,
    CreatedAt,
}
