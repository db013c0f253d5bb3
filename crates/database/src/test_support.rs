//! In-memory SQLite fixtures for service tests

use crate::entities::{calendar, class, class_schedule, course, discipline, hour, user};
use crate::services::{
    calendar::{CalendarService, NewCalendar},
    class::{ClassService, NewClass},
    course::{CourseService, NewCourse},
    discipline::{DisciplineService, NewDiscipline},
    hour::{HourService, NewHour},
    schedule::{NewSchedule, ScheduleService, ScheduleWithDetails},
    user::{NewUser, UserService},
};
use chrono::NaiveTime;
use migration::{Migrator, MigratorTrait};
use models::{AccessType, CourseType, DayOfWeek};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};

pub async fn setup_test_db() -> DatabaseConnection {
    // A single connection keeps every query on the same in-memory database
    let mut options = ConnectOptions::new("sqlite::memory:");
    options.max_connections(1).sqlx_logging(false);

    let db = Database::connect(options)
        .await
        .expect("failed to open in-memory database");
    Migrator::up(&db, None).await.expect("failed to run migrations");
    db
}

pub async fn user(db: &DatabaseConnection, subject: &str, access_type: AccessType) -> user::Model {
    UserService::create(
        db,
        NewUser {
            subject: subject.to_string(),
            name: format!("User {subject}"),
            email: format!("{subject}@escola.edu.br"),
            access_type,
        },
    )
    .await
    .expect("create user")
}

pub async fn course(db: &DatabaseConnection, acronym: &str) -> course::Model {
    CourseService::create(
        db,
        NewCourse {
            name: format!("Curso {acronym}"),
            acronym: acronym.to_string(),
            course_type: CourseType::Integrado,
            coordinator_id: None,
        },
    )
    .await
    .expect("create course")
}

pub async fn discipline(db: &DatabaseConnection, acronym: &str) -> discipline::Model {
    DisciplineService::create(
        db,
        NewDiscipline {
            name: format!("Disciplina {acronym}"),
            acronym: acronym.to_string(),
        },
    )
    .await
    .expect("create discipline")
}

pub async fn class_in(db: &DatabaseConnection, course_id: uuid::Uuid, semester: &str) -> class::Model {
    ClassService::create(
        db,
        NewClass {
            semester: semester.to_string(),
            course_id: Some(course_id),
        },
    )
    .await
    .expect("create class")
    .class
}

pub async fn hour(db: &DatabaseConnection, start: (u32, u32), end: (u32, u32)) -> hour::Model {
    HourService::create(
        db,
        NewHour {
            hour_start: NaiveTime::from_hms_opt(start.0, start.1, 0).unwrap(),
            hour_end: NaiveTime::from_hms_opt(end.0, end.1, 0).unwrap(),
        },
    )
    .await
    .expect("create hour")
}

pub async fn calendar(db: &DatabaseConnection, year: i32, period: i16) -> calendar::Model {
    CalendarService::create(
        db,
        NewCalendar {
            calendar_type: "semestral".to_string(),
            year,
            period,
            class_ids: vec![],
            course_ids: vec![],
        },
    )
    .await
    .expect("create calendar")
    .calendar
}

/// Everything a timetable slot hangs off
pub struct ScheduleFixture {
    pub professor: user::Model,
    pub course: course::Model,
    pub class: class::Model,
    pub discipline: discipline::Model,
    pub hour: hour::Model,
    pub calendar: calendar::Model,
    pub schedule: ScheduleWithDetails,
}

impl ScheduleFixture {
    pub fn schedule(&self) -> &class_schedule::Model {
        &self.schedule.schedule
    }

    pub fn detail_id(&self) -> uuid::Uuid {
        self.schedule.details[0].id
    }
}

/// Monday 07:30-08:20 lesson of class S1 of course ADM in calendar 2025.1
pub async fn schedule_fixture(db: &DatabaseConnection) -> ScheduleFixture {
    let professor = user(db, "prof", AccessType::Professor).await;
    let course = course(db, "ADM").await;
    let class = class_in(db, course.id, "S1").await;
    let discipline = discipline(db, "MAT").await;
    CourseService::add_discipline(db, course.id, discipline.id, 80)
        .await
        .expect("link discipline");
    let hour = hour(db, (7, 30), (8, 20)).await;
    let calendar = calendar(db, 2025, 1).await;
    CalendarService::add_class(db, calendar.id, class.id)
        .await
        .expect("add class to calendar");

    let schedule = ScheduleService::create(
        db,
        NewSchedule {
            calendar_id: calendar.id,
            class_id: class.id,
            course_id: course.id,
            discipline_id: discipline.id,
            professor_id: Some(professor.id),
            day_of_week: DayOfWeek::Monday,
            hour_id: hour.id,
        },
    )
    .await
    .expect("create schedule");

    ScheduleFixture {
        professor,
        course,
        class,
        discipline,
        hour,
        calendar,
        schedule,
    }
}
