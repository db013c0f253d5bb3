use axum::{
    Extension, Router,
    body::{Body, to_bytes},
    http::{Method, Request, StatusCode, header},
};
use database::services::{
    calendar::{CalendarService, NewCalendar},
    class::{ClassService, NewClass},
    course::{CourseService, NewCourse},
    discipline::{DisciplineService, NewDiscipline},
    hour::{HourService, NewHour},
    schedule::{NewSchedule, ScheduleService},
    user::{NewUser, UserService},
};
use migration::{Migrator, MigratorTrait};
use models::{AccessType, CourseType, DayOfWeek};
use sea_orm::{ConnectOptions, Database};
use serde_json::{Value, json};
use server::{auth::AccessClaims, routes, state::AppState};
use tower::ServiceExt;
use uuid::Uuid;

async fn setup_state() -> AppState {
    let mut options = ConnectOptions::new("sqlite::memory:");
    options.max_connections(1).sqlx_logging(false);

    let db = Database::connect(options)
        .await
        .expect("failed to open in-memory database");
    Migrator::up(&db, None).await.expect("failed to run migrations");
    AppState { db }
}

fn app(state: &AppState, claims: Option<AccessClaims>) -> Router {
    let router = routes::public().merge(match claims {
        Some(claims) => routes::api().layer(Extension(claims)),
        None => routes::api(),
    });
    router.with_state(state.clone())
}

fn claims(sub: &str, access_type: AccessType) -> Option<AccessClaims> {
    Some(AccessClaims {
        sub: Some(sub.to_string()),
        access_type: Some(access_type),
    })
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut request = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            request = request.header(header::CONTENT_TYPE, "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    let response = app
        .clone()
        .oneshot(request.body(body).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, value)
}

async fn register(state: &AppState, subject: &str, access_type: AccessType) -> Uuid {
    UserService::create(
        &state.db,
        NewUser {
            subject: subject.to_string(),
            name: format!("User {subject}"),
            email: format!("{subject}@escola.edu.br"),
            access_type,
        },
    )
    .await
    .unwrap()
    .id
}

#[tokio::test]
async fn test_health_needs_no_token() {
    let state = setup_state().await;
    let app = app(&state, None);

    let (status, _) = send(&app, Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(&app, Method::GET, "/courses", None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "Unauthorized");
}

#[tokio::test]
async fn test_mutations_require_admin() {
    let state = setup_state().await;
    let professor = app(&state, claims("prof", AccessType::Professor));

    let course = json!({"name": "Administração", "acronym": "ADM", "courseType": "integrado"});
    let (status, body) = send(&professor, Method::POST, "/courses", Some(course.clone())).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert!(body["message"].is_string());

    let admin = app(&state, claims("admin", AccessType::Admin));
    let (status, body) = send(&admin, Method::POST, "/courses", Some(course)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["acronym"], "ADM");

    let (status, body) = send(&professor, Method::GET, "/courses", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().map(Vec::len), Some(1));
}

#[tokio::test]
async fn test_hour_range_and_duplicate_acronym() {
    let state = setup_state().await;
    let admin = app(&state, claims("admin", AccessType::Admin));

    let (status, body) = send(
        &admin,
        Method::POST,
        "/hours",
        Some(json!({"hourStart": "08:20:00", "hourEnd": "07:30:00"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Bad Request");

    let course = json!({"name": "Informática", "acronym": "inf", "courseType": "subsequente"});
    let (status, _) = send(&admin, Method::POST, "/courses", Some(course.clone())).await;
    assert_eq!(status, StatusCode::CREATED);
    let (status, _) = send(&admin, Method::POST, "/courses", Some(course)).await;
    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_archived_class_leaves_active_list() {
    let state = setup_state().await;
    let admin = app(&state, claims("admin", AccessType::Admin));

    let (_, course) = send(
        &admin,
        Method::POST,
        "/courses",
        Some(json!({"name": "Administração", "acronym": "ADM", "courseType": "integrado"})),
    )
    .await;
    let course_id = course["id"].as_str().unwrap().to_string();

    let (status, class) = send(
        &admin,
        Method::POST,
        "/classes",
        Some(json!({"semester": "S1", "courseId": course_id})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let class_id = class["id"].as_str().unwrap().to_string();
    assert_eq!(class["courses"][0]["isActive"], true);

    let (_, active) = send(&admin, Method::GET, "/classes", None).await;
    assert_eq!(active.as_array().map(Vec::len), Some(1));

    let (status, link) = send(
        &admin,
        Method::PUT,
        &format!("/classes/{class_id}/courses/{course_id}"),
        Some(json!({"isActive": false})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(link["isActive"], false);

    let (_, active) = send(&admin, Method::GET, "/classes", None).await;
    assert_eq!(active.as_array().map(Vec::len), Some(0));

    let (_, all) = send(&admin, Method::GET, "/classes-all", None).await;
    assert_eq!(all.as_array().map(Vec::len), Some(1));

    let (status, found) = send(&admin, Method::GET, &format!("/classes/{class_id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(found["semester"], "S1");
}

#[tokio::test]
async fn test_change_request_is_validated_once() {
    let state = setup_state().await;
    register(&state, "prof", AccessType::Professor).await;

    let course = CourseService::create(
        &state.db,
        NewCourse {
            name: "Administração".to_string(),
            acronym: "ADM".to_string(),
            course_type: CourseType::Integrado,
            coordinator_id: None,
        },
    )
    .await
    .unwrap();
    let class = ClassService::create(
        &state.db,
        NewClass {
            semester: "S1".to_string(),
            course_id: Some(course.id),
        },
    )
    .await
    .unwrap();
    let course_class_id = class.courses[0].course_class_id;

    let professor = app(&state, claims("prof", AccessType::Professor));
    let coordinator = app(&state, claims("coord", AccessType::Coordinator));

    let (status, created) = send(
        &professor,
        Method::POST,
        "/change-requests",
        Some(json!({
            "courseClassId": course_class_id,
            "type": "reposicao",
            "quantity": 2,
            "date": "2025-05-10"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["validated"], 0);
    let uri = format!("/change-requests/{}/validation", created["id"].as_str().unwrap());

    let (status, _) = send(&professor, Method::PUT, &uri, Some(json!({"validated": 1}))).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, _) = send(&coordinator, Method::PUT, &uri, Some(json!({"validated": 3}))).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let (status, validated) = send(
        &coordinator,
        Method::PUT,
        &uri,
        Some(json!({"validated": 1, "observationCoordinator": "ok"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(validated["validated"], 1);

    let (status, _) = send(&coordinator, Method::PUT, &uri, Some(json!({"validated": 2}))).await;
    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_unregistered_caller_cannot_record_attendance() {
    let state = setup_state().await;
    let stranger = app(&state, claims("nobody", AccessType::Professor));

    let (status, _) = send(
        &stranger,
        Method::POST,
        "/attendances",
        Some(json!({
            "classScheduleDetailId": Uuid::new_v4(),
            "date": "2025-03-10",
            "status": "presenca"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_second_attendance_for_same_lesson_is_conflict() {
    let state = setup_state().await;
    let professor_id = register(&state, "prof", AccessType::Professor).await;

    let course = CourseService::create(
        &state.db,
        NewCourse {
            name: "Administração".to_string(),
            acronym: "ADM".to_string(),
            course_type: CourseType::Integrado,
            coordinator_id: None,
        },
    )
    .await
    .unwrap();
    let class = ClassService::create(
        &state.db,
        NewClass {
            semester: "S1".to_string(),
            course_id: Some(course.id),
        },
    )
    .await
    .unwrap()
    .class;
    let discipline = DisciplineService::create(
        &state.db,
        NewDiscipline {
            name: "Matemática".to_string(),
            acronym: "MAT".to_string(),
        },
    )
    .await
    .unwrap();
    CourseService::add_discipline(&state.db, course.id, discipline.id, 80)
        .await
        .unwrap();
    let hour = HourService::create(
        &state.db,
        NewHour {
            hour_start: chrono::NaiveTime::from_hms_opt(7, 30, 0).unwrap(),
            hour_end: chrono::NaiveTime::from_hms_opt(8, 20, 0).unwrap(),
        },
    )
    .await
    .unwrap();
    let calendar = CalendarService::create(
        &state.db,
        NewCalendar {
            calendar_type: "semestral".to_string(),
            year: 2025,
            period: 1,
            class_ids: vec![class.id],
            course_ids: vec![course.id],
        },
    )
    .await
    .unwrap()
    .calendar;
    let schedule = ScheduleService::create(
        &state.db,
        NewSchedule {
            calendar_id: calendar.id,
            class_id: class.id,
            course_id: course.id,
            discipline_id: discipline.id,
            professor_id: Some(professor_id),
            day_of_week: DayOfWeek::Monday,
            hour_id: hour.id,
        },
    )
    .await
    .unwrap();

    let professor = app(&state, claims("prof", AccessType::Professor));
    let record = json!({
        "classScheduleDetailId": schedule.details[0].id,
        "date": "2025-03-10",
        "status": "presença"
    });

    let (status, body) = send(&professor, Method::POST, "/attendances", Some(record.clone())).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["status"], "presenca");
    assert_eq!(body["registeredBy"], professor_id.to_string());

    let (status, body) = send(&professor, Method::POST, "/attendances", Some(record)).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert!(body["message"].as_str().unwrap().contains("already recorded"));

    let (status, timetable) = send(
        &professor,
        Method::GET,
        &format!("/users/{professor_id}/timetable?calendarId={}", calendar.id),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(timetable[0]["dayOfWeek"], "segunda");
}
