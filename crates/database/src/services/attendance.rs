use super::{fetch, holiday::HolidayService, remove};
use crate::entities::{
    attendance, calendar_saturday, class_schedule, class_schedule_detail, school_saturday,
};
use crate::error::{ServiceError, ServiceResult, on_duplicate};
use chrono::{NaiveDate, Utc};
use models::{
    AttendanceStatus, DayOfWeek, ValidationError, days::is_saturday, validation::optional_text,
};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, Condition, DatabaseConnection, EntityTrait,
    JoinType, QueryFilter, QueryOrder, QuerySelect, RelationTrait,
};
use uuid::Uuid;

const JUSTIFICATION_MAX: usize = 500;

#[derive(Debug, Clone)]
pub struct NewAttendance {
    pub class_schedule_detail_id: Uuid,
    pub date: NaiveDate,
    pub status: AttendanceStatus,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub justification: Option<String>,
}

#[derive(Debug, Clone)]
pub struct UpdateAttendance {
    pub status: AttendanceStatus,
    pub justification: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct AttendanceFilter {
    pub class_schedule_detail_id: Option<Uuid>,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    pub status: Option<AttendanceStatus>,
}

pub struct AttendanceService;

impl AttendanceService {
    /// Records one lesson's attendance; the `(detail, date)` pair is unique
    pub async fn record(
        db: &DatabaseConnection,
        registered_by: Option<Uuid>,
        input: NewAttendance,
    ) -> ServiceResult<attendance::Model> {
        let justification = Self::validate_status(input.status, input.justification.as_deref())?;
        Self::validate_coordinates(input.latitude, input.longitude)?;

        let detail = fetch::<class_schedule_detail::Entity, _>(
            db,
            input.class_schedule_detail_id,
            "schedule detail",
        )
        .await?;
        let schedule =
            fetch::<class_schedule::Entity, _>(db, detail.class_schedule_id, "schedule").await?;

        Self::ensure_lesson_day(db, &detail, &schedule, input.date).await?;

        let now = Utc::now().naive_utc();
        let model = attendance::ActiveModel {
            id: Set(Uuid::new_v4()),
            class_schedule_detail_id: Set(detail.id),
            date: Set(input.date),
            status: Set(input.status),
            registered_by: Set(registered_by),
            latitude: Set(input.latitude),
            longitude: Set(input.longitude),
            justification: Set(justification),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(db)
        .await
        .map_err(on_duplicate(
            "attendance already recorded for this lesson on this date",
        ))?;

        log::debug!(
            "Recorded {} for detail {} on {}",
            model.status,
            model.class_schedule_detail_id,
            model.date
        );
        Ok(model)
    }

    pub async fn get(db: &DatabaseConnection, id: Uuid) -> ServiceResult<attendance::Model> {
        fetch::<attendance::Entity, _>(db, id, "attendance").await
    }

    pub async fn list(
        db: &DatabaseConnection,
        filter: AttendanceFilter,
    ) -> ServiceResult<Vec<attendance::Model>> {
        if let (Some(from), Some(to)) = (filter.from, filter.to) {
            if from > to {
                return Err(ServiceError::rule("date range start is after its end"));
            }
        }

        let mut condition = Condition::all();
        if let Some(detail_id) = filter.class_schedule_detail_id {
            condition = condition.add(attendance::Column::ClassScheduleDetailId.eq(detail_id));
        }
        if let Some(from) = filter.from {
            condition = condition.add(attendance::Column::Date.gte(from));
        }
        if let Some(to) = filter.to {
            condition = condition.add(attendance::Column::Date.lte(to));
        }
        if let Some(status) = filter.status {
            condition = condition.add(attendance::Column::Status.eq(status));
        }

        Ok(attendance::Entity::find()
            .filter(condition)
            .order_by_asc(attendance::Column::Date)
            .all(db)
            .await?)
    }

    /// Corrects the status of an existing record; date and lesson are fixed
    pub async fn update(
        db: &DatabaseConnection,
        id: Uuid,
        input: UpdateAttendance,
    ) -> ServiceResult<attendance::Model> {
        let justification = Self::validate_status(input.status, input.justification.as_deref())?;

        let mut active: attendance::ActiveModel = Self::get(db, id).await?.into();
        active.status = Set(input.status);
        active.justification = Set(justification);
        active.updated_at = Set(Utc::now().naive_utc());

        Ok(active.update(db).await?)
    }

    pub async fn delete(db: &DatabaseConnection, id: Uuid) -> ServiceResult<()> {
        remove::<attendance::Entity, _>(db, id, "attendance").await
    }

    fn validate_status(
        status: AttendanceStatus,
        justification: Option<&str>,
    ) -> ServiceResult<Option<String>> {
        let justification = optional_text("justification", justification, JUSTIFICATION_MAX)?;

        if status.requires_justification() && justification.is_none() {
            return Err(ValidationError::Required("justification").into());
        }
        Ok(justification)
    }

    fn validate_coordinates(latitude: Option<f64>, longitude: Option<f64>) -> ServiceResult<()> {
        if let Some(lat) = latitude {
            if !(-90.0..=90.0).contains(&lat) {
                return Err(ValidationError::invalid("latitude", lat).into());
            }
        }
        if let Some(lng) = longitude {
            if !(-180.0..=180.0).contains(&lng) {
                return Err(ValidationError::invalid("longitude", lng).into());
            }
        }
        Ok(())
    }

    /// A lesson happens on its own weekday, or on a school Saturday of the
    /// schedule's calendar that runs that weekday's timetable. Holidays never.
    async fn ensure_lesson_day(
        db: &DatabaseConnection,
        detail: &class_schedule_detail::Model,
        schedule: &class_schedule::Model,
        date: NaiveDate,
    ) -> ServiceResult<()> {
        if let Some(holiday) = HolidayService::on_date(db, date).await? {
            return Err(ServiceError::rule(format!(
                "{date} is a holiday ({})",
                holiday.name
            )));
        }

        if is_saturday(date) {
            let saturday = school_saturday::Entity::find()
                .join(
                    JoinType::InnerJoin,
                    school_saturday::Relation::CalendarSaturdays.def(),
                )
                .filter(school_saturday::Column::Date.eq(date))
                .filter(calendar_saturday::Column::CalendarId.eq(schedule.calendar_id))
                .one(db)
                .await?;

            return match saturday {
                Some(saturday) if saturday.day_of_week == detail.day_of_week => Ok(()),
                Some(saturday) => Err(ServiceError::rule(format!(
                    "school Saturday {date} follows the {} timetable, not {}",
                    saturday.day_of_week, detail.day_of_week
                ))),
                None => Err(ServiceError::rule(format!(
                    "{date} is not a school Saturday of this calendar"
                ))),
            };
        }

        match DayOfWeek::of_date(date) {
            Some(day) if day == detail.day_of_week => Ok(()),
            Some(day) => Err(ServiceError::rule(format!(
                "lesson is on {}, but {date} is a {day}",
                detail.day_of_week
            ))),
            None => Err(ServiceError::rule(format!("{date} is not a school day"))),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::services::{
        calendar::CalendarService,
        holiday::NewHoliday,
        school_saturday::{NewSchoolSaturday, SchoolSaturdayService},
    };
    use crate::test_support::{ScheduleFixture, schedule_fixture, setup_test_db};
    use models::HolidayType;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    // 2025-03-10 is a Monday
    fn present(fixture: &ScheduleFixture, date: NaiveDate) -> NewAttendance {
        NewAttendance {
            class_schedule_detail_id: fixture.detail_id(),
            date,
            status: AttendanceStatus::Present,
            latitude: Some(-23.55),
            longitude: Some(-46.63),
            justification: None,
        }
    }

    #[tokio::test]
    async fn test_record_once_per_lesson_and_date() {
        let db = setup_test_db().await;
        let fixture = schedule_fixture(&db).await;

        let first = AttendanceService::record(
            &db,
            Some(fixture.professor.id),
            present(&fixture, d(2025, 3, 10)),
        )
        .await
        .unwrap();
        assert_eq!(first.registered_by, Some(fixture.professor.id));

        let err = AttendanceService::record(&db, None, present(&fixture, d(2025, 3, 10)))
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::Conflict(_)));

        // the next Monday is a different lesson
        AttendanceService::record(&db, None, present(&fixture, d(2025, 3, 17)))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_rejects_wrong_weekday_and_sunday() {
        let db = setup_test_db().await;
        let fixture = schedule_fixture(&db).await;

        for date in [d(2025, 3, 11), d(2025, 3, 16)] {
            let err = AttendanceService::record(&db, None, present(&fixture, date))
                .await
                .unwrap_err();
            assert!(matches!(err, ServiceError::Validation(_)), "{date}");
        }
    }

    #[tokio::test]
    async fn test_rejects_holiday() {
        let db = setup_test_db().await;
        let fixture = schedule_fixture(&db).await;
        HolidayService::create(
            &db,
            NewHoliday {
                name: "Tiradentes".to_string(),
                date: d(2025, 4, 21),
                holiday_type: HolidayType::Nacional,
            },
        )
        .await
        .unwrap();

        let err = AttendanceService::record(&db, None, present(&fixture, d(2025, 4, 21)))
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
    }

    #[tokio::test]
    async fn test_school_saturday_follows_weekday() {
        let db = setup_test_db().await;
        let fixture = schedule_fixture(&db).await;

        let monday_saturday = SchoolSaturdayService::create(
            &db,
            NewSchoolSaturday {
                date: d(2025, 3, 15),
                day_of_week: DayOfWeek::Monday,
            },
        )
        .await
        .unwrap();
        let friday_saturday = SchoolSaturdayService::create(
            &db,
            NewSchoolSaturday {
                date: d(2025, 3, 22),
                day_of_week: DayOfWeek::Friday,
            },
        )
        .await
        .unwrap();

        // not yet part of the calendar
        assert!(
            AttendanceService::record(&db, None, present(&fixture, d(2025, 3, 15)))
                .await
                .is_err()
        );

        for saturday in [&monday_saturday, &friday_saturday] {
            CalendarService::attach_saturday(&db, fixture.calendar.id, saturday.id)
                .await
                .unwrap();
        }

        AttendanceService::record(&db, None, present(&fixture, d(2025, 3, 15)))
            .await
            .unwrap();
        let err = AttendanceService::record(&db, None, present(&fixture, d(2025, 3, 22)))
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
    }

    #[tokio::test]
    async fn test_excused_requires_justification() {
        let db = setup_test_db().await;
        let fixture = schedule_fixture(&db).await;

        let mut input = present(&fixture, d(2025, 3, 10));
        input.status = AttendanceStatus::Excused;
        input.justification = Some("   ".to_string());
        let err = AttendanceService::record(&db, None, input.clone())
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            ServiceError::Validation(ValidationError::Required("justification"))
        ));

        input.justification = Some("atestado médico".to_string());
        let recorded = AttendanceService::record(&db, None, input).await.unwrap();
        assert_eq!(recorded.justification.as_deref(), Some("atestado médico"));
    }

    #[tokio::test]
    async fn test_rejects_out_of_range_coordinates() {
        let db = setup_test_db().await;
        let fixture = schedule_fixture(&db).await;

        let mut input = present(&fixture, d(2025, 3, 10));
        input.latitude = Some(91.0);
        assert!(AttendanceService::record(&db, None, input.clone()).await.is_err());

        input.latitude = None;
        input.longitude = Some(-180.5);
        assert!(AttendanceService::record(&db, None, input).await.is_err());
    }

    #[tokio::test]
    async fn test_update_and_list_by_range() {
        let db = setup_test_db().await;
        let fixture = schedule_fixture(&db).await;

        let mut ids = vec![];
        for day in [3, 10, 17] {
            let record = AttendanceService::record(&db, None, present(&fixture, d(2025, 3, day)))
                .await
                .unwrap();
            ids.push(record.id);
        }

        let updated = AttendanceService::update(
            &db,
            ids[1],
            UpdateAttendance {
                status: AttendanceStatus::Absent,
                justification: None,
            },
        )
        .await
        .unwrap();
        assert_eq!(updated.status, AttendanceStatus::Absent);

        let in_range = AttendanceService::list(
            &db,
            AttendanceFilter {
                class_schedule_detail_id: Some(fixture.detail_id()),
                from: Some(d(2025, 3, 5)),
                to: Some(d(2025, 3, 31)),
                status: None,
            },
        )
        .await
        .unwrap();
        assert_eq!(
            in_range.iter().map(|a| a.date).collect::<Vec<_>>(),
            vec![d(2025, 3, 10), d(2025, 3, 17)]
        );

        let absences = AttendanceService::list(
            &db,
            AttendanceFilter {
                status: Some(AttendanceStatus::Absent),
                ..Default::default()
            },
        )
        .await
        .unwrap();
        assert_eq!(absences.len(), 1);

        AttendanceService::delete(&db, ids[0]).await.unwrap();
        assert!(matches!(
            AttendanceService::get(&db, ids[0]).await,
            Err(ServiceError::NotFound(_))
        ));
    }
}
