use super::{calendar::CalendarService, course::CourseService, fetch, remove};
use crate::entities::{calendar, class_schedule, class_schedule_detail, course_class, hour, user};
use crate::error::{ServiceError, ServiceResult, on_duplicate};
use models::DayOfWeek;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, Condition, DatabaseConnection, EntityTrait,
    QueryFilter, TransactionTrait, sea_query::Expr,
};
use std::collections::HashMap;
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct NewSchedule {
    pub calendar_id: Uuid,
    pub class_id: Uuid,
    pub course_id: Uuid,
    pub discipline_id: Uuid,
    pub professor_id: Option<Uuid>,
    pub day_of_week: DayOfWeek,
    pub hour_id: Uuid,
}

/// Fields left empty fall back to the parent schedule
#[derive(Debug, Clone, Default)]
pub struct NewDetail {
    pub discipline_id: Option<Uuid>,
    pub user_id: Option<Uuid>,
    pub hour_id: Option<Uuid>,
    pub day_of_week: Option<DayOfWeek>,
}

#[derive(Debug, Clone, Default)]
pub struct ScheduleFilter {
    pub calendar_id: Option<Uuid>,
    pub class_id: Option<Uuid>,
    pub professor_id: Option<Uuid>,
}

#[derive(Debug, Clone)]
pub struct ScheduleWithDetails {
    pub schedule: class_schedule::Model,
    pub hour: hour::Model,
    pub details: Vec<class_schedule_detail::Model>,
}

/// One line of a teacher's weekly timetable
#[derive(Debug, Clone)]
pub struct TimetableEntry {
    pub detail: class_schedule_detail::Model,
    pub schedule: class_schedule::Model,
    pub hour: hour::Model,
}

pub struct ScheduleService;

impl ScheduleService {
    /// Creates a timetable slot and its first detail row
    pub async fn create(
        db: &DatabaseConnection,
        input: NewSchedule,
    ) -> ServiceResult<ScheduleWithDetails> {
        fetch::<calendar::Entity, _>(db, input.calendar_id, "calendar").await?;
        let hour = fetch::<hour::Entity, _>(db, input.hour_id, "hour").await?;
        if let Some(professor_id) = input.professor_id {
            fetch::<user::Entity, _>(db, professor_id, "professor").await?;
        }

        if !CalendarService::contains_class(db, input.calendar_id, input.class_id).await? {
            return Err(ServiceError::rule("class is not part of this calendar"));
        }

        let course_class = course_class::Entity::find()
            .filter(course_class::Column::CourseId.eq(input.course_id))
            .filter(course_class::Column::ClassId.eq(input.class_id))
            .one(db)
            .await?;
        match course_class {
            Some(link) if link.is_active => {}
            Some(_) => return Err(ServiceError::rule("class is archived for this course")),
            None => return Err(ServiceError::rule("class does not belong to this course")),
        }

        CourseService::find_link(db, input.course_id, input.discipline_id)
            .await
            .map_err(|err| match err {
                ServiceError::NotFound(_) => {
                    ServiceError::rule("discipline is not part of this course")
                }
                other => other,
            })?;

        let txn = db.begin().await?;

        let schedule = class_schedule::ActiveModel {
            id: Set(Uuid::new_v4()),
            calendar_id: Set(input.calendar_id),
            class_id: Set(input.class_id),
            course_id: Set(input.course_id),
            discipline_id: Set(input.discipline_id),
            professor_id: Set(input.professor_id),
            day_of_week: Set(input.day_of_week),
            hour_id: Set(input.hour_id),
        }
        .insert(&txn)
        .await
        .map_err(on_duplicate(
            "class already has a lesson at this hour on this day",
        ))?;

        let detail = class_schedule_detail::ActiveModel {
            id: Set(Uuid::new_v4()),
            class_schedule_id: Set(schedule.id),
            discipline_id: Set(schedule.discipline_id),
            user_id: Set(schedule.professor_id),
            hour_id: Set(schedule.hour_id),
            day_of_week: Set(schedule.day_of_week),
        }
        .insert(&txn)
        .await?;

        txn.commit().await?;

        Ok(ScheduleWithDetails {
            schedule,
            hour,
            details: vec![detail],
        })
    }

    pub async fn get(db: &DatabaseConnection, id: Uuid) -> ServiceResult<ScheduleWithDetails> {
        let schedule = fetch::<class_schedule::Entity, _>(db, id, "schedule").await?;
        let hour = fetch::<hour::Entity, _>(db, schedule.hour_id, "hour").await?;
        let details = class_schedule_detail::Entity::find()
            .filter(class_schedule_detail::Column::ClassScheduleId.eq(id))
            .all(db)
            .await?;

        Ok(ScheduleWithDetails {
            schedule,
            hour,
            details,
        })
    }

    /// Slots ordered by weekday, then by hour start
    pub async fn list(
        db: &DatabaseConnection,
        filter: ScheduleFilter,
    ) -> ServiceResult<Vec<ScheduleWithDetails>> {
        let mut condition = Condition::all();
        if let Some(calendar_id) = filter.calendar_id {
            condition = condition.add(class_schedule::Column::CalendarId.eq(calendar_id));
        }
        if let Some(class_id) = filter.class_id {
            condition = condition.add(class_schedule::Column::ClassId.eq(class_id));
        }
        if let Some(professor_id) = filter.professor_id {
            condition = condition.add(class_schedule::Column::ProfessorId.eq(professor_id));
        }

        let schedules = class_schedule::Entity::find()
            .filter(condition)
            .all(db)
            .await?;
        if schedules.is_empty() {
            return Ok(vec![]);
        }

        let schedule_ids: Vec<Uuid> = schedules.iter().map(|s| s.id).collect();
        let mut details_by_schedule: HashMap<Uuid, Vec<class_schedule_detail::Model>> =
            HashMap::new();
        for detail in class_schedule_detail::Entity::find()
            .filter(class_schedule_detail::Column::ClassScheduleId.is_in(schedule_ids))
            .all(db)
            .await?
        {
            details_by_schedule
                .entry(detail.class_schedule_id)
                .or_default()
                .push(detail);
        }

        let hours = Self::hours_by_id(db, schedules.iter().map(|s| s.hour_id)).await?;

        let mut result: Vec<ScheduleWithDetails> = schedules
            .into_iter()
            .filter_map(|schedule| {
                let hour = hours.get(&schedule.hour_id)?.clone();
                let details = details_by_schedule.remove(&schedule.id).unwrap_or_default();
                Some(ScheduleWithDetails {
                    schedule,
                    hour,
                    details,
                })
            })
            .collect();

        result.sort_by_key(|s| (s.schedule.day_of_week, s.hour.hour_start));
        Ok(result)
    }

    /// Reassigns the slot; details still taught by the previous professor
    /// follow the change
    pub async fn set_professor(
        db: &DatabaseConnection,
        id: Uuid,
        professor_id: Option<Uuid>,
    ) -> ServiceResult<ScheduleWithDetails> {
        let schedule = fetch::<class_schedule::Entity, _>(db, id, "schedule").await?;
        if let Some(professor_id) = professor_id {
            fetch::<user::Entity, _>(db, professor_id, "professor").await?;
        }
        let previous = schedule.professor_id;

        let txn = db.begin().await?;

        let mut active: class_schedule::ActiveModel = schedule.into();
        active.professor_id = Set(professor_id);
        active.update(&txn).await?;

        let previous_condition = match previous {
            Some(previous_id) => class_schedule_detail::Column::UserId.eq(previous_id),
            None => class_schedule_detail::Column::UserId.is_null(),
        };
        class_schedule_detail::Entity::update_many()
            .col_expr(class_schedule_detail::Column::UserId, Expr::value(professor_id))
            .filter(class_schedule_detail::Column::ClassScheduleId.eq(id))
            .filter(previous_condition)
            .exec(&txn)
            .await?;

        txn.commit().await?;
        Self::get(db, id).await
    }

    /// Drops the slot with its details and their attendance
    pub async fn delete(db: &DatabaseConnection, id: Uuid) -> ServiceResult<()> {
        remove::<class_schedule::Entity, _>(db, id, "schedule").await
    }

    pub async fn add_detail(
        db: &DatabaseConnection,
        schedule_id: Uuid,
        input: NewDetail,
    ) -> ServiceResult<class_schedule_detail::Model> {
        let schedule = fetch::<class_schedule::Entity, _>(db, schedule_id, "schedule").await?;

        if let Some(hour_id) = input.hour_id {
            fetch::<hour::Entity, _>(db, hour_id, "hour").await?;
        }
        if let Some(user_id) = input.user_id {
            fetch::<user::Entity, _>(db, user_id, "professor").await?;
        }
        if let Some(discipline_id) = input.discipline_id {
            CourseService::find_link(db, schedule.course_id, discipline_id)
                .await
                .map_err(|err| match err {
                    ServiceError::NotFound(_) => {
                        ServiceError::rule("discipline is not part of this course")
                    }
                    other => other,
                })?;
        }

        Ok(class_schedule_detail::ActiveModel {
            id: Set(Uuid::new_v4()),
            class_schedule_id: Set(schedule.id),
            discipline_id: Set(input.discipline_id.unwrap_or(schedule.discipline_id)),
            user_id: Set(input.user_id.or(schedule.professor_id)),
            hour_id: Set(input.hour_id.unwrap_or(schedule.hour_id)),
            day_of_week: Set(input.day_of_week.unwrap_or(schedule.day_of_week)),
        }
        .insert(db)
        .await?)
    }

    pub async fn get_detail(
        db: &DatabaseConnection,
        id: Uuid,
    ) -> ServiceResult<class_schedule_detail::Model> {
        fetch::<class_schedule_detail::Entity, _>(db, id, "schedule detail").await
    }

    pub async fn delete_detail(db: &DatabaseConnection, id: Uuid) -> ServiceResult<()> {
        remove::<class_schedule_detail::Entity, _>(db, id, "schedule detail").await
    }

    /// Every detail taught by `user_id`, optionally within one calendar
    pub async fn timetable(
        db: &DatabaseConnection,
        user_id: Uuid,
        calendar_id: Option<Uuid>,
    ) -> ServiceResult<Vec<TimetableEntry>> {
        fetch::<user::Entity, _>(db, user_id, "user").await?;

        let mut query = class_schedule_detail::Entity::find()
            .filter(class_schedule_detail::Column::UserId.eq(user_id))
            .find_also_related(class_schedule::Entity);
        if let Some(calendar_id) = calendar_id {
            query = query.filter(class_schedule::Column::CalendarId.eq(calendar_id));
        }

        let rows: Vec<(class_schedule_detail::Model, class_schedule::Model)> = query
            .all(db)
            .await?
            .into_iter()
            .filter_map(|(detail, schedule)| schedule.map(|s| (detail, s)))
            .collect();

        let hours = Self::hours_by_id(db, rows.iter().map(|(d, _)| d.hour_id)).await?;

        let mut entries: Vec<TimetableEntry> = rows
            .into_iter()
            .filter_map(|(detail, schedule)| {
                let hour = hours.get(&detail.hour_id)?.clone();
                Some(TimetableEntry {
                    detail,
                    schedule,
                    hour,
                })
            })
            .collect();

        entries.sort_by_key(|e| (e.detail.day_of_week, e.hour.hour_start));
        Ok(entries)
    }

    async fn hours_by_id(
        db: &DatabaseConnection,
        ids: impl Iterator<Item = Uuid>,
    ) -> ServiceResult<HashMap<Uuid, hour::Model>> {
        let mut ids: Vec<Uuid> = ids.collect();
        ids.sort();
        ids.dedup();
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        Ok(hour::Entity::find()
            .filter(hour::Column::Id.is_in(ids))
            .all(db)
            .await?
            .into_iter()
            .map(|h| (h.id, h))
            .collect())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::services::class::ClassService;
    use crate::test_support::{
        discipline, hour as make_hour, schedule_fixture, setup_test_db, user as make_user,
    };
    use models::AccessType;

    #[tokio::test]
    async fn test_create_copies_slot_into_detail() {
        let db = setup_test_db().await;
        let fixture = schedule_fixture(&db).await;

        let created = &fixture.schedule;
        assert_eq!(created.details.len(), 1);
        let detail = &created.details[0];
        assert_eq!(detail.user_id, Some(fixture.professor.id));
        assert_eq!(detail.discipline_id, fixture.discipline.id);
        assert_eq!(detail.day_of_week, DayOfWeek::Monday);
        assert_eq!(detail.hour_id, fixture.hour.id);
    }

    #[tokio::test]
    async fn test_slot_is_unique_per_class_day_and_hour() {
        let db = setup_test_db().await;
        let fixture = schedule_fixture(&db).await;

        let err = ScheduleService::create(
            &db,
            NewSchedule {
                calendar_id: fixture.calendar.id,
                class_id: fixture.class.id,
                course_id: fixture.course.id,
                discipline_id: fixture.discipline.id,
                professor_id: None,
                day_of_week: DayOfWeek::Monday,
                hour_id: fixture.hour.id,
            },
        )
        .await
        .unwrap_err();
        assert!(matches!(err, ServiceError::Conflict(_)));
    }

    #[tokio::test]
    async fn test_class_must_be_in_calendar_and_active() {
        let db = setup_test_db().await;
        let fixture = schedule_fixture(&db).await;
        let other_calendar = crate::test_support::calendar(&db, 2025, 2).await;

        let input = NewSchedule {
            calendar_id: other_calendar.id,
            class_id: fixture.class.id,
            course_id: fixture.course.id,
            discipline_id: fixture.discipline.id,
            professor_id: None,
            day_of_week: DayOfWeek::Tuesday,
            hour_id: fixture.hour.id,
        };
        let err = ScheduleService::create(&db, input.clone()).await.unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));

        ClassService::set_active(&db, fixture.class.id, fixture.course.id, false)
            .await
            .unwrap();
        let err = ScheduleService::create(
            &db,
            NewSchedule {
                calendar_id: fixture.calendar.id,
                ..input
            },
        )
        .await
        .unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
    }

    #[tokio::test]
    async fn test_discipline_must_belong_to_course() {
        let db = setup_test_db().await;
        let fixture = schedule_fixture(&db).await;
        let stray = discipline(&db, "FIS").await;

        let err = ScheduleService::create(
            &db,
            NewSchedule {
                calendar_id: fixture.calendar.id,
                class_id: fixture.class.id,
                course_id: fixture.course.id,
                discipline_id: stray.id,
                professor_id: None,
                day_of_week: DayOfWeek::Friday,
                hour_id: fixture.hour.id,
            },
        )
        .await
        .unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
    }

    #[tokio::test]
    async fn test_list_orders_by_day_then_hour() {
        let db = setup_test_db().await;
        let fixture = schedule_fixture(&db).await;
        let early = make_hour(&db, (7, 0), (7, 30)).await;

        for (day, hour_id) in [
            (DayOfWeek::Friday, fixture.hour.id),
            (DayOfWeek::Monday, early.id),
            (DayOfWeek::Wednesday, fixture.hour.id),
        ] {
            ScheduleService::create(
                &db,
                NewSchedule {
                    calendar_id: fixture.calendar.id,
                    class_id: fixture.class.id,
                    course_id: fixture.course.id,
                    discipline_id: fixture.discipline.id,
                    professor_id: None,
                    day_of_week: day,
                    hour_id,
                },
            )
            .await
            .unwrap();
        }

        let listed = ScheduleService::list(
            &db,
            ScheduleFilter {
                calendar_id: Some(fixture.calendar.id),
                ..Default::default()
            },
        )
        .await
        .unwrap();

        let order: Vec<(DayOfWeek, Uuid)> = listed
            .iter()
            .map(|s| (s.schedule.day_of_week, s.hour.id))
            .collect();
        assert_eq!(
            order,
            vec![
                (DayOfWeek::Monday, early.id),
                (DayOfWeek::Monday, fixture.hour.id),
                (DayOfWeek::Wednesday, fixture.hour.id),
                (DayOfWeek::Friday, fixture.hour.id),
            ]
        );
    }

    #[tokio::test]
    async fn test_set_professor_follows_into_details() {
        let db = setup_test_db().await;
        let fixture = schedule_fixture(&db).await;
        let substitute = make_user(&db, "sub", AccessType::Professor).await;
        let guest = make_user(&db, "guest", AccessType::Professor).await;

        // a second detail taught by someone else keeps its teacher
        ScheduleService::add_detail(
            &db,
            fixture.schedule().id,
            NewDetail {
                user_id: Some(guest.id),
                ..Default::default()
            },
        )
        .await
        .unwrap();

        let updated = ScheduleService::set_professor(&db, fixture.schedule().id, Some(substitute.id))
            .await
            .unwrap();
        assert_eq!(updated.schedule.professor_id, Some(substitute.id));

        let mut teachers: Vec<Option<Uuid>> = updated.details.iter().map(|d| d.user_id).collect();
        teachers.sort();
        let mut expected = vec![Some(substitute.id), Some(guest.id)];
        expected.sort();
        assert_eq!(teachers, expected);

        let timetable = ScheduleService::timetable(&db, substitute.id, Some(fixture.calendar.id))
            .await
            .unwrap();
        assert_eq!(timetable.len(), 1);
        assert!(
            ScheduleService::timetable(&db, fixture.professor.id, None)
                .await
                .unwrap()
                .is_empty()
        );
    }

    #[tokio::test]
    async fn test_deleting_schedule_removes_details() {
        let db = setup_test_db().await;
        let fixture = schedule_fixture(&db).await;

        ScheduleService::delete(&db, fixture.schedule().id).await.unwrap();
        assert!(matches!(
            ScheduleService::get_detail(&db, fixture.detail_id()).await,
            Err(ServiceError::NotFound(_))
        ));
    }
}
