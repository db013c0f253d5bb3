use super::{fetch, remove};
use crate::entities::{
    calendar, calendar_class, calendar_course, calendar_saturday, class, course, school_saturday,
};
use crate::error::{ServiceError, ServiceResult, on_duplicate};
use models::{CalendarPeriod, CalendarType};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, ModelTrait,
    PaginatorTrait, QueryFilter, QueryOrder, TransactionTrait,
};
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct NewCalendar {
    pub calendar_type: String,
    pub year: i32,
    pub period: i16,
    pub class_ids: Vec<Uuid>,
    pub course_ids: Vec<Uuid>,
}

#[derive(Debug, Clone)]
pub struct CalendarDetails {
    pub calendar: calendar::Model,
    pub classes: Vec<class::Model>,
    pub courses: Vec<course::Model>,
    pub saturdays: Vec<school_saturday::Model>,
}

pub struct CalendarService;

impl CalendarService {
    pub async fn list(
        db: &DatabaseConnection,
        year: Option<i32>,
        period: Option<i16>,
    ) -> ServiceResult<Vec<calendar::Model>> {
        let mut query = calendar::Entity::find()
            .order_by_desc(calendar::Column::Year)
            .order_by_desc(calendar::Column::Period)
            .order_by_asc(calendar::Column::CalendarType);

        if let Some(year) = year {
            query = query.filter(calendar::Column::Year.eq(year));
        }
        if let Some(period) = period {
            query = query.filter(calendar::Column::Period.eq(period));
        }

        Ok(query.all(db).await?)
    }

    pub async fn get(db: &DatabaseConnection, id: Uuid) -> ServiceResult<CalendarDetails> {
        let calendar = fetch::<calendar::Entity, _>(db, id, "calendar").await?;

        let classes = calendar
            .find_related(class::Entity)
            .order_by_asc(class::Column::Semester)
            .all(db)
            .await?;
        let courses = calendar
            .find_related(course::Entity)
            .order_by_asc(course::Column::Acronym)
            .all(db)
            .await?;
        let saturdays = calendar
            .find_related(school_saturday::Entity)
            .order_by_asc(school_saturday::Column::Date)
            .all(db)
            .await?;

        Ok(CalendarDetails {
            calendar,
            classes,
            courses,
            saturdays,
        })
    }

    pub async fn create(
        db: &DatabaseConnection,
        input: NewCalendar,
    ) -> ServiceResult<CalendarDetails> {
        let (calendar_type, period) = Self::validate(&input.calendar_type, input.year, input.period)?;

        for &class_id in &input.class_ids {
            fetch::<class::Entity, _>(db, class_id, "class").await?;
        }
        for &course_id in &input.course_ids {
            fetch::<course::Entity, _>(db, course_id, "course").await?;
        }

        let txn = db.begin().await?;

        let calendar = calendar::ActiveModel {
            id: Set(Uuid::new_v4()),
            calendar_type: Set(calendar_type.into_inner()),
            year: Set(period.year),
            period: Set(period.period),
        }
        .insert(&txn)
        .await
        .map_err(on_duplicate("a calendar of this type already exists for the period"))?;

        let mut class_ids = input.class_ids;
        class_ids.sort();
        class_ids.dedup();
        let class_links: Vec<calendar_class::ActiveModel> = class_ids
            .into_iter()
            .map(|class_id| calendar_class::ActiveModel {
                id: Set(Uuid::new_v4()),
                calendar_id: Set(calendar.id),
                class_id: Set(class_id),
            })
            .collect();
        if !class_links.is_empty() {
            calendar_class::Entity::insert_many(class_links)
                .exec(&txn)
                .await?;
        }

        let mut course_ids = input.course_ids;
        course_ids.sort();
        course_ids.dedup();
        let course_links: Vec<calendar_course::ActiveModel> = course_ids
            .into_iter()
            .map(|course_id| calendar_course::ActiveModel {
                id: Set(Uuid::new_v4()),
                calendar_id: Set(calendar.id),
                course_id: Set(course_id),
            })
            .collect();
        if !course_links.is_empty() {
            calendar_course::Entity::insert_many(course_links)
                .exec(&txn)
                .await?;
        }

        txn.commit().await?;
        log::info!(
            "Created calendar {} {}.{}",
            calendar.calendar_type,
            calendar.year,
            calendar.period
        );

        Self::get(db, calendar.id).await
    }

    pub async fn update(
        db: &DatabaseConnection,
        id: Uuid,
        calendar_type: &str,
        year: i32,
        period: i16,
    ) -> ServiceResult<calendar::Model> {
        let (calendar_type, period) = Self::validate(calendar_type, year, period)?;

        let mut active: calendar::ActiveModel = fetch::<calendar::Entity, _>(db, id, "calendar")
            .await?
            .into();
        active.calendar_type = Set(calendar_type.into_inner());
        active.year = Set(period.year);
        active.period = Set(period.period);

        Ok(active
            .update(db)
            .await
            .map_err(on_duplicate("a calendar of this type already exists for the period"))?)
    }

    /// Removes the calendar, its join rows and its timetable; the classes,
    /// courses and Saturdays it referenced are kept
    pub async fn delete(db: &DatabaseConnection, id: Uuid) -> ServiceResult<()> {
        remove::<calendar::Entity, _>(db, id, "calendar").await
    }

    pub async fn add_class(
        db: &DatabaseConnection,
        calendar_id: Uuid,
        class_id: Uuid,
    ) -> ServiceResult<calendar_class::Model> {
        fetch::<calendar::Entity, _>(db, calendar_id, "calendar").await?;
        fetch::<class::Entity, _>(db, class_id, "class").await?;

        Ok(calendar_class::ActiveModel {
            id: Set(Uuid::new_v4()),
            calendar_id: Set(calendar_id),
            class_id: Set(class_id),
        }
        .insert(db)
        .await
        .map_err(on_duplicate("class is already part of this calendar"))?)
    }

    pub async fn remove_class(
        db: &DatabaseConnection,
        calendar_id: Uuid,
        class_id: Uuid,
    ) -> ServiceResult<()> {
        let result = calendar_class::Entity::delete_many()
            .filter(calendar_class::Column::CalendarId.eq(calendar_id))
            .filter(calendar_class::Column::ClassId.eq(class_id))
            .exec(db)
            .await?;

        if result.rows_affected == 0 {
            return Err(ServiceError::NotFound("calendar class"));
        }
        Ok(())
    }

    pub async fn add_course(
        db: &DatabaseConnection,
        calendar_id: Uuid,
        course_id: Uuid,
    ) -> ServiceResult<calendar_course::Model> {
        fetch::<calendar::Entity, _>(db, calendar_id, "calendar").await?;
        fetch::<course::Entity, _>(db, course_id, "course").await?;

        Ok(calendar_course::ActiveModel {
            id: Set(Uuid::new_v4()),
            calendar_id: Set(calendar_id),
            course_id: Set(course_id),
        }
        .insert(db)
        .await
        .map_err(on_duplicate("course is already part of this calendar"))?)
    }

    pub async fn remove_course(
        db: &DatabaseConnection,
        calendar_id: Uuid,
        course_id: Uuid,
    ) -> ServiceResult<()> {
        let result = calendar_course::Entity::delete_many()
            .filter(calendar_course::Column::CalendarId.eq(calendar_id))
            .filter(calendar_course::Column::CourseId.eq(course_id))
            .exec(db)
            .await?;

        if result.rows_affected == 0 {
            return Err(ServiceError::NotFound("calendar course"));
        }
        Ok(())
    }

    pub async fn attach_saturday(
        db: &DatabaseConnection,
        calendar_id: Uuid,
        school_saturday_id: Uuid,
    ) -> ServiceResult<calendar_saturday::Model> {
        fetch::<calendar::Entity, _>(db, calendar_id, "calendar").await?;
        fetch::<school_saturday::Entity, _>(db, school_saturday_id, "school saturday").await?;

        Ok(calendar_saturday::ActiveModel {
            id: Set(Uuid::new_v4()),
            calendar_id: Set(calendar_id),
            school_saturday_id: Set(school_saturday_id),
        }
        .insert(db)
        .await
        .map_err(on_duplicate("Saturday is already part of this calendar"))?)
    }

    pub async fn detach_saturday(
        db: &DatabaseConnection,
        calendar_id: Uuid,
        school_saturday_id: Uuid,
    ) -> ServiceResult<()> {
        let result = calendar_saturday::Entity::delete_many()
            .filter(calendar_saturday::Column::CalendarId.eq(calendar_id))
            .filter(calendar_saturday::Column::SchoolSaturdayId.eq(school_saturday_id))
            .exec(db)
            .await?;

        if result.rows_affected == 0 {
            return Err(ServiceError::NotFound("calendar saturday"));
        }
        Ok(())
    }

    pub async fn contains_class(
        db: &DatabaseConnection,
        calendar_id: Uuid,
        class_id: Uuid,
    ) -> ServiceResult<bool> {
        let count = calendar_class::Entity::find()
            .filter(calendar_class::Column::CalendarId.eq(calendar_id))
            .filter(calendar_class::Column::ClassId.eq(class_id))
            .count(db)
            .await?;
        Ok(count > 0)
    }

    fn validate(
        calendar_type: &str,
        year: i32,
        period: i16,
    ) -> ServiceResult<(CalendarType, CalendarPeriod)> {
        Ok((
            CalendarType::parse(calendar_type)?,
            CalendarPeriod::new(year, period)?,
        ))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::services::school_saturday::{NewSchoolSaturday, SchoolSaturdayService};
    use crate::test_support::{calendar, class_in, course, setup_test_db};
    use chrono::NaiveDate;
    use models::DayOfWeek;

    #[tokio::test]
    async fn test_year_period_and_type_are_validated() {
        let db = setup_test_db().await;

        for (calendar_type, year, period) in
            [("semestral", 2019, 1), ("semestral", 2024, 3), ("x", 2024, 1)]
        {
            let err = CalendarService::create(
                &db,
                NewCalendar {
                    calendar_type: calendar_type.into(),
                    year,
                    period,
                    class_ids: vec![],
                    course_ids: vec![],
                },
            )
            .await
            .unwrap_err();
            assert!(matches!(err, ServiceError::Validation(_)));
        }
    }

    #[tokio::test]
    async fn test_create_with_associations() {
        let db = setup_test_db().await;
        let adm = course(&db, "ADM").await;
        let s1 = class_in(&db, adm.id, "S1").await;

        let details = CalendarService::create(
            &db,
            NewCalendar {
                calendar_type: "Semestral".into(),
                year: 2025,
                period: 1,
                class_ids: vec![s1.id, s1.id],
                course_ids: vec![adm.id],
            },
        )
        .await
        .unwrap();

        assert_eq!(details.calendar.calendar_type, "semestral");
        assert_eq!(details.classes.len(), 1);
        assert_eq!(details.courses.len(), 1);
        assert!(CalendarService::contains_class(&db, details.calendar.id, s1.id)
            .await
            .unwrap());

        let dup = CalendarService::create(
            &db,
            NewCalendar {
                calendar_type: "semestral".into(),
                year: 2025,
                period: 1,
                class_ids: vec![],
                course_ids: vec![],
            },
        )
        .await;
        assert!(matches!(dup, Err(ServiceError::Conflict(_))));
    }

    #[tokio::test]
    async fn test_delete_cascades_join_rows_only() {
        let db = setup_test_db().await;
        let adm = course(&db, "ADM").await;
        let s1 = class_in(&db, adm.id, "S1").await;
        let cal = calendar(&db, 2025, 2).await;
        let saturday = SchoolSaturdayService::create(
            &db,
            NewSchoolSaturday {
                date: NaiveDate::from_ymd_opt(2025, 8, 16).unwrap(),
                day_of_week: DayOfWeek::Monday,
            },
        )
        .await
        .unwrap();

        CalendarService::add_class(&db, cal.id, s1.id).await.unwrap();
        CalendarService::add_course(&db, cal.id, adm.id).await.unwrap();
        CalendarService::attach_saturday(&db, cal.id, saturday.id)
            .await
            .unwrap();

        CalendarService::delete(&db, cal.id).await.unwrap();

        assert_eq!(calendar_class::Entity::find().count(&db).await.unwrap(), 0);
        assert_eq!(calendar_course::Entity::find().count(&db).await.unwrap(), 0);
        assert_eq!(calendar_saturday::Entity::find().count(&db).await.unwrap(), 0);

        assert!(class::Entity::find_by_id(s1.id).one(&db).await.unwrap().is_some());
        assert!(course::Entity::find_by_id(adm.id).one(&db).await.unwrap().is_some());
        assert!(
            school_saturday::Entity::find_by_id(saturday.id)
                .one(&db)
                .await
                .unwrap()
                .is_some()
        );
    }

    #[tokio::test]
    async fn test_saturday_attached_once_per_calendar() {
        let db = setup_test_db().await;
        let cal = calendar(&db, 2025, 1).await;
        let saturday = SchoolSaturdayService::create(
            &db,
            NewSchoolSaturday {
                date: NaiveDate::from_ymd_opt(2025, 4, 5).unwrap(),
                day_of_week: DayOfWeek::Thursday,
            },
        )
        .await
        .unwrap();

        CalendarService::attach_saturday(&db, cal.id, saturday.id)
            .await
            .unwrap();
        let dup = CalendarService::attach_saturday(&db, cal.id, saturday.id).await;
        assert!(matches!(dup, Err(ServiceError::Conflict(_))));

        let listed = SchoolSaturdayService::list_for_calendar(&db, cal.id)
            .await
            .unwrap();
        assert_eq!(listed.len(), 1);

        CalendarService::detach_saturday(&db, cal.id, saturday.id)
            .await
            .unwrap();
        assert!(matches!(
            CalendarService::detach_saturday(&db, cal.id, saturday.id).await,
            Err(ServiceError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_list_filters_and_orders() {
        let db = setup_test_db().await;
        calendar(&db, 2024, 2).await;
        calendar(&db, 2025, 1).await;
        calendar(&db, 2025, 2).await;

        let all = CalendarService::list(&db, None, None).await.unwrap();
        let periods: Vec<(i32, i16)> = all.iter().map(|c| (c.year, c.period)).collect();
        assert_eq!(periods, vec![(2025, 2), (2025, 1), (2024, 2)]);

        assert_eq!(
            CalendarService::list(&db, Some(2025), None).await.unwrap().len(),
            2
        );
        assert_eq!(
            CalendarService::list(&db, Some(2025), Some(1))
                .await
                .unwrap()
                .len(),
            1
        );
    }
}
