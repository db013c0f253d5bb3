use super::{fetch, remove};
use crate::entities::{calendar, school_saturday};
use crate::error::{ServiceError, ServiceResult, on_duplicate};
use chrono::NaiveDate;
use models::{DayOfWeek, days::is_saturday};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, DatabaseConnection, EntityTrait, ModelTrait, QueryOrder,
};
use uuid::Uuid;

#[derive(Debug, Clone, Copy)]
pub struct NewSchoolSaturday {
    pub date: NaiveDate,
    /// Weekday whose timetable runs on this Saturday
    pub day_of_week: DayOfWeek,
}

pub struct SchoolSaturdayService;

impl SchoolSaturdayService {
    pub async fn list(db: &DatabaseConnection) -> ServiceResult<Vec<school_saturday::Model>> {
        Ok(school_saturday::Entity::find()
            .order_by_asc(school_saturday::Column::Date)
            .all(db)
            .await?)
    }

    pub async fn list_for_calendar(
        db: &DatabaseConnection,
        calendar_id: Uuid,
    ) -> ServiceResult<Vec<school_saturday::Model>> {
        let calendar = fetch::<calendar::Entity, _>(db, calendar_id, "calendar").await?;

        Ok(calendar
            .find_related(school_saturday::Entity)
            .order_by_asc(school_saturday::Column::Date)
            .all(db)
            .await?)
    }

    pub async fn create(
        db: &DatabaseConnection,
        input: NewSchoolSaturday,
    ) -> ServiceResult<school_saturday::Model> {
        if !is_saturday(input.date) {
            return Err(ServiceError::rule(format!(
                "{} is not a Saturday",
                input.date
            )));
        }

        Ok(school_saturday::ActiveModel {
            id: Set(Uuid::new_v4()),
            day_of_week: Set(input.day_of_week),
            date: Set(input.date),
        }
        .insert(db)
        .await
        .map_err(on_duplicate("this Saturday is already registered"))?)
    }

    /// Calendars lose the Saturday as well
    pub async fn delete(db: &DatabaseConnection, id: Uuid) -> ServiceResult<()> {
        remove::<school_saturday::Entity, _>(db, id, "school saturday").await
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::test_support::setup_test_db;

    #[tokio::test]
    async fn test_only_saturdays_accepted() {
        let db = setup_test_db().await;

        let friday = NaiveDate::from_ymd_opt(2025, 3, 14).unwrap();
        let err = SchoolSaturdayService::create(
            &db,
            NewSchoolSaturday {
                date: friday,
                day_of_week: DayOfWeek::Friday,
            },
        )
        .await
        .unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));

        let saturday = NaiveDate::from_ymd_opt(2025, 3, 15).unwrap();
        let created = SchoolSaturdayService::create(
            &db,
            NewSchoolSaturday {
                date: saturday,
                day_of_week: DayOfWeek::Wednesday,
            },
        )
        .await
        .unwrap();
        assert_eq!(created.day_of_week, DayOfWeek::Wednesday);

        let dup = SchoolSaturdayService::create(
            &db,
            NewSchoolSaturday {
                date: saturday,
                day_of_week: DayOfWeek::Monday,
            },
        )
        .await;
        assert!(matches!(dup, Err(ServiceError::Conflict(_))));
    }
}
