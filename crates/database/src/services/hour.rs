use super::{fetch, remove};
use crate::entities::hour;
use crate::error::ServiceResult;
use chrono::NaiveTime;
use models::HourRange;
use sea_orm::{ActiveModelTrait, ActiveValue::Set, DatabaseConnection, EntityTrait, QueryOrder};
use uuid::Uuid;

#[derive(Debug, Clone, Copy)]
pub struct NewHour {
    pub hour_start: NaiveTime,
    pub hour_end: NaiveTime,
}

pub struct HourService;

impl HourService {
    pub async fn list(db: &DatabaseConnection) -> ServiceResult<Vec<hour::Model>> {
        Ok(hour::Entity::find()
            .order_by_asc(hour::Column::HourStart)
            .all(db)
            .await?)
    }

    pub async fn get(db: &DatabaseConnection, id: Uuid) -> ServiceResult<hour::Model> {
        fetch::<hour::Entity, _>(db, id, "hour").await
    }

    pub async fn create(db: &DatabaseConnection, input: NewHour) -> ServiceResult<hour::Model> {
        let range = HourRange::new(input.hour_start, input.hour_end)?;

        Ok(hour::ActiveModel {
            id: Set(Uuid::new_v4()),
            hour_start: Set(range.start()),
            hour_end: Set(range.end()),
        }
        .insert(db)
        .await?)
    }

    pub async fn update(
        db: &DatabaseConnection,
        id: Uuid,
        input: NewHour,
    ) -> ServiceResult<hour::Model> {
        let range = HourRange::new(input.hour_start, input.hour_end)?;

        let mut active: hour::ActiveModel = Self::get(db, id).await?.into();
        active.hour_start = Set(range.start());
        active.hour_end = Set(range.end());

        Ok(active.update(db).await?)
    }

    /// Fails with a conflict while a timetable slot still uses the hour
    pub async fn delete(db: &DatabaseConnection, id: Uuid) -> ServiceResult<()> {
        remove::<hour::Entity, _>(db, id, "hour").await
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::error::ServiceError;
    use crate::test_support::{schedule_fixture, setup_test_db};

    fn t(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[tokio::test]
    async fn test_end_before_start_is_rejected() {
        let db = setup_test_db().await;

        for (start, end) in [(t(9, 0), t(8, 0)), (t(8, 0), t(8, 0))] {
            let err = HourService::create(
                &db,
                NewHour {
                    hour_start: start,
                    hour_end: end,
                },
            )
            .await
            .unwrap_err();
            assert!(matches!(err, ServiceError::Validation(_)));
        }

        assert!(HourService::list(&db).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_list_is_ordered_by_start() {
        let db = setup_test_db().await;
        for (start, end) in [((9, 10), (10, 0)), ((7, 30), (8, 20)), ((8, 20), (9, 10))] {
            HourService::create(
                &db,
                NewHour {
                    hour_start: t(start.0, start.1),
                    hour_end: t(end.0, end.1),
                },
            )
            .await
            .unwrap();
        }

        let starts: Vec<NaiveTime> = HourService::list(&db)
            .await
            .unwrap()
            .into_iter()
            .map(|h| h.hour_start)
            .collect();
        assert_eq!(starts, vec![t(7, 30), t(8, 20), t(9, 10)]);
    }

    #[tokio::test]
    async fn test_update_revalidates_range() {
        let db = setup_test_db().await;
        let hour = HourService::create(
            &db,
            NewHour {
                hour_start: t(7, 30),
                hour_end: t(8, 20),
            },
        )
        .await
        .unwrap();

        let err = HourService::update(
            &db,
            hour.id,
            NewHour {
                hour_start: t(8, 20),
                hour_end: t(7, 30),
            },
        )
        .await
        .unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
        assert_eq!(HourService::get(&db, hour.id).await.unwrap().hour_end, t(8, 20));
    }

    #[tokio::test]
    async fn test_hour_in_use_cannot_be_deleted() {
        let db = setup_test_db().await;
        let fixture = schedule_fixture(&db).await;

        let err = HourService::delete(&db, fixture.hour.id).await.unwrap_err();
        assert!(matches!(err, ServiceError::Conflict(_)));
        assert!(HourService::get(&db, fixture.hour.id).await.is_ok());
    }
}
