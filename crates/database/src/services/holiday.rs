use super::{fetch, remove};
use crate::entities::holiday;
use crate::error::ServiceResult;
use chrono::NaiveDate;
use models::{HolidayType, ValidationError, validation::required_text};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, ConnectionTrait, DatabaseConnection,
    EntityTrait, QueryFilter, QueryOrder,
};
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct NewHoliday {
    pub name: String,
    pub date: NaiveDate,
    pub holiday_type: HolidayType,
}

pub struct HolidayService;

impl HolidayService {
    pub async fn list(
        db: &DatabaseConnection,
        year: Option<i32>,
    ) -> ServiceResult<Vec<holiday::Model>> {
        let mut query = holiday::Entity::find().order_by_asc(holiday::Column::Date);

        if let Some(year) = year {
            let first = NaiveDate::from_ymd_opt(year, 1, 1)
                .ok_or_else(|| ValidationError::invalid("year", year))?;
            let last = NaiveDate::from_ymd_opt(year, 12, 31)
                .ok_or_else(|| ValidationError::invalid("year", year))?;
            query = query.filter(holiday::Column::Date.between(first, last));
        }

        Ok(query.all(db).await?)
    }

    pub async fn get(db: &DatabaseConnection, id: Uuid) -> ServiceResult<holiday::Model> {
        fetch::<holiday::Entity, _>(db, id, "holiday").await
    }

    pub async fn create(db: &DatabaseConnection, input: NewHoliday) -> ServiceResult<holiday::Model> {
        let name = required_text("name", &input.name, 120)?;

        Ok(holiday::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(name),
            date: Set(input.date),
            holiday_type: Set(input.holiday_type),
        }
        .insert(db)
        .await?)
    }

    pub async fn update(
        db: &DatabaseConnection,
        id: Uuid,
        input: NewHoliday,
    ) -> ServiceResult<holiday::Model> {
        let name = required_text("name", &input.name, 120)?;

        let mut active: holiday::ActiveModel = Self::get(db, id).await?.into();
        active.name = Set(name);
        active.date = Set(input.date);
        active.holiday_type = Set(input.holiday_type);

        Ok(active.update(db).await?)
    }

    pub async fn delete(db: &DatabaseConnection, id: Uuid) -> ServiceResult<()> {
        remove::<holiday::Entity, _>(db, id, "holiday").await
    }

    /// The holiday falling on `date`, if any
    pub async fn on_date<C: ConnectionTrait>(
        db: &C,
        date: NaiveDate,
    ) -> ServiceResult<Option<holiday::Model>> {
        Ok(holiday::Entity::find()
            .filter(holiday::Column::Date.eq(date))
            .one(db)
            .await?)
    }

    pub async fn is_holiday<C: ConnectionTrait>(db: &C, date: NaiveDate) -> ServiceResult<bool> {
        Ok(Self::on_date(db, date).await?.is_some())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::test_support::setup_test_db;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[tokio::test]
    async fn test_list_by_year_and_lookup() {
        let db = setup_test_db().await;
        for (name, date) in [
            ("Tiradentes", d(2025, 4, 21)),
            ("Independência", d(2025, 9, 7)),
            ("Tiradentes", d(2026, 4, 21)),
        ] {
            HolidayService::create(
                &db,
                NewHoliday {
                    name: name.into(),
                    date,
                    holiday_type: HolidayType::Nacional,
                },
            )
            .await
            .unwrap();
        }

        let in_2025 = HolidayService::list(&db, Some(2025)).await.unwrap();
        assert_eq!(in_2025.len(), 2);
        assert_eq!(in_2025[0].name, "Tiradentes");
        assert_eq!(HolidayService::list(&db, None).await.unwrap().len(), 3);

        let found = HolidayService::on_date(&db, d(2025, 9, 7)).await.unwrap();
        assert_eq!(found.map(|h| h.name), Some("Independência".to_string()));
        assert!(HolidayService::on_date(&db, d(2025, 9, 8)).await.unwrap().is_none());
        assert!(HolidayService::is_holiday(&db, d(2026, 4, 21)).await.unwrap());
    }
}
