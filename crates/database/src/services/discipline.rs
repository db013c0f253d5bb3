use super::{fetch, remove};
use crate::entities::discipline;
use crate::error::ServiceResult;
use models::validation::required_text;
use sea_orm::{ActiveModelTrait, ActiveValue::Set, DatabaseConnection, EntityTrait, QueryOrder};
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct NewDiscipline {
    pub name: String,
    pub acronym: String,
}

pub struct DisciplineService;

impl DisciplineService {
    pub async fn list(db: &DatabaseConnection) -> ServiceResult<Vec<discipline::Model>> {
        Ok(discipline::Entity::find()
            .order_by_asc(discipline::Column::Name)
            .all(db)
            .await?)
    }

    pub async fn get(db: &DatabaseConnection, id: Uuid) -> ServiceResult<discipline::Model> {
        fetch::<discipline::Entity, _>(db, id, "discipline").await
    }

    pub async fn create(
        db: &DatabaseConnection,
        input: NewDiscipline,
    ) -> ServiceResult<discipline::Model> {
        let (name, acronym) = Self::validate(&input)?;

        Ok(discipline::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(name),
            acronym: Set(acronym),
        }
        .insert(db)
        .await?)
    }

    pub async fn update(
        db: &DatabaseConnection,
        id: Uuid,
        input: NewDiscipline,
    ) -> ServiceResult<discipline::Model> {
        let (name, acronym) = Self::validate(&input)?;

        let mut active: discipline::ActiveModel = Self::get(db, id).await?.into();
        active.name = Set(name);
        active.acronym = Set(acronym);

        Ok(active.update(db).await?)
    }

    pub async fn delete(db: &DatabaseConnection, id: Uuid) -> ServiceResult<()> {
        remove::<discipline::Entity, _>(db, id, "discipline").await
    }

    fn validate(input: &NewDiscipline) -> ServiceResult<(String, String)> {
        let name = required_text("name", &input.name, 120)?;
        let acronym = required_text("acronym", &input.acronym, 20)?.to_uppercase();
        Ok((name, acronym))
    }
}
