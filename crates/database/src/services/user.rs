use super::{fetch, remove};
use crate::entities::user;
use crate::error::{ServiceError, ServiceResult, on_duplicate};
use models::{AccessType, validation::required_text};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder,
};
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct NewUser {
    pub subject: String,
    pub name: String,
    pub email: String,
    pub access_type: AccessType,
}

#[derive(Debug, Clone)]
pub struct UpdateUser {
    pub name: String,
    pub email: String,
    pub access_type: AccessType,
}

pub struct UserService;

impl UserService {
    pub async fn list(
        db: &DatabaseConnection,
        access_type: Option<AccessType>,
    ) -> ServiceResult<Vec<user::Model>> {
        let mut query = user::Entity::find().order_by_asc(user::Column::Name);

        if let Some(access_type) = access_type {
            query = query.filter(user::Column::AccessType.eq(access_type));
        }

        Ok(query.all(db).await?)
    }

    pub async fn get(db: &DatabaseConnection, id: Uuid) -> ServiceResult<user::Model> {
        fetch::<user::Entity, _>(db, id, "user").await
    }

    /// Resolves the caller of a request from the token subject
    pub async fn find_by_subject(
        db: &DatabaseConnection,
        subject: &str,
    ) -> ServiceResult<Option<user::Model>> {
        Ok(user::Entity::find()
            .filter(user::Column::Subject.eq(subject))
            .one(db)
            .await?)
    }

    pub async fn create(db: &DatabaseConnection, input: NewUser) -> ServiceResult<user::Model> {
        let subject = required_text("subject", &input.subject, 255)?;
        let name = required_text("name", &input.name, 120)?;
        let email = Self::validate_email(&input.email)?;

        let model = user::ActiveModel {
            id: Set(Uuid::new_v4()),
            subject: Set(subject),
            name: Set(name),
            email: Set(email),
            access_type: Set(input.access_type),
            created_at: Set(chrono::Utc::now().naive_utc()),
        }
        .insert(db)
        .await
        .map_err(on_duplicate("a user with this subject or email already exists"))?;

        Ok(model)
    }

    pub async fn update(
        db: &DatabaseConnection,
        id: Uuid,
        input: UpdateUser,
    ) -> ServiceResult<user::Model> {
        let name = required_text("name", &input.name, 120)?;
        let email = Self::validate_email(&input.email)?;

        let mut active: user::ActiveModel = Self::get(db, id).await?.into();
        active.name = Set(name);
        active.email = Set(email);
        active.access_type = Set(input.access_type);

        Ok(active
            .update(db)
            .await
            .map_err(on_duplicate("a user with this email already exists"))?)
    }

    /// Timetable slots taught by the user keep existing with no professor
    pub async fn delete(db: &DatabaseConnection, id: Uuid) -> ServiceResult<()> {
        remove::<user::Entity, _>(db, id, "user").await
    }

    fn validate_email(raw: &str) -> ServiceResult<String> {
        let email = required_text("email", raw, 255)?.to_lowercase();

        match email.split_once('@') {
            Some((local, domain)) if !local.is_empty() && domain.contains('.') => Ok(email),
            _ => Err(ServiceError::Validation(models::ValidationError::invalid(
                "email", raw,
            ))),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::test_support::{schedule_fixture, setup_test_db, user};

    #[tokio::test]
    async fn test_duplicate_subject_is_conflict() {
        let db = setup_test_db().await;
        user(&db, "ana", AccessType::Professor).await;

        let err = UserService::create(
            &db,
            NewUser {
                subject: "ana".into(),
                name: "Ana Again".into(),
                email: "other@escola.edu.br".into(),
                access_type: AccessType::Professor,
            },
        )
        .await
        .unwrap_err();

        assert!(matches!(err, ServiceError::Conflict(_)));
    }

    #[tokio::test]
    async fn test_invalid_email_rejected() {
        let db = setup_test_db().await;

        let err = UserService::create(
            &db,
            NewUser {
                subject: "x".into(),
                name: "X".into(),
                email: "not-an-email".into(),
                access_type: AccessType::Admin,
            },
        )
        .await
        .unwrap_err();

        assert!(matches!(err, ServiceError::Validation(_)));
    }

    #[tokio::test]
    async fn test_deleting_professor_unsets_schedule() {
        let db = setup_test_db().await;
        let fixture = schedule_fixture(&db).await;

        UserService::delete(&db, fixture.professor.id).await.unwrap();

        let schedule = crate::services::schedule::ScheduleService::get(&db, fixture.schedule().id)
            .await
            .unwrap();
        assert_eq!(schedule.schedule.professor_id, None);
        assert_eq!(schedule.details[0].user_id, None);
    }

    #[tokio::test]
    async fn test_find_by_subject() {
        let db = setup_test_db().await;
        let created = user(&db, "bia", AccessType::Coordinator).await;

        let found = UserService::find_by_subject(&db, "bia").await.unwrap();
        assert_eq!(found.map(|u| u.id), Some(created.id));
        assert!(UserService::find_by_subject(&db, "nobody").await.unwrap().is_none());
    }
}
