use super::{course::CourseService, fetch, remove};
use crate::entities::{class_change_request, course_class, user};
use crate::error::{ServiceError, ServiceResult};
use chrono::{NaiveDate, Utc};
use models::{ChangeType, ValidationError, ValidationStatus, validation::optional_text};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, Condition, DatabaseConnection, EntityTrait,
    QueryFilter, QueryOrder, sea_query::Expr,
};
use uuid::Uuid;

const NOTE_MAX: usize = 1000;
const ANNEX_MAX: usize = 500;

#[derive(Debug, Clone)]
pub struct NewChangeRequest {
    pub course_class_id: Uuid,
    pub discipline_id: Option<Uuid>,
    pub change_type: ChangeType,
    pub quantity: i32,
    pub date: NaiveDate,
    pub annex: Option<String>,
    pub observation: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct ChangeRequestFilter {
    pub user_id: Option<Uuid>,
    pub validated: Option<ValidationStatus>,
    pub change_type: Option<ChangeType>,
}

pub struct ChangeRequestService;

impl ChangeRequestService {
    /// Opens a pending request on behalf of `user_id`
    pub async fn create(
        db: &DatabaseConnection,
        user_id: Uuid,
        input: NewChangeRequest,
    ) -> ServiceResult<class_change_request::Model> {
        if input.quantity < 1 {
            return Err(ServiceError::rule("quantity must be at least 1"));
        }
        let annex = optional_text("annex", input.annex.as_deref(), ANNEX_MAX)?;
        let observation = optional_text("observation", input.observation.as_deref(), NOTE_MAX)?;

        fetch::<user::Entity, _>(db, user_id, "user").await?;
        let link =
            fetch::<course_class::Entity, _>(db, input.course_class_id, "course class").await?;
        if !link.is_active {
            return Err(ServiceError::rule("class is archived for this course"));
        }
        if let Some(discipline_id) = input.discipline_id {
            CourseService::find_link(db, link.course_id, discipline_id)
                .await
                .map_err(|err| match err {
                    ServiceError::NotFound(_) => {
                        ServiceError::rule("discipline is not part of this course")
                    }
                    other => other,
                })?;
        }

        let model = class_change_request::ActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(user_id),
            course_class_id: Set(link.id),
            discipline_id: Set(input.discipline_id),
            change_type: Set(input.change_type),
            quantity: Set(input.quantity),
            date: Set(input.date),
            annex: Set(annex),
            observation: Set(observation),
            validated: Set(ValidationStatus::Pending),
            observation_coordinator: Set(None),
            created_at: Set(Utc::now().naive_utc()),
        }
        .insert(db)
        .await?;

        log::info!(
            "Change request {} ({}) opened by {}",
            model.id,
            model.change_type,
            user_id
        );
        Ok(model)
    }

    /// Newest first
    pub async fn list(
        db: &DatabaseConnection,
        filter: ChangeRequestFilter,
    ) -> ServiceResult<Vec<class_change_request::Model>> {
        let mut condition = Condition::all();
        if let Some(user_id) = filter.user_id {
            condition = condition.add(class_change_request::Column::UserId.eq(user_id));
        }
        if let Some(validated) = filter.validated {
            condition = condition.add(class_change_request::Column::Validated.eq(validated));
        }
        if let Some(change_type) = filter.change_type {
            condition = condition.add(class_change_request::Column::ChangeType.eq(change_type));
        }

        Ok(class_change_request::Entity::find()
            .filter(condition)
            .order_by_desc(class_change_request::Column::CreatedAt)
            .all(db)
            .await?)
    }

    pub async fn get(
        db: &DatabaseConnection,
        id: Uuid,
    ) -> ServiceResult<class_change_request::Model> {
        fetch::<class_change_request::Entity, _>(db, id, "change request").await
    }

    /// Approves or rejects a pending request.
    ///
    /// The write only matches rows still pending, so of two concurrent
    /// validations exactly one wins and the other sees a conflict.
    pub async fn validate(
        db: &DatabaseConnection,
        id: Uuid,
        decision: ValidationStatus,
        observation_coordinator: Option<String>,
    ) -> ServiceResult<class_change_request::Model> {
        if !ValidationStatus::Pending.can_transition_to(decision) {
            return Err(ValidationError::invalid("validated", i16::from(decision)).into());
        }
        let note = optional_text(
            "observation_coordinator",
            observation_coordinator.as_deref(),
            NOTE_MAX,
        )?;

        let result = class_change_request::Entity::update_many()
            .col_expr(class_change_request::Column::Validated, Expr::value(decision))
            .col_expr(
                class_change_request::Column::ObservationCoordinator,
                Expr::value(note),
            )
            .filter(class_change_request::Column::Id.eq(id))
            .filter(class_change_request::Column::Validated.eq(ValidationStatus::Pending))
            .exec(db)
            .await?;

        let current = Self::get(db, id).await?;
        if result.rows_affected == 0 {
            return Err(ServiceError::conflict(format!(
                "change request was already {}",
                if current.validated == ValidationStatus::Approved {
                    "approved"
                } else {
                    "rejected"
                }
            )));
        }

        log::info!(
            "Change request {id} {}",
            if decision == ValidationStatus::Approved {
                "approved"
            } else {
                "rejected"
            }
        );
        Ok(current)
    }

    /// Withdraws a request; only its author may, and only while pending
    pub async fn delete(db: &DatabaseConnection, id: Uuid, user_id: Uuid) -> ServiceResult<()> {
        let request = Self::get(db, id).await?;

        if request.user_id != user_id {
            return Err(ServiceError::Forbidden(
                "only the author can withdraw a change request".to_string(),
            ));
        }
        if request.validated.is_final() {
            return Err(ServiceError::conflict(
                "change request has already been validated",
            ));
        }

        remove::<class_change_request::Entity, _>(db, id, "change request").await
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::services::class::ClassService;
    use crate::test_support::{schedule_fixture, setup_test_db, user as make_user};
    use models::AccessType;

    struct Setup {
        db: DatabaseConnection,
        author: Uuid,
        course_class_id: Uuid,
        discipline_id: Uuid,
    }

    async fn setup() -> Setup {
        let db = setup_test_db().await;
        let fixture = schedule_fixture(&db).await;
        let course_class_id = ClassService::get(&db, fixture.class.id)
            .await
            .unwrap()
            .courses[0]
            .course_class_id;

        Setup {
            author: fixture.professor.id,
            discipline_id: fixture.discipline.id,
            course_class_id,
            db,
        }
    }

    fn request(setup: &Setup) -> NewChangeRequest {
        NewChangeRequest {
            course_class_id: setup.course_class_id,
            discipline_id: Some(setup.discipline_id),
            change_type: ChangeType::MakeUp,
            quantity: 2,
            date: NaiveDate::from_ymd_opt(2025, 5, 10).unwrap(),
            annex: None,
            observation: Some("reposição da greve".to_string()),
        }
    }

    #[tokio::test]
    async fn test_create_starts_pending() {
        let s = setup().await;
        let created = ChangeRequestService::create(&s.db, s.author, request(&s))
            .await
            .unwrap();
        assert_eq!(created.validated, ValidationStatus::Pending);
        assert_eq!(created.observation_coordinator, None);
    }

    #[tokio::test]
    async fn test_create_rejects_zero_quantity_and_archived_class() {
        let s = setup().await;

        let mut input = request(&s);
        input.quantity = 0;
        assert!(matches!(
            ChangeRequestService::create(&s.db, s.author, input).await,
            Err(ServiceError::Validation(_))
        ));

        let link = course_class::Entity::find_by_id(s.course_class_id)
            .one(&s.db)
            .await
            .unwrap()
            .unwrap();
        ClassService::set_active(&s.db, link.class_id, link.course_id, false)
            .await
            .unwrap();
        assert!(matches!(
            ChangeRequestService::create(&s.db, s.author, request(&s)).await,
            Err(ServiceError::Validation(_))
        ));
    }

    #[tokio::test]
    async fn test_validation_happens_once() {
        let s = setup().await;
        let created = ChangeRequestService::create(&s.db, s.author, request(&s))
            .await
            .unwrap();

        let approved = ChangeRequestService::validate(
            &s.db,
            created.id,
            ValidationStatus::Approved,
            Some("ok".to_string()),
        )
        .await
        .unwrap();
        assert_eq!(approved.validated, ValidationStatus::Approved);
        assert_eq!(approved.observation_coordinator.as_deref(), Some("ok"));

        let err = ChangeRequestService::validate(&s.db, created.id, ValidationStatus::Rejected, None)
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::Conflict(_)));

        let stored = ChangeRequestService::get(&s.db, created.id).await.unwrap();
        assert_eq!(stored.validated, ValidationStatus::Approved);
    }

    #[tokio::test]
    async fn test_validate_rejects_pending_target_and_unknown_id() {
        let s = setup().await;
        let created = ChangeRequestService::create(&s.db, s.author, request(&s))
            .await
            .unwrap();

        assert!(matches!(
            ChangeRequestService::validate(&s.db, created.id, ValidationStatus::Pending, None).await,
            Err(ServiceError::Validation(_))
        ));
        assert!(matches!(
            ChangeRequestService::validate(&s.db, Uuid::new_v4(), ValidationStatus::Approved, None)
                .await,
            Err(ServiceError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_delete_only_by_author_while_pending() {
        let s = setup().await;
        let other = make_user(&s.db, "other", AccessType::Professor).await;

        let first = ChangeRequestService::create(&s.db, s.author, request(&s))
            .await
            .unwrap();
        assert!(matches!(
            ChangeRequestService::delete(&s.db, first.id, other.id).await,
            Err(ServiceError::Forbidden(_))
        ));
        ChangeRequestService::delete(&s.db, first.id, s.author)
            .await
            .unwrap();

        let second = ChangeRequestService::create(&s.db, s.author, request(&s))
            .await
            .unwrap();
        ChangeRequestService::validate(&s.db, second.id, ValidationStatus::Rejected, None)
            .await
            .unwrap();
        assert!(matches!(
            ChangeRequestService::delete(&s.db, second.id, s.author).await,
            Err(ServiceError::Conflict(_))
        ));
    }

    #[tokio::test]
    async fn test_list_filters() {
        let s = setup().await;
        let mut anticipation = request(&s);
        anticipation.change_type = ChangeType::Anticipation;

        let a = ChangeRequestService::create(&s.db, s.author, anticipation)
            .await
            .unwrap();
        ChangeRequestService::create(&s.db, s.author, request(&s))
            .await
            .unwrap();
        ChangeRequestService::validate(&s.db, a.id, ValidationStatus::Approved, None)
            .await
            .unwrap();

        let pending = ChangeRequestService::list(
            &s.db,
            ChangeRequestFilter {
                validated: Some(ValidationStatus::Pending),
                ..Default::default()
            },
        )
        .await
        .unwrap();
        assert_eq!(pending.len(), 1);
        assert_eq!(pending[0].change_type, ChangeType::MakeUp);

        let mine = ChangeRequestService::list(
            &s.db,
            ChangeRequestFilter {
                user_id: Some(s.author),
                change_type: Some(ChangeType::Anticipation),
                ..Default::default()
            },
        )
        .await
        .unwrap();
        assert_eq!(mine.len(), 1);
    }
}
