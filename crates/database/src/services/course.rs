use super::{fetch, remove};
use crate::entities::{course, course_discipline, discipline, user};
use crate::error::{ServiceError, ServiceResult, on_duplicate};
use models::{CourseType, validation::required_text};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder,
};
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct NewCourse {
    pub name: String,
    pub acronym: String,
    pub course_type: CourseType,
    pub coordinator_id: Option<Uuid>,
}

/// A discipline as offered by one course
#[derive(Debug, Clone)]
pub struct CourseDiscipline {
    pub link: course_discipline::Model,
    pub discipline: discipline::Model,
}

pub struct CourseService;

impl CourseService {
    const NAME_MAX: usize = 120;
    const ACRONYM_MAX: usize = 20;

    pub async fn list(
        db: &DatabaseConnection,
        course_type: Option<CourseType>,
    ) -> ServiceResult<Vec<course::Model>> {
        let mut query = course::Entity::find().order_by_asc(course::Column::Name);

        if let Some(course_type) = course_type {
            query = query.filter(course::Column::CourseType.eq(course_type));
        }

        Ok(query.all(db).await?)
    }

    pub async fn get(db: &DatabaseConnection, id: Uuid) -> ServiceResult<course::Model> {
        fetch::<course::Entity, _>(db, id, "course").await
    }

    pub async fn create(db: &DatabaseConnection, input: NewCourse) -> ServiceResult<course::Model> {
        let (name, acronym) = Self::validate(db, &input, None).await?;

        let model = course::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(name),
            acronym: Set(acronym),
            course_type: Set(input.course_type),
            coordinator_id: Set(input.coordinator_id),
        }
        .insert(db)
        .await
        .map_err(on_duplicate("course acronym already exists"))?;

        Ok(model)
    }

    pub async fn update(
        db: &DatabaseConnection,
        id: Uuid,
        input: NewCourse,
    ) -> ServiceResult<course::Model> {
        let existing = Self::get(db, id).await?;
        let (name, acronym) = Self::validate(db, &input, Some(id)).await?;

        let mut active: course::ActiveModel = existing.into();
        active.name = Set(name);
        active.acronym = Set(acronym);
        active.course_type = Set(input.course_type);
        active.coordinator_id = Set(input.coordinator_id);

        Ok(active
            .update(db)
            .await
            .map_err(on_duplicate("course acronym already exists"))?)
    }

    /// Discipline links go with the course; classes and timetables keep it alive
    pub async fn delete(db: &DatabaseConnection, id: Uuid) -> ServiceResult<()> {
        remove::<course::Entity, _>(db, id, "course").await
    }

    /// Acronyms are stored uppercase so uniqueness ignores case
    async fn validate(
        db: &DatabaseConnection,
        input: &NewCourse,
        current_id: Option<Uuid>,
    ) -> ServiceResult<(String, String)> {
        let name = required_text("name", &input.name, Self::NAME_MAX)?;
        let acronym = required_text("acronym", &input.acronym, Self::ACRONYM_MAX)?.to_uppercase();

        let mut duplicate = course::Entity::find().filter(course::Column::Acronym.eq(acronym.as_str()));
        if let Some(id) = current_id {
            duplicate = duplicate.filter(course::Column::Id.ne(id));
        }
        if duplicate.one(db).await?.is_some() {
            return Err(ServiceError::conflict(format!(
                "course acronym {acronym} already exists"
            )));
        }

        if let Some(coordinator_id) = input.coordinator_id {
            fetch::<user::Entity, _>(db, coordinator_id, "coordinator").await?;
        }

        Ok((name, acronym))
    }

    pub async fn disciplines(
        db: &DatabaseConnection,
        course_id: Uuid,
    ) -> ServiceResult<Vec<CourseDiscipline>> {
        Self::get(db, course_id).await?;

        let mut rows: Vec<CourseDiscipline> = course_discipline::Entity::find()
            .filter(course_discipline::Column::CourseId.eq(course_id))
            .find_also_related(discipline::Entity)
            .all(db)
            .await?
            .into_iter()
            .filter_map(|(link, discipline)| {
                discipline.map(|discipline| CourseDiscipline { link, discipline })
            })
            .collect();

        rows.sort_by(|a, b| a.discipline.name.cmp(&b.discipline.name));
        Ok(rows)
    }

    pub async fn add_discipline(
        db: &DatabaseConnection,
        course_id: Uuid,
        discipline_id: Uuid,
        workload: i32,
    ) -> ServiceResult<course_discipline::Model> {
        Self::validate_workload(workload)?;
        Self::get(db, course_id).await?;
        fetch::<discipline::Entity, _>(db, discipline_id, "discipline").await?;

        let model = course_discipline::ActiveModel {
            id: Set(Uuid::new_v4()),
            course_id: Set(course_id),
            discipline_id: Set(discipline_id),
            workload: Set(workload),
        }
        .insert(db)
        .await
        .map_err(on_duplicate("discipline already belongs to this course"))?;

        Ok(model)
    }

    pub async fn update_workload(
        db: &DatabaseConnection,
        course_id: Uuid,
        discipline_id: Uuid,
        workload: i32,
    ) -> ServiceResult<course_discipline::Model> {
        Self::validate_workload(workload)?;

        let mut active: course_discipline::ActiveModel =
            Self::find_link(db, course_id, discipline_id).await?.into();
        active.workload = Set(workload);

        Ok(active.update(db).await?)
    }

    pub async fn remove_discipline(
        db: &DatabaseConnection,
        course_id: Uuid,
        discipline_id: Uuid,
    ) -> ServiceResult<()> {
        let link = Self::find_link(db, course_id, discipline_id).await?;
        remove::<course_discipline::Entity, _>(db, link.id, "course discipline").await
    }

    pub(crate) async fn find_link(
        db: &DatabaseConnection,
        course_id: Uuid,
        discipline_id: Uuid,
    ) -> ServiceResult<course_discipline::Model> {
        course_discipline::Entity::find()
            .filter(course_discipline::Column::CourseId.eq(course_id))
            .filter(course_discipline::Column::DisciplineId.eq(discipline_id))
            .one(db)
            .await?
            .ok_or(ServiceError::NotFound("course discipline"))
    }

    fn validate_workload(workload: i32) -> ServiceResult<()> {
        if workload <= 0 {
            return Err(ServiceError::rule(format!(
                "workload must be a positive number of hours, got {workload}"
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::entities::{attendance, course_class};
    use crate::services::attendance::{AttendanceService, NewAttendance};
    use crate::services::discipline::DisciplineService;
    use crate::test_support::{course, discipline, schedule_fixture, setup_test_db};
    use chrono::NaiveDate;
    use models::AttendanceStatus;
    use sea_orm::PaginatorTrait;

    fn new_course(acronym: &str) -> NewCourse {
        NewCourse {
            name: "Administração".into(),
            acronym: acronym.into(),
            course_type: CourseType::Subsequente,
            coordinator_id: None,
        }
    }

    #[tokio::test]
    async fn test_duplicate_acronym_is_rejected() {
        let db = setup_test_db().await;
        CourseService::create(&db, new_course("ADM")).await.unwrap();

        let err = CourseService::create(&db, new_course("adm")).await.unwrap_err();
        assert!(matches!(err, ServiceError::Conflict(_)));
        assert_eq!(CourseService::list(&db, None).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_update_keeps_own_acronym() {
        let db = setup_test_db().await;
        let created = CourseService::create(&db, new_course("ADM")).await.unwrap();

        let mut input = new_course("ADM");
        input.name = "Administração de Empresas".into();
        let updated = CourseService::update(&db, created.id, input).await.unwrap();

        assert_eq!(updated.name, "Administração de Empresas");
        assert_eq!(updated.acronym, "ADM");
    }

    #[tokio::test]
    async fn test_unknown_coordinator_is_not_found() {
        let db = setup_test_db().await;
        let mut input = new_course("INF");
        input.coordinator_id = Some(Uuid::new_v4());

        let err = CourseService::create(&db, input).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound("coordinator")));
    }

    #[tokio::test]
    async fn test_list_filters_by_type() {
        let db = setup_test_db().await;
        CourseService::create(&db, new_course("ADM")).await.unwrap();
        let mut superior = new_course("TADS");
        superior.course_type = CourseType::Superior;
        CourseService::create(&db, superior).await.unwrap();

        let listed = CourseService::list(&db, Some(CourseType::Superior))
            .await
            .unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].acronym, "TADS");
    }

    #[tokio::test]
    async fn test_discipline_workload_links() {
        let db = setup_test_db().await;
        let adm = course(&db, "ADM").await;
        let mat = discipline(&db, "MAT").await;

        assert!(matches!(
            CourseService::add_discipline(&db, adm.id, mat.id, 0).await,
            Err(ServiceError::Validation(_))
        ));

        CourseService::add_discipline(&db, adm.id, mat.id, 60)
            .await
            .unwrap();
        let dup = CourseService::add_discipline(&db, adm.id, mat.id, 40).await;
        assert!(matches!(dup, Err(ServiceError::Conflict(_))));

        CourseService::update_workload(&db, adm.id, mat.id, 80)
            .await
            .unwrap();
        let listed = CourseService::disciplines(&db, adm.id).await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].link.workload, 80);
        assert_eq!(listed[0].discipline.acronym, "MAT");

        CourseService::remove_discipline(&db, adm.id, mat.id)
            .await
            .unwrap();
        assert!(CourseService::disciplines(&db, adm.id).await.unwrap().is_empty());
        // the discipline itself survives
        assert!(
            crate::services::discipline::DisciplineService::get(&db, mat.id)
                .await
                .is_ok()
        );
    }

    #[tokio::test]
    async fn test_unreferenced_course_is_deleted_with_its_links() {
        let db = setup_test_db().await;
        let adm = course(&db, "ADM").await;
        let mat = discipline(&db, "MAT").await;
        CourseService::add_discipline(&db, adm.id, mat.id, 60)
            .await
            .unwrap();

        CourseService::delete(&db, adm.id).await.unwrap();

        assert!(matches!(
            CourseService::get(&db, adm.id).await,
            Err(ServiceError::NotFound(_))
        ));
        assert!(DisciplineService::get(&db, mat.id).await.is_ok());
    }

    #[tokio::test]
    async fn test_course_with_history_cannot_be_deleted() {
        let db = setup_test_db().await;
        let fixture = schedule_fixture(&db).await;
        AttendanceService::record(
            &db,
            Some(fixture.professor.id),
            NewAttendance {
                class_schedule_detail_id: fixture.detail_id(),
                date: NaiveDate::from_ymd_opt(2025, 3, 10).unwrap(),
                status: AttendanceStatus::Present,
                latitude: None,
                longitude: None,
                justification: None,
            },
        )
        .await
        .unwrap();

        let err = CourseService::delete(&db, fixture.course.id)
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::Conflict(_)));

        let err = DisciplineService::delete(&db, fixture.discipline.id)
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::Conflict(_)));

        assert!(CourseService::get(&db, fixture.course.id).await.is_ok());
        assert_eq!(course_class::Entity::find().count(&db).await.unwrap(), 1);
        assert_eq!(attendance::Entity::find().count(&db).await.unwrap(), 1);
    }
}
