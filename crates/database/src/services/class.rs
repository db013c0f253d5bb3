use super::fetch;
use crate::entities::{class, course, course_class};
use crate::error::{ServiceError, ServiceResult, on_duplicate};
use models::validation::required_text;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
    TransactionTrait,
};
use std::collections::HashMap;
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct NewClass {
    pub semester: String,
    /// Links the new class to this course as an active course class
    pub course_id: Option<Uuid>,
}

/// A course a class is attached to, with the archival flag of the link
#[derive(Debug, Clone)]
pub struct CourseLink {
    pub course_class_id: Uuid,
    pub is_active: bool,
    pub course: course::Model,
}

#[derive(Debug, Clone)]
pub struct ClassWithCourses {
    pub class: class::Model,
    pub courses: Vec<CourseLink>,
}

pub struct ClassService;

impl ClassService {
    const SEMESTER_MAX: usize = 20;

    pub async fn create(db: &DatabaseConnection, input: NewClass) -> ServiceResult<ClassWithCourses> {
        let semester = required_text("semester", &input.semester, Self::SEMESTER_MAX)?;

        let course = match input.course_id {
            Some(course_id) => Some(fetch::<course::Entity, _>(db, course_id, "course").await?),
            None => None,
        };

        let txn = db.begin().await?;

        let class = class::ActiveModel {
            id: Set(Uuid::new_v4()),
            semester: Set(semester),
        }
        .insert(&txn)
        .await?;

        let mut courses = Vec::new();
        if let Some(course) = course {
            let link = course_class::ActiveModel {
                id: Set(Uuid::new_v4()),
                course_id: Set(course.id),
                class_id: Set(class.id),
                is_active: Set(true),
            }
            .insert(&txn)
            .await?;

            courses.push(CourseLink {
                course_class_id: link.id,
                is_active: link.is_active,
                course,
            });
        }

        txn.commit().await?;
        Ok(ClassWithCourses { class, courses })
    }

    /// Looks a class up by id whether or not it is archived
    pub async fn get(db: &DatabaseConnection, id: Uuid) -> ServiceResult<ClassWithCourses> {
        let class = fetch::<class::Entity, _>(db, id, "class").await?;

        let links = course_class::Entity::find()
            .filter(course_class::Column::ClassId.eq(id))
            .find_also_related(course::Entity)
            .all(db)
            .await?;

        let mut courses: Vec<CourseLink> = links
            .into_iter()
            .filter_map(|(link, course)| {
                course.map(|course| CourseLink {
                    course_class_id: link.id,
                    is_active: link.is_active,
                    course,
                })
            })
            .collect();
        courses.sort_by(|a, b| a.course.acronym.cmp(&b.course.acronym));

        Ok(ClassWithCourses { class, courses })
    }

    /// Classes with at least one active course link; archived links are
    /// left out. With `include_archived` every class and link is returned.
    pub async fn list(
        db: &DatabaseConnection,
        include_archived: bool,
    ) -> ServiceResult<Vec<ClassWithCourses>> {
        let mut link_query = course_class::Entity::find();
        if !include_archived {
            link_query = link_query.filter(course_class::Column::IsActive.eq(true));
        }
        let links = link_query.all(db).await?;

        let classes = if include_archived {
            class::Entity::find().all(db).await?
        } else {
            let class_ids: Vec<Uuid> = links.iter().map(|l| l.class_id).collect();
            if class_ids.is_empty() {
                return Ok(vec![]);
            }
            class::Entity::find()
                .filter(class::Column::Id.is_in(class_ids))
                .all(db)
                .await?
        };

        Self::assemble(db, classes, links).await
    }

    /// Classes of one course, optionally including archived ones
    pub async fn list_for_course(
        db: &DatabaseConnection,
        course_id: Uuid,
        include_archived: bool,
    ) -> ServiceResult<Vec<ClassWithCourses>> {
        fetch::<course::Entity, _>(db, course_id, "course").await?;

        let mut link_query =
            course_class::Entity::find().filter(course_class::Column::CourseId.eq(course_id));
        if !include_archived {
            link_query = link_query.filter(course_class::Column::IsActive.eq(true));
        }
        let links = link_query.all(db).await?;

        let class_ids: Vec<Uuid> = links.iter().map(|l| l.class_id).collect();
        if class_ids.is_empty() {
            return Ok(vec![]);
        }
        let classes = class::Entity::find()
            .filter(class::Column::Id.is_in(class_ids))
            .all(db)
            .await?;

        Self::assemble(db, classes, links).await
    }

    pub async fn update(
        db: &DatabaseConnection,
        id: Uuid,
        semester: &str,
    ) -> ServiceResult<class::Model> {
        let semester = required_text("semester", semester, Self::SEMESTER_MAX)?;

        let mut active: class::ActiveModel = fetch::<class::Entity, _>(db, id, "class")
            .await?
            .into();
        active.semester = Set(semester);

        Ok(active.update(db).await?)
    }

    /// Attaches an existing class to another course as an active link
    pub async fn link_course(
        db: &DatabaseConnection,
        class_id: Uuid,
        course_id: Uuid,
    ) -> ServiceResult<course_class::Model> {
        fetch::<class::Entity, _>(db, class_id, "class").await?;
        fetch::<course::Entity, _>(db, course_id, "course").await?;

        Ok(course_class::ActiveModel {
            id: Set(Uuid::new_v4()),
            course_id: Set(course_id),
            class_id: Set(class_id),
            is_active: Set(true),
        }
        .insert(db)
        .await
        .map_err(on_duplicate("class is already linked to this course"))?)
    }

    /// Archives (`false`) or restores (`true`) a class within a course
    pub async fn set_active(
        db: &DatabaseConnection,
        class_id: Uuid,
        course_id: Uuid,
        is_active: bool,
    ) -> ServiceResult<course_class::Model> {
        let link = course_class::Entity::find()
            .filter(course_class::Column::ClassId.eq(class_id))
            .filter(course_class::Column::CourseId.eq(course_id))
            .one(db)
            .await?
            .ok_or(ServiceError::NotFound("course class"))?;

        if link.is_active == is_active {
            return Ok(link);
        }

        let mut active: course_class::ActiveModel = link.into();
        active.is_active = Set(is_active);
        let updated = active.update(db).await?;

        log::info!(
            "Course class {} {}",
            updated.id,
            if is_active { "restored" } else { "archived" }
        );
        Ok(updated)
    }

    async fn assemble(
        db: &DatabaseConnection,
        classes: Vec<class::Model>,
        links: Vec<course_class::Model>,
    ) -> ServiceResult<Vec<ClassWithCourses>> {
        let course_ids: Vec<Uuid> = links.iter().map(|l| l.course_id).collect();
        let courses: HashMap<Uuid, course::Model> = if course_ids.is_empty() {
            HashMap::new()
        } else {
            course::Entity::find()
                .filter(course::Column::Id.is_in(course_ids))
                .all(db)
                .await?
                .into_iter()
                .map(|c| (c.id, c))
                .collect()
        };

        let mut links_by_class: HashMap<Uuid, Vec<CourseLink>> = HashMap::new();
        for link in links {
            if let Some(course) = courses.get(&link.course_id) {
                links_by_class
                    .entry(link.class_id)
                    .or_default()
                    .push(CourseLink {
                        course_class_id: link.id,
                        is_active: link.is_active,
                        course: course.clone(),
                    });
            }
        }

        let mut result: Vec<ClassWithCourses> = classes
            .into_iter()
            .map(|class| {
                let mut courses = links_by_class.remove(&class.id).unwrap_or_default();
                courses.sort_by(|a, b| a.course.acronym.cmp(&b.course.acronym));
                ClassWithCourses { class, courses }
            })
            .collect();

        result.sort_by(|a, b| a.class.semester.cmp(&b.class.semester));
        Ok(result)
    }
}
