use crate::idens::{Classes, CourseClasses, CourseDisciplines, Courses, Disciplines};
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create course_disciplines junction table (many-to-many with workload)
        manager
            .create_table(
                Table::create()
                    .table(CourseDisciplines::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CourseDisciplines::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(CourseDisciplines::CourseId).uuid().not_null())
                    .col(
                        ColumnDef::new(CourseDisciplines::DisciplineId)
                            .uuid()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CourseDisciplines::Workload)
                            .integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-course_disciplines-course_id")
                            .from(CourseDisciplines::Table, CourseDisciplines::CourseId)
                            .to(Courses::Table, Courses::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-course_disciplines-discipline_id")
                            .from(CourseDisciplines::Table, CourseDisciplines::DisciplineId)
                            .to(Disciplines::Table, Disciplines::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("uq_course_disciplines_course_discipline")
                    .table(CourseDisciplines::Table)
                    .col(CourseDisciplines::CourseId)
                    .col(CourseDisciplines::DisciplineId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // Create course_classes junction table; is_active archives the link
        manager
            .create_table(
                Table::create()
                    .table(CourseClasses::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CourseClasses::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(CourseClasses::CourseId).uuid().not_null())
                    .col(ColumnDef::new(CourseClasses::ClassId).uuid().not_null())
                    .col(
                        ColumnDef::new(CourseClasses::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-course_classes-course_id")
                            .from(CourseClasses::Table, CourseClasses::CourseId)
                            .to(Courses::Table, Courses::Id)
                            .on_delete(ForeignKeyAction::NoAction),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-course_classes-class_id")
                            .from(CourseClasses::Table, CourseClasses::ClassId)
                            .to(Classes::Table, Classes::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("uq_course_classes_course_class")
                    .table(CourseClasses::Table)
                    .col(CourseClasses::CourseId)
                    .col(CourseClasses::ClassId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CourseClasses::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(CourseDisciplines::Table).to_owned())
            .await?;

        Ok(())
    }
}
