use crate::idens::{ClassChangeRequests, CourseClasses, Disciplines, Users};
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ClassChangeRequests::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ClassChangeRequests::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(ClassChangeRequests::UserId).uuid().not_null())
                    .col(
                        ColumnDef::new(ClassChangeRequests::CourseClassId)
                            .uuid()
                            .not_null(),
                    )
                    .col(ColumnDef::new(ClassChangeRequests::DisciplineId).uuid())
                    .col(
                        ColumnDef::new(ClassChangeRequests::ChangeType)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ClassChangeRequests::Quantity)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(ClassChangeRequests::Date).date().not_null())
                    .col(ColumnDef::new(ClassChangeRequests::Annex).string())
                    .col(ColumnDef::new(ClassChangeRequests::Observation).text())
                    .col(
                        ColumnDef::new(ClassChangeRequests::Validated)
                            .small_integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(ClassChangeRequests::ObservationCoordinator).text())
                    .col(
                        ColumnDef::new(ClassChangeRequests::CreatedAt)
                            .date_time()
                            .not_null(),
                    )
                    .check(Expr::col(ClassChangeRequests::Validated).is_in([0, 1, 2]))
                    .check(Expr::col(ClassChangeRequests::Quantity).gte(1))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-class_change_requests-user_id")
                            .from(ClassChangeRequests::Table, ClassChangeRequests::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-class_change_requests-course_class_id")
                            .from(
                                ClassChangeRequests::Table,
                                ClassChangeRequests::CourseClassId,
                            )
                            .to(CourseClasses::Table, CourseClasses::Id)
                            .on_delete(ForeignKeyAction::NoAction),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-class_change_requests-discipline_id")
                            .from(
                                ClassChangeRequests::Table,
                                ClassChangeRequests::DisciplineId,
                            )
                            .to(Disciplines::Table, Disciplines::Id)
                            .on_delete(ForeignKeyAction::NoAction),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ClassChangeRequests::Table).to_owned())
            .await?;

        Ok(())
    }
}
