use crate::idens::{Attendances, ClassScheduleDetails, Users};
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Attendances::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Attendances::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Attendances::ClassScheduleDetailId)
                            .uuid()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Attendances::Date).date().not_null())
                    .col(ColumnDef::new(Attendances::Status).string().not_null())
                    .col(ColumnDef::new(Attendances::RegisteredBy).uuid())
                    .col(ColumnDef::new(Attendances::Latitude).double())
                    .col(ColumnDef::new(Attendances::Longitude).double())
                    .col(ColumnDef::new(Attendances::Justification).text())
                    .col(ColumnDef::new(Attendances::CreatedAt).date_time().not_null())
                    .col(ColumnDef::new(Attendances::UpdatedAt).date_time().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-attendances-class_schedule_detail_id")
                            .from(Attendances::Table, Attendances::ClassScheduleDetailId)
                            .to(ClassScheduleDetails::Table, ClassScheduleDetails::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-attendances-registered_by")
                            .from(Attendances::Table, Attendances::RegisteredBy)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        // At most one record per slot per day
        manager
            .create_index(
                Index::create()
                    .name("uq_attendances_detail_date")
                    .table(Attendances::Table)
                    .col(Attendances::ClassScheduleDetailId)
                    .col(Attendances::Date)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Attendances::Table).to_owned())
            .await?;

        Ok(())
    }
}
