use crate::idens::{
    Calendars, ClassScheduleDetails, ClassSchedules, Classes, Courses, Disciplines, Hours, Users,
};
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create class_schedules table
        manager
            .create_table(
                Table::create()
                    .table(ClassSchedules::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ClassSchedules::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(ClassSchedules::CalendarId).uuid().not_null())
                    .col(ColumnDef::new(ClassSchedules::ClassId).uuid().not_null())
                    .col(ColumnDef::new(ClassSchedules::CourseId).uuid().not_null())
                    .col(ColumnDef::new(ClassSchedules::DisciplineId).uuid().not_null())
                    .col(ColumnDef::new(ClassSchedules::ProfessorId).uuid())
                    .col(ColumnDef::new(ClassSchedules::DayOfWeek).string().not_null())
                    .col(ColumnDef::new(ClassSchedules::HourId).uuid().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-class_schedules-calendar_id")
                            .from(ClassSchedules::Table, ClassSchedules::CalendarId)
                            .to(Calendars::Table, Calendars::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-class_schedules-class_id")
                            .from(ClassSchedules::Table, ClassSchedules::ClassId)
                            .to(Classes::Table, Classes::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-class_schedules-course_id")
                            .from(ClassSchedules::Table, ClassSchedules::CourseId)
                            .to(Courses::Table, Courses::Id)
                            .on_delete(ForeignKeyAction::NoAction),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-class_schedules-discipline_id")
                            .from(ClassSchedules::Table, ClassSchedules::DisciplineId)
                            .to(Disciplines::Table, Disciplines::Id)
                            .on_delete(ForeignKeyAction::NoAction),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-class_schedules-professor_id")
                            .from(ClassSchedules::Table, ClassSchedules::ProfessorId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-class_schedules-hour_id")
                            .from(ClassSchedules::Table, ClassSchedules::HourId)
                            .to(Hours::Table, Hours::Id)
                            .on_delete(ForeignKeyAction::NoAction),
                    )
                    .to_owned(),
            )
            .await?;

        // A class can only hold one slot per calendar, day and hour
        manager
            .create_index(
                Index::create()
                    .name("uq_class_schedules_slot")
                    .table(ClassSchedules::Table)
                    .col(ClassSchedules::CalendarId)
                    .col(ClassSchedules::ClassId)
                    .col(ClassSchedules::DayOfWeek)
                    .col(ClassSchedules::HourId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // Create class_schedule_details table
        manager
            .create_table(
                Table::create()
                    .table(ClassScheduleDetails::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ClassScheduleDetails::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(ClassScheduleDetails::ClassScheduleId)
                            .uuid()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ClassScheduleDetails::DisciplineId)
                            .uuid()
                            .not_null(),
                    )
                    .col(ColumnDef::new(ClassScheduleDetails::UserId).uuid())
                    .col(ColumnDef::new(ClassScheduleDetails::HourId).uuid().not_null())
                    .col(
                        ColumnDef::new(ClassScheduleDetails::DayOfWeek)
                            .string()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-class_schedule_details-class_schedule_id")
                            .from(
                                ClassScheduleDetails::Table,
                                ClassScheduleDetails::ClassScheduleId,
                            )
                            .to(ClassSchedules::Table, ClassSchedules::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-class_schedule_details-discipline_id")
                            .from(
                                ClassScheduleDetails::Table,
                                ClassScheduleDetails::DisciplineId,
                            )
                            .to(Disciplines::Table, Disciplines::Id)
                            .on_delete(ForeignKeyAction::NoAction),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-class_schedule_details-user_id")
                            .from(ClassScheduleDetails::Table, ClassScheduleDetails::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-class_schedule_details-hour_id")
                            .from(ClassScheduleDetails::Table, ClassScheduleDetails::HourId)
                            .to(Hours::Table, Hours::Id)
                            .on_delete(ForeignKeyAction::NoAction),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ClassScheduleDetails::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(ClassSchedules::Table).to_owned())
            .await?;

        Ok(())
    }
}
