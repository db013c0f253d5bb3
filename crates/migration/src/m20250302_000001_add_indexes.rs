use crate::idens::{
    Attendances, ClassChangeRequests, ClassScheduleDetails, ClassSchedules, CourseClasses,
    Holidays,
};
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Active-class listings filter on the archival flag
        manager
            .create_index(
                Index::create()
                    .name("idx_course_classes_class_id_is_active")
                    .table(CourseClasses::Table)
                    .col(CourseClasses::ClassId)
                    .col(CourseClasses::IsActive)
                    .to_owned(),
            )
            .await?;

        // Timetable lookups by calendar
        manager
            .create_index(
                Index::create()
                    .name("idx_class_schedules_calendar_id")
                    .table(ClassSchedules::Table)
                    .col(ClassSchedules::CalendarId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_class_schedule_details_class_schedule_id")
                    .table(ClassScheduleDetails::Table)
                    .col(ClassScheduleDetails::ClassScheduleId)
                    .to_owned(),
            )
            .await?;

        // Professor timetable
        manager
            .create_index(
                Index::create()
                    .name("idx_class_schedule_details_user_id")
                    .table(ClassScheduleDetails::Table)
                    .col(ClassScheduleDetails::UserId)
                    .to_owned(),
            )
            .await?;

        // Reports group attendance by date range
        manager
            .create_index(
                Index::create()
                    .name("idx_attendances_date")
                    .table(Attendances::Table)
                    .col(Attendances::Date)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_class_change_requests_user_id")
                    .table(ClassChangeRequests::Table)
                    .col(ClassChangeRequests::UserId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_class_change_requests_validated")
                    .table(ClassChangeRequests::Table)
                    .col(ClassChangeRequests::Validated)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_holidays_date")
                    .table(Holidays::Table)
                    .col(Holidays::Date)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for name in [
            "idx_holidays_date",
            "idx_class_change_requests_validated",
            "idx_class_change_requests_user_id",
            "idx_attendances_date",
            "idx_class_schedule_details_user_id",
            "idx_class_schedule_details_class_schedule_id",
            "idx_class_schedules_calendar_id",
            "idx_course_classes_class_id_is_active",
        ] {
            manager
                .drop_index(Index::drop().name(name).to_owned())
                .await?;
        }

        Ok(())
    }
}
