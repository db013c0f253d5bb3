use crate::idens::{
    CalendarClasses, CalendarCourses, CalendarSaturdays, Calendars, Classes, Courses, Holidays,
    SchoolSaturdays,
};
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create calendars table
        manager
            .create_table(
                Table::create()
                    .table(Calendars::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Calendars::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Calendars::CalendarType).string_len(50).not_null())
                    .col(ColumnDef::new(Calendars::Year).integer().not_null())
                    .col(ColumnDef::new(Calendars::Period).small_integer().not_null())
                    .check(Expr::col(Calendars::Year).gte(2020))
                    .check(Expr::col(Calendars::Period).is_in([1, 2]))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("uq_calendars_type_year_period")
                    .table(Calendars::Table)
                    .col(Calendars::CalendarType)
                    .col(Calendars::Year)
                    .col(Calendars::Period)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // Create calendar_classes junction table
        manager
            .create_table(
                Table::create()
                    .table(CalendarClasses::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CalendarClasses::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(CalendarClasses::CalendarId).uuid().not_null())
                    .col(ColumnDef::new(CalendarClasses::ClassId).uuid().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-calendar_classes-calendar_id")
                            .from(CalendarClasses::Table, CalendarClasses::CalendarId)
                            .to(Calendars::Table, Calendars::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-calendar_classes-class_id")
                            .from(CalendarClasses::Table, CalendarClasses::ClassId)
                            .to(Classes::Table, Classes::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("uq_calendar_classes_calendar_class")
                    .table(CalendarClasses::Table)
                    .col(CalendarClasses::CalendarId)
                    .col(CalendarClasses::ClassId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // Create calendar_courses junction table
        manager
            .create_table(
                Table::create()
                    .table(CalendarCourses::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CalendarCourses::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(CalendarCourses::CalendarId).uuid().not_null())
                    .col(ColumnDef::new(CalendarCourses::CourseId).uuid().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-calendar_courses-calendar_id")
                            .from(CalendarCourses::Table, CalendarCourses::CalendarId)
                            .to(Calendars::Table, Calendars::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-calendar_courses-course_id")
                            .from(CalendarCourses::Table, CalendarCourses::CourseId)
                            .to(Courses::Table, Courses::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("uq_calendar_courses_calendar_course")
                    .table(CalendarCourses::Table)
                    .col(CalendarCourses::CalendarId)
                    .col(CalendarCourses::CourseId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // Create school_saturdays table
        manager
            .create_table(
                Table::create()
                    .table(SchoolSaturdays::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SchoolSaturdays::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(SchoolSaturdays::DayOfWeek).string().not_null())
                    .col(
                        ColumnDef::new(SchoolSaturdays::Date)
                            .date()
                            .not_null()
                            .unique_key(),
                    )
                    .to_owned(),
            )
            .await?;

        // Create calendar_saturdays junction table
        manager
            .create_table(
                Table::create()
                    .table(CalendarSaturdays::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CalendarSaturdays::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(CalendarSaturdays::CalendarId)
                            .uuid()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CalendarSaturdays::SchoolSaturdayId)
                            .uuid()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-calendar_saturdays-calendar_id")
                            .from(CalendarSaturdays::Table, CalendarSaturdays::CalendarId)
                            .to(Calendars::Table, Calendars::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-calendar_saturdays-school_saturday_id")
                            .from(
                                CalendarSaturdays::Table,
                                CalendarSaturdays::SchoolSaturdayId,
                            )
                            .to(SchoolSaturdays::Table, SchoolSaturdays::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("uq_calendar_saturdays_saturday_calendar")
                    .table(CalendarSaturdays::Table)
                    .col(CalendarSaturdays::SchoolSaturdayId)
                    .col(CalendarSaturdays::CalendarId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // Create holidays table
        manager
            .create_table(
                Table::create()
                    .table(Holidays::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Holidays::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Holidays::Name).string().not_null())
                    .col(ColumnDef::new(Holidays::Date).date().not_null())
                    .col(ColumnDef::new(Holidays::HolidayType).string().not_null())
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Holidays::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(CalendarSaturdays::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(SchoolSaturdays::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(CalendarCourses::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(CalendarClasses::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Calendars::Table).to_owned())
            .await?;

        Ok(())
    }
}
