pub use sea_orm_migration::prelude::*;

mod idens;
mod m20250301_000001_create_catalog_tables;
mod m20250301_000002_create_association_tables;
mod m20250301_000003_create_calendar_tables;
mod m20250301_000004_create_schedule_tables;
mod m20250301_000005_create_attendance_table;
mod m20250301_000006_create_change_request_table;
mod m20250302_000001_add_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250301_000001_create_catalog_tables::Migration),
            Box::new(m20250301_000002_create_association_tables::Migration),
            Box::new(m20250301_000003_create_calendar_tables::Migration),
            Box::new(m20250301_000004_create_schedule_tables::Migration),
            Box::new(m20250301_000005_create_attendance_table::Migration),
            Box::new(m20250301_000006_create_change_request_table::Migration),
            Box::new(m20250302_000001_add_indexes::Migration),
        ]
    }
}
