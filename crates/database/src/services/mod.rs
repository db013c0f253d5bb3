pub mod attendance;
pub mod calendar;
pub mod change_request;
pub mod class;
pub mod course;
pub mod discipline;
pub mod holiday;
pub mod hour;
pub mod report;
pub mod schedule;
pub mod school_saturday;
pub mod user;

use crate::error::{ServiceError, ServiceResult};
use sea_orm::{ConnectionTrait, DbErr, EntityTrait, PrimaryKeyTrait, SqlErr};
use uuid::Uuid;

/// Loads a row by primary key or reports `what` as missing
pub(crate) async fn fetch<E, C>(db: &C, id: Uuid, what: &'static str) -> ServiceResult<E::Model>
where
    E: EntityTrait,
    C: ConnectionTrait,
    Uuid: Into<<E::PrimaryKey as PrimaryKeyTrait>::ValueType>,
{
    E::find_by_id(id)
        .one(db)
        .await?
        .ok_or(ServiceError::NotFound(what))
}

/// Deletes a row by primary key; zero affected rows means it never existed
pub(crate) async fn remove<E, C>(db: &C, id: Uuid, what: &'static str) -> ServiceResult<()>
where
    E: EntityTrait,
    C: ConnectionTrait,
    Uuid: Into<<E::PrimaryKey as PrimaryKeyTrait>::ValueType>,
{
    let result = E::delete_by_id(id).exec(db).await.map_err(in_use(what))?;

    if result.rows_affected == 0 {
        return Err(ServiceError::NotFound(what));
    }

    Ok(())
}

/// A restricted foreign key blocked a delete
fn in_use(what: &'static str) -> impl FnOnce(DbErr) -> ServiceError {
    move |err| match err.sql_err() {
        Some(SqlErr::ForeignKeyConstraintViolation(_)) => {
            ServiceError::conflict(format!("{what} is still referenced and cannot be deleted"))
        }
        _ => ServiceError::from(err),
    }
}
