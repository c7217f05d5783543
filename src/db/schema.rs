use sea_orm::{ConnectionTrait, DatabaseConnection, DbErr, EntityTrait, Schema};
use tracing::debug;

use crate::db::entities::{lesson, student, student_lesson, teacher, teacher_lesson};

/// Creates every table that does not exist yet.
///
/// Tables are created parents first so the foreign keys of `teachers` and the
/// two join tables always point at an existing table.
pub async fn sync(db: &DatabaseConnection) -> Result<(), DbErr> {
    create_table(db, lesson::Entity).await?;
    create_table(db, teacher::Entity).await?;
    create_table(db, student::Entity).await?;
    create_table(db, teacher_lesson::Entity).await?;
    create_table(db, student_lesson::Entity).await?;
    Ok(())
}

async fn create_table<E: EntityTrait>(db: &DatabaseConnection, entity: E) -> Result<(), DbErr> {
    let backend = db.get_database_backend();
    let mut stmt = Schema::new(backend).create_table_from_entity(entity);
    stmt.if_not_exists();

    debug!(table = entity.table_name(), "ensuring table");
    db.execute(backend.build(&stmt)).await?;
    Ok(())
}
