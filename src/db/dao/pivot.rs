use std::{marker::PhantomData, sync::Arc};

use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, DatabaseConnection, EntityTrait, IntoActiveModel,
    ModelTrait, PrimaryKeyTrait,
};

use super::base_traits::{EntityLabel, PivotEntity};
use super::error::{DaoLayerError, DaoResult};

/// Many-to-many links stored in a join table.
///
/// Links are never deduplicated or removed: calling [`PivotDao::link`] twice
/// with the same pair stores two rows, and both show up in the listings.
pub struct PivotDao<P> {
    db: Arc<DatabaseConnection>,
    _pivot: PhantomData<fn() -> P>,
}

impl<P> Clone for PivotDao<P> {
    fn clone(&self) -> Self {
        Self {
            db: Arc::clone(&self.db),
            _pivot: PhantomData,
        }
    }
}

impl<P> PivotDao<P>
where
    P: PivotEntity,
    P::Model: IntoActiveModel<P::ActiveModel>,
    P::ActiveModel: ActiveModelTrait<Entity = P> + ActiveModelBehavior + Send,
    <<P::Left as EntityTrait>::PrimaryKey as PrimaryKeyTrait>::ValueType: From<i32>,
    <<P::Right as EntityTrait>::PrimaryKey as PrimaryKeyTrait>::ValueType: From<i32>,
{
    pub fn new(db: &Arc<DatabaseConnection>) -> Self {
        Self {
            db: Arc::clone(db),
            _pivot: PhantomData,
        }
    }

    fn conn(&self) -> &DatabaseConnection {
        &self.db
    }

    /// Inserts the pair as-is. Dangling ids are rejected by the foreign keys.
    pub async fn link(&self, left_id: i32, right_id: i32) -> DaoResult<P::Model> {
        let model = P::pair(left_id, right_id).insert(self.conn()).await?;
        Ok(model)
    }

    pub async fn list_by_left(
        &self,
        left_id: i32,
    ) -> DaoResult<Vec<<P::Right as EntityTrait>::Model>> {
        let left = <P::Left as EntityTrait>::find_by_id(left_id)
            .one(self.conn())
            .await?
            .ok_or(DaoLayerError::NotFound {
                entity: <P::Left as EntityLabel>::LABEL,
                id: left_id,
            })?;

        let related = left
            .find_related(<P::Right as Default>::default())
            .all(self.conn())
            .await?;
        Ok(related)
    }

    pub async fn list_by_right(
        &self,
        right_id: i32,
    ) -> DaoResult<Vec<<P::Left as EntityTrait>::Model>> {
        let right = <P::Right as EntityTrait>::find_by_id(right_id)
            .one(self.conn())
            .await?
            .ok_or(DaoLayerError::NotFound {
                entity: <P::Right as EntityLabel>::LABEL,
                id: right_id,
            })?;

        let related = right
            .find_related(<P::Left as Default>::default())
            .all(self.conn())
            .await?;
        Ok(related)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use sea_orm::{DatabaseBackend, DbErr, MockDatabase};

    use super::PivotDao;
    use crate::db::dao::DaoLayerError;
    use crate::db::entities::{lesson, student, student_lesson, teacher, teacher_lesson};

    #[tokio::test]
    async fn link_returns_inserted_pair() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([[teacher_lesson::Model {
                id: 1,
                teacher_id: 1,
                lesson_id: 2,
            }]])
            .into_connection();
        let db = Arc::new(db);
        let dao = PivotDao::<teacher_lesson::Entity>::new(&db);

        let link = dao.link(1, 2).await.expect("link should insert");
        assert_eq!((link.teacher_id, link.lesson_id), (1, 2));
    }

    #[tokio::test]
    async fn link_surfaces_foreign_key_failures() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors([DbErr::Custom("foreign key violation".to_string())])
            .into_connection();
        let db = Arc::new(db);
        let dao = PivotDao::<student_lesson::Entity>::new(&db);

        let err = dao.link(1, 42).await.expect_err("link should fail");
        assert!(matches!(err, DaoLayerError::Db(_)));
    }

    #[tokio::test]
    async fn list_by_left_requires_existing_left_row() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<teacher::Model>::new()])
            .into_connection();
        let db = Arc::new(db);
        let dao = PivotDao::<teacher_lesson::Entity>::new(&db);

        let err = dao.list_by_left(7).await.expect_err("teacher should be missing");
        assert!(matches!(
            err,
            DaoLayerError::NotFound {
                entity: "Teacher",
                id: 7
            }
        ));
    }

    #[tokio::test]
    async fn list_by_right_returns_joined_rows() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([[lesson::Model {
                id: 2,
                title: "Math".to_string(),
            }]])
            .append_query_results([[
                student::Model {
                    id: 1,
                    name: "Grace".to_string(),
                },
                student::Model {
                    id: 1,
                    name: "Grace".to_string(),
                },
            ]])
            .into_connection();
        let db = Arc::new(db);
        let dao = PivotDao::<student_lesson::Entity>::new(&db);

        let students = dao.list_by_right(2).await.expect("listing should succeed");
        assert_eq!(students.len(), 2, "duplicate links are listed twice");
        assert!(students.iter().all(|student| student.id == 1));
    }
}
