use std::{marker::PhantomData, sync::Arc};

use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, DatabaseConnection, EntityTrait, IntoActiveModel,
    PrimaryKeyTrait, QueryOrder,
};

use super::base_traits::{EntityLabel, HasIdColumn};
use super::error::{DaoLayerError, DaoResult};

/// Single-table CRUD shared by every entity with a generated integer id.
pub struct EntityDao<E> {
    db: Arc<DatabaseConnection>,
    _entity: PhantomData<fn() -> E>,
}

impl<E> Clone for EntityDao<E> {
    fn clone(&self) -> Self {
        Self {
            db: Arc::clone(&self.db),
            _entity: PhantomData,
        }
    }
}

impl<E> EntityDao<E>
where
    E: EntityTrait + HasIdColumn + EntityLabel,
    E::Model: IntoActiveModel<E::ActiveModel>,
    E::ActiveModel: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send,
    <E::PrimaryKey as PrimaryKeyTrait>::ValueType: From<i32>,
{
    pub fn new(db: &Arc<DatabaseConnection>) -> Self {
        Self {
            db: Arc::clone(db),
            _entity: PhantomData,
        }
    }

    fn conn(&self) -> &DatabaseConnection {
        &self.db
    }

    /// Every row, in id order.
    pub async fn list_all(&self) -> DaoResult<Vec<E::Model>> {
        let models = E::find()
            .order_by_asc(E::id_column())
            .all(self.conn())
            .await?;
        Ok(models)
    }

    pub async fn find_by_id(&self, id: i32) -> DaoResult<E::Model> {
        E::find_by_id(id)
            .one(self.conn())
            .await?
            .ok_or_else(|| Self::not_found(id))
    }

    pub async fn create(
        &self,
        data: impl IntoActiveModel<E::ActiveModel> + Send,
    ) -> DaoResult<E::Model> {
        let model = data.into_active_model().insert(self.conn()).await?;
        Ok(model)
    }

    pub async fn update<F>(&self, id: i32, apply: F) -> DaoResult<E::Model>
    where
        F: FnOnce(&mut E::ActiveModel) + Send,
    {
        let model = self.find_by_id(id).await?;

        let mut active = model.into_active_model();
        apply(&mut active);

        active.update(self.conn()).await.map_err(DaoLayerError::Db)
    }

    /// Removes the row and hands back what it held just before deletion.
    pub async fn delete(&self, id: i32) -> DaoResult<E::Model> {
        let model = self.find_by_id(id).await?;

        let result = E::delete_by_id(id)
            .exec(self.conn())
            .await
            .map_err(DaoLayerError::Db)?;

        if result.rows_affected == 0 {
            return Err(Self::not_found(id));
        }

        Ok(model)
    }

    fn not_found(id: i32) -> DaoLayerError {
        DaoLayerError::NotFound {
            entity: E::LABEL,
            id,
        }
    }
}
