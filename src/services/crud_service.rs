use async_trait::async_trait;
use serde::{Serialize, de::DeserializeOwned};

use crate::error::AppError;

/// The five operations every resource router exposes.
///
/// `Payload` is the full replacement body: create and update both take every
/// writable field, so an update is an overwrite rather than a patch.
#[async_trait]
pub trait CrudService: Clone + Send + Sync + 'static {
    type Model: Serialize + Send + 'static;
    type Payload: DeserializeOwned + Send + 'static;

    async fn list_all(&self) -> Result<Vec<Self::Model>, AppError>;

    async fn find_by_id(&self, id: i32) -> Result<Self::Model, AppError>;

    async fn create(&self, payload: Self::Payload) -> Result<Self::Model, AppError>;

    async fn update(&self, id: i32, payload: Self::Payload) -> Result<Self::Model, AppError>;

    /// Returns the row as it was just before it was removed.
    async fn delete(&self, id: i32) -> Result<Self::Model, AppError>;
}
