use axum::{
    Json, Router,
    http::StatusCode,
    routing::{delete, get, post, put},
};

use super::extract::{ValidJson, ValidPath};
use crate::{error::AppError, services::crud_service::CrudService};

/// Registers list/create on `base_path` and get/update/delete on
/// `{base_path}/{id}` for any [`CrudService`].
pub struct CrudApiRouter<S> {
    service: S,
    base_path: &'static str,
}

impl<S> CrudApiRouter<S>
where
    S: CrudService,
{
    pub fn new(service: S, base_path: &'static str) -> Self {
        Self { service, base_path }
    }

    pub fn router<State>(self) -> Router<State>
    where
        State: Clone + Send + Sync + 'static,
    {
        let id_path = format!("{}/{{id}}", self.base_path);

        let create = post({
            let service = self.service.clone();
            move |ValidJson(payload): ValidJson<S::Payload>| async move {
                let model = service.create(payload).await?;
                Ok::<_, AppError>((StatusCode::CREATED, Json(model)))
            }
        });

        let list = get({
            let service = self.service.clone();
            move || async move {
                let models = service.list_all().await?;
                Ok::<_, AppError>(Json(models))
            }
        });

        let find = get({
            let service = self.service.clone();
            move |ValidPath(id): ValidPath<i32>| async move {
                let model = service.find_by_id(id).await?;
                Ok::<_, AppError>(Json(model))
            }
        });

        let update = put({
            let service = self.service.clone();
            move |ValidPath(id): ValidPath<i32>, ValidJson(payload): ValidJson<S::Payload>| async move {
                let model = service.update(id, payload).await?;
                Ok::<_, AppError>(Json(model))
            }
        });

        let remove = delete({
            let service = self.service;
            move |ValidPath(id): ValidPath<i32>| async move {
                let model = service.delete(id).await?;
                Ok::<_, AppError>(Json(model))
            }
        });

        Router::<State>::new()
            .route(self.base_path, create.merge(list))
            .route(&id_path, find.merge(update).merge(remove))
    }
}
