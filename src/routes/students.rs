use std::sync::Arc;

use axum::{
    Json, Router,
    routing::{get, post},
};

use super::{crud_api_router::CrudApiRouter, extract::ValidPath};
use crate::{error::AppError, services::ServiceContext, state::AppState};

const BASE_PATH: &str = "/students";

pub fn router(state: Arc<AppState>) -> Router {
    let service = ServiceContext::from_state(state.as_ref()).student();

    let enrolls = post({
        let service = service.clone();
        move |ValidPath((id, lesson_id)): ValidPath<(i32, i32)>| async move {
            let student = service.enroll(id, lesson_id).await?;
            Ok::<_, AppError>(Json(student))
        }
    });

    let lessons = get({
        let service = service.clone();
        move |ValidPath(id): ValidPath<i32>| async move {
            let lessons = service.lessons(id).await?;
            Ok::<_, AppError>(Json(lessons))
        }
    });

    CrudApiRouter::new(service, BASE_PATH)
        .router()
        .route(&format!("{BASE_PATH}/{{id}}/enrolls/{{lesson_id}}"), enrolls)
        .route(&format!("{BASE_PATH}/{{id}}/lessons"), lessons)
}
