use std::sync::Arc;

use axum::{Json, Router, routing::get};

use super::{crud_api_router::CrudApiRouter, extract::ValidPath};
use crate::{error::AppError, services::ServiceContext, state::AppState};

const BASE_PATH: &str = "/lessons";

pub fn router(state: Arc<AppState>) -> Router {
    let service = ServiceContext::from_state(state.as_ref()).lesson();

    let teachers = get({
        let service = service.clone();
        move |ValidPath(id): ValidPath<i32>| async move {
            let teachers = service.teachers(id).await?;
            Ok::<_, AppError>(Json(teachers))
        }
    });

    let students = get({
        let service = service.clone();
        move |ValidPath(id): ValidPath<i32>| async move {
            let students = service.students(id).await?;
            Ok::<_, AppError>(Json(students))
        }
    });

    CrudApiRouter::new(service, BASE_PATH)
        .router()
        .route(&format!("{BASE_PATH}/{{id}}/teachers"), teachers)
        .route(&format!("{BASE_PATH}/{{id}}/students"), students)
}
