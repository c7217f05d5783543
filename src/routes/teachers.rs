use std::sync::Arc;

use axum::{
    Json, Router,
    routing::{get, post},
};

use super::{crud_api_router::CrudApiRouter, extract::ValidPath};
use crate::{error::AppError, services::ServiceContext, state::AppState};

const BASE_PATH: &str = "/teachers";

pub fn router(state: Arc<AppState>) -> Router {
    let service = ServiceContext::from_state(state.as_ref()).teacher();

    let teaches = post({
        let service = service.clone();
        move |ValidPath((id, lesson_id)): ValidPath<(i32, i32)>| async move {
            let teacher = service.teach(id, lesson_id).await?;
            Ok::<_, AppError>(Json(teacher))
        }
    });

    let lessons = get({
        let service = service.clone();
        move |ValidPath(id): ValidPath<i32>| async move {
            let lessons = service.lessons(id).await?;
            Ok::<_, AppError>(Json(lessons))
        }
    });

    // Serializes as `null` when the teacher has no home lesson.
    let home_lesson = get({
        let service = service.clone();
        move |ValidPath(id): ValidPath<i32>| async move {
            let lesson = service.home_lesson(id).await?;
            Ok::<_, AppError>(Json(lesson))
        }
    });

    CrudApiRouter::new(service, BASE_PATH)
        .router()
        .route(&format!("{BASE_PATH}/{{id}}/teaches/{{lesson_id}}"), teaches)
        .route(&format!("{BASE_PATH}/{{id}}/lessons"), lessons)
        .route(&format!("{BASE_PATH}/{{id}}/lesson"), home_lesson)
}
