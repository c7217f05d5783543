use async_trait::async_trait;
use sea_orm::Set;
use serde::Deserialize;

use crate::{
    db::dao::{LessonDao, StudentLessonDao, TeacherLessonDao},
    db::entities::{lesson, student, teacher},
    error::AppError,
    services::crud_service::CrudService,
};

#[derive(Debug, Clone, Deserialize)]
pub struct LessonPayload {
    pub title: String,
}

#[derive(Clone)]
pub struct LessonService {
    lessons: LessonDao,
    teacher_links: TeacherLessonDao,
    student_links: StudentLessonDao,
}

impl LessonService {
    pub fn new(
        lessons: LessonDao,
        teacher_links: TeacherLessonDao,
        student_links: StudentLessonDao,
    ) -> Self {
        Self {
            lessons,
            teacher_links,
            student_links,
        }
    }

    /// Teachers linked through `teacher_lesson`, one entry per link row.
    pub async fn teachers(&self, lesson_id: i32) -> Result<Vec<teacher::Model>, AppError> {
        Ok(self.teacher_links.list_by_right(lesson_id).await?)
    }

    pub async fn students(&self, lesson_id: i32) -> Result<Vec<student::Model>, AppError> {
        Ok(self.student_links.list_by_right(lesson_id).await?)
    }
}

#[async_trait]
impl CrudService for LessonService {
    type Model = lesson::Model;
    type Payload = LessonPayload;

    async fn list_all(&self) -> Result<Vec<lesson::Model>, AppError> {
        Ok(self.lessons.list_all().await?)
    }

    async fn find_by_id(&self, id: i32) -> Result<lesson::Model, AppError> {
        Ok(self.lessons.find_by_id(id).await?)
    }

    async fn create(&self, payload: LessonPayload) -> Result<lesson::Model, AppError> {
        let model = lesson::ActiveModel {
            title: Set(payload.title),
            ..Default::default()
        };
        Ok(self.lessons.create(model).await?)
    }

    async fn update(&self, id: i32, payload: LessonPayload) -> Result<lesson::Model, AppError> {
        let model = self
            .lessons
            .update(id, move |active| {
                active.title = Set(payload.title);
            })
            .await?;
        Ok(model)
    }

    async fn delete(&self, id: i32) -> Result<lesson::Model, AppError> {
        Ok(self.lessons.delete(id).await?)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::http::StatusCode;
    use sea_orm::{DatabaseBackend, DatabaseConnection, DbErr, MockDatabase};

    use super::{LessonPayload, LessonService};
    use crate::{
        db::entities::{lesson, teacher},
        services::{ServiceContext, crud_service::CrudService},
    };

    fn service(db: &Arc<DatabaseConnection>) -> LessonService {
        ServiceContext::new(db).lesson()
    }

    #[tokio::test]
    async fn update_of_missing_lesson_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<lesson::Model>::new()])
            .into_connection();
        let db = Arc::new(db);

        let err = service(&db)
            .update(
                9999,
                LessonPayload {
                    title: "Physics".to_string(),
                },
            )
            .await
            .expect_err("update should fail");

        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.message(), "Lesson not found (id=9999)");
    }

    #[tokio::test]
    async fn create_failure_is_a_store_error() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors([DbErr::Custom("disk full".to_string())])
            .into_connection();
        let db = Arc::new(db);

        let err = service(&db)
            .create(LessonPayload {
                title: "Math".to_string(),
            })
            .await
            .expect_err("create should fail");

        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.message(), "Store error");
    }

    #[tokio::test]
    async fn teachers_of_lesson_go_through_the_pivot() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([[lesson::Model {
                id: 2,
                title: "Math".to_string(),
            }]])
            .append_query_results([[teacher::Model {
                id: 1,
                name: "Ada".to_string(),
                lesson_id: None,
            }]])
            .into_connection();
        let db = Arc::new(db);

        let teachers = service(&db).teachers(2).await.expect("listing should succeed");
        assert_eq!(teachers.len(), 1);
        assert_eq!(teachers[0].name, "Ada");
    }
}
