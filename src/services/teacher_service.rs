use async_trait::async_trait;
use sea_orm::Set;
use serde::Deserialize;

use crate::{
    db::dao::{LessonDao, TeacherDao, TeacherLessonDao},
    db::entities::{lesson, teacher},
    error::AppError,
    services::crud_service::CrudService,
};

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeacherPayload {
    pub name: String,
    #[serde(default)]
    pub lesson_id: Option<i32>,
}

#[derive(Clone)]
pub struct TeacherService {
    teachers: TeacherDao,
    lessons: LessonDao,
    lesson_links: TeacherLessonDao,
}

impl TeacherService {
    pub fn new(teachers: TeacherDao, lessons: LessonDao, lesson_links: TeacherLessonDao) -> Self {
        Self {
            teachers,
            lessons,
            lesson_links,
        }
    }

    /// Records that the teacher teaches the lesson and returns the teacher.
    pub async fn teach(&self, teacher_id: i32, lesson_id: i32) -> Result<teacher::Model, AppError> {
        let teacher = self.teachers.find_by_id(teacher_id).await?;
        self.lessons.find_by_id(lesson_id).await?;

        self.lesson_links.link(teacher_id, lesson_id).await?;
        tracing::info!(teacher_id, lesson_id, "teacher linked to lesson");
        Ok(teacher)
    }

    pub async fn lessons(&self, teacher_id: i32) -> Result<Vec<lesson::Model>, AppError> {
        Ok(self.lesson_links.list_by_left(teacher_id).await?)
    }

    /// The lesson referenced by `lesson_id`, not one of the linked lessons.
    pub async fn home_lesson(&self, teacher_id: i32) -> Result<Option<lesson::Model>, AppError> {
        let teacher = self.teachers.find_by_id(teacher_id).await?;
        match teacher.lesson_id {
            Some(lesson_id) => Ok(Some(self.lessons.find_by_id(lesson_id).await?)),
            None => Ok(None),
        }
    }
}

#[async_trait]
impl CrudService for TeacherService {
    type Model = teacher::Model;
    type Payload = TeacherPayload;

    async fn list_all(&self) -> Result<Vec<teacher::Model>, AppError> {
        Ok(self.teachers.list_all().await?)
    }

    async fn find_by_id(&self, id: i32) -> Result<teacher::Model, AppError> {
        Ok(self.teachers.find_by_id(id).await?)
    }

    async fn create(&self, payload: TeacherPayload) -> Result<teacher::Model, AppError> {
        let model = teacher::ActiveModel {
            name: Set(payload.name),
            lesson_id: Set(payload.lesson_id),
            ..Default::default()
        };
        Ok(self.teachers.create(model).await?)
    }

    async fn update(&self, id: i32, payload: TeacherPayload) -> Result<teacher::Model, AppError> {
        let model = self
            .teachers
            .update(id, move |active| {
                active.name = Set(payload.name);
                active.lesson_id = Set(payload.lesson_id);
            })
            .await?;
        Ok(model)
    }

    async fn delete(&self, id: i32) -> Result<teacher::Model, AppError> {
        Ok(self.teachers.delete(id).await?)
    }
}
