use async_trait::async_trait;
use sea_orm::Set;
use serde::Deserialize;

use crate::{
    db::dao::{LessonDao, StudentDao, StudentLessonDao},
    db::entities::{lesson, student},
    error::AppError,
    services::crud_service::CrudService,
};

#[derive(Debug, Clone, Deserialize)]
pub struct StudentPayload {
    pub name: String,
}

#[derive(Clone)]
pub struct StudentService {
    students: StudentDao,
    lessons: LessonDao,
    lesson_links: StudentLessonDao,
}

impl StudentService {
    pub fn new(students: StudentDao, lessons: LessonDao, lesson_links: StudentLessonDao) -> Self {
        Self {
            students,
            lessons,
            lesson_links,
        }
    }

    /// Enrolls the student in the lesson and returns the student.
    ///
    /// Both ids are resolved before the link is written, and enrolling twice
    /// stores a second link.
    pub async fn enroll(&self, student_id: i32, lesson_id: i32) -> Result<student::Model, AppError> {
        let student = self.students.find_by_id(student_id).await?;
        self.lessons.find_by_id(lesson_id).await?;

        self.lesson_links.link(student_id, lesson_id).await?;
        tracing::info!(student_id, lesson_id, "student enrolled in lesson");
        Ok(student)
    }

    pub async fn lessons(&self, student_id: i32) -> Result<Vec<lesson::Model>, AppError> {
        Ok(self.lesson_links.list_by_left(student_id).await?)
    }
}

#[async_trait]
impl CrudService for StudentService {
    type Model = student::Model;
    type Payload = StudentPayload;

    async fn list_all(&self) -> Result<Vec<student::Model>, AppError> {
        Ok(self.students.list_all().await?)
    }

    async fn find_by_id(&self, id: i32) -> Result<student::Model, AppError> {
        Ok(self.students.find_by_id(id).await?)
    }

    async fn create(&self, payload: StudentPayload) -> Result<student::Model, AppError> {
        let model = student::ActiveModel {
            name: Set(payload.name),
            ..Default::default()
        };
        Ok(self.students.create(model).await?)
    }

    async fn update(&self, id: i32, payload: StudentPayload) -> Result<student::Model, AppError> {
        let model = self
            .students
            .update(id, move |active| {
                active.name = Set(payload.name);
            })
            .await?;
        Ok(model)
    }

    async fn delete(&self, id: i32) -> Result<student::Model, AppError> {
        Ok(self.students.delete(id).await?)
    }
}
