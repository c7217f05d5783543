use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::{
    db::dao::DaoContext,
    services::{
        lesson_service::LessonService, student_service::StudentService,
        teacher_service::TeacherService,
    },
    state::AppState,
};

#[derive(Clone)]
pub struct ServiceContext {
    daos: DaoContext,
}

impl ServiceContext {
    pub fn new(db: &Arc<DatabaseConnection>) -> Self {
        Self {
            daos: DaoContext::new(db),
        }
    }

    pub fn from_state(state: &AppState) -> Self {
        Self::new(&state.db)
    }

    pub fn lesson(&self) -> LessonService {
        LessonService::new(
            self.daos.lesson(),
            self.daos.teacher_lesson(),
            self.daos.student_lesson(),
        )
    }

    pub fn teacher(&self) -> TeacherService {
        TeacherService::new(
            self.daos.teacher(),
            self.daos.lesson(),
            self.daos.teacher_lesson(),
        )
    }

    pub fn student(&self) -> StudentService {
        StudentService::new(
            self.daos.student(),
            self.daos.lesson(),
            self.daos.student_lesson(),
        )
    }
}
