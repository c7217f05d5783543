use std::sync::Arc;

use sea_orm::DatabaseConnection;

use super::{LessonDao, StudentDao, StudentLessonDao, TeacherDao, TeacherLessonDao};

#[derive(Clone)]
pub struct DaoContext {
    db: Arc<DatabaseConnection>,
}

impl DaoContext {
    pub fn new(db: &Arc<DatabaseConnection>) -> Self {
        Self { db: Arc::clone(db) }
    }

    pub fn lesson(&self) -> LessonDao {
        LessonDao::new(&self.db)
    }

    pub fn teacher(&self) -> TeacherDao {
        TeacherDao::new(&self.db)
    }

    pub fn student(&self) -> StudentDao {
        StudentDao::new(&self.db)
    }

    pub fn teacher_lesson(&self) -> TeacherLessonDao {
        TeacherLessonDao::new(&self.db)
    }

    pub fn student_lesson(&self) -> StudentLessonDao {
        StudentLessonDao::new(&self.db)
    }
}
