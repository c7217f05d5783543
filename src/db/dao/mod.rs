pub mod base;
pub mod base_traits;
mod context;
pub mod error;
pub mod pivot;

use crate::db::entities::{lesson, student, student_lesson, teacher, teacher_lesson};

pub use base::EntityDao;
pub use base_traits::{EntityLabel, HasIdColumn, PivotEntity};
pub use context::DaoContext;
pub use error::{DaoLayerError, DaoResult};
pub use pivot::PivotDao;

pub type LessonDao = EntityDao<lesson::Entity>;
pub type TeacherDao = EntityDao<teacher::Entity>;
pub type StudentDao = EntityDao<student::Entity>;
pub type TeacherLessonDao = PivotDao<teacher_lesson::Entity>;
pub type StudentLessonDao = PivotDao<student_lesson::Entity>;
