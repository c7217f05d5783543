pub mod context;
pub mod crud_service;
pub mod lesson_service;
pub mod student_service;
pub mod teacher_service;

pub use context::ServiceContext;
