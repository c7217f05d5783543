pub mod lesson;
pub mod student;
pub mod student_lesson;
pub mod teacher;
pub mod teacher_lesson;
