use base_entity_derive::base_entity;
use sea_orm::{ActiveValue::Set, entity::prelude::*};

use crate::db::dao::PivotEntity;

#[base_entity(label = "StudentLesson")]
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize, DeriveEntityModel)]
#[sea_orm(table_name = "student_lesson")]
pub struct Model {
    pub student_id: i32,
    pub lesson_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::student::Entity",
        from = "Column::StudentId",
        to = "super::student::Column::Id"
    )]
    Student,
    #[sea_orm(
        belongs_to = "super::lesson::Entity",
        from = "Column::LessonId",
        to = "super::lesson::Column::Id"
    )]
    Lesson,
}

impl PivotEntity for Entity {
    type Left = super::student::Entity;
    type Right = super::lesson::Entity;

    fn pair(student_id: i32, lesson_id: i32) -> ActiveModel {
        ActiveModel {
            student_id: Set(student_id),
            lesson_id: Set(lesson_id),
            ..Default::default()
        }
    }
}

impl ActiveModelBehavior for ActiveModel {}
