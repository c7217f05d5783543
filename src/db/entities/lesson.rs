use base_entity_derive::base_entity;
use sea_orm::entity::prelude::*;

#[base_entity(label = "Lesson")]
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize, DeriveEntityModel)]
#[sea_orm(table_name = "lessons")]
pub struct Model {
    pub title: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl Related<super::teacher::Entity> for Entity {
    fn to() -> RelationDef {
        super::teacher_lesson::Relation::Teacher.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::teacher_lesson::Relation::Lesson.def().rev())
    }
}

impl Related<super::student::Entity> for Entity {
    fn to() -> RelationDef {
        super::student_lesson::Relation::Student.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::student_lesson::Relation::Lesson.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
