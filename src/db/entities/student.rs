use base_entity_derive::base_entity;
use sea_orm::entity::prelude::*;

#[base_entity(label = "Student")]
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize, DeriveEntityModel)]
#[sea_orm(table_name = "students")]
pub struct Model {
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl Related<super::lesson::Entity> for Entity {
    fn to() -> RelationDef {
        super::student_lesson::Relation::Lesson.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::student_lesson::Relation::Student.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
