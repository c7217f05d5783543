use base_entity_derive::base_entity;
use sea_orm::entity::prelude::*;

#[base_entity(label = "Teacher")]
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize, DeriveEntityModel)]
#[sea_orm(table_name = "teachers")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    pub name: String,
    /// Home lesson; unrelated to the lessons linked through `teacher_lesson`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lesson_id: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::lesson::Entity",
        from = "Column::LessonId",
        to = "super::lesson::Column::Id"
    )]
    HomeLesson,
}

impl Related<super::lesson::Entity> for Entity {
    fn to() -> RelationDef {
        super::teacher_lesson::Relation::Lesson.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::teacher_lesson::Relation::Teacher.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
