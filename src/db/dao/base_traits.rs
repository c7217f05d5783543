use sea_orm::{EntityTrait, Related};

pub trait HasIdColumn: EntityTrait {
    fn id_column() -> Self::Column;
}

/// Name used in not-found messages, e.g. `Lesson not found (id=3)`.
pub trait EntityLabel {
    const LABEL: &'static str;
}

/// A join table linking `Left` rows to `Right` rows.
pub trait PivotEntity: EntityTrait {
    type Left: EntityTrait + EntityLabel + Related<Self::Right>;
    type Right: EntityTrait + EntityLabel + Related<Self::Left>;

    fn pair(left_id: i32, right_id: i32) -> Self::ActiveModel;
}
