use sea_orm::{entity::prelude::*, ActiveValue::NotSet, Set};
use serde::{Deserialize, Serialize};

/// Stored user row. Serialized as-is by `PUT /users/{id}`, so the field names
/// here are the column names of the `users` table.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl ActiveModel {
    /// A not-yet-persisted user; the identity is left for the database to assign.
    pub fn new_user(name: Option<String>) -> Self {
        Self { id: NotSet, name: Set(name) }
    }
}
