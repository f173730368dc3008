use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use models::user;

/// Wire form of a user. Inbound, `id` is ignored and a missing `name` is null.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UserDto {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub name: Option<String>,
}

impl From<user::Model> for UserDto {
    fn from(u: user::Model) -> Self {
        Self { id: Some(u.id), name: u.name }
    }
}
