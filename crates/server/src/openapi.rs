use utoipa::OpenApi;
use utoipa::ToSchema;

use crate::dto::UserDto;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

/// Stored record as returned by `PUT /users/{id}`.
#[derive(ToSchema)]
pub struct UserRecordDoc { pub id: i64, pub name: Option<String> }

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::users::create,
        crate::routes::users::list,
        crate::routes::users::get,
        crate::routes::users::slow,
        crate::routes::users::update,
        crate::routes::users::delete,
    ),
    components(
        schemas(
            HealthResponse,
            UserDto,
            UserRecordDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "users")
    )
)]
pub struct ApiDoc;
