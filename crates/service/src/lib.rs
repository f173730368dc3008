//! Service layer for the user resource.
//! - `user::repository` hides SeaORM behind a small data-access trait.
//! - `user::service` owns transaction boundaries and absence semantics.

pub mod errors;
pub mod user;
#[cfg(test)]
pub mod test_support;
