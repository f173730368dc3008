use sea_orm::DbErr;
use thiserror::Error;

/// Failures surfaced by the service layer. "Not found" is not an error here;
/// lookups return `Option` instead.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("database error: {0}")]
    Db(#[from] DbErr),
}
