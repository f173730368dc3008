use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, ConnectionTrait, EntityTrait, TryIntoModel};

use models::user;

use crate::errors::ServiceError;

/// Data access for users. Every call runs on the connection it is handed, so
/// the caller decides whether it joins a transaction.
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn list_all<C>(&self, conn: &C) -> Result<Vec<user::Model>, ServiceError>
    where
        C: ConnectionTrait;

    async fn find_by_id<C>(&self, conn: &C, id: i64) -> Result<Option<user::Model>, ServiceError>
    where
        C: ConnectionTrait;

    /// Insert when the identity is unset, otherwise update the changed columns.
    async fn save<C>(&self, conn: &C, user: user::ActiveModel) -> Result<user::Model, ServiceError>
    where
        C: ConnectionTrait;

    /// Returns whether a row was removed.
    async fn delete_by_id<C>(&self, conn: &C, id: i64) -> Result<bool, ServiceError>
    where
        C: ConnectionTrait;
}

/// SeaORM-backed repository implementation.
#[derive(Debug, Clone, Copy, Default)]
pub struct SeaOrmUserRepository;

#[async_trait]
impl UserRepository for SeaOrmUserRepository {
    async fn list_all<C>(&self, conn: &C) -> Result<Vec<user::Model>, ServiceError>
    where
        C: ConnectionTrait,
    {
        Ok(user::Entity::find().all(conn).await?)
    }

    async fn find_by_id<C>(&self, conn: &C, id: i64) -> Result<Option<user::Model>, ServiceError>
    where
        C: ConnectionTrait,
    {
        Ok(user::Entity::find_by_id(id).one(conn).await?)
    }

    async fn save<C>(&self, conn: &C, user: user::ActiveModel) -> Result<user::Model, ServiceError>
    where
        C: ConnectionTrait,
    {
        let saved = user.save(conn).await?;
        Ok(saved.try_into_model()?)
    }

    async fn delete_by_id<C>(&self, conn: &C, id: i64) -> Result<bool, ServiceError>
    where
        C: ConnectionTrait,
    {
        let res = user::Entity::delete_by_id(id).exec(conn).await?;
        Ok(res.rows_affected > 0)
    }
}
