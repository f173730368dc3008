use std::sync::Arc;

use sea_orm::{DatabaseConnection, IntoActiveModel, Set, TransactionTrait};
use tracing::{debug, info, instrument};

use models::user;

use crate::errors::ServiceError;
use crate::user::repository::UserRepository;

/// Application service for users.
///
/// Writes run in their own transaction: `commit` on success, and any early
/// return drops the uncommitted transaction, which rolls it back.
pub struct UserService<R: UserRepository> {
    db: DatabaseConnection,
    repo: Arc<R>,
}

impl<R: UserRepository> UserService<R> {
    pub fn new(db: DatabaseConnection, repo: Arc<R>) -> Self { Self { db, repo } }

    #[instrument(skip(self))]
    pub async fn create_user(&self, name: Option<String>) -> Result<user::Model, ServiceError> {
        let txn = self.db.begin().await?;
        let created = self.repo.save(&txn, user::ActiveModel::new_user(name)).await?;
        txn.commit().await?;
        info!(id = created.id, "user_created");
        Ok(created)
    }

    pub async fn get_all_users(&self) -> Result<Vec<user::Model>, ServiceError> {
        self.repo.list_all(&self.db).await
    }

    pub async fn get_user(&self, id: i64) -> Result<Option<user::Model>, ServiceError> {
        self.repo.find_by_id(&self.db, id).await
    }

    /// Rename a user. `Ok(None)` means no user has this id.
    ///
    /// Only the `name` column is marked changed on the loaded row, so the
    /// write touches that column alone.
    #[instrument(skip(self))]
    pub async fn update_user(&self, id: i64, name: Option<String>) -> Result<Option<user::Model>, ServiceError> {
        let txn = self.db.begin().await?;
        let Some(found) = self.repo.find_by_id(&txn, id).await? else {
            debug!(id, "update_target_missing");
            return Ok(None);
        };
        let mut am = found.into_active_model();
        am.name = Set(name);
        let updated = self.repo.save(&txn, am).await?;
        txn.commit().await?;
        info!(id, "user_updated");
        Ok(Some(updated))
    }

    #[instrument(skip(self))]
    pub async fn delete_user(&self, id: i64) -> Result<bool, ServiceError> {
        let txn = self.db.begin().await?;
        let deleted = self.repo.delete_by_id(&txn, id).await?;
        txn.commit().await?;
        info!(id, deleted, "user_delete");
        Ok(deleted)
    }
}
