use std::{sync::Arc, time::Duration};

use sea_orm::DatabaseConnection;
use service::user::{SeaOrmUserRepository, UserService};

/// Shared application state handed to every handler through axum's `State`.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<UserService<SeaOrmUserRepository>>,
    /// How long `GET /users/slow` blocks.
    pub slow_delay: Duration,
}

impl AppState {
    pub fn new(db: DatabaseConnection, slow_delay: Duration) -> Self {
        let users = UserService::new(db, Arc::new(SeaOrmUserRepository));
        Self { users: Arc::new(users), slow_delay }
    }
}
