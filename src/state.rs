use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::config::AppConfig;

pub struct AppState {
    pub config: AppConfig,
    /// Pool shared by every DAO built from this state.
    pub db: Arc<DatabaseConnection>,
}

impl AppState {
    pub fn new(config: AppConfig, db: DatabaseConnection) -> Arc<Self> {
        Arc::new(Self {
            config,
            db: Arc::new(db),
        })
    }
}
