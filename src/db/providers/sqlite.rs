use anyhow::Result;
use async_trait::async_trait;
use sea_orm::{ConnectionTrait, Database, DatabaseConnection};

use super::registry::{DbProvider, DbProviderId, pool_options};
use crate::config::DatabaseConfig;

const SQLITE_BUSY_TIMEOUT_MS: u64 = 5_000;

pub struct SqliteDbProvider;

impl SqliteDbProvider {
    // Every connection to `:memory:` opens a separate database.
    fn is_in_memory(url: &str) -> bool {
        url.contains(":memory:") || url.contains("mode=memory")
    }
}

#[async_trait]
impl DbProvider for SqliteDbProvider {
    fn id(&self) -> DbProviderId {
        DbProviderId::Sqlite
    }

    fn supports_url(&self, url: &str) -> bool {
        url.trim().to_ascii_lowercase().starts_with("sqlite:")
    }

    async fn connect(&self, cfg: &DatabaseConfig) -> Result<DatabaseConnection> {
        let max_connections = if Self::is_in_memory(&cfg.url) {
            1
        } else {
            cfg.max_connections
        };

        let db = Database::connect(pool_options(cfg, max_connections)).await?;
        Ok(db)
    }

    async fn post_connect(&self, db: &DatabaseConnection, _cfg: &DatabaseConfig) -> Result<()> {
        db.execute_unprepared("PRAGMA foreign_keys = ON").await?;
        db.execute_unprepared(&format!("PRAGMA busy_timeout = {SQLITE_BUSY_TIMEOUT_MS}"))
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::SqliteDbProvider;

    #[test]
    fn detects_in_memory_urls() {
        assert!(SqliteDbProvider::is_in_memory("sqlite::memory:"));
        assert!(SqliteDbProvider::is_in_memory("sqlite://file:app?mode=memory&cache=shared"));
        assert!(!SqliteDbProvider::is_in_memory("sqlite://schedule.db?mode=rwc"));
    }
}
