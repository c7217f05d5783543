mod postgres;
mod registry;
mod sqlite;

use std::sync::Arc;

pub use registry::{DbProvider, DbProviderId, DbProviders};

use self::{postgres::PostgresDbProvider, sqlite::SqliteDbProvider};

/// Postgres is what production runs on; SQLite backs local runs and tests.
pub fn default_registry() -> anyhow::Result<DbProviders> {
    DbProviders::new()
        .with_provider(Arc::new(PostgresDbProvider))?
        .with_provider(Arc::new(SqliteDbProvider))
}

pub fn resolve(url: &str) -> anyhow::Result<Arc<dyn DbProvider>> {
    default_registry()?.provider_for_url(url)
}
