use anyhow::Context;
use sea_orm::DatabaseConnection;
use tracing::info;

use crate::config::DatabaseConfig;

use super::{providers, schema};

pub async fn connect(cfg: &DatabaseConfig) -> anyhow::Result<DatabaseConnection> {
    let provider = providers::resolve(&cfg.url)?;
    info!(provider = %provider.id(), "connecting to database");

    let db = provider
        .connect(cfg)
        .await
        .with_context(|| format!("failed to connect using the {} provider", provider.id()))?;
    provider.post_connect(&db, cfg).await?;

    info!("syncing database schema from entities");
    schema::sync(&db)
        .await
        .context("failed to create database schema")?;
    Ok(db)
}
