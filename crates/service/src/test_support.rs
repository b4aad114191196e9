#![cfg(test)]
use configs::DatabaseConfig;
use sea_orm::DatabaseConnection;

/// Fresh in-memory SQLite database with migrations and sample data applied.
pub async fn get_db() -> Result<DatabaseConnection, anyhow::Error> {
    models::db::connect(&DatabaseConfig::in_memory()).await
}
