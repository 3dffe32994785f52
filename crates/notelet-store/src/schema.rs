//! Schema definitions and migration utilities.
//!
//! The schema is embedded at compile time and applied on startup. The
//! migration SQL is idempotent, so running it repeatedly is safe.

use sqlx::PgPool;

use crate::error::{StoreError, StoreResult};

/// Embedded migration SQL for the core schema (001_schema.sql).
pub const SCHEMA_MIGRATION: &str = include_str!("../../../migrations/001_schema.sql");

/// Run all pending migrations against the database.
///
/// # Errors
///
/// Returns an error if the migration fails to execute.
pub async fn run_migrations(pool: &PgPool) -> StoreResult<()> {
    tracing::info!("Running database migrations...");

    sqlx::raw_sql(SCHEMA_MIGRATION)
        .execute(pool)
        .await
        .map_err(|e| StoreError::MigrationError(format!("Schema migration failed: {}", e)))?;

    tracing::info!("Migrations completed successfully");
    Ok(())
}

/// Check if the schema has been initialized.
///
/// Returns true if the `notes` table exists.
pub async fn is_schema_initialized(pool: &PgPool) -> StoreResult<bool> {
    let result: (bool,) = sqlx::query_as(
        r#"
        SELECT EXISTS (
            SELECT FROM information_schema.tables
            WHERE table_schema = 'public'
            AND table_name = 'notes'
        )
        "#,
    )
    .fetch_one(pool)
    .await?;

    Ok(result.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_migration_embedded() {
        assert!(SCHEMA_MIGRATION.contains("CREATE TABLE IF NOT EXISTS users"));
        assert!(SCHEMA_MIGRATION.contains("CREATE TABLE IF NOT EXISTS notes"));
        assert!(SCHEMA_MIGRATION.contains("CREATE TABLE IF NOT EXISTS shared_notes"));
    }

    #[test]
    fn shared_notes_pair_is_unique() {
        // The compound primary key is the uniqueness safeguard for
        // concurrent duplicate shares.
        assert!(SCHEMA_MIGRATION.contains("PRIMARY KEY (note_id, shared_with)"));
    }

    #[test]
    fn visibility_is_a_closed_set() {
        assert!(SCHEMA_MIGRATION.contains("CHECK (visibility IN ('private', 'shared', 'public'))"));
    }

    #[test]
    fn email_is_unique() {
        assert!(SCHEMA_MIGRATION.contains("email TEXT NOT NULL UNIQUE"));
    }
}
