//! # Database
//!
//! Relational store behind the user accounts.
//!
//! ## Tables
//! - `users`: id, unique username (max 80 chars), progress counter, last word date
//! - `words`: vocabulary mirror with a numeric difficulty, created but not yet populated
//!
//! ## Backends
//! - SQLite by default (`sqlite://turkish_learning.db?mode=rwc`)
//! - PostgreSQL when `DATABASE_URL` points at one
//!
//! Both go through the `Any` driver, so queries stick to `$N` placeholders and
//! portable column types. Timestamps are stored as RFC 3339 text.
//!
//! Schema is created once at startup with `CREATE TABLE IF NOT EXISTS`.
use std::time::Duration;

use sqlx::{
    AnyPool,
    any::{AnyPoolOptions, install_default_drivers},
};
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    Sqlite,
    Postgres,
}

impl Backend {
    pub fn from_url(database_url: &str) -> Self {
        if database_url.starts_with("postgres") {
            Backend::Postgres
        } else {
            Backend::Sqlite
        }
    }

    fn schema(self) -> [&'static str; 2] {
        match self {
            Backend::Sqlite => [
                "CREATE TABLE IF NOT EXISTS users (
                    id INTEGER PRIMARY KEY AUTOINCREMENT,
                    username VARCHAR(80) NOT NULL UNIQUE,
                    progress INTEGER NOT NULL DEFAULT 0,
                    last_word_date TEXT NOT NULL
                )",
                "CREATE TABLE IF NOT EXISTS words (
                    id INTEGER PRIMARY KEY AUTOINCREMENT,
                    turkish VARCHAR(100) NOT NULL,
                    english VARCHAR(100) NOT NULL,
                    example VARCHAR(200),
                    difficulty INTEGER DEFAULT 1
                )",
            ],
            Backend::Postgres => [
                "CREATE TABLE IF NOT EXISTS users (
                    id BIGSERIAL PRIMARY KEY,
                    username VARCHAR(80) NOT NULL UNIQUE,
                    progress BIGINT NOT NULL DEFAULT 0,
                    last_word_date TEXT NOT NULL
                )",
                "CREATE TABLE IF NOT EXISTS words (
                    id BIGSERIAL PRIMARY KEY,
                    turkish VARCHAR(100) NOT NULL,
                    english VARCHAR(100) NOT NULL,
                    example VARCHAR(200),
                    difficulty BIGINT DEFAULT 1
                )",
            ],
        }
    }
}

pub async fn init_database(database_url: &str) -> Result<AnyPool, sqlx::Error> {
    install_default_drivers();

    let backend = Backend::from_url(database_url);
    let pool = pool_options(database_url).connect(database_url).await?;

    for statement in backend.schema() {
        sqlx::query(statement).execute(&pool).await?;
    }

    info!("Database ready ({backend:?})");

    Ok(pool)
}

fn pool_options(database_url: &str) -> AnyPoolOptions {
    let options = AnyPoolOptions::new().acquire_timeout(Duration::from_secs(3));

    // every in-memory sqlite connection is its own database
    if database_url.contains(":memory:") || database_url.contains("mode=memory") {
        options
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
    } else {
        options.max_connections(5)
    }
}

#[cfg(test)]
mod tests {
    use sqlx::Row;

    use super::*;

    #[test]
    fn test_backend_from_url() {
        assert_eq!(Backend::from_url("postgresql://db/app"), Backend::Postgres);
        assert_eq!(Backend::from_url("postgres://db/app"), Backend::Postgres);
        assert_eq!(Backend::from_url("sqlite::memory:"), Backend::Sqlite);
        assert_eq!(Backend::from_url("sqlite://turkish_learning.db"), Backend::Sqlite);
    }

    #[tokio::test]
    async fn test_schema_created() {
        let pool = init_database("sqlite::memory:").await.unwrap();

        for table in ["users", "words"] {
            let row = sqlx::query(&format!("SELECT COUNT(*) AS n FROM {table}"))
                .fetch_one(&pool)
                .await
                .unwrap();
            let count: i64 = row.try_get("n").unwrap();
            assert_eq!(count, 0);
        }
    }

    #[tokio::test]
    async fn test_schema_idempotent() {
        let pool = init_database("sqlite::memory:").await.unwrap();

        for statement in Backend::Sqlite.schema() {
            sqlx::query(statement).execute(&pool).await.unwrap();
        }
    }
}
