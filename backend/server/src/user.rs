//! # Users
//!
//! Plain account records. Registration and login belong to an outer auth
//! layer; nothing here is routed yet, accounts are only created and loaded.

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::{AnyPool, Row, any::AnyRow};

use crate::error::AppError;

pub const MAX_USERNAME_LEN: usize = 80;

const USER_COLUMNS: &str = "id, username, progress, last_word_date";

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct UserAccount {
    pub id: i64,
    pub username: String,
    pub progress: i64,
    pub last_word_date: DateTime<Utc>,
}

impl UserAccount {
    fn from_row(row: &AnyRow) -> Result<Self, sqlx::Error> {
        let last_word_date: String = row.try_get("last_word_date")?;
        let last_word_date = DateTime::parse_from_rfc3339(&last_word_date)
            .map_err(|e| sqlx::Error::ColumnDecode {
                index: "last_word_date".to_string(),
                source: Box::new(e),
            })?
            .with_timezone(&Utc);

        Ok(Self {
            id: row.try_get("id")?,
            username: row.try_get("username")?,
            progress: row.try_get("progress")?,
            last_word_date,
        })
    }
}

pub fn validate_username(username: &str) -> Result<&str, AppError> {
    let username = username.trim();

    if username.is_empty() {
        return Err(AppError::InvalidUsername("must not be empty"));
    }

    if username.chars().count() > MAX_USERNAME_LEN {
        return Err(AppError::InvalidUsername("must be at most 80 characters"));
    }

    Ok(username)
}

pub async fn create_user(pool: &AnyPool, username: &str) -> Result<UserAccount, AppError> {
    let username = validate_username(username)?;

    let query = format!(
        "INSERT INTO users (username, progress, last_word_date) VALUES ($1, 0, $2) RETURNING {USER_COLUMNS}"
    );
    let inserted = sqlx::query(&query)
        .bind(username)
        .bind(Utc::now().to_rfc3339())
        .fetch_one(pool)
        .await;

    match inserted {
        Ok(row) => Ok(UserAccount::from_row(&row)?),
        Err(e) if is_unique_violation(&e) => Err(AppError::UsernameTaken(username.to_string())),
        Err(e) => Err(e.into()),
    }
}

pub async fn load_user(pool: &AnyPool, id: i64) -> Result<Option<UserAccount>, AppError> {
    let query = format!("SELECT {USER_COLUMNS} FROM users WHERE id = $1");
    let row = sqlx::query(&query).bind(id).fetch_optional(pool).await?;

    Ok(row.as_ref().map(UserAccount::from_row).transpose()?)
}

pub async fn find_user(pool: &AnyPool, username: &str) -> Result<Option<UserAccount>, AppError> {
    let query = format!("SELECT {USER_COLUMNS} FROM users WHERE username = $1");
    let row = sqlx::query(&query)
        .bind(username)
        .fetch_optional(pool)
        .await?;

    Ok(row.as_ref().map(UserAccount::from_row).transpose()?)
}

fn is_unique_violation(e: &sqlx::Error) -> bool {
    e.as_database_error()
        .is_some_and(|db_error| db_error.is_unique_violation())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::init_database;

    async fn pool() -> AnyPool {
        init_database("sqlite::memory:").await.unwrap()
    }

    #[tokio::test]
    async fn test_create_then_load() {
        let pool = pool().await;

        let created = create_user(&pool, "ayse").await.unwrap();
        assert_eq!(created.username, "ayse");
        assert_eq!(created.progress, 0);

        let loaded = load_user(&pool, created.id).await.unwrap();
        assert_eq!(loaded, Some(created.clone()));

        let found = find_user(&pool, "ayse").await.unwrap();
        assert_eq!(found, Some(created));
    }

    #[tokio::test]
    async fn test_missing_user() {
        let pool = pool().await;

        assert_eq!(load_user(&pool, 42).await.unwrap(), None);
        assert_eq!(find_user(&pool, "nobody").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_duplicate_username() {
        let pool = pool().await;

        create_user(&pool, "mehmet").await.unwrap();
        let err = create_user(&pool, "mehmet").await.unwrap_err();

        assert!(matches!(err, AppError::UsernameTaken(name) if name == "mehmet"));
    }

    #[tokio::test]
    async fn test_username_trimmed() {
        let pool = pool().await;

        let created = create_user(&pool, "  zeynep ").await.unwrap();
        assert_eq!(created.username, "zeynep");

        assert!(matches!(
            create_user(&pool, "zeynep").await,
            Err(AppError::UsernameTaken(_))
        ));
    }

    #[test]
    fn test_username_validation() {
        assert!(matches!(validate_username("   "), Err(AppError::InvalidUsername(_))));
        assert!(validate_username(&"a".repeat(MAX_USERNAME_LEN)).is_ok());
        assert!(matches!(
            validate_username(&"a".repeat(MAX_USERNAME_LEN + 1)),
            Err(AppError::InvalidUsername(_))
        ));
        // length counts characters, not bytes
        assert!(validate_username(&"ş".repeat(MAX_USERNAME_LEN)).is_ok());
    }
}
