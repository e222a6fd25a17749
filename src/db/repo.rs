use async_trait::async_trait;
use sqlx::SqlitePool;
use thiserror::Error;

use crate::db::models::User;

/// Any failure reported by the backing store.
#[derive(Debug, Error)]
#[error(transparent)]
pub struct StoreError(#[from] sqlx::Error);

/// Persistence port for user documents. Every method is a single atomic
/// operation against the store.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Inserts a document with a caller-chosen id. Fails on duplicate id.
    async fn insert(&self, user: &User) -> Result<User, StoreError>;
    async fn find_all(&self) -> Result<Vec<User>, StoreError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<User>, StoreError>;
    /// Deletes and returns the document, or `None` if it did not exist.
    async fn find_and_delete(&self, id: &str) -> Result<Option<User>, StoreError>;
    /// Overwrites both fields and returns the new document, or `None` if it
    /// did not exist.
    async fn find_and_replace(
        &self,
        id: &str,
        name: &str,
        bio: &str,
    ) -> Result<Option<User>, StoreError>;
}

pub async fn create_user_table(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS users (
            _id TEXT PRIMARY KEY NOT NULL,
            name TEXT NOT NULL,
            bio TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}

#[derive(Clone)]
pub struct SqliteUserStore {
    pool: SqlitePool,
}

impl SqliteUserStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for SqliteUserStore {
    async fn insert(&self, user: &User) -> Result<User, StoreError> {
        let stored = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (_id, name, bio)
            VALUES (?, ?, ?)
            RETURNING _id, name, bio
            "#,
        )
        .bind(&user.id)
        .bind(&user.name)
        .bind(&user.bio)
        .fetch_one(&self.pool)
        .await?;

        Ok(stored)
    }

    async fn find_all(&self) -> Result<Vec<User>, StoreError> {
        let users = sqlx::query_as::<_, User>("SELECT _id, name, bio FROM users ORDER BY rowid")
            .fetch_all(&self.pool)
            .await?;

        Ok(users)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<User>, StoreError> {
        let user = sqlx::query_as::<_, User>("SELECT _id, name, bio FROM users WHERE _id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(user)
    }

    async fn find_and_delete(&self, id: &str) -> Result<Option<User>, StoreError> {
        let user = sqlx::query_as::<_, User>(
            "DELETE FROM users WHERE _id = ? RETURNING _id, name, bio",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    async fn find_and_replace(
        &self,
        id: &str,
        name: &str,
        bio: &str,
    ) -> Result<Option<User>, StoreError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            UPDATE users SET name = ?, bio = ?
            WHERE _id = ?
            RETURNING _id, name, bio
            "#,
        )
        .bind(name)
        .bind(bio)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }
}
