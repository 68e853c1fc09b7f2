//! services/api/src/adapters/store.rs
//!
//! This module contains the user-store adapter, which is the concrete
//! implementation of the `UserStore` port from the `core` crate. It handles
//! all interactions with the SQLite database using `sqlx`.

use async_trait::async_trait;
use listing_insights_core::domain::UserCredentials;
use listing_insights_core::ports::{PortError, PortResult, UserStore};
use sqlx::sqlite::{SqliteConnectOptions, SqliteConnection};
use sqlx::{Connection, FromRow};
use std::path::PathBuf;

//=========================================================================================
// The Main Adapter Struct
//=========================================================================================

/// A SQLite adapter that implements the `UserStore` port.
///
/// No pool is held: each operation opens its own connection and drops it
/// before returning, so the file is only ever touched inside one request.
/// Concurrent writers rely on SQLite's own serialization.
#[derive(Clone)]
pub struct SqliteUserStore {
    path: PathBuf,
}

impl SqliteUserStore {
    /// Creates a new `SqliteUserStore` backed by the file at `path`.
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    async fn connect(&self) -> PortResult<SqliteConnection> {
        // The store file may live in a directory that does not exist yet.
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)
                    .map_err(|e| PortError::Unexpected(e.to_string()))?;
            }
        }

        let options = SqliteConnectOptions::new()
            .filename(&self.path)
            .create_if_missing(true);
        SqliteConnection::connect_with(&options)
            .await
            .map_err(|e| PortError::Unexpected(e.to_string()))
    }
}

//=========================================================================================
// "Impure" Database Record Structs
//=========================================================================================

#[derive(FromRow)]
struct UserRecord {
    username: String,
    password_hash: String,
}
impl UserRecord {
    fn to_domain(self) -> UserCredentials {
        UserCredentials {
            username: self.username,
            password_hash: self.password_hash,
        }
    }
}

//=========================================================================================
// `UserStore` Trait Implementation
//=========================================================================================

#[async_trait]
impl UserStore for SqliteUserStore {
    async fn upsert_user(&self, username: &str, password_hash: &str) -> PortResult<()> {
        let mut conn = self.connect().await?;

        sqlx::query(
            "CREATE TABLE IF NOT EXISTS users (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                username TEXT UNIQUE NOT NULL,
                password_hash TEXT NOT NULL
            )",
        )
        .execute(&mut conn)
        .await
        .map_err(|e| PortError::Unexpected(e.to_string()))?;

        sqlx::query("INSERT OR REPLACE INTO users (username, password_hash) VALUES (?1, ?2)")
            .bind(username)
            .bind(password_hash)
            .execute(&mut conn)
            .await
            .map_err(|e| PortError::Unexpected(e.to_string()))?;

        Ok(())
    }

    async fn find_user(&self, username: &str) -> PortResult<Option<UserCredentials>> {
        let mut conn = self.connect().await?;

        let record = sqlx::query_as::<_, UserRecord>(
            "SELECT username, password_hash FROM users WHERE username = ?1 LIMIT 1",
        )
        .bind(username)
        .fetch_optional(&mut conn)
        .await
        .map_err(|e| PortError::Unexpected(e.to_string()))?;

        Ok(record.map(UserRecord::to_domain))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_store() -> (tempfile::TempDir, SqliteUserStore) {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = SqliteUserStore::new(dir.path().join("auth.db"));
        (dir, store)
    }

    #[tokio::test]
    async fn upsert_then_find_round_trips() {
        let (_dir, store) = temp_store();
        store.upsert_user("admin", "hash-one").await.unwrap();

        let found = store.find_user("admin").await.unwrap().unwrap();
        assert_eq!(found.username, "admin");
        assert_eq!(found.password_hash, "hash-one");
    }

    #[tokio::test]
    async fn upsert_overwrites_existing_hash() {
        let (_dir, store) = temp_store();
        store.upsert_user("admin", "hash-one").await.unwrap();
        store.upsert_user("admin", "hash-two").await.unwrap();

        let found = store.find_user("admin").await.unwrap().unwrap();
        assert_eq!(found.password_hash, "hash-two");
    }

    #[tokio::test]
    async fn find_unknown_user_returns_none() {
        let (_dir, store) = temp_store();
        store.upsert_user("admin", "hash").await.unwrap();

        assert!(store.find_user("nobody").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn store_creates_missing_parent_directory() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = SqliteUserStore::new(dir.path().join("nested/dir/auth.db"));
        store.upsert_user("admin", "hash").await.unwrap();

        assert!(store.find_user("admin").await.unwrap().is_some());
    }
}
