/**
 * User Model and Account Store
 *
 * This module owns the user table. The store is an explicit handle around
 * the connection pool, created at startup and passed to handlers through
 * application state.
 *
 * # Uniqueness
 *
 * Usernames are unique. Registration does not check-then-insert: the INSERT
 * itself carries the uniqueness decision via the UNIQUE column constraint,
 * so two concurrent registrations of the same username cannot both succeed.
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;
use thiserror::Error;

/// User struct representing a row in the users table
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    /// Unique user ID, assigned by the store on creation
    pub id: i64,
    /// Username (unique, non-empty, immutable after creation)
    pub username: String,
    /// Hashed password (bcrypt), never the plaintext
    pub password_hash: String,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
}

/// Errors from account store operations
#[derive(Debug, Error)]
pub enum StoreError {
    /// A record with this username already exists
    #[error("username already exists")]
    DuplicateUsername,
    /// Underlying database failure
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

/// Handle to the user table
///
/// Cheap to clone; all clones share the same pool.
#[derive(Clone)]
pub struct AccountStore {
    pool: SqlitePool,
}

impl AccountStore {
    /// Wrap a connection pool in a store handle
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Create the users table if it does not exist
    ///
    /// Called once at startup, mirroring the schema the service expects:
    /// integer primary key, unique username, non-null password hash.
    pub async fn init_schema(&self) -> Result<(), StoreError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS users (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                username TEXT NOT NULL UNIQUE,
                password_hash TEXT NOT NULL,
                created_at TEXT NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Create a new user
    ///
    /// # Arguments
    /// * `username` - User's chosen username
    /// * `password_hash` - Hashed password
    ///
    /// # Returns
    /// The created user, or `StoreError::DuplicateUsername` if the username
    /// is already taken. The check and the insert are one atomic statement.
    pub async fn create(&self, username: &str, password_hash: &str) -> Result<User, StoreError> {
        let now = Utc::now();

        let result = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (username, password_hash, created_at)
            VALUES (?1, ?2, ?3)
            RETURNING id, username, password_hash, created_at
            "#,
        )
        .bind(username)
        .bind(password_hash)
        .bind(now)
        .fetch_one(&self.pool)
        .await;

        match result {
            Ok(user) => Ok(user),
            Err(sqlx::Error::Database(e)) if e.is_unique_violation() => {
                Err(StoreError::DuplicateUsername)
            }
            Err(e) => Err(StoreError::Database(e)),
        }
    }

    /// Get user by username
    ///
    /// # Returns
    /// User or None if not found
    pub async fn find_by_username(&self, username: &str) -> Result<Option<User>, StoreError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, username, password_hash, created_at
            FROM users
            WHERE username = ?1
            "#,
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    /// Get user by ID
    ///
    /// # Returns
    /// User or None if not found
    pub async fn find_by_id(&self, id: i64) -> Result<Option<User>, StoreError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, username, password_hash, created_at
            FROM users
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }
}
