use std::path::{Path, PathBuf};

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

use crate::error::StoreError;

/// The persistence service for fixed deposits.
///
/// Owns one SQLite pool bound to a file path. Constructed explicitly and
/// passed by reference to callers; there is no process-wide handle. Every
/// CRUD method acquires its own connection or transaction and releases it
/// before returning.
pub struct FdStore {
    pool: SqlitePool,
    path: PathBuf,
}

impl FdStore {
    /// Opens (or creates) the database file at `db_path`, creating parent
    /// directories when missing.
    pub async fn connect(db_path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = db_path.as_ref().to_path_buf();

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let options = SqliteConnectOptions::new()
            .filename(&path)
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await?;

        Ok(Self { pool, path })
    }

    /// Ensures the table exists. Idempotent: never drops or alters existing
    /// data, safe to call on every process start.
    pub async fn init(&self) -> Result<(), StoreError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS fixed_deposits (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                holder_name TEXT NOT NULL,
                bank_name TEXT NOT NULL,
                deposited_date TEXT NOT NULL,
                maturity_date TEXT NOT NULL,
                principal_amount TEXT NOT NULL,
                maturity_amount TEXT NOT NULL,
                interest_rate TEXT NOT NULL,
                period INTEGER
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        tracing::debug!(path = %self.path.display(), "fixed_deposits table ready");
        Ok(())
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// The database location.
    pub fn db_path(&self) -> &Path {
        &self.path
    }
}
