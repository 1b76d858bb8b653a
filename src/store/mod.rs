//! Relational store handle.
//!
//! # Lifecycle
//! ```text
//! Store::connect(config)   open pool, foreign keys on
//!     → sync_schema()      create tables if absent
//!     → universities() / students()   repositories share the pool
//!     → close()            at shutdown, after the server drains
//! ```
//!
//! The handle is cheap to clone; every clone refers to the same pool.

pub mod schema;

use std::str::FromStr;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use thiserror::Error;

use crate::config::DatabaseConfig;
use crate::repository::{StudentRepository, UniversityRepository};

/// How long a writer waits on a locked database file before giving up.
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Errors raised while opening or preparing the store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("invalid database url '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: sqlx::Error,
    },
    #[error("failed to connect to {url}: {source}")]
    Connect {
        url: String,
        #[source]
        source: sqlx::Error,
    },
    #[error("failed to synchronize schema: {0}")]
    Schema(#[source] sqlx::Error),
}

/// Handle to the persistent store.
#[derive(Debug, Clone)]
pub struct Store {
    pool: SqlitePool,
}

impl Store {
    /// Open a connection pool for the configured database.
    ///
    /// The database file is created when missing. In-memory databases exist
    /// per connection, so they are pinned to one connection that never expires.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, StoreError> {
        let options = SqliteConnectOptions::from_str(&config.url)
            .map_err(|source| StoreError::InvalidUrl {
                url: config.url.clone(),
                source,
            })?
            .create_if_missing(true)
            .foreign_keys(true)
            .busy_timeout(BUSY_TIMEOUT);

        let mut pool_options = SqlitePoolOptions::new().max_connections(config.max_connections);
        if is_in_memory(&config.url) {
            pool_options = pool_options
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None::<Duration>)
                .max_lifetime(None::<Duration>);
        }

        let pool = pool_options
            .connect_with(options)
            .await
            .map_err(|source| StoreError::Connect {
                url: config.url.clone(),
                source,
            })?;

        tracing::debug!(url = %config.url, "Store connected");
        Ok(Self { pool })
    }

    /// Create missing tables. Safe to call on every startup.
    pub async fn sync_schema(&self) -> Result<(), StoreError> {
        for statement in schema::STATEMENTS {
            sqlx::query(statement)
                .execute(&self.pool)
                .await
                .map_err(StoreError::Schema)?;
        }
        tracing::debug!("Schema synchronized");
        Ok(())
    }

    /// Connect and synchronize in one step.
    pub async fn open(config: &DatabaseConfig) -> Result<Self, StoreError> {
        let store = Self::connect(config).await?;
        store.sync_schema().await?;
        Ok(store)
    }

    /// Round-trip a trivial query.
    pub async fn ping(&self) -> Result<(), sqlx::Error> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    pub fn universities(&self) -> UniversityRepository {
        UniversityRepository::new(self.pool.clone())
    }

    pub fn students(&self) -> StudentRepository {
        StudentRepository::new(self.pool.clone())
    }

    /// Close every pooled connection. Subsequent queries fail.
    pub async fn close(&self) {
        self.pool.close().await;
        tracing::debug!("Store closed");
    }

    pub fn is_closed(&self) -> bool {
        self.pool.is_closed()
    }
}

fn is_in_memory(url: &str) -> bool {
    url.contains(":memory:") || url.contains("mode=memory")
}
