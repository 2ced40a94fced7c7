//! Connection pool lifecycle.
//!
//! [`LedgerPool`] starts empty and must be initialized with [`LedgerPool::init`]
//! before any ledger operation runs. Each statement checks a pooled
//! connection out for its own duration; a [`DatabaseTransaction`] keeps one
//! connection until it is committed, and rolls back when dropped.

use std::time::Duration;

use sea_orm::{
    ConnectOptions, Database, DatabaseConnection, DatabaseTransaction, TransactionTrait,
};
use serde::Deserialize;
use tokio::sync::RwLock;

use crate::{LedgerError, ResultLedger};

/// Pool sizing and timeouts.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct PoolConfig {
    pub url: String,
    pub min_connections: u32,
    pub max_connections: u32,
    /// How long a caller waits for a free connection before `PoolExhausted`.
    pub acquire_timeout_secs: u64,
    pub connect_timeout_secs: u64,
    pub idle_timeout_secs: u64,
    pub sqlx_logging: bool,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            url: migration::DEFAULT_DATABASE_URL.to_string(),
            min_connections: 5,
            max_connections: 20,
            acquire_timeout_secs: 60,
            connect_timeout_secs: 10,
            idle_timeout_secs: 300,
            sqlx_logging: false,
        }
    }
}

impl PoolConfig {
    fn connect_options(&self) -> ConnectOptions {
        let mut options = ConnectOptions::new(self.url.clone());
        options
            .min_connections(self.min_connections)
            .max_connections(self.max_connections)
            .acquire_timeout(Duration::from_secs(self.acquire_timeout_secs))
            .connect_timeout(Duration::from_secs(self.connect_timeout_secs))
            .idle_timeout(Duration::from_secs(self.idle_timeout_secs))
            .sqlx_logging(self.sqlx_logging);
        options
    }
}

/// Owns the database connectivity of a [`Ledger`](crate::Ledger).
#[derive(Debug)]
pub struct LedgerPool {
    config: PoolConfig,
    connection: RwLock<Option<DatabaseConnection>>,
}

impl LedgerPool {
    pub fn new(config: PoolConfig) -> Self {
        Self {
            config,
            connection: RwLock::new(None),
        }
    }

    /// Wrap an already connected database, e.g. an in-memory one.
    pub fn from_connection(db: DatabaseConnection) -> Self {
        Self {
            config: PoolConfig::default(),
            connection: RwLock::new(Some(db)),
        }
    }

    pub fn config(&self) -> &PoolConfig {
        &self.config
    }

    /// Connect to the configured store. Calling it twice is a no-op.
    pub async fn init(&self) -> ResultLedger<()> {
        let mut guard = self.connection.write().await;
        if guard.is_some() {
            tracing::debug!("pool already initialized");
            return Ok(());
        }

        let db = Database::connect(self.config.connect_options())
            .await
            .map_err(|err| LedgerError::StoreUnavailable(err.to_string()))?;
        tracing::info!(
            min = self.config.min_connections,
            max = self.config.max_connections,
            "database pool initialized"
        );
        *guard = Some(db);
        Ok(())
    }

    pub async fn is_initialized(&self) -> bool {
        self.connection.read().await.is_some()
    }

    /// Hand out the pooled handle.
    pub async fn acquire(&self) -> ResultLedger<DatabaseConnection> {
        self.connection
            .read()
            .await
            .clone()
            .ok_or_else(|| LedgerError::NotInitialized("database pool".to_string()))
    }

    /// Start a transaction on a dedicated connection.
    pub async fn begin(&self) -> ResultLedger<DatabaseTransaction> {
        let db = self.acquire().await?;
        Ok(db.begin().await?)
    }

    /// Drain and close the pool. Later calls fail with `NotInitialized`.
    pub async fn close(&self) -> ResultLedger<()> {
        let Some(db) = self.connection.write().await.take() else {
            return Ok(());
        };
        db.close().await?;
        tracing::info!("database pool closed");
        Ok(())
    }
}
