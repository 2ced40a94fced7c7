//! The module contains the errors the ledger can throw.
//!
//! Three of them are expected outcomes the caller can recover from and
//! report back as a structured `{status: "error", message}` result:
//!
//! - [`NotFound`] when an edit or delete targets a missing expense.
//! - [`NoFieldsProvided`] when an edit carries no field at all.
//! - [`NoBudgetSet`] when a budget check targets a category without budget.
//!
//! Everything else is either a startup ordering problem ([`NotInitialized`],
//! [`StoreUnavailable`]), pool pressure ([`PoolExhausted`]) or a store error
//! surfaced as-is ([`Database`]).
//!
//!  [`NotFound`]: LedgerError::NotFound
//!  [`NoFieldsProvided`]: LedgerError::NoFieldsProvided
//!  [`NoBudgetSet`]: LedgerError::NoBudgetSet
//!  [`NotInitialized`]: LedgerError::NotInitialized
//!  [`StoreUnavailable`]: LedgerError::StoreUnavailable
//!  [`PoolExhausted`]: LedgerError::PoolExhausted
//!  [`Database`]: LedgerError::Database
use sea_orm::{ConnAcquireErr, DbErr};
use thiserror::Error;

/// Ledger custom errors.
#[derive(Error, Debug)]
pub enum LedgerError {
    #[error("Ledger not initialized: {0}")]
    NotInitialized(String),
    #[error("Connection pool exhausted")]
    PoolExhausted,
    #[error("Expense ID not found")]
    NotFound(i32),
    #[error("No fields provided to update")]
    NoFieldsProvided,
    #[error("No budget set for category {0}")]
    NoBudgetSet(String),
    #[error("Missing required field: {0}")]
    MissingField(&'static str),
    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),
    #[error(transparent)]
    Database(DbErr),
}

impl LedgerError {
    /// Whether the error is an expected outcome of the request rather than
    /// a fault of the service.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::NotFound(_) | Self::NoFieldsProvided | Self::NoBudgetSet(_) | Self::MissingField(_)
        )
    }
}

impl From<DbErr> for LedgerError {
    fn from(err: DbErr) -> Self {
        match err {
            DbErr::ConnectionAcquire(ConnAcquireErr::Timeout) => Self::PoolExhausted,
            other => Self::Database(other),
        }
    }
}

impl PartialEq for LedgerError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::NotInitialized(a), Self::NotInitialized(b)) => a == b,
            (Self::PoolExhausted, Self::PoolExhausted) => true,
            (Self::NotFound(a), Self::NotFound(b)) => a == b,
            (Self::NoFieldsProvided, Self::NoFieldsProvided) => true,
            (Self::NoBudgetSet(a), Self::NoBudgetSet(b)) => a == b,
            (Self::MissingField(a), Self::MissingField(b)) => a == b,
            (Self::StoreUnavailable(a), Self::StoreUnavailable(b)) => a == b,
            (Self::Database(a), Self::Database(b)) => a.to_string() == b.to_string(),
            _ => false,
        }
    }
}
