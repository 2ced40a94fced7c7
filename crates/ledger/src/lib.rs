//! Expense ledger with budget tracking.
//!
//! [`Ledger`] exposes one async operation per request: each one acquires a
//! connection from its [`LedgerPool`], runs one query or one transaction and
//! returns a typed result or a [`LedgerError`].

pub use balance::BALANCE_ROW_ID;
pub use budgets::{Budget, BudgetStatus};
pub use error::LedgerError;
pub use expenses::{Expense, ExpensePatch, INCOME_CATEGORY_PREFIX, NewExpense};
pub use ops::{CategoryTotal, DEFAULT_CREDIT_SOURCE, FinancialSummary};
pub use pool::{LedgerPool, PoolConfig};

mod balance;
mod budgets;
mod error;
mod expenses;
mod ops;
mod pool;
mod schema;

type ResultLedger<T> = Result<T, LedgerError>;

/// Run a block inside a DB transaction, committing on success.
///
/// Returning early (`?` or an `Err`) drops the transaction, which rolls it back.
macro_rules! with_tx {
    ($self:expr, |$tx:ident| $body:expr) => {{
        let $tx = $self.pool.begin().await?;
        let result: $crate::ResultLedger<_> = $body;
        match result {
            Ok(value) => {
                $tx.commit().await?;
                Ok(value)
            }
            Err(err) => Err(err),
        }
    }};
}

pub(crate) use with_tx;

#[derive(Debug)]
pub struct Ledger {
    pool: LedgerPool,
}

impl Ledger {
    /// Return a builder for `Ledger`. Help to build the struct.
    pub fn builder() -> LedgerBuilder {
        LedgerBuilder::default()
    }

    pub fn pool(&self) -> &LedgerPool {
        &self.pool
    }

    /// Close the underlying pool. Operations fail with `NotInitialized` afterwards.
    pub async fn close(&self) -> ResultLedger<()> {
        self.pool.close().await
    }
}

/// The builder for `Ledger`
#[derive(Default)]
pub struct LedgerBuilder {
    pool: Option<LedgerPool>,
}

impl LedgerBuilder {
    /// Pass the pool the ledger will own
    pub fn pool(mut self, pool: LedgerPool) -> LedgerBuilder {
        self.pool = Some(pool);
        self
    }

    /// Shortcut for an already connected database
    pub fn database(self, db: sea_orm::DatabaseConnection) -> LedgerBuilder {
        self.pool(LedgerPool::from_connection(db))
    }

    /// Construct `Ledger`
    pub fn build(self) -> ResultLedger<Ledger> {
        let pool = self
            .pool
            .ok_or_else(|| LedgerError::NotInitialized("ledger built without a pool".to_string()))?;
        Ok(Ledger { pool })
    }
}
