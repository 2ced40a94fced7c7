use crate::{Ledger, ResultLedger};

use super::{FinancialSummary, sum_amounts};

impl Ledger {
    /// Balance, total spent and budgets.
    ///
    /// The three reads run outside a transaction: under concurrent writers
    /// they may observe slightly different points in time.
    pub async fn financial_summary(&self) -> ResultLedger<FinancialSummary> {
        let total_balance = self.balance().await?;
        let total_spent = {
            let db = self.pool.acquire().await?;
            sum_amounts(&db, None).await?
        };
        let budgets = self.list_budgets().await?;

        Ok(FinancialSummary {
            total_balance,
            total_spent,
            remaining_balance: total_balance - total_spent,
            budgets,
        })
    }
}
