use rust_decimal::Decimal;
use sea_orm::{ActiveValue, QueryFilter, QueryOrder, prelude::*, sea_query::OnConflict};

use crate::{Budget, BudgetStatus, Ledger, LedgerError, ResultLedger, budgets, with_tx};

use super::sum_amounts;

impl Ledger {
    /// Insert or replace the budget of `category`.
    pub async fn set_budget(&self, category: &str, amount: Decimal) -> ResultLedger<Budget> {
        if category.trim().is_empty() {
            return Err(LedgerError::MissingField("category"));
        }
        with_tx!(self, |db_tx| {
            let model = budgets::ActiveModel {
                id: ActiveValue::NotSet,
                category: ActiveValue::Set(category.to_string()),
                amount: ActiveValue::Set(amount),
            };
            budgets::Entity::insert(model)
                .on_conflict(
                    OnConflict::column(budgets::Column::Category)
                        .update_column(budgets::Column::Amount)
                        .to_owned(),
                )
                .exec_without_returning(&db_tx)
                .await?;
            tracing::debug!(category, %amount, "budget set");
            Ok(Budget {
                category: category.to_string(),
                amount,
            })
        })
    }

    /// Compare the lifetime spending of `category` with its budget.
    ///
    /// The spent figure ignores dates and includes every row of the
    /// category, so it differs from `summarize` over a range.
    pub async fn check_budget_status(&self, category: &str) -> ResultLedger<BudgetStatus> {
        let db = self.pool.acquire().await?;
        let budget = budgets::Entity::find()
            .filter(budgets::Column::Category.eq(category))
            .one(&db)
            .await?
            .ok_or_else(|| LedgerError::NoBudgetSet(category.to_string()))?;

        let spent = sum_amounts(&db, Some(category)).await?;
        Ok(BudgetStatus::new(budget.category, budget.amount, spent))
    }

    /// Every budget, sorted by category.
    pub async fn list_budgets(&self) -> ResultLedger<Vec<Budget>> {
        let db = self.pool.acquire().await?;
        let models = budgets::Entity::find()
            .order_by_asc(budgets::Column::Category)
            .all(&db)
            .await?;
        Ok(models.into_iter().map(Budget::from).collect())
    }
}
