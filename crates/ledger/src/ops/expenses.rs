use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use sea_orm::{QueryFilter, QueryOrder, QuerySelect, prelude::*, sea_query::Expr};

use crate::{
    Expense, ExpensePatch, Ledger, LedgerError, NewExpense, ResultLedger, expenses, with_tx,
};

use super::CategoryTotal;

impl Ledger {
    /// Insert one entry and return its id.
    pub async fn add_expense(&self, expense: NewExpense) -> ResultLedger<i32> {
        let model = expense.into_active_model()?;
        let db = self.pool.acquire().await?;
        let id = expenses::Entity::insert(model).exec(&db).await?.last_insert_id;
        tracing::debug!(id, "expense added");
        Ok(id)
    }

    /// Entries dated within `[start, end]` (both inclusive), in insertion order.
    pub async fn list_expenses(&self, start: NaiveDate, end: NaiveDate) -> ResultLedger<Vec<Expense>> {
        let db = self.pool.acquire().await?;
        let models = expenses::Entity::find()
            .filter(expenses::Column::Date.between(start, end))
            .order_by_asc(expenses::Column::Id)
            .all(&db)
            .await?;
        Ok(models.into_iter().map(Expense::from).collect())
    }

    /// Update only the fields present in `patch`, atomically.
    pub async fn edit_expense(&self, id: i32, patch: ExpensePatch) -> ResultLedger<()> {
        let assignments = patch.assignments();
        if assignments.is_empty() {
            return Err(LedgerError::NoFieldsProvided);
        }
        if let Some(category) = patch.category.as_deref()
            && category.trim().is_empty()
        {
            return Err(LedgerError::MissingField("category"));
        }

        with_tx!(self, |db_tx| {
            let mut update = expenses::Entity::update_many();
            for (column, value) in assignments {
                update = update.col_expr(column, Expr::value(value));
            }
            let result = update
                .filter(expenses::Column::Id.eq(id))
                .exec(&db_tx)
                .await?;
            if result.rows_affected == 0 {
                return Err(LedgerError::NotFound(id));
            }
            tracing::debug!(id, "expense updated");
            Ok(())
        })
    }

    pub async fn delete_expense(&self, id: i32) -> ResultLedger<()> {
        with_tx!(self, |db_tx| {
            let result = expenses::Entity::delete_by_id(id).exec(&db_tx).await?;
            if result.rows_affected == 0 {
                return Err(LedgerError::NotFound(id));
            }
            tracing::debug!(id, "expense deleted");
            Ok(())
        })
    }

    /// Totals per category over `[start, end]`, sorted by category name.
    ///
    /// A non-empty `category` restricts the result to that category.
    pub async fn summarize(
        &self,
        start: NaiveDate,
        end: NaiveDate,
        category: Option<&str>,
    ) -> ResultLedger<Vec<CategoryTotal>> {
        let db = self.pool.acquire().await?;
        let mut query = expenses::Entity::find()
            .select_only()
            .column(expenses::Column::Category)
            .column(expenses::Column::Amount)
            .filter(expenses::Column::Date.between(start, end));
        if let Some(category) = category.filter(|c| !c.is_empty()) {
            query = query.filter(expenses::Column::Category.eq(category));
        }
        let rows: Vec<(String, Decimal)> = query.into_tuple().all(&db).await?;

        let mut totals: BTreeMap<String, Decimal> = BTreeMap::new();
        for (category, amount) in rows {
            *totals.entry(category).or_default() += amount;
        }

        Ok(totals
            .into_iter()
            .map(|(category, total_amount)| CategoryTotal {
                category,
                total_amount,
            })
            .collect())
    }
}
