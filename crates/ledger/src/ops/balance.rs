use chrono::Local;
use rust_decimal::Decimal;
use sea_orm::{ActiveValue, QueryFilter, prelude::*, sea_query::Expr};

use crate::{
    INCOME_CATEGORY_PREFIX, Ledger, LedgerError, ResultLedger, balance, expenses, with_tx,
};

/// Source used when a credit does not name one.
pub const DEFAULT_CREDIT_SOURCE: &str = "salary";

impl Ledger {
    /// Credit `amount` to the balance and record an `income:<source>` entry
    /// dated today, in one transaction. Returns the new total.
    pub async fn credit_salary(&self, amount: Decimal, source: &str) -> ResultLedger<Decimal> {
        let source = match source.trim() {
            "" => DEFAULT_CREDIT_SOURCE,
            other => other,
        };

        with_tx!(self, |db_tx| {
            // Additive update: concurrent credits never overwrite each other.
            let updated = balance::Entity::update_many()
                .col_expr(
                    balance::Column::Total,
                    Expr::col(balance::Column::Total).add(amount),
                )
                .filter(balance::Column::Id.eq(balance::BALANCE_ROW_ID))
                .exec(&db_tx)
                .await?;
            if updated.rows_affected == 0 {
                return Err(LedgerError::NotInitialized("balance row missing".to_string()));
            }

            let audit = expenses::ActiveModel {
                id: ActiveValue::NotSet,
                date: ActiveValue::Set(Local::now().date_naive()),
                amount: ActiveValue::Set(amount),
                category: ActiveValue::Set(format!("{INCOME_CATEGORY_PREFIX}{source}")),
                subcategory: ActiveValue::Set(String::new()),
                note: ActiveValue::Set(format!("Credit from {source}")),
            };
            expenses::Entity::insert(audit).exec(&db_tx).await?;

            let total = balance::Entity::find_by_id(balance::BALANCE_ROW_ID)
                .one(&db_tx)
                .await?
                .map(|model| model.total)
                .ok_or_else(|| LedgerError::NotInitialized("balance row missing".to_string()))?;
            tracing::info!(%amount, source, %total, "balance credited");
            Ok(total)
        })
    }

    /// Current total, `0` when the balance row does not exist.
    pub async fn balance(&self) -> ResultLedger<Decimal> {
        let db = self.pool.acquire().await?;
        let total = balance::Entity::find_by_id(balance::BALANCE_ROW_ID)
            .one(&db)
            .await?
            .map(|model| model.total)
            .unwrap_or_default();
        Ok(total)
    }
}
