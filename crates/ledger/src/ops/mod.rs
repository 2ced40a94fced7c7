use rust_decimal::Decimal;
use sea_orm::{ConnectionTrait, QueryFilter, QuerySelect, prelude::*};

use crate::{Budget, ResultLedger};

mod balance;
mod budgets;
mod expenses;
mod summary;

pub use balance::DEFAULT_CREDIT_SOURCE;

/// Total of one category over a date range.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CategoryTotal {
    pub category: String,
    pub total_amount: Decimal,
}

/// Balance, lifetime spending and budgets in one snapshot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FinancialSummary {
    pub total_balance: Decimal,
    pub total_spent: Decimal,
    pub remaining_balance: Decimal,
    pub budgets: Vec<Budget>,
}

/// Exact sum of `expenses.amount`, optionally restricted to one category.
///
/// Amounts are added as `Decimal` in the process so the result does not
/// depend on how the backend aggregates its numeric type.
async fn sum_amounts<C: ConnectionTrait>(db: &C, category: Option<&str>) -> ResultLedger<Decimal> {
    let mut query = crate::expenses::Entity::find()
        .select_only()
        .column(crate::expenses::Column::Amount);
    if let Some(category) = category {
        query = query.filter(crate::expenses::Column::Category.eq(category));
    }
    let amounts: Vec<Decimal> = query.into_tuple().all(db).await?;
    Ok(amounts.into_iter().sum())
}
