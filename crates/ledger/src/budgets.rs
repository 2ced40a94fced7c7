//! Per-category spending ceilings.

use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Budget {
    pub category: String,
    pub amount: Decimal,
}

impl From<Model> for Budget {
    fn from(model: Model) -> Self {
        Self {
            category: model.category,
            amount: model.amount,
        }
    }
}

/// Lifetime spending of a category against its budget.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BudgetStatus {
    pub category: String,
    pub budget: Decimal,
    pub spent: Decimal,
    pub remaining: Decimal,
    pub notification: String,
}

impl BudgetStatus {
    pub fn new(category: String, budget: Decimal, spent: Decimal) -> Self {
        let remaining = budget - spent;
        let notification = if remaining < Decimal::ZERO {
            "You have exceeded your budget!".to_string()
        } else {
            format!("You are within your budget. Remaining: {remaining:.2}")
        };
        Self {
            category,
            budget,
            spent,
            remaining,
            notification,
        }
    }

    pub fn is_exceeded(&self) -> bool {
        self.remaining < Decimal::ZERO
    }
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "budgets")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub category: String,
    pub amount: Decimal,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn within_budget_reports_remaining_with_two_decimals() {
        let status = BudgetStatus::new("food".to_string(), dec!(5000), dec!(2000));
        assert_eq!(status.remaining, dec!(3000));
        assert!(!status.is_exceeded());
        assert_eq!(
            status.notification,
            "You are within your budget. Remaining: 3000.00"
        );
    }

    #[test]
    fn exactly_on_budget_is_not_exceeded() {
        let status = BudgetStatus::new("food".to_string(), dec!(100), dec!(100.00));
        assert!(!status.is_exceeded());
        assert_eq!(
            status.notification,
            "You are within your budget. Remaining: 0.00"
        );
    }

    #[test]
    fn overspending_is_exceeded() {
        let status = BudgetStatus::new("food".to_string(), dec!(5000), dec!(6000));
        assert_eq!(status.remaining, dec!(-1000));
        assert!(status.is_exceeded());
        assert_eq!(status.notification, "You have exceeded your budget!");
    }
}
