pub use sea_orm_migration::prelude::*;

mod m20251020_090000_expenses;
mod m20251020_090100_balance;
mod m20251020_090200_budgets;

/// Connection string used when none is configured.
pub const DEFAULT_DATABASE_URL: &str = "sqlite:./expense_ledger.db?mode=rwc";

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251020_090000_expenses::Migration),
            Box::new(m20251020_090100_balance::Migration),
            Box::new(m20251020_090200_budgets::Migration),
        ]
    }
}
