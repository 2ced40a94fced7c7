use migration::{Migrator, MigratorTrait};
use rust_decimal::Decimal;
use sea_orm::{ActiveValue, EntityTrait, sea_query::OnConflict};

use crate::{Ledger, LedgerError, ResultLedger, balance};

impl Ledger {
    /// Create the `expenses`, `balance` and `budgets` relations when absent
    /// and seed the balance row. Safe to call on every start.
    ///
    /// Store errors are reported as `StoreUnavailable`: the process should
    /// not start serving without a schema.
    pub async fn ensure_schema(&self) -> ResultLedger<()> {
        let db = self.pool.acquire().await?;
        Migrator::up(&db, None)
            .await
            .map_err(|err| LedgerError::StoreUnavailable(err.to_string()))?;

        let seed = balance::ActiveModel {
            id: ActiveValue::Set(balance::BALANCE_ROW_ID),
            total: ActiveValue::Set(Decimal::ZERO),
        };
        let inserted = balance::Entity::insert(seed)
            .on_conflict(
                OnConflict::column(balance::Column::Id)
                    .do_nothing()
                    .to_owned(),
            )
            .exec_without_returning(&db)
            .await
            .map_err(|err| LedgerError::StoreUnavailable(err.to_string()))?;
        if inserted > 0 {
            tracing::info!("seeded balance row");
        }

        tracing::info!("schema ready");
        Ok(())
    }
}
