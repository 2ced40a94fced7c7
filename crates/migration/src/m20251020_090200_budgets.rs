//! Creates `budgets`, one spending ceiling per category.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Budgets::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Budgets::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Budgets::Category).string().not_null())
                    .col(ColumnDef::new(Budgets::Amount).decimal().not_null())
                    .to_owned(),
            )
            .await?;

        // Upserts conflict on this index.
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx-budgets-category-unique")
                    .table(Budgets::Table)
                    .col(Budgets::Category)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Budgets::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Budgets {
    Table,
    Id,
    Category,
    Amount,
}
