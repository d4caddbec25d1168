//! Create `support_query` table.
//! Stores customer/shipment support tickets; `status` is free text defaulting to `open`.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SupportQuery::Table)
                    .if_not_exists()
                    .col(pk_auto(SupportQuery::Id))
                    .col(text(SupportQuery::Issue))
                    .col(string_len(SupportQuery::OrderId, 128))
                    .col(string_len(SupportQuery::Status, 64).default("open"))
                    .to_owned(),
            )
            .await?;

        // Lookups by order are the common support-desk path; not unique.
        manager
            .create_index(
                Index::create()
                    .name("idx_support_query_order_id")
                    .table(SupportQuery::Table)
                    .col(SupportQuery::OrderId)
                    .if_not_exists()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(SupportQuery::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum SupportQuery {
    Table,
    Id,
    Issue,
    OrderId,
    Status,
}
