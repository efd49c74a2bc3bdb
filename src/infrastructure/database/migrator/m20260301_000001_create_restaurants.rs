//! Create restaurants table
//!
//! Operating metadata consulted by every scheduling decision: active
//! flag, daily opening window, and the set of weekdays the restaurant
//! operates on.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Restaurants::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Restaurants::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Restaurants::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(ColumnDef::new(Restaurants::OpenTime).string().not_null())
                    .col(ColumnDef::new(Restaurants::CloseTime).string().not_null())
                    .col(ColumnDef::new(Restaurants::DaysOpen).string().not_null())
                    .col(
                        ColumnDef::new(Restaurants::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Restaurants::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Restaurants {
    Table,
    Id,
    IsActive,
    OpenTime,
    CloseTime,
    DaysOpen,
    CreatedAt,
}
