//! Create dining_tables table

use sea_orm_migration::prelude::*;

use super::m20260301_000001_create_restaurants::Restaurants;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(DiningTables::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(DiningTables::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(DiningTables::RestaurantId)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(DiningTables::Capacity).integer().not_null())
                    .col(
                        ColumnDef::new(DiningTables::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_dining_tables_restaurant")
                            .from(DiningTables::Table, DiningTables::RestaurantId)
                            .to(Restaurants::Table, Restaurants::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_dining_tables_restaurant")
                    .table(DiningTables::Table)
                    .col(DiningTables::RestaurantId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(DiningTables::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum DiningTables {
    Table,
    Id,
    RestaurantId,
    Capacity,
    CreatedAt,
}
