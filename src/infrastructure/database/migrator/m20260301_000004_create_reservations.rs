//! Create reservations table
//!
//! The slot bounds are stored alongside the calendar fields so the
//! windowed conflict query is a plain interval comparison over indexed
//! columns. The unique (table_id, start_at) index converts the loser of
//! a concurrent check-then-write race into a rejected insert.

use sea_orm_migration::prelude::*;

use super::m20260301_000001_create_restaurants::Restaurants;
use super::m20260301_000002_create_dining_tables::DiningTables;
use super::m20260301_000003_create_users::Users;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Reservations::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Reservations::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Reservations::UserId).string().not_null())
                    .col(
                        ColumnDef::new(Reservations::RestaurantId)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Reservations::TableId).string().not_null())
                    .col(
                        ColumnDef::new(Reservations::ReservationDate)
                            .date()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Reservations::ReservationTime)
                            .time()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Reservations::DurationMinutes)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Reservations::StartAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Reservations::EndAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Reservations::NumberOfGuests)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Reservations::Status)
                            .string()
                            .not_null()
                            .default("Pending"),
                    )
                    .col(
                        ColumnDef::new(Reservations::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Reservations::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reservations_restaurant")
                            .from(Reservations::Table, Reservations::RestaurantId)
                            .to(Restaurants::Table, Restaurants::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reservations_dining_table")
                            .from(Reservations::Table, Reservations::TableId)
                            .to(DiningTables::Table, DiningTables::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reservations_user")
                            .from(Reservations::Table, Reservations::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_reservations_table_start")
                    .table(Reservations::Table)
                    .col(Reservations::TableId)
                    .col(Reservations::StartAt)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_reservations_user_start")
                    .table(Reservations::Table)
                    .col(Reservations::UserId)
                    .col(Reservations::StartAt)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_reservations_status")
                    .table(Reservations::Table)
                    .col(Reservations::Status)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Reservations::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Reservations {
    Table,
    Id,
    UserId,
    RestaurantId,
    TableId,
    ReservationDate,
    ReservationTime,
    DurationMinutes,
    StartAt,
    EndAt,
    NumberOfGuests,
    Status,
    CreatedAt,
    UpdatedAt,
}
