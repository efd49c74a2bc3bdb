//! Database migrations module

pub use sea_orm_migration::prelude::*;

mod m20260301_000001_create_restaurants;
mod m20260301_000002_create_dining_tables;
mod m20260301_000003_create_users;
mod m20260301_000004_create_reservations;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260301_000001_create_restaurants::Migration),
            Box::new(m20260301_000002_create_dining_tables::Migration),
            Box::new(m20260301_000003_create_users::Migration),
            Box::new(m20260301_000004_create_reservations::Migration),
        ]
    }
}
