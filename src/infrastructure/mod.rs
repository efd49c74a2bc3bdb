//! Infrastructure layer
//!
//! Adapters that satisfy the domain ports: SeaORM repositories over
//! SQLite and DashMap-backed in-memory implementations for development
//! and testing.

pub mod database;
pub mod memory;

pub use database::{init_database, DatabaseConfig};
pub use memory::{
    InMemoryReservationRepository, InMemoryRestaurantPort, InMemoryTablePort, InMemoryUserPort,
};
