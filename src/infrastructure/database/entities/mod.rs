//! SeaORM entities

pub mod dining_table;
pub mod reservation;
pub mod restaurant;
pub mod user;
