//! # Tablebook Scheduling
//!
//! Reservation scheduling and conflict-resolution engine for restaurant
//! table bookings: decides whether a requested slot is legal and
//! available, and enforces the temporal invariants across the lifetime
//! of a reservation (schedule, update, cancel).
//!
//! ## Architecture
//!
//! The crate follows a hexagonal layout:
//!
//! - **domain**: the Reservation aggregate, slot arithmetic, and the
//!   read-only snapshots of the external aggregates it is validated
//!   against, plus the ports the core consumes
//! - **application**: the scheduling service orchestrating the ports
//! - **infrastructure**: SeaORM/SQLite and in-memory port adapters
//! - **support**: error taxonomy and the injectable clock
//!
//! The surrounding system (HTTP routing, notifications, payments,
//! analytics) stays outside; it reaches the engine through
//! [`ReservationSchedulingService`] and implements the ports.

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod support;

pub use config::{default_config_path, AppConfig, ConfigError, SchedulingConfig};

pub use support::errors::{AppError, AppResult, DomainError, DomainResult, InfraError};
pub use support::time::{Clock, FixedClock, SystemClock};

pub use domain::reservation::{
    NewReservation, Reservation, ReservationPatch, ReservationRepository, ReservationStatus,
    Slot, StoredReservation, WindowQuery,
};
pub use domain::restaurant::{OperatingHours, RestaurantPort, RestaurantSnapshot};
pub use domain::table::{TablePort, TableSnapshot};
pub use domain::user::{UserPort, UserSnapshot};

pub use application::scheduling::{
    CancelReservation, ReservationSchedulingService, ScheduleReservation, UpdateReservation,
};

// Re-export database types for easy access
pub use infrastructure::database::Migrator;
pub use infrastructure::{init_database, DatabaseConfig};
