//! Domain layer
//!
//! The reservation aggregate plus the read-only snapshots of the three
//! external aggregates it is validated against. Nothing here performs
//! I/O; the ports are implemented by the infrastructure layer or by the
//! embedding application.

pub mod reservation;
pub mod restaurant;
pub mod table;
pub mod user;

pub use reservation::{
    NewReservation, Reservation, ReservationPatch, ReservationRepository, ReservationStatus,
    Slot, StoredReservation, WindowQuery,
};
pub use restaurant::{OperatingHours, RestaurantPort, RestaurantSnapshot};
pub use table::{TablePort, TableSnapshot};
pub use user::{UserPort, UserSnapshot};
