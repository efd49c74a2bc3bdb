//! Reservation aggregate
//!
//! The Reservation entity, its slot arithmetic, and the repository port.

pub mod model;
pub mod repository;
pub mod slot;

pub use model::{NewReservation, Reservation, ReservationPatch, ReservationStatus, StoredReservation};
pub use repository::{ReservationRepository, WindowQuery};
pub use slot::Slot;
