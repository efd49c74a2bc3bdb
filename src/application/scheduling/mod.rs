//! Reservation scheduling use cases

pub mod dto;
pub mod service;

pub use dto::{CancelReservation, ScheduleReservation, UpdateReservation};
pub use service::ReservationSchedulingService;
