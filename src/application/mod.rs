//! Application layer
//!
//! Use-case orchestration over the domain ports.

pub mod scheduling;

pub use scheduling::{
    CancelReservation, ReservationSchedulingService, ScheduleReservation, UpdateReservation,
};
