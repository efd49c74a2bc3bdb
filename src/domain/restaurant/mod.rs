//! Restaurant snapshot aggregate

pub mod model;
pub mod port;

pub use model::{OperatingHours, RestaurantSnapshot};
pub use port::RestaurantPort;
