//! Dining table snapshot aggregate

pub mod model;
pub mod port;

pub use model::TableSnapshot;
pub use port::TablePort;
