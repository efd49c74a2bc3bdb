//! User snapshot aggregate

pub mod model;
pub mod port;

pub use model::UserSnapshot;
pub use port::UserPort;
