//! SeaORM port implementations

pub mod dining_table_port;
pub mod reservation_repository;
pub mod restaurant_port;
pub mod user_port;

pub use dining_table_port::SeaOrmTablePort;
pub use reservation_repository::SeaOrmReservationRepository;
pub use restaurant_port::SeaOrmRestaurantPort;
pub use user_port::SeaOrmUserPort;
