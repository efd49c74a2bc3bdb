use thiserror::Error;

/// Business-rule violations raised by the scheduling pipeline.
///
/// Every variant is a terminal outcome for the request that raised it;
/// nothing here is retried. Infrastructure failures live in [`InfraError`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("Restaurant not found: {0}")]
    RestaurantNotFound(String),

    #[error("Restaurant {restaurant_id} cannot host the requested slot: {reason}")]
    OutsideOperatingHours {
        restaurant_id: String,
        reason: String,
    },

    #[error("User not found: {0}")]
    UserNotFound(String),

    #[error("User {0} is inactive")]
    UserInactive(String),

    #[error("Table not found: {0}")]
    TableNotFound(String),

    #[error("Table {table_id} does not belong to restaurant {restaurant_id}")]
    TableMismatch {
        table_id: String,
        restaurant_id: String,
    },

    #[error("Party of {requested} exceeds table capacity of {capacity}")]
    CapacityExceeded { requested: u32, capacity: u32 },

    #[error("Reservation starts more than {max_months} months ahead")]
    MaxAdvanceWindowExceeded { max_months: u32 },

    #[error("Table {table_id} is already reserved for an overlapping slot")]
    SlotUnavailable { table_id: String },

    #[error("User {user_id} already holds an overlapping reservation")]
    UserTimeConflict { user_id: String },

    #[error("Invalid reservation data: {0}")]
    InvalidReservationData(String),

    #[error("Reservation not found: {0}")]
    ReservationNotFound(String),

    #[error("Reservation {reservation_id} is not owned by user {user_id}")]
    ReservationOwnership {
        reservation_id: String,
        user_id: String,
    },
}

#[derive(Debug, Error)]
pub enum InfraError {
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Infra(#[from] InfraError),
}

impl AppError {
    /// The domain violation behind this error, if it is one.
    pub fn domain(&self) -> Option<&DomainError> {
        match self {
            AppError::Domain(err) => Some(err),
            AppError::Infra(_) => None,
        }
    }
}

pub type DomainResult<T> = Result<T, DomainError>;
pub type AppResult<T> = Result<T, AppError>;
