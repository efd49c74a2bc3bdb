//! Reservation repository interface

use async_trait::async_trait;

use super::model::Reservation;
use super::slot::Slot;
use crate::support::errors::AppResult;

/// Filter for the windowed conflict lookup.
///
/// `window` is the padded interval handed over verbatim by the scheduling
/// service. Implementations must return every active reservation whose
/// slot could intersect it; returning a superset (say, from a coarser
/// date-level filter) is legal, returning less is not.
#[derive(Debug, Clone)]
pub struct WindowQuery {
    pub table_id: Option<String>,
    pub user_id: Option<String>,
    pub window: Slot,
    /// Set on updates so a reservation never conflicts with itself.
    pub exclude_reservation_id: Option<String>,
}

#[async_trait]
pub trait ReservationRepository: Send + Sync {
    /// Insert or replace a reservation by id.
    ///
    /// Implementations must refuse to insert a second active reservation
    /// for the same `(table_id, start_at)` bucket and report the loser of
    /// that race as `DomainError::SlotUnavailable`.
    async fn save(&self, reservation: &Reservation) -> AppResult<()>;

    /// Find reservation by ID
    async fn find_by_id(&self, id: &str) -> AppResult<Option<Reservation>>;

    /// Remove a reservation. `ReservationNotFound` if the id is unknown.
    async fn delete(&self, id: &str) -> AppResult<()>;

    /// Active (pending or confirmed) reservations matching the filter.
    async fn find_active_within_window(&self, query: &WindowQuery) -> AppResult<Vec<Reservation>>;
}
