//! Reservation scheduling service
//!
//! The algorithmic core of the engine: decides whether a requested slot
//! is legal and available, and enforces the temporal invariants across
//! create, update and cancel. The service is stateless; everything it
//! touches arrives through constructor-injected ports.

use std::sync::Arc;

use chrono::{DateTime, Datelike, Months, Utc};
use tracing::info;
use uuid::Uuid;
use validator::Validate;

use crate::config::SchedulingConfig;
use crate::domain::reservation::{
    NewReservation, Reservation, ReservationPatch, ReservationRepository, Slot, WindowQuery,
};
use crate::domain::restaurant::{RestaurantPort, RestaurantSnapshot};
use crate::domain::table::{TablePort, TableSnapshot};
use crate::domain::user::{UserPort, UserSnapshot};
use crate::support::errors::{AppResult, DomainError};
use crate::support::time::Clock;

use super::dto::{CancelReservation, ScheduleReservation, UpdateReservation};

/// Orchestrates reservation scheduling against the three snapshot ports
/// and the reservation repository.
///
/// Every check is fail-fast; the entity is constructed and persisted
/// only after all checks pass, so a rejected request never mutates the
/// store. The final table-slot guarantee under concurrent schedulers
/// belongs to the repository (§ its `save` contract); this service maps
/// that signal, it does not serialize access itself.
pub struct ReservationSchedulingService {
    restaurants: Arc<dyn RestaurantPort>,
    tables: Arc<dyn TablePort>,
    users: Arc<dyn UserPort>,
    reservations: Arc<dyn ReservationRepository>,
    clock: Arc<dyn Clock>,
    config: SchedulingConfig,
}

impl ReservationSchedulingService {
    pub fn new(
        restaurants: Arc<dyn RestaurantPort>,
        tables: Arc<dyn TablePort>,
        users: Arc<dyn UserPort>,
        reservations: Arc<dyn ReservationRepository>,
        clock: Arc<dyn Clock>,
        config: SchedulingConfig,
    ) -> Self {
        Self {
            restaurants,
            tables,
            users,
            reservations,
            clock,
            config,
        }
    }

    /// Schedule a new reservation. Returns the persisted entity in
    /// `Pending` status.
    pub async fn schedule_reservation(
        &self,
        request: ScheduleReservation,
    ) -> AppResult<Reservation> {
        request
            .validate()
            .map_err(|e| DomainError::InvalidReservationData(e.to_string()))?;

        let (restaurant, _user, table) = self
            .load_participants(&request.restaurant_id, &request.user_id, &request.table_id)
            .await?;

        if !table.can_seat(request.number_of_guests) {
            return Err(DomainError::CapacityExceeded {
                requested: request.number_of_guests,
                capacity: table.capacity,
            }
            .into());
        }

        let duration = request
            .duration_minutes
            .unwrap_or(self.config.slot_duration_minutes);
        let slot = Slot::from_parts(request.reservation_date, request.reservation_time, duration);
        let now = self.clock.now();

        self.check_slot_rules(&restaurant, slot, now)?;
        self.check_conflicts(&request.table_id, &request.user_id, slot, None)
            .await?;

        let id = request
            .reservation_id
            .clone()
            .unwrap_or_else(|| Uuid::new_v4().to_string());
        let reservation = Reservation::create(
            id,
            NewReservation {
                user_id: request.user_id,
                restaurant_id: request.restaurant_id,
                table_id: request.table_id,
                reservation_date: request.reservation_date,
                reservation_time: request.reservation_time,
                duration_minutes: duration,
                number_of_guests: request.number_of_guests,
            },
            now,
        )?;

        self.reservations.save(&reservation).await?;

        info!(
            reservation_id = %reservation.id(),
            table_id = %reservation.table_id(),
            start_at = %reservation.start_at(),
            guests = reservation.number_of_guests(),
            "Reservation scheduled"
        );
        Ok(reservation)
    }

    /// Change the slot and/or party size of an existing reservation.
    ///
    /// The calendar and conflict rules re-run only when the merged slot
    /// differs from the stored one; the capacity check always runs. A
    /// failed check leaves the stored reservation untouched.
    pub async fn update_reservation(&self, request: UpdateReservation) -> AppResult<Reservation> {
        request
            .validate()
            .map_err(|e| DomainError::InvalidReservationData(e.to_string()))?;

        let mut reservation = self
            .reservations
            .find_by_id(&request.reservation_id)
            .await?
            .ok_or_else(|| DomainError::ReservationNotFound(request.reservation_id.clone()))?;
        self.check_ownership(&reservation, &request.user_id)?;

        let (restaurant, _user, table) = self
            .load_participants(
                reservation.restaurant_id(),
                reservation.user_id(),
                reservation.table_id(),
            )
            .await?;

        let guests = request
            .number_of_guests
            .unwrap_or(reservation.number_of_guests());
        if !table.can_seat(guests) {
            return Err(DomainError::CapacityExceeded {
                requested: guests,
                capacity: table.capacity,
            }
            .into());
        }

        let now = self.clock.now();
        let merged_slot = Slot::from_parts(
            request
                .reservation_date
                .unwrap_or(reservation.reservation_date()),
            request
                .reservation_time
                .unwrap_or(reservation.reservation_time()),
            request
                .duration_minutes
                .unwrap_or(reservation.duration_minutes()),
        );
        if merged_slot != reservation.slot() {
            self.check_slot_rules(&restaurant, merged_slot, now)?;
            self.check_conflicts(
                reservation.table_id(),
                reservation.user_id(),
                merged_slot,
                Some(reservation.id().to_string()),
            )
            .await?;
        }

        reservation.update(
            ReservationPatch {
                reservation_date: request.reservation_date,
                reservation_time: request.reservation_time,
                duration_minutes: request.duration_minutes,
                number_of_guests: request.number_of_guests,
            },
            now,
        )?;
        self.reservations.save(&reservation).await?;

        info!(
            reservation_id = %reservation.id(),
            start_at = %reservation.start_at(),
            guests = reservation.number_of_guests(),
            "Reservation updated"
        );
        Ok(reservation)
    }

    /// Cancel a reservation on behalf of its owner. The reservation is
    /// removed from the repository; the pre-deletion entity is returned
    /// for caller-side notification or audit.
    pub async fn cancel_reservation(&self, request: CancelReservation) -> AppResult<Reservation> {
        request
            .validate()
            .map_err(|e| DomainError::InvalidReservationData(e.to_string()))?;

        let reservation = self
            .reservations
            .find_by_id(&request.reservation_id)
            .await?
            .ok_or_else(|| DomainError::ReservationNotFound(request.reservation_id.clone()))?;
        self.check_ownership(&reservation, &request.user_id)?;

        self.reservations.delete(reservation.id()).await?;

        info!(
            reservation_id = %reservation.id(),
            table_id = %reservation.table_id(),
            "Reservation cancelled"
        );
        Ok(reservation)
    }

    // ── Checks ─────────────────────────────────────────────────

    /// Load the three snapshots concurrently, then apply the existence
    /// and activity rules in order: restaurant, user, table.
    async fn load_participants(
        &self,
        restaurant_id: &str,
        user_id: &str,
        table_id: &str,
    ) -> AppResult<(RestaurantSnapshot, UserSnapshot, TableSnapshot)> {
        let (restaurant, user, table) = tokio::try_join!(
            self.restaurants.load_by_id(restaurant_id),
            self.users.load_by_id(user_id),
            self.tables.load_by_id(table_id),
        )?;

        let restaurant = restaurant
            .ok_or_else(|| DomainError::RestaurantNotFound(restaurant_id.to_string()))?;
        if !restaurant.is_active {
            return Err(DomainError::OutsideOperatingHours {
                restaurant_id: restaurant_id.to_string(),
                reason: "restaurant is not active".into(),
            }
            .into());
        }

        let user = user.ok_or_else(|| DomainError::UserNotFound(user_id.to_string()))?;
        if !user.is_active {
            return Err(DomainError::UserInactive(user_id.to_string()).into());
        }

        let table = table.ok_or_else(|| DomainError::TableNotFound(table_id.to_string()))?;
        if !table.belongs_to(restaurant_id) {
            return Err(DomainError::TableMismatch {
                table_id: table_id.to_string(),
                restaurant_id: restaurant_id.to_string(),
            }
            .into());
        }

        Ok((restaurant, user, table))
    }

    /// The calendar rules: strictly future, inside the advance window,
    /// on an open weekday, within the day's opening hours.
    fn check_slot_rules(
        &self,
        restaurant: &RestaurantSnapshot,
        slot: Slot,
        now: DateTime<Utc>,
    ) -> AppResult<()> {
        if slot.start_at() <= now {
            return Err(
                DomainError::InvalidReservationData("reservation must start in the future".into())
                    .into(),
            );
        }

        let horizon = now
            .checked_add_months(Months::new(self.config.max_advance_months))
            .ok_or_else(|| {
                DomainError::InvalidReservationData("advance window is out of range".into())
            })?;
        if slot.start_at() > horizon {
            return Err(DomainError::MaxAdvanceWindowExceeded {
                max_months: self.config.max_advance_months,
            }
            .into());
        }

        let weekday = slot.start_at().weekday();
        if !restaurant.is_open_on(weekday) {
            return Err(DomainError::OutsideOperatingHours {
                restaurant_id: restaurant.restaurant_id.clone(),
                reason: format!("closed on {weekday}"),
            }
            .into());
        }

        if slot.duration() > restaurant.hours.daily_span() {
            return Err(DomainError::InvalidReservationData(format!(
                "a {} minute seating exceeds the daily operating span",
                slot.duration().num_minutes()
            ))
            .into());
        }

        // An overnight seating can never fit a same-day open/close
        // window, and its end time-of-day would wrap around and slip
        // past the containment check below.
        if slot.crosses_midnight()
            || !restaurant
                .hours
                .contains(slot.start_at().time(), slot.end_at().time())
        {
            return Err(DomainError::OutsideOperatingHours {
                restaurant_id: restaurant.restaurant_id.clone(),
                reason: "the requested slot falls outside opening hours".into(),
            }
            .into());
        }

        Ok(())
    }

    /// The two windowed conflict queries, issued concurrently over the
    /// padded window. Table conflicts take precedence over user ones.
    async fn check_conflicts(
        &self,
        table_id: &str,
        user_id: &str,
        slot: Slot,
        exclude_reservation_id: Option<String>,
    ) -> AppResult<()> {
        // One slot duration of padding per side: wide enough that any
        // reservation that could intersect the slot is returned even
        // from a date-granular store.
        let window = slot.padded_by(slot.duration());

        let table_query = WindowQuery {
            table_id: Some(table_id.to_string()),
            user_id: None,
            window,
            exclude_reservation_id: exclude_reservation_id.clone(),
        };
        let user_query = WindowQuery {
            table_id: None,
            user_id: Some(user_id.to_string()),
            window,
            exclude_reservation_id,
        };
        let (table_hits, user_hits) = tokio::try_join!(
            self.reservations.find_active_within_window(&table_query),
            self.reservations.find_active_within_window(&user_query),
        )?;

        if table_hits.iter().any(|r| r.slot().overlaps(&slot)) {
            return Err(DomainError::SlotUnavailable {
                table_id: table_id.to_string(),
            }
            .into());
        }
        if user_hits.iter().any(|r| r.slot().overlaps(&slot)) {
            return Err(DomainError::UserTimeConflict {
                user_id: user_id.to_string(),
            }
            .into());
        }
        Ok(())
    }

    fn check_ownership(&self, reservation: &Reservation, user_id: &str) -> AppResult<()> {
        if reservation.user_id() != user_id {
            return Err(DomainError::ReservationOwnership {
                reservation_id: reservation.id().to_string(),
                user_id: user_id.to_string(),
            }
            .into());
        }
        Ok(())
    }
}

// ── Tests ──────────────────────────────────────────────────────
