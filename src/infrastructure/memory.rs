//! In-memory port implementations
//!
//! DashMap-backed adapters for development and testing. The reservation
//! repository enforces the same `(table_id, start_at)` uniqueness bucket
//! as the database adapter, so the lost-race path behaves identically.

use async_trait::async_trait;
use dashmap::DashMap;

use crate::domain::reservation::{Reservation, ReservationRepository, WindowQuery};
use crate::domain::restaurant::{RestaurantPort, RestaurantSnapshot};
use crate::domain::table::{TablePort, TableSnapshot};
use crate::domain::user::{UserPort, UserSnapshot};
use crate::support::errors::{AppResult, DomainError};

/// In-memory reservation store.
#[derive(Default)]
pub struct InMemoryReservationRepository {
    reservations: DashMap<String, Reservation>,
}

impl InMemoryReservationRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.reservations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reservations.is_empty()
    }
}

#[async_trait]
impl ReservationRepository for InMemoryReservationRepository {
    async fn save(&self, reservation: &Reservation) -> AppResult<()> {
        // Same uniqueness bucket the database adapter declares as an
        // index: one active reservation per (table, start instant).
        if reservation.is_active() {
            let clash = self.reservations.iter().any(|existing| {
                existing.id() != reservation.id()
                    && existing.is_active()
                    && existing.table_id() == reservation.table_id()
                    && existing.start_at() == reservation.start_at()
            });
            if clash {
                return Err(DomainError::SlotUnavailable {
                    table_id: reservation.table_id().to_string(),
                }
                .into());
            }
        }
        self.reservations
            .insert(reservation.id().to_string(), reservation.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<Reservation>> {
        Ok(self.reservations.get(id).map(|r| r.clone()))
    }

    async fn delete(&self, id: &str) -> AppResult<()> {
        self.reservations
            .remove(id)
            .ok_or_else(|| DomainError::ReservationNotFound(id.to_string()))?;
        Ok(())
    }

    async fn find_active_within_window(&self, query: &WindowQuery) -> AppResult<Vec<Reservation>> {
        Ok(self
            .reservations
            .iter()
            .filter(|r| r.is_active())
            .filter(|r| {
                query
                    .table_id
                    .as_deref()
                    .map_or(true, |table_id| r.table_id() == table_id)
            })
            .filter(|r| {
                query
                    .user_id
                    .as_deref()
                    .map_or(true, |user_id| r.user_id() == user_id)
            })
            .filter(|r| {
                query
                    .exclude_reservation_id
                    .as_deref()
                    .map_or(true, |id| r.id() != id)
            })
            .filter(|r| r.slot().overlaps(&query.window))
            .map(|r| r.clone())
            .collect())
    }
}

/// In-memory restaurant lookup.
#[derive(Default)]
pub struct InMemoryRestaurantPort {
    restaurants: DashMap<String, RestaurantSnapshot>,
}

impl InMemoryRestaurantPort {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn put(&self, snapshot: RestaurantSnapshot) {
        self.restaurants
            .insert(snapshot.restaurant_id.clone(), snapshot);
    }
}

#[async_trait]
impl RestaurantPort for InMemoryRestaurantPort {
    async fn load_by_id(&self, id: &str) -> AppResult<Option<RestaurantSnapshot>> {
        Ok(self.restaurants.get(id).map(|r| r.clone()))
    }
}

/// In-memory table lookup.
#[derive(Default)]
pub struct InMemoryTablePort {
    tables: DashMap<String, TableSnapshot>,
}

impl InMemoryTablePort {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn put(&self, snapshot: TableSnapshot) {
        self.tables.insert(snapshot.table_id.clone(), snapshot);
    }
}

#[async_trait]
impl TablePort for InMemoryTablePort {
    async fn load_by_id(&self, id: &str) -> AppResult<Option<TableSnapshot>> {
        Ok(self.tables.get(id).map(|t| t.clone()))
    }
}

/// In-memory user lookup.
#[derive(Default)]
pub struct InMemoryUserPort {
    users: DashMap<String, UserSnapshot>,
}

impl InMemoryUserPort {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn put(&self, snapshot: UserSnapshot) {
        self.users.insert(snapshot.user_id.clone(), snapshot);
    }
}

#[async_trait]
impl UserPort for InMemoryUserPort {
    async fn load_by_id(&self, id: &str) -> AppResult<Option<UserSnapshot>> {
        Ok(self.users.get(id).map(|u| u.clone()))
    }
}

// ── Tests ──────────────────────────────────────────────────────
