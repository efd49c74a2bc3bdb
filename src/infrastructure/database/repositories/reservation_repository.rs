//! SeaORM implementation of ReservationRepository

use async_trait::async_trait;
use log::debug;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
    SqlErr,
};

use crate::domain::reservation::{
    Reservation, ReservationRepository, ReservationStatus, StoredReservation, WindowQuery,
};
use crate::infrastructure::database::entities::reservation;
use crate::support::errors::{AppError, AppResult, DomainError, InfraError};

pub struct SeaOrmReservationRepository {
    db: DatabaseConnection,
}

impl SeaOrmReservationRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

// ── Conversion helpers ──────────────────────────────────────────

fn model_to_domain(m: reservation::Model) -> AppResult<Reservation> {
    let status = ReservationStatus::from_str(&m.status).ok_or_else(|| {
        DomainError::InvalidReservationData(format!("unknown stored status: {:?}", m.status))
    })?;
    let duration_minutes = u32::try_from(m.duration_minutes).map_err(|_| {
        DomainError::InvalidReservationData(format!(
            "stored duration is negative: {}",
            m.duration_minutes
        ))
    })?;
    let number_of_guests = u32::try_from(m.number_of_guests).map_err(|_| {
        DomainError::InvalidReservationData(format!(
            "stored guest count is negative: {}",
            m.number_of_guests
        ))
    })?;

    let reservation = Reservation::rehydrate(StoredReservation {
        id: m.id,
        user_id: m.user_id,
        restaurant_id: m.restaurant_id,
        table_id: m.table_id,
        reservation_date: m.reservation_date,
        reservation_time: m.reservation_time,
        duration_minutes,
        number_of_guests,
        status,
        created_at: m.created_at,
        updated_at: m.updated_at,
    })?;
    Ok(reservation)
}

fn to_active_model(r: &Reservation) -> reservation::ActiveModel {
    reservation::ActiveModel {
        id: Set(r.id().to_string()),
        user_id: Set(r.user_id().to_string()),
        restaurant_id: Set(r.restaurant_id().to_string()),
        table_id: Set(r.table_id().to_string()),
        reservation_date: Set(r.reservation_date()),
        reservation_time: Set(r.reservation_time()),
        duration_minutes: Set(r.duration_minutes() as i32),
        start_at: Set(r.start_at()),
        end_at: Set(r.end_at()),
        number_of_guests: Set(r.number_of_guests() as i32),
        status: Set(r.status().as_str().to_string()),
        created_at: Set(r.created_at()),
        updated_at: Set(r.updated_at()),
    }
}

/// A unique-index hit on (table_id, start_at) is the loser of a
/// concurrent scheduling race, not an infrastructure fault.
fn map_write_err(e: sea_orm::DbErr, table_id: &str) -> AppError {
    match e.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => {
            AppError::Domain(DomainError::SlotUnavailable {
                table_id: table_id.to_string(),
            })
        }
        _ => AppError::Infra(InfraError::Database(e)),
    }
}

// ── ReservationRepository impl ──────────────────────────────────

#[async_trait]
impl ReservationRepository for SeaOrmReservationRepository {
    async fn save(&self, r: &Reservation) -> AppResult<()> {
        debug!("Saving reservation: {}", r.id());

        let exists = reservation::Entity::find_by_id(r.id())
            .one(&self.db)
            .await
            .map_err(InfraError::from)?
            .is_some();

        let model = to_active_model(r);
        let result = if exists {
            model.update(&self.db).await.map(|_| ())
        } else {
            model.insert(&self.db).await.map(|_| ())
        };
        result.map_err(|e| map_write_err(e, r.table_id()))
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<Reservation>> {
        let model = reservation::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(InfraError::from)?;
        model.map(model_to_domain).transpose()
    }

    async fn delete(&self, id: &str) -> AppResult<()> {
        debug!("Deleting reservation: {}", id);

        let result = reservation::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(InfraError::from)?;
        if result.rows_affected == 0 {
            return Err(DomainError::ReservationNotFound(id.to_string()).into());
        }
        Ok(())
    }

    async fn find_active_within_window(&self, query: &WindowQuery) -> AppResult<Vec<Reservation>> {
        let mut select = reservation::Entity::find()
            .filter(reservation::Column::Status.is_in([
                ReservationStatus::Pending.as_str(),
                ReservationStatus::Confirmed.as_str(),
            ]))
            .filter(reservation::Column::StartAt.lt(query.window.end_at()))
            .filter(reservation::Column::EndAt.gt(query.window.start_at()));

        if let Some(table_id) = &query.table_id {
            select = select.filter(reservation::Column::TableId.eq(table_id));
        }
        if let Some(user_id) = &query.user_id {
            select = select.filter(reservation::Column::UserId.eq(user_id));
        }
        if let Some(exclude) = &query.exclude_reservation_id {
            select = select.filter(reservation::Column::Id.ne(exclude));
        }

        let models = select
            .order_by_asc(reservation::Column::StartAt)
            .all(&self.db)
            .await
            .map_err(InfraError::from)?;
        models.into_iter().map(model_to_domain).collect()
    }
}

// ── Tests ──────────────────────────────────────────────────────
