//! Reservation domain entity

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

use crate::support::errors::{DomainError, DomainResult};

use super::slot::Slot;

/// Reservation status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReservationStatus {
    /// Scheduled, awaiting confirmation
    Pending,
    /// Confirmed by the restaurant
    Confirmed,
    /// Cancelled; keeps no hold on the table
    Cancelled,
}

impl ReservationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Confirmed => "Confirmed",
            Self::Cancelled => "Cancelled",
        }
    }

    /// Parse a stored status string. Unknown values are surfaced to the
    /// caller instead of being coerced, so corrupt rows fail loudly.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "Pending" => Some(Self::Pending),
            "Confirmed" => Some(Self::Confirmed),
            "Cancelled" => Some(Self::Cancelled),
            _ => None,
        }
    }

    /// Pending and confirmed reservations hold their table and count
    /// toward conflicts; cancelled ones do not.
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Pending | Self::Confirmed)
    }
}

impl std::fmt::Display for ReservationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Input for creating a reservation.
#[derive(Debug, Clone)]
pub struct NewReservation {
    pub user_id: String,
    pub restaurant_id: String,
    pub table_id: String,
    pub reservation_date: NaiveDate,
    pub reservation_time: NaiveTime,
    pub duration_minutes: u32,
    pub number_of_guests: u32,
}

/// Partial update; `None` fields keep their stored value.
#[derive(Debug, Clone, Default)]
pub struct ReservationPatch {
    pub reservation_date: Option<NaiveDate>,
    pub reservation_time: Option<NaiveTime>,
    pub duration_minutes: Option<u32>,
    pub number_of_guests: Option<u32>,
}

/// The persistence-facing record. Adapters read entity state through the
/// accessors and rebuild entities only through [`Reservation::rehydrate`].
#[derive(Debug, Clone)]
pub struct StoredReservation {
    pub id: String,
    pub user_id: String,
    pub restaurant_id: String,
    pub table_id: String,
    pub reservation_date: NaiveDate,
    pub reservation_time: NaiveTime,
    pub duration_minutes: u32,
    pub number_of_guests: u32,
    pub status: ReservationStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Table reservation aggregate.
///
/// Fields are private: the only ways to obtain an instance are the
/// fallible constructors below, so every live entity satisfies the
/// reservation invariants (non-blank ids, positive guests and duration).
#[derive(Debug, Clone, PartialEq)]
pub struct Reservation {
    id: String,
    user_id: String,
    restaurant_id: String,
    table_id: String,
    reservation_date: NaiveDate,
    reservation_time: NaiveTime,
    duration_minutes: u32,
    number_of_guests: u32,
    status: ReservationStatus,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

fn normalized(value: &str, field: &str) -> DomainResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(DomainError::InvalidReservationData(format!(
            "{field} must not be blank"
        )));
    }
    Ok(trimmed.to_string())
}

impl Reservation {
    /// Create a new reservation in `Pending` status.
    ///
    /// `now` comes from the caller's clock; the slot must start strictly
    /// after it. Both timestamps are stamped from the same instant.
    pub fn create(
        id: impl Into<String>,
        props: NewReservation,
        now: DateTime<Utc>,
    ) -> DomainResult<Self> {
        let reservation = Self {
            id: normalized(&id.into(), "reservation id")?,
            user_id: normalized(&props.user_id, "user id")?,
            restaurant_id: normalized(&props.restaurant_id, "restaurant id")?,
            table_id: normalized(&props.table_id, "table id")?,
            reservation_date: props.reservation_date,
            reservation_time: props.reservation_time,
            duration_minutes: props.duration_minutes,
            number_of_guests: props.number_of_guests,
            status: ReservationStatus::Pending,
            created_at: now,
            updated_at: now,
        };
        reservation.check_fields()?;
        reservation.check_future(now)?;
        Ok(reservation)
    }

    /// Rebuild an entity from storage.
    ///
    /// Field validation still applies so corrupt rows are rejected, but
    /// the future-slot rule does not: historical reservations must load.
    pub fn rehydrate(stored: StoredReservation) -> DomainResult<Self> {
        let reservation = Self {
            id: normalized(&stored.id, "reservation id")?,
            user_id: normalized(&stored.user_id, "user id")?,
            restaurant_id: normalized(&stored.restaurant_id, "restaurant id")?,
            table_id: normalized(&stored.table_id, "table id")?,
            reservation_date: stored.reservation_date,
            reservation_time: stored.reservation_time,
            duration_minutes: stored.duration_minutes,
            number_of_guests: stored.number_of_guests,
            status: stored.status,
            created_at: stored.created_at,
            updated_at: stored.updated_at,
        };
        reservation.check_fields()?;
        Ok(reservation)
    }

    /// Merge a partial update and re-validate the result.
    ///
    /// The future-slot rule is re-applied only when the merged slot
    /// differs from the stored one, so a guests-only change to a
    /// reservation that has already started is still legal.
    pub fn update(&mut self, patch: ReservationPatch, now: DateTime<Utc>) -> DomainResult<()> {
        let before = self.slot();

        let merged = Self {
            reservation_date: patch.reservation_date.unwrap_or(self.reservation_date),
            reservation_time: patch.reservation_time.unwrap_or(self.reservation_time),
            duration_minutes: patch.duration_minutes.unwrap_or(self.duration_minutes),
            number_of_guests: patch.number_of_guests.unwrap_or(self.number_of_guests),
            updated_at: now,
            ..self.clone()
        };
        merged.check_fields()?;
        if merged.slot() != before {
            merged.check_future(now)?;
        }

        *self = merged;
        Ok(())
    }

    fn check_fields(&self) -> DomainResult<()> {
        if self.number_of_guests == 0 {
            return Err(DomainError::InvalidReservationData(
                "number of guests must be positive".into(),
            ));
        }
        if self.duration_minutes == 0 {
            return Err(DomainError::InvalidReservationData(
                "duration must be positive".into(),
            ));
        }
        Ok(())
    }

    fn check_future(&self, now: DateTime<Utc>) -> DomainResult<()> {
        if self.slot().start_at() <= now {
            return Err(DomainError::InvalidReservationData(
                "reservation must start in the future".into(),
            ));
        }
        Ok(())
    }

    // ── Accessors ──────────────────────────────────────────────

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub fn restaurant_id(&self) -> &str {
        &self.restaurant_id
    }

    pub fn table_id(&self) -> &str {
        &self.table_id
    }

    pub fn reservation_date(&self) -> NaiveDate {
        self.reservation_date
    }

    pub fn reservation_time(&self) -> NaiveTime {
        self.reservation_time
    }

    pub fn duration_minutes(&self) -> u32 {
        self.duration_minutes
    }

    pub fn number_of_guests(&self) -> u32 {
        self.number_of_guests
    }

    pub fn status(&self) -> ReservationStatus {
        self.status
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// The `[start, end)` interval this reservation occupies, derived
    /// from date, time and duration.
    pub fn slot(&self) -> Slot {
        Slot::from_parts(
            self.reservation_date,
            self.reservation_time,
            self.duration_minutes,
        )
    }

    pub fn start_at(&self) -> DateTime<Utc> {
        self.slot().start_at()
    }

    pub fn end_at(&self) -> DateTime<Utc> {
        self.slot().end_at()
    }

    /// Check if this reservation still holds its table
    pub fn is_active(&self) -> bool {
        self.status.is_active()
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 10, 12, 0, 0).unwrap()
    }

    fn sample_props() -> NewReservation {
        NewReservation {
            user_id: "user-1".into(),
            restaurant_id: "rest-1".into(),
            table_id: "table-1".into(),
            reservation_date: NaiveDate::from_ymd_opt(2026, 3, 14).unwrap(),
            reservation_time: NaiveTime::from_hms_opt(19, 30, 0).unwrap(),
            duration_minutes: 90,
            number_of_guests: 2,
        }
    }

    fn sample_reservation() -> Reservation {
        Reservation::create("rsv-1", sample_props(), now()).unwrap()
    }

    #[test]
    fn create_defaults_to_pending() {
        let r = sample_reservation();
        assert_eq!(r.status(), ReservationStatus::Pending);
        assert!(r.is_active());
        assert_eq!(r.created_at(), now());
        assert_eq!(r.updated_at(), now());
        assert_eq!(r.end_at() - r.start_at(), Duration::minutes(90));
    }

    #[test]
    fn create_trims_ids() {
        let mut props = sample_props();
        props.user_id = "  user-1  ".into();
        let r = Reservation::create("  rsv-1 ", props, now()).unwrap();
        assert_eq!(r.id(), "rsv-1");
        assert_eq!(r.user_id(), "user-1");
    }

    #[test]
    fn blank_references_are_rejected() {
        for field in ["user", "restaurant", "table"] {
            let mut props = sample_props();
            match field {
                "user" => props.user_id = "   ".into(),
                "restaurant" => props.restaurant_id = String::new(),
                _ => props.table_id = "\t".into(),
            }
            let err = Reservation::create("rsv-1", props, now()).unwrap_err();
            assert!(matches!(err, DomainError::InvalidReservationData(_)));
        }
    }

    #[test]
    fn zero_guests_rejected() {
        let mut props = sample_props();
        props.number_of_guests = 0;
        let err = Reservation::create("rsv-1", props, now()).unwrap_err();
        assert_eq!(
            err,
            DomainError::InvalidReservationData("number of guests must be positive".into())
        );
    }

    #[test]
    fn zero_duration_rejected() {
        let mut props = sample_props();
        props.duration_minutes = 0;
        assert!(Reservation::create("rsv-1", props, now()).is_err());
    }

    #[test]
    fn start_must_be_strictly_future() {
        let mut props = sample_props();
        props.reservation_date = now().date_naive();
        props.reservation_time = now().time();
        let err = Reservation::create("rsv-1", props, now()).unwrap_err();
        assert_eq!(
            err,
            DomainError::InvalidReservationData("reservation must start in the future".into())
        );
    }

    #[test]
    fn rehydrate_accepts_past_slots() {
        let r = sample_reservation();
        let mut stored = StoredReservation {
            id: r.id().into(),
            user_id: r.user_id().into(),
            restaurant_id: r.restaurant_id().into(),
            table_id: r.table_id().into(),
            reservation_date: NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
            reservation_time: r.reservation_time(),
            duration_minutes: r.duration_minutes(),
            number_of_guests: r.number_of_guests(),
            status: ReservationStatus::Confirmed,
            created_at: r.created_at(),
            updated_at: r.updated_at(),
        };
        let back = Reservation::rehydrate(stored.clone()).unwrap();
        assert_eq!(back.status(), ReservationStatus::Confirmed);
        assert!(back.start_at() < now());

        stored.user_id = "  ".into();
        assert!(Reservation::rehydrate(stored).is_err());
    }

    #[test]
    fn update_merges_and_bumps_updated_at() {
        let mut r = sample_reservation();
        let later = now() + Duration::hours(1);
        r.update(
            ReservationPatch {
                number_of_guests: Some(4),
                duration_minutes: Some(120),
                ..Default::default()
            },
            later,
        )
        .unwrap();
        assert_eq!(r.number_of_guests(), 4);
        assert_eq!(r.duration_minutes(), 120);
        assert_eq!(r.updated_at(), later);
        assert_eq!(r.created_at(), now());
    }

    #[test]
    fn update_rejects_past_slot_change() {
        let mut r = sample_reservation();
        let err = r
            .update(
                ReservationPatch {
                    reservation_date: Some(NaiveDate::from_ymd_opt(2026, 3, 1).unwrap()),
                    ..Default::default()
                },
                now(),
            )
            .unwrap_err();
        assert!(matches!(err, DomainError::InvalidReservationData(_)));
        // Failed update leaves the entity untouched.
        assert_eq!(r.reservation_date(), sample_props().reservation_date);
        assert_eq!(r.updated_at(), now());
    }

    #[test]
    fn guests_only_update_skips_future_check() {
        let mut r = sample_reservation();
        let after_seating = now() + Duration::days(30);
        r.update(
            ReservationPatch {
                number_of_guests: Some(3),
                ..Default::default()
            },
            after_seating,
        )
        .unwrap();
        assert_eq!(r.number_of_guests(), 3);
    }

    #[test]
    fn update_with_identical_slot_values_counts_unchanged() {
        let mut r = sample_reservation();
        let after_seating = now() + Duration::days(30);
        r.update(
            ReservationPatch {
                reservation_date: Some(r.reservation_date()),
                reservation_time: Some(r.reservation_time()),
                ..Default::default()
            },
            after_seating,
        )
        .unwrap();
        assert_eq!(r.updated_at(), after_seating);
    }

    #[test]
    fn update_rejects_zero_guests() {
        let mut r = sample_reservation();
        let err = r
            .update(
                ReservationPatch {
                    number_of_guests: Some(0),
                    ..Default::default()
                },
                now(),
            )
            .unwrap_err();
        assert!(matches!(err, DomainError::InvalidReservationData(_)));
        assert_eq!(r.number_of_guests(), 2);
    }

    #[test]
    fn status_display_roundtrip() {
        for status in &[
            ReservationStatus::Pending,
            ReservationStatus::Confirmed,
            ReservationStatus::Cancelled,
        ] {
            let parsed = ReservationStatus::from_str(status.as_str());
            assert_eq!(parsed, Some(*status));
        }
    }

    #[test]
    fn unknown_status_is_none() {
        assert_eq!(ReservationStatus::from_str("NoShow"), None);
    }

    #[test]
    fn cancelled_is_not_active() {
        assert!(ReservationStatus::Pending.is_active());
        assert!(ReservationStatus::Confirmed.is_active());
        assert!(!ReservationStatus::Cancelled.is_active());
    }
}
