//! Scheduling request DTOs
//!
//! Boundary records handed to the scheduling service by the caller.
//! `validator` catches the cheap shape errors up front; the entity
//! re-validates its own invariants on construction regardless.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request a new reservation.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ScheduleReservation {
    /// Caller-assigned id; minted by the service when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, message = "reservation id must not be blank"))]
    pub reservation_id: Option<String>,

    #[validate(length(min = 1, message = "user id is required"))]
    pub user_id: String,

    #[validate(length(min = 1, message = "restaurant id is required"))]
    pub restaurant_id: String,

    #[validate(length(min = 1, message = "table id is required"))]
    pub table_id: String,

    pub reservation_date: NaiveDate,
    pub reservation_time: NaiveTime,

    #[validate(range(min = 1, message = "party size must be positive"))]
    pub number_of_guests: u32,

    /// Seating length; the configured slot duration when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 1, message = "duration must be positive"))]
    pub duration_minutes: Option<u32>,
}

/// Change the date, time, duration or party size of a reservation.
/// `None` fields keep their stored value.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateReservation {
    #[validate(length(min = 1, message = "reservation id is required"))]
    pub reservation_id: String,

    /// Must match the reservation's owner.
    #[validate(length(min = 1, message = "user id is required"))]
    pub user_id: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub reservation_date: Option<NaiveDate>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub reservation_time: Option<NaiveTime>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 1, message = "duration must be positive"))]
    pub duration_minutes: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 1, message = "party size must be positive"))]
    pub number_of_guests: Option<u32>,
}

/// Cancel a reservation on behalf of its owner.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CancelReservation {
    #[validate(length(min = 1, message = "reservation id is required"))]
    pub reservation_id: String,

    #[validate(length(min = 1, message = "user id is required"))]
    pub user_id: String,
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn schedule_request() -> ScheduleReservation {
        ScheduleReservation {
            reservation_id: None,
            user_id: "user-1".into(),
            restaurant_id: "rest-1".into(),
            table_id: "table-1".into(),
            reservation_date: NaiveDate::from_ymd_opt(2026, 9, 12).unwrap(),
            reservation_time: NaiveTime::from_hms_opt(19, 0, 0).unwrap(),
            number_of_guests: 2,
            duration_minutes: None,
        }
    }

    #[test]
    fn valid_request_passes() {
        assert!(schedule_request().validate().is_ok());
    }

    #[test]
    fn empty_ids_and_zero_guests_fail() {
        let mut request = schedule_request();
        request.user_id = String::new();
        assert!(request.validate().is_err());

        let mut request = schedule_request();
        request.number_of_guests = 0;
        assert!(request.validate().is_err());

        let mut request = schedule_request();
        request.duration_minutes = Some(0);
        assert!(request.validate().is_err());
    }

    #[test]
    fn schedule_request_round_trips_through_json() {
        let request = schedule_request();
        let json = serde_json::to_string(&request).unwrap();
        assert!(!json.contains("reservation_id"));
        assert!(!json.contains("duration_minutes"));
        let back: ScheduleReservation = serde_json::from_str(&json).unwrap();
        assert_eq!(back.reservation_date, request.reservation_date);
        assert_eq!(back.number_of_guests, 2);
    }
}
