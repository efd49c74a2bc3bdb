//! Restaurant snapshot and operating-hours rules

use std::collections::HashSet;

use chrono::{Duration, NaiveTime, Weekday};

use crate::support::errors::{DomainError, DomainResult};

/// Daily opening window, `open < close`, same calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperatingHours {
    open: NaiveTime,
    close: NaiveTime,
}

impl OperatingHours {
    /// Parse `"HH:MM"` open/close strings as supplied by the restaurant
    /// system. Malformed input or an inverted window is rejected.
    pub fn parse(open: &str, close: &str) -> DomainResult<Self> {
        let open = parse_hhmm(open)?;
        let close = parse_hhmm(close)?;
        if open >= close {
            return Err(DomainError::InvalidReservationData(format!(
                "opening hours are inverted: {open} >= {close}"
            )));
        }
        Ok(Self { open, close })
    }

    pub fn open(&self) -> NaiveTime {
        self.open
    }

    pub fn close(&self) -> NaiveTime {
        self.close
    }

    /// Total time the restaurant is open on a day it operates.
    pub fn daily_span(&self) -> Duration {
        self.close - self.open
    }

    /// Whether a same-day `[start, end]` seating fits inside the window.
    pub fn contains(&self, start: NaiveTime, end: NaiveTime) -> bool {
        self.open <= start && end <= self.close
    }
}

fn parse_hhmm(value: &str) -> DomainResult<NaiveTime> {
    NaiveTime::parse_from_str(value.trim(), "%H:%M").map_err(|_| {
        DomainError::InvalidReservationData(format!("malformed time of day: {value:?}"))
    })
}

/// Read-only projection of a restaurant, used purely for validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestaurantSnapshot {
    pub restaurant_id: String,
    pub is_active: bool,
    pub hours: OperatingHours,
    pub days_open: HashSet<Weekday>,
}

impl RestaurantSnapshot {
    /// Build a snapshot from the raw shapes the restaurant system stores:
    /// `"HH:MM"` strings and weekday names ("Monday", "mon", ...).
    pub fn from_raw(
        restaurant_id: impl Into<String>,
        is_active: bool,
        open_time: &str,
        close_time: &str,
        days_open: &[String],
    ) -> DomainResult<Self> {
        let mut days = HashSet::with_capacity(days_open.len());
        for name in days_open {
            let day: Weekday = name.trim().parse().map_err(|_| {
                DomainError::InvalidReservationData(format!("unknown weekday: {name:?}"))
            })?;
            days.insert(day);
        }
        Ok(Self {
            restaurant_id: restaurant_id.into(),
            is_active,
            hours: OperatingHours::parse(open_time, close_time)?,
            days_open: days,
        })
    }

    pub fn is_open_on(&self, day: Weekday) -> bool {
        self.days_open.contains(&day)
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn time(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn parses_and_spans() {
        let hours = OperatingHours::parse("10:00", "22:00").unwrap();
        assert_eq!(hours.open(), time(10, 0));
        assert_eq!(hours.close(), time(22, 0));
        assert_eq!(hours.daily_span(), Duration::hours(12));
    }

    #[test]
    fn rejects_malformed_and_inverted_hours() {
        assert!(OperatingHours::parse("10am", "22:00").is_err());
        assert!(OperatingHours::parse("10:00", "25:99").is_err());
        assert!(OperatingHours::parse("22:00", "10:00").is_err());
        assert!(OperatingHours::parse("12:00", "12:00").is_err());
    }

    #[test]
    fn containment_is_inclusive_at_both_edges() {
        let hours = OperatingHours::parse("10:00", "22:00").unwrap();
        assert!(hours.contains(time(10, 0), time(22, 0)));
        assert!(hours.contains(time(12, 0), time(13, 30)));
        assert!(!hours.contains(time(9, 59), time(11, 0)));
        assert!(!hours.contains(time(21, 0), time(22, 1)));
    }

    #[test]
    fn snapshot_parses_weekday_names() {
        let days: Vec<String> = ["Monday", "tue", " Wednesday "]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let snapshot =
            RestaurantSnapshot::from_raw("rest-1", true, "10:00", "22:00", &days).unwrap();
        assert!(snapshot.is_open_on(Weekday::Mon));
        assert!(snapshot.is_open_on(Weekday::Tue));
        assert!(snapshot.is_open_on(Weekday::Wed));
        assert!(!snapshot.is_open_on(Weekday::Sun));
    }

    #[test]
    fn snapshot_rejects_unknown_weekday() {
        let days = vec!["Funday".to_string()];
        let err = RestaurantSnapshot::from_raw("rest-1", true, "10:00", "22:00", &days)
            .unwrap_err();
        assert!(matches!(err, DomainError::InvalidReservationData(_)));
    }
}
