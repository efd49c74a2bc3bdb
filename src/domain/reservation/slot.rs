//! Half-open time interval for a seating

use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Utc};

/// The `[start_at, end_at)` interval a reservation occupies.
///
/// The interval is half-open: a slot ending at 20:00 does not conflict
/// with one starting at 20:00, so back-to-back seatings share a boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slot {
    start_at: DateTime<Utc>,
    end_at: DateTime<Utc>,
}

impl Slot {
    /// Build a slot from its calendar parts. The end instant is always
    /// derived as `start + duration`, never stored independently.
    pub fn from_parts(date: NaiveDate, time: NaiveTime, duration_minutes: u32) -> Self {
        let start_at = date.and_time(time).and_utc();
        Self {
            start_at,
            end_at: start_at + Duration::minutes(i64::from(duration_minutes)),
        }
    }

    pub fn start_at(&self) -> DateTime<Utc> {
        self.start_at
    }

    pub fn end_at(&self) -> DateTime<Utc> {
        self.end_at
    }

    pub fn duration(&self) -> Duration {
        self.end_at - self.start_at
    }

    /// Strict interval intersection: the slots share at least one instant
    /// of seating time. Touching boundaries are not an overlap.
    pub fn overlaps(&self, other: &Slot) -> bool {
        self.start_at < other.end_at && self.end_at > other.start_at
    }

    /// Widen the slot by `margin` on each side. Used to build the lookup
    /// window handed to the reservation repository.
    pub fn padded_by(&self, margin: Duration) -> Slot {
        Slot {
            start_at: self.start_at - margin,
            end_at: self.end_at + margin,
        }
    }

    /// True when the seating runs past midnight into the next day.
    pub fn crosses_midnight(&self) -> bool {
        self.end_at.date_naive() != self.start_at.date_naive()
            && self.end_at.time() != NaiveTime::MIN
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 9, 12).unwrap()
    }

    fn time(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn end_is_start_plus_duration() {
        let slot = Slot::from_parts(date(), time(19, 30), 90);
        assert_eq!(slot.end_at() - slot.start_at(), Duration::minutes(90));
        assert_eq!(slot.end_at().time(), time(21, 0));
    }

    #[test]
    fn touching_slots_do_not_overlap() {
        let first = Slot::from_parts(date(), time(18, 0), 120);
        let second = Slot::from_parts(date(), time(20, 0), 120);
        assert!(!first.overlaps(&second));
        assert!(!second.overlaps(&first));
    }

    #[test]
    fn one_minute_of_shared_time_overlaps() {
        let first = Slot::from_parts(date(), time(18, 0), 121);
        let second = Slot::from_parts(date(), time(20, 0), 120);
        assert!(first.overlaps(&second));
        assert!(second.overlaps(&first));
    }

    #[test]
    fn containment_is_an_overlap() {
        let outer = Slot::from_parts(date(), time(18, 0), 240);
        let inner = Slot::from_parts(date(), time(19, 0), 60);
        assert!(outer.overlaps(&inner));
        assert!(inner.overlaps(&outer));
    }

    #[test]
    fn padding_widens_both_sides() {
        let slot = Slot::from_parts(date(), time(19, 0), 90);
        let window = slot.padded_by(Duration::minutes(90));
        assert_eq!(window.start_at().time(), time(17, 30));
        assert_eq!(window.end_at().time(), time(22, 0));
    }

    #[test]
    fn midnight_crossing_detected() {
        let late = Slot::from_parts(date(), time(23, 30), 90);
        assert!(late.crosses_midnight());

        let inside = Slot::from_parts(date(), time(20, 0), 120);
        assert!(!inside.crosses_midnight());

        // Ending exactly at midnight stays within the day.
        let flush = Slot::from_parts(date(), time(22, 0), 120);
        assert!(!flush.crosses_midnight());
    }
}
