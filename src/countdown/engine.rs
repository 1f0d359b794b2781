//! Countdown engine
//!
//! Remaining-time breakdown and urgency classification over signed
//! millisecond durations. Everything here is pure: `now` is always a
//! parameter, so a tick loop can drive many targets from one wall-clock
//! read and tests can drive them from fixed instants.

use chrono::NaiveDateTime;
use serde::Serialize;

pub const MS_PER_SECOND: i64 = 1_000;
pub const MS_PER_MINUTE: i64 = 60_000;
pub const MS_PER_HOUR: i64 = 3_600_000;
pub const MS_PER_DAY: i64 = 86_400_000;

/// Whole days below which an upcoming exam counts as urgent
pub const URGENT_DAYS: i64 = 3;

/// Signed milliseconds from `now` until `target`
pub fn remaining(target: NaiveDateTime, now: NaiveDateTime) -> i64 {
    (target - now).num_milliseconds()
}

/// Remaining time split into display units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Breakdown {
    pub days: i64,
    /// 0-23
    pub hours: i64,
    /// 0-59
    pub minutes: i64,
    /// 0-59
    pub seconds: i64,
}

impl Breakdown {
    /// Card-style rendering: days, hours, minutes ("2d 5h 30m")
    pub fn compact(&self) -> String {
        format!("{}d {}h {}m", self.days, self.hours, self.minutes)
    }

    /// Hero-style rendering with seconds ("2d 05:30:12")
    pub fn clock(&self) -> String {
        format!(
            "{}d {:02}:{:02}:{:02}",
            self.days, self.hours, self.minutes, self.seconds
        )
    }
}

/// Per-target countdown state: a live breakdown until the target passes,
/// then a terminal elapsed marker. Editing a target's date into the future
/// simply yields a fresh `Pending` on the next computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Countdown {
    Pending(Breakdown),
    Elapsed,
}

impl Countdown {
    pub fn is_elapsed(&self) -> bool {
        matches!(self, Self::Elapsed)
    }
}

/// Decompose a signed duration; negative durations have already elapsed
pub fn breakdown(duration_ms: i64) -> Countdown {
    if duration_ms < 0 {
        return Countdown::Elapsed;
    }
    Countdown::Pending(Breakdown {
        days: duration_ms / MS_PER_DAY,
        hours: (duration_ms % MS_PER_DAY) / MS_PER_HOUR,
        minutes: (duration_ms % MS_PER_HOUR) / MS_PER_MINUTE,
        seconds: (duration_ms % MS_PER_MINUTE) / MS_PER_SECOND,
    })
}

/// Presentation hint for near-term exams
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Urgency {
    Urgent,
    Normal,
}

/// Urgent when the target is ahead but fewer than [`URGENT_DAYS`] whole days
/// away. Floor division keeps already-started targets out of the urgent band.
pub fn urgency(duration_ms: i64) -> Urgency {
    let days = duration_ms.div_euclid(MS_PER_DAY);
    if (0..URGENT_DAYS).contains(&days) {
        Urgency::Urgent
    } else {
        Urgency::Normal
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(d: u32, h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 1, d)
            .unwrap()
            .and_hms_opt(h, m, s)
            .unwrap()
    }

    #[test]
    fn test_remaining_is_signed() {
        assert_eq!(remaining(at(12, 10, 0, 0), at(12, 9, 59, 55)), 5_000);
        assert_eq!(remaining(at(12, 9, 59, 55), at(12, 10, 0, 0)), -5_000);
        assert_eq!(remaining(at(12, 10, 0, 0), at(12, 10, 0, 0)), 0);
    }

    #[test]
    fn test_breakdown_ninety_seconds() {
        let Countdown::Pending(b) = breakdown(90_000) else {
            panic!("expected pending");
        };
        assert_eq!(
            b,
            Breakdown {
                days: 0,
                hours: 0,
                minutes: 1,
                seconds: 30
            }
        );
    }

    #[test]
    fn test_breakdown_negative_is_elapsed() {
        assert!(breakdown(-5_000).is_elapsed());
        assert!(breakdown(-1).is_elapsed());
        assert!(!breakdown(0).is_elapsed());
    }

    #[test]
    fn test_breakdown_unit_ranges() {
        // 2 days, 23:59:59 — every unit at its ceiling
        let ms = 2 * MS_PER_DAY + 23 * MS_PER_HOUR + 59 * MS_PER_MINUTE + 59 * MS_PER_SECOND;
        let Countdown::Pending(b) = breakdown(ms) else {
            panic!("expected pending");
        };
        assert_eq!((b.days, b.hours, b.minutes, b.seconds), (2, 23, 59, 59));

        let Countdown::Pending(rolled) = breakdown(ms + MS_PER_SECOND) else {
            panic!("expected pending");
        };
        assert_eq!(
            (rolled.days, rolled.hours, rolled.minutes, rolled.seconds),
            (3, 0, 0, 0)
        );
    }

    #[test]
    fn test_urgency_threshold() {
        assert_eq!(urgency(0), Urgency::Urgent);
        assert_eq!(urgency(MS_PER_DAY), Urgency::Urgent);
        assert_eq!(urgency(3 * MS_PER_DAY - 1), Urgency::Urgent);
        assert_eq!(urgency(3 * MS_PER_DAY), Urgency::Normal);
        assert_eq!(urgency(10 * MS_PER_DAY), Urgency::Normal);
    }

    #[test]
    fn test_urgency_past_targets_are_normal() {
        assert_eq!(urgency(-1), Urgency::Normal);
        assert_eq!(urgency(-MS_PER_DAY), Urgency::Normal);
    }

    #[test]
    fn test_formatting() {
        let Countdown::Pending(b) =
            breakdown(2 * MS_PER_DAY + 5 * MS_PER_HOUR + 30 * MS_PER_MINUTE + 12 * MS_PER_SECOND)
        else {
            panic!("expected pending");
        };
        assert_eq!(b.compact(), "2d 5h 30m");
        assert_eq!(b.clock(), "2d 05:30:12");
    }
}
