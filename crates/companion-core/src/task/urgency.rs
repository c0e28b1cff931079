//! Due-date urgency classification.
//!
//! A pure function of the task's due timestamp, its completion flag, and an
//! injected evaluation instant. It must be re-derived on every render; the
//! result is never stored.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Hours-until-due at or below which a pending task counts as urgent.
pub const URGENT_WINDOW_HOURS: i64 = 24;

/// Urgency tier of a task at a given instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    Urgent,
    Normal,
}

impl Urgency {
    pub fn is_urgent(self) -> bool {
        matches!(self, Urgency::Urgent)
    }
}

/// Classify a task by due-date proximity.
///
/// Urgent iff the task is not completed and the signed whole-hour distance
/// from `now` to `due_at` is at most [`URGENT_WINDOW_HOURS`]. Overdue tasks
/// satisfy the bound and classify urgent; the window is inclusive, so a task
/// due in exactly 24 hours is urgent while one due in 25 is not. Completed
/// tasks are never urgent, whatever their due timestamp.
pub fn classify(due_at: DateTime<Utc>, completed: bool, now: DateTime<Utc>) -> Urgency {
    if completed {
        return Urgency::Normal;
    }
    if (due_at - now).num_hours() <= URGENT_WINDOW_HOURS {
        Urgency::Urgent
    } else {
        Urgency::Normal
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn instant() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 8, 4, 12, 0, 0).unwrap()
    }

    #[test]
    fn due_in_exactly_24_hours_is_urgent() {
        let now = instant();
        assert_eq!(
            classify(now + Duration::hours(24), false, now),
            Urgency::Urgent
        );
    }

    #[test]
    fn due_in_25_hours_is_normal() {
        let now = instant();
        assert_eq!(
            classify(now + Duration::hours(25), false, now),
            Urgency::Normal
        );
    }

    #[test]
    fn partial_hours_truncate_toward_zero() {
        let now = instant();
        // 24h59m truncates to 24 whole hours and stays inside the window.
        assert_eq!(
            classify(now + Duration::hours(24) + Duration::minutes(59), false, now),
            Urgency::Urgent
        );
    }

    #[test]
    fn overdue_is_urgent() {
        let now = instant();
        assert_eq!(
            classify(now - Duration::hours(5), false, now),
            Urgency::Urgent
        );
        assert_eq!(
            classify(now - Duration::days(30), false, now),
            Urgency::Urgent
        );
    }

    #[test]
    fn completed_is_never_urgent() {
        let now = instant();
        assert_eq!(classify(now, true, now), Urgency::Normal);
        assert_eq!(
            classify(now - Duration::hours(100), true, now),
            Urgency::Normal
        );
        assert_eq!(
            classify(now + Duration::hours(1), true, now),
            Urgency::Normal
        );
    }

    #[test]
    fn far_future_is_normal() {
        let now = instant();
        assert_eq!(
            classify(now + Duration::days(5), false, now),
            Urgency::Normal
        );
    }
}
