//! Transient user-facing notices.
//!
//! Stores report outcomes as events; this module maps them to the short
//! title/body pairs the UI flashes at the user. Rejected submissions all
//! surface the same "Missing Information" notice, and the form keeps its
//! in-progress values so the user can correct and resubmit.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::events::Event;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeSeverity {
    Info,
    Error,
}

/// A short notification shown once and then dismissed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub title: String,
    pub body: String,
    pub severity: NoticeSeverity,
}

impl Notice {
    fn info(title: &str, body: &str) -> Self {
        Notice {
            title: title.to_string(),
            body: body.to_string(),
            severity: NoticeSeverity::Info,
        }
    }

    fn error(title: &str, body: &str) -> Self {
        Notice {
            title: title.to_string(),
            body: body.to_string(),
            severity: NoticeSeverity::Error,
        }
    }

    /// Notice for a successful store mutation, where one is user-visible.
    pub fn for_event(event: &Event) -> Option<Notice> {
        match event {
            Event::TaskAdded { .. } => Some(Self::info(
                "Task Added!",
                "Your task has been added to your list.",
            )),
            Event::TaskCompleted { .. } => Some(Self::info(
                "Task Completed!",
                "Great job! Keep up the good work.",
            )),
            Event::TaskReopened { .. } => Some(Self::info(
                "Task Marked as Incomplete",
                "The task has been moved back to your active list.",
            )),
            Event::AchievementAdded { .. } => Some(Self::info(
                "Achievement Added!",
                "Your achievement has been recorded successfully.",
            )),
            _ => None,
        }
    }

    /// Rejection notice for a failed form submission.
    pub fn for_validation(_err: &ValidationError) -> Notice {
        Self::error("Missing Information", "Please fill in all required fields.")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn task_added_notice() {
        let event = Event::TaskAdded {
            task_id: "task-1".to_string(),
            title: "x".to_string(),
            due_at: Utc.with_ymd_and_hms(2026, 8, 5, 0, 0, 0).unwrap(),
            at: Utc.with_ymd_and_hms(2026, 8, 4, 0, 0, 0).unwrap(),
        };
        let notice = Notice::for_event(&event).unwrap();
        assert_eq!(notice.title, "Task Added!");
        assert_eq!(notice.severity, NoticeSeverity::Info);
    }

    #[test]
    fn toggle_notices_follow_direction() {
        let at = Utc.with_ymd_and_hms(2026, 8, 4, 0, 0, 0).unwrap();
        let completed = Event::TaskCompleted {
            task_id: "task-1".to_string(),
            at,
        };
        let reopened = Event::TaskReopened {
            task_id: "task-1".to_string(),
            at,
        };
        assert_eq!(
            Notice::for_event(&completed).unwrap().title,
            "Task Completed!"
        );
        assert_eq!(
            Notice::for_event(&reopened).unwrap().title,
            "Task Marked as Incomplete"
        );
    }

    #[test]
    fn chat_events_have_no_notice() {
        let at = Utc.with_ymd_and_hms(2026, 8, 4, 0, 0, 0).unwrap();
        let event = Event::ChatMessageSent {
            message_id: "msg-1".to_string(),
            at,
        };
        assert!(Notice::for_event(&event).is_none());
    }

    #[test]
    fn validation_notice_is_destructive() {
        let err = ValidationError::missing("title");
        let notice = Notice::for_validation(&err);
        assert_eq!(notice.title, "Missing Information");
        assert_eq!(notice.body, "Please fill in all required fields.");
        assert_eq!(notice.severity, NoticeSeverity::Error);
    }
}
