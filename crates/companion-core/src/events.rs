use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::achievement::AchievementCategory;

/// Every store mutation produces an Event.
/// The presentation layer maps events to notices and re-renders from state.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    TaskAdded {
        task_id: String,
        title: String,
        due_at: DateTime<Utc>,
        at: DateTime<Utc>,
    },
    TaskCompleted {
        task_id: String,
        at: DateTime<Utc>,
    },
    /// A completed task was toggled back to pending.
    TaskReopened {
        task_id: String,
        at: DateTime<Utc>,
    },
    AchievementAdded {
        achievement_id: String,
        title: String,
        category: AchievementCategory,
        has_proof: bool,
        at: DateTime<Utc>,
    },
    ChatMessageSent {
        message_id: String,
        at: DateTime<Utc>,
    },
    /// The scripted reply was queued for delivery at `deliver_at`.
    ChatReplyScheduled {
        deliver_at: DateTime<Utc>,
        at: DateTime<Utc>,
    },
    ChatReplyCancelled {
        at: DateTime<Utc>,
    },
    ChatReplyDelivered {
        message_id: String,
        at: DateTime<Utc>,
    },
}
