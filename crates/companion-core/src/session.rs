//! One in-memory app session.
//!
//! A session owns one task store, one achievement store, and one chat
//! thread -- the state behind a single page load. Sessions are never
//! shared between owners and never persisted; dropping the session is the
//! reload.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::achievement::{Achievement, AchievementCategory, AchievementStore, ProofArtifact};
use crate::chat::ChatThread;
use crate::task::{Task, TaskStore};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub tasks: TaskStore,
    pub achievements: AchievementStore,
    pub chat: ChatThread,
}

impl Session {
    /// Empty session.
    pub fn new() -> Self {
        Session {
            tasks: TaskStore::new(),
            achievements: AchievementStore::new(),
            chat: ChatThread::new(),
        }
    }

    /// Session pre-populated with the records a first visit starts from:
    /// three tasks due in 1/3/5 days (the last already completed) and two
    /// achievements, the first with proof.
    ///
    /// Seed ids are short literals so they are easy to type at a prompt;
    /// freshly added records get generated ids.
    pub fn with_demo_records(now: DateTime<Utc>) -> Self {
        let mut session = Session::new();

        session.tasks.push_seed(Task {
            id: "1".to_string(),
            title: "Complete Math Assignment".to_string(),
            due_at: now + Duration::days(1),
            completed: false,
            created_at: now,
        });
        session.tasks.push_seed(Task {
            id: "2".to_string(),
            title: "Research Paper on Environmental Science".to_string(),
            due_at: now + Duration::days(3),
            completed: false,
            created_at: now,
        });
        session.tasks.push_seed(Task {
            id: "3".to_string(),
            title: "Study for History Quiz".to_string(),
            due_at: now + Duration::days(5),
            completed: true,
            created_at: now,
        });

        session.achievements.push_seed(Achievement {
            id: "1".to_string(),
            title: "Dean's List".to_string(),
            category: AchievementCategory::Academic,
            description:
                "Achieved Dean's List status for maintaining a GPA of 3.8 in the Fall semester."
                    .to_string(),
            proof: Some(ProofArtifact::new("deans-list.pdf")),
            has_proof: true,
            created_at: now,
        });
        session.achievements.push_seed(Achievement {
            id: "2".to_string(),
            title: "Basketball Tournament".to_string(),
            category: AchievementCategory::Sports,
            description: "Runner-up in the inter-college basketball tournament.".to_string(),
            proof: None,
            has_proof: false,
            created_at: now,
        });

        session
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
