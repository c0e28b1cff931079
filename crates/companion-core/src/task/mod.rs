//! Task records and the per-view task store.
//!
//! The store is an explicit state object owned by exactly one view; every
//! mutation goes through a store method and yields an [`Event`], so the
//! transition function is testable without any UI attached.

pub mod suggestion;
pub mod urgency;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::events::Event;

pub use suggestion::{generate_suggestions, Suggestion};
pub use urgency::{classify, Urgency, URGENT_WINDOW_HOURS};

/// A single task record.
///
/// `id` is an immutable generation-order token, unique within the owning
/// store. `completed` is the only field that changes after creation; tasks
/// are never deleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    /// Unique identifier
    pub id: String,
    /// Task title
    pub title: String,
    /// Due timestamp
    pub due_at: DateTime<Utc>,
    /// Whether the task is completed
    pub completed: bool,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

impl Task {
    /// Create a new pending task at `now`.
    pub fn new(title: impl Into<String>, due_at: DateTime<Utc>, now: DateTime<Utc>) -> Self {
        Task {
            id: format!("task-{}-{}", now.timestamp(), uuid::Uuid::new_v4()),
            title: title.into(),
            due_at,
            completed: false,
            created_at: now,
        }
    }

    /// Urgency tier at the given instant. Recompute on every render.
    pub fn urgency(&self, now: DateTime<Utc>) -> Urgency {
        urgency::classify(self.due_at, self.completed, now)
    }
}

/// Ordered collection of tasks for one view, newest first.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TaskStore {
    tasks: Vec<Task>,
}

impl TaskStore {
    pub fn new() -> Self {
        Self { tasks: Vec::new() }
    }

    /// Add a task at the front of the collection.
    ///
    /// Rejects a title that is empty after trimming; the collection is left
    /// unchanged on rejection.
    pub fn add(
        &mut self,
        title: &str,
        due_at: DateTime<Utc>,
        now: DateTime<Utc>,
    ) -> Result<Event, ValidationError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(ValidationError::missing("title"));
        }

        let task = Task::new(title, due_at, now);
        let event = Event::TaskAdded {
            task_id: task.id.clone(),
            title: task.title.clone(),
            due_at,
            at: now,
        };
        tracing::debug!("Task added: {} (due {})", task.id, task.due_at);
        self.tasks.insert(0, task);
        Ok(event)
    }

    /// Flip the completed flag of the task matching `id`.
    ///
    /// Unknown ids are a no-op and return `None`.
    pub fn toggle_completed(&mut self, id: &str, now: DateTime<Utc>) -> Option<Event> {
        let task = match self.tasks.iter_mut().find(|t| t.id == id) {
            Some(task) => task,
            None => {
                tracing::debug!("Toggle on unknown task id: {}", id);
                return None;
            }
        };

        task.completed = !task.completed;
        let event = if task.completed {
            Event::TaskCompleted {
                task_id: task.id.clone(),
                at: now,
            }
        } else {
            Event::TaskReopened {
                task_id: task.id.clone(),
                at: now,
            }
        };
        Some(event)
    }

    pub fn get(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// All tasks in insertion order (newest first).
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Tasks with `completed = false`, preserving relative order.
    pub fn pending(&self) -> Vec<&Task> {
        self.tasks.iter().filter(|t| !t.completed).collect()
    }

    /// Tasks with `completed = true`, preserving relative order.
    pub fn completed(&self) -> Vec<&Task> {
        self.tasks.iter().filter(|t| t.completed).collect()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Suggestions for the current collection at `now`.
    pub fn suggestions(&self, now: DateTime<Utc>) -> Vec<Suggestion> {
        suggestion::generate_suggestions(&self.tasks, now)
    }

    /// Append a pre-built record. Used for seeding a fresh session.
    pub(crate) fn push_seed(&mut self, task: Task) {
        self.tasks.push(task);
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
    fn task_creation() {
        let now = instant();
        let task = Task::new("Finish essay", now + Duration::days(2), now);
        assert_eq!(task.title, "Finish essay");
        assert!(!task.completed);
        assert_eq!(task.created_at, now);
        assert!(task.id.starts_with("task-"));
    }

    #[test]
    fn add_prepends_newest_first() {
        let now = instant();
        let mut store = TaskStore::new();
        store.add("first", now + Duration::days(2), now).unwrap();
        store.add("second", now + Duration::days(3), now).unwrap();

        assert_eq!(store.len(), 2);
        assert_eq!(store.tasks()[0].title, "second");
        assert_eq!(store.tasks()[1].title, "first");
    }

    #[test]
    fn add_rejects_empty_title() {
        let now = instant();
        let mut store = TaskStore::new();
        let result = store.add("", now + Duration::days(1), now);
        assert_eq!(result.unwrap_err(), ValidationError::missing("title"));
        assert!(store.is_empty());
    }

    #[test]
    fn add_rejects_whitespace_title() {
        let now = instant();
        let mut store = TaskStore::new();
        assert!(store.add("   ", now + Duration::days(1), now).is_err());
        assert!(store.is_empty());
    }

    #[test]
    fn add_returns_task_added_event() {
        let now = instant();
        let due = now + Duration::days(1);
        let mut store = TaskStore::new();
        let event = store.add("quiz prep", due, now).unwrap();
        match event {
            Event::TaskAdded {
                task_id,
                title,
                due_at,
                at,
            } => {
                assert_eq!(task_id, store.tasks()[0].id);
                assert_eq!(title, "quiz prep");
                assert_eq!(due_at, due);
                assert_eq!(at, now);
            }
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[test]
    fn toggle_flips_completed() {
        let now = instant();
        let mut store = TaskStore::new();
        store.add("lab report", now + Duration::days(1), now).unwrap();
        let id = store.tasks()[0].id.clone();

        let event = store.toggle_completed(&id, now);
        assert!(matches!(event, Some(Event::TaskCompleted { .. })));
        assert!(store.get(&id).unwrap().completed);

        let event = store.toggle_completed(&id, now);
        assert!(matches!(event, Some(Event::TaskReopened { .. })));
        assert!(!store.get(&id).unwrap().completed);
    }

    #[test]
    fn toggle_unknown_id_is_noop() {
        let now = instant();
        let mut store = TaskStore::new();
        store.add("reading", now + Duration::days(1), now).unwrap();

        assert!(store.toggle_completed("no-such-id", now).is_none());
        assert!(!store.tasks()[0].completed);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn partitions_preserve_relative_order() {
        let now = instant();
        let mut store = TaskStore::new();
        for title in ["a", "b", "c", "d"] {
            store.add(title, now + Duration::days(2), now).unwrap();
        }
        // Collection is now d, c, b, a. Complete c and a.
        let ids: Vec<String> = store.tasks().iter().map(|t| t.id.clone()).collect();
        store.toggle_completed(&ids[1], now).unwrap();
        store.toggle_completed(&ids[3], now).unwrap();

        let pending: Vec<&str> = store.pending().iter().map(|t| t.title.as_str()).collect();
        let completed: Vec<&str> = store.completed().iter().map(|t| t.title.as_str()).collect();
        assert_eq!(pending, vec!["d", "b"]);
        assert_eq!(completed, vec!["c", "a"]);
    }

    #[test]
    fn ids_are_unique() {
        let now = instant();
        let mut store = TaskStore::new();
        for i in 0..20 {
            store
                .add(&format!("task {i}"), now + Duration::days(1), now)
                .unwrap();
        }
        let mut ids: Vec<&str> = store.tasks().iter().map(|t| t.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 20);
    }

    #[test]
    fn task_serialization() {
        let now = instant();
        let task = Task::new("Serialize me", now + Duration::hours(6), now);
        let json = serde_json::to_string(&task).unwrap();
        let decoded: Task = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded.id, task.id);
        assert_eq!(decoded.title, task.title);
        assert_eq!(decoded.due_at, task.due_at);
        assert!(!decoded.completed);
    }

    #[test]
    fn store_suggestions_follow_collection_state() {
        let now = instant();
        let mut store = TaskStore::new();
        assert_eq!(store.suggestions(now), vec![Suggestion::AllDone]);

        store.add("soon", now + Duration::hours(3), now).unwrap();
        let suggestions = store.suggestions(now);
        assert_eq!(suggestions[0], Suggestion::UrgentDeadlines { count: 1 });
    }
}
