//! Rule-based productivity suggestions.
//!
//! Suggestions are derived from the full task collection by a fixed rule
//! sequence over pending/urgent counts. No randomness and no external
//! knowledge source; the evaluation instant is an explicit parameter.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Task;

/// Pending-task count above which the chunking advice fires.
const CHUNKING_THRESHOLD: usize = 3;

/// One advisory entry for the suggestions panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Suggestion {
    /// Pending tasks are due within the urgency window.
    UrgentDeadlines { count: usize },
    /// The pending list is long enough to be worth splitting up.
    ChunkTasks,
    PomodoroTechnique,
    /// Nothing pending.
    AllDone,
    HardestFirst,
}

impl Suggestion {
    /// Human-readable advisory text.
    pub fn message(&self) -> String {
        match self {
            Suggestion::UrgentDeadlines { count } => format!(
                "You have {} urgent {} due in the next 24 hours.",
                count,
                if *count == 1 { "task" } else { "tasks" }
            ),
            Suggestion::ChunkTasks => {
                "Consider breaking down your tasks into smaller chunks for better productivity."
                    .to_string()
            }
            Suggestion::PomodoroTechnique => {
                "Try using the Pomodoro technique: 25 minutes of focused work followed by a 5-minute break."
                    .to_string()
            }
            Suggestion::AllDone => "All your tasks are completed! Great job!".to_string(),
            Suggestion::HardestFirst => {
                "Consider working on your most challenging task first thing in the morning."
                    .to_string()
            }
        }
    }
}

/// Generate the advisory list for the current task collection.
///
/// Rules are evaluated independently, in a fixed order:
/// 1. urgent pending tasks exist -> count-specific deadline warning
/// 2. more than three pending -> chunking advice
/// 3. anything pending -> Pomodoro advice
/// 4. nothing pending -> congratulation, otherwise hardest-first advice
///
/// Output length is 1 to 4 entries.
pub fn generate_suggestions(tasks: &[Task], now: DateTime<Utc>) -> Vec<Suggestion> {
    let pending: Vec<&Task> = tasks.iter().filter(|t| !t.completed).collect();
    let urgent = pending
        .iter()
        .filter(|t| t.urgency(now).is_urgent())
        .count();

    let mut suggestions = Vec::new();

    if urgent > 0 {
        suggestions.push(Suggestion::UrgentDeadlines { count: urgent });
    }

    if pending.len() > CHUNKING_THRESHOLD {
        suggestions.push(Suggestion::ChunkTasks);
    }

    if !pending.is_empty() {
        suggestions.push(Suggestion::PomodoroTechnique);
    }

    if pending.is_empty() {
        suggestions.push(Suggestion::AllDone);
    } else {
        suggestions.push(Suggestion::HardestFirst);
    }

    suggestions
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn instant() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 8, 4, 9, 0, 0).unwrap()
    }

    fn pending_task(title: &str, due_in_hours: i64, now: DateTime<Utc>) -> Task {
        Task::new(title, now + Duration::hours(due_in_hours), now)
    }

    fn completed_task(title: &str, due_in_hours: i64, now: DateTime<Utc>) -> Task {
        let mut task = pending_task(title, due_in_hours, now);
        task.completed = true;
        task
    }

    #[test]
    fn empty_collection_congratulates() {
        let now = instant();
        let suggestions = generate_suggestions(&[], now);
        assert_eq!(suggestions, vec![Suggestion::AllDone]);
    }

    #[test]
    fn all_completed_congratulates_without_hardest_first() {
        let now = instant();
        let tasks = vec![completed_task("a", 2, now), completed_task("b", 48, now)];
        let suggestions = generate_suggestions(&tasks, now);
        assert!(suggestions.contains(&Suggestion::AllDone));
        assert!(!suggestions.contains(&Suggestion::HardestFirst));
    }

    #[test]
    fn single_pending_normal_task() {
        let now = instant();
        let tasks = vec![pending_task("essay", 72, now)];
        let suggestions = generate_suggestions(&tasks, now);
        assert_eq!(
            suggestions,
            vec![Suggestion::PomodoroTechnique, Suggestion::HardestFirst]
        );
    }

    #[test]
    fn urgent_warning_comes_first() {
        let now = instant();
        let tasks = vec![pending_task("due soon", 3, now), pending_task("later", 72, now)];
        let suggestions = generate_suggestions(&tasks, now);
        assert_eq!(suggestions[0], Suggestion::UrgentDeadlines { count: 1 });
        assert_eq!(
            suggestions,
            vec![
                Suggestion::UrgentDeadlines { count: 1 },
                Suggestion::PomodoroTechnique,
                Suggestion::HardestFirst,
            ]
        );
    }

    #[test]
    fn four_pending_triggers_chunking_three_does_not() {
        let now = instant();
        let three: Vec<Task> = (0..3)
            .map(|i| pending_task(&format!("t{i}"), 100 + i, now))
            .collect();
        assert!(!generate_suggestions(&three, now).contains(&Suggestion::ChunkTasks));

        let four: Vec<Task> = (0..4)
            .map(|i| pending_task(&format!("t{i}"), 100 + i, now))
            .collect();
        assert!(generate_suggestions(&four, now).contains(&Suggestion::ChunkTasks));
    }

    #[test]
    fn completed_tasks_do_not_count_as_urgent() {
        let now = instant();
        let tasks = vec![completed_task("done", 1, now), pending_task("far", 200, now)];
        let suggestions = generate_suggestions(&tasks, now);
        assert!(!suggestions
            .iter()
            .any(|s| matches!(s, Suggestion::UrgentDeadlines { .. })));
    }

    #[test]
    fn all_four_rules_can_fire_together() {
        let now = instant();
        let mut tasks: Vec<Task> = (0..4)
            .map(|i| pending_task(&format!("t{i}"), 100 + i, now))
            .collect();
        tasks.push(pending_task("urgent", 2, now));
        let suggestions = generate_suggestions(&tasks, now);
        assert_eq!(
            suggestions,
            vec![
                Suggestion::UrgentDeadlines { count: 1 },
                Suggestion::ChunkTasks,
                Suggestion::PomodoroTechnique,
                Suggestion::HardestFirst,
            ]
        );
    }

    #[test]
    fn singular_and_plural_messages() {
        assert_eq!(
            Suggestion::UrgentDeadlines { count: 1 }.message(),
            "You have 1 urgent task due in the next 24 hours."
        );
        assert_eq!(
            Suggestion::UrgentDeadlines { count: 3 }.message(),
            "You have 3 urgent tasks due in the next 24 hours."
        );
    }

    #[test]
    fn overdue_counts_toward_urgent_total() {
        let now = instant();
        let tasks = vec![pending_task("late", -10, now), pending_task("soon", 5, now)];
        let suggestions = generate_suggestions(&tasks, now);
        assert_eq!(suggestions[0], Suggestion::UrgentDeadlines { count: 2 });
    }
}
