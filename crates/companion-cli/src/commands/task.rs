//! Task commands.

use chrono::{DateTime, NaiveDate, NaiveTime, TimeZone, Utc};
use clap::Subcommand;
use companion_core::{CoreError, Notice, Session, Task, ValidationError};

#[derive(Subcommand)]
pub enum TaskAction {
    /// Add a task
    Add {
        /// Task title
        title: String,
        /// Due date (YYYY-MM-DD or RFC 3339)
        #[arg(long)]
        due: String,
        /// Print the resulting list as JSON
        #[arg(long)]
        json: bool,
    },
    /// List tasks
    List {
        /// Print as JSON
        #[arg(long)]
        json: bool,
        /// Only pending tasks
        #[arg(long)]
        pending: bool,
        /// Only completed tasks
        #[arg(long)]
        completed: bool,
    },
    /// Toggle completion for a task
    Done {
        /// Task ID
        id: String,
    },
}

pub fn run(action: TaskAction, empty: bool) -> Result<(), CoreError> {
    let (mut session, config) = super::open_session(empty);
    let now = Utc::now();

    match action {
        TaskAction::Add { title, due, json } => {
            let due_at = match parse_due_date(&due) {
                Ok(due_at) => due_at,
                Err(err) => return Err(rejection(&err)),
            };
            let event = match session.tasks.add(&title, due_at, now) {
                Ok(event) => event,
                Err(err) => return Err(rejection(&err)),
            };
            if let Some(notice) = Notice::for_event(&event) {
                println!("{}: {}", notice.title, notice.body);
            }
            if json {
                print_tasks_json(&session, now)?;
            } else {
                print_tasks(&session, now);
                if config.output.show_suggestions {
                    println!();
                    super::suggest::print_suggestions(&session, now);
                }
            }
        }
        TaskAction::List {
            json,
            pending,
            completed,
        } => {
            if json {
                print_tasks_json(&session, now)?;
            } else if pending {
                print_section("Pending Tasks", &session.tasks.pending(), now);
            } else if completed {
                print_section("Completed Tasks", &session.tasks.completed(), now);
            } else {
                print_tasks(&session, now);
            }
        }
        TaskAction::Done { id } => {
            match session.tasks.toggle_completed(&id, now) {
                Some(event) => {
                    if let Some(notice) = Notice::for_event(&event) {
                        println!("{}: {}", notice.title, notice.body);
                    }
                    print_tasks(&session, now);
                }
                None => println!("Task not found: {id}"),
            }
        }
    }

    Ok(())
}

/// Map a validation rejection to the error line the user sees.
pub(crate) fn rejection(err: &ValidationError) -> CoreError {
    let notice = Notice::for_validation(err);
    CoreError::Custom(format!("{}: {}", notice.title, notice.body))
}

/// Parse the due date field. An empty value is the same rejection as an
/// empty title.
pub(crate) fn parse_due_date(value: &str) -> Result<DateTime<Utc>, ValidationError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ValidationError::missing("due date"));
    }
    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Ok(parsed.with_timezone(&Utc));
    }
    match NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        Ok(date) => Ok(Utc.from_utc_datetime(&date.and_time(NaiveTime::MIN))),
        Err(e) => Err(ValidationError::InvalidValue {
            field: "due date".to_string(),
            message: e.to_string(),
        }),
    }
}

fn print_tasks(session: &Session, now: DateTime<Utc>) {
    if session.tasks.is_empty() {
        println!("No tasks yet. Add your first task!");
        return;
    }
    let pending = session.tasks.pending();
    let completed = session.tasks.completed();
    if !pending.is_empty() {
        print_section("Pending Tasks", &pending, now);
    }
    if !completed.is_empty() {
        print_section("Completed Tasks", &completed, now);
    }
    println!(
        "{} pending | {} completed",
        pending.len(),
        completed.len()
    );
}

fn print_section(heading: &str, tasks: &[&Task], now: DateTime<Utc>) {
    println!("{heading}");
    for task in tasks {
        let urgent = if task.urgency(now).is_urgent() {
            "  [Urgent]"
        } else {
            ""
        };
        println!(
            "  {}  {} (due {}){}",
            task.id,
            task.title,
            task.due_at.format("%b %d, %Y"),
            urgent
        );
    }
}

fn print_tasks_json(session: &Session, now: DateTime<Utc>) -> Result<(), CoreError> {
    let view: Vec<serde_json::Value> = session
        .tasks
        .tasks()
        .iter()
        .map(|task| {
            serde_json::json!({
                "id": task.id,
                "title": task.title,
                "due_at": task.due_at,
                "completed": task.completed,
                "urgency": task.urgency(now),
            })
        })
        .collect();
    println!("{}", serde_json::to_string_pretty(&view)?);
    Ok(())
}
