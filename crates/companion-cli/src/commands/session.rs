//! Interactive session.
//!
//! Owns a single in-memory session for the lifetime of the process -- the
//! closest thing to keeping the page open. The chat timer is polled before
//! every prompt, so a scripted reply shows up on the next input line once
//! its delay has elapsed. All state is dropped on exit.

use std::io::{self, BufRead, Write};

use chrono::Utc;
use companion_core::{AchievementCategory, CoreError, Event, Notice, ProofArtifact, Session};

const HELP: &str = "commands:
  tasks                                 list tasks
  add <YYYY-MM-DD> <title>              add a task
  done <id>                             toggle completion
  suggest                               show suggestions
  achievements                          list achievements
  achieve <category>; <title>; <description> [; <proof file name>]
  chat <message>                        talk to the companion
  help                                  this text
  quit                                  end the session (state is discarded)";

pub fn run(empty: bool) -> Result<(), CoreError> {
    let (mut session, _config) = super::open_session(empty);

    println!("Student Companion session. Type 'help' for commands.");
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        // Deliver a due scripted reply before prompting again.
        let now = Utc::now();
        if let Some(event) = session.chat.tick(now) {
            if let Event::ChatReplyDelivered { message_id, .. } = &event {
                if let Some(message) = session
                    .chat
                    .messages()
                    .iter()
                    .find(|m| &m.id == message_id)
                {
                    println!("companion> {}", message.text);
                }
            }
        }

        print!("> ");
        io::stdout().flush()?;
        let line = match lines.next() {
            Some(line) => line?,
            None => break,
        };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let now = Utc::now();
        let (command, rest) = match line.split_once(' ') {
            Some((command, rest)) => (command, rest.trim()),
            None => (line, ""),
        };

        match command {
            "quit" | "exit" => break,
            "help" => println!("{HELP}"),
            "tasks" => print_tasks(&session, now),
            "suggest" => super::suggest::print_suggestions(&session, now),
            "achievements" => print_achievements(&session),
            "add" => {
                let (due, title) = match rest.split_once(' ') {
                    Some((due, title)) => (due, title),
                    None => (rest, ""),
                };
                match super::task::parse_due_date(due)
                    .and_then(|due_at| session.tasks.add(title, due_at, now))
                {
                    Ok(event) => {
                        if let Some(notice) = Notice::for_event(&event) {
                            println!("{}: {}", notice.title, notice.body);
                        }
                    }
                    Err(err) => {
                        let notice = Notice::for_validation(&err);
                        println!("{}: {}", notice.title, notice.body);
                    }
                }
            }
            "done" => match session.tasks.toggle_completed(rest, now) {
                Some(event) => {
                    if let Some(notice) = Notice::for_event(&event) {
                        println!("{}: {}", notice.title, notice.body);
                    }
                }
                None => println!("Task not found: {rest}"),
            },
            "achieve" => {
                let mut fields = rest.split(';').map(str::trim);
                let category = fields.next().unwrap_or("");
                let title = fields.next().unwrap_or("");
                let description = fields.next().unwrap_or("");
                let proof = fields.next().filter(|f| !f.is_empty()).map(ProofArtifact::new);

                let result = category.parse::<AchievementCategory>().and_then(|category| {
                    session
                        .achievements
                        .add(title, category, description, proof, now)
                });
                match result {
                    Ok(event) => {
                        if let Some(notice) = Notice::for_event(&event) {
                            println!("{}: {}", notice.title, notice.body);
                        }
                    }
                    Err(err) => {
                        let notice = Notice::for_validation(&err);
                        println!("{}: {}", notice.title, notice.body);
                    }
                }
            }
            "chat" => {
                if rest.is_empty() {
                    println!("usage: chat <message>");
                } else {
                    session.chat.send(rest, now);
                }
            }
            _ => println!("Unknown command '{command}'. Type 'help' for commands."),
        }
    }

    // Leaving the page: an undelivered reply is cancelled, not leaked.
    session.chat.cancel_pending(Utc::now());
    Ok(())
}

fn print_tasks(session: &Session, now: chrono::DateTime<Utc>) {
    if session.tasks.is_empty() {
        println!("No tasks yet. Add your first task!");
        return;
    }
    for task in session.tasks.tasks() {
        let mark = if task.completed { "x" } else { " " };
        let urgent = if task.urgency(now).is_urgent() {
            "  [Urgent]"
        } else {
            ""
        };
        println!(
            "  [{mark}] {}  {} (due {}){}",
            task.id,
            task.title,
            task.due_at.format("%b %d, %Y"),
            urgent
        );
    }
}

fn print_achievements(session: &Session) {
    if session.achievements.is_empty() {
        println!("No achievements yet. Add your first one!");
        return;
    }
    for achievement in session.achievements.achievements() {
        let proof = if achievement.has_proof {
            "Proof Uploaded"
        } else {
            "No Proof"
        };
        println!(
            "  {}  {} [{}] ({})",
            achievement.id, achievement.title, achievement.category, proof
        );
    }
}
