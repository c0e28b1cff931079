//! Suggestions command.

use chrono::{DateTime, Utc};
use companion_core::{CoreError, Session};

pub fn run(json: bool, empty: bool) -> Result<(), CoreError> {
    let (session, _config) = super::open_session(empty);
    let now = Utc::now();

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&session.tasks.suggestions(now))?
        );
    } else {
        print_suggestions(&session, now);
    }
    Ok(())
}

pub fn print_suggestions(session: &Session, now: DateTime<Utc>) {
    println!("Suggestions");
    for suggestion in session.tasks.suggestions(now) {
        println!("  * {}", suggestion.message());
    }
}
