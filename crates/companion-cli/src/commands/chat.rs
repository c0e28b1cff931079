//! Chat command.
//!
//! Sends one message and advances the session clock past the reply delay,
//! so the scripted reply appears in the printed transcript without the
//! process ever sleeping.

use chrono::Utc;
use companion_core::{ChatMessage, CoreError, Sender};

pub fn run(message: &str, empty: bool) -> Result<(), CoreError> {
    let (mut session, _config) = super::open_session(empty);
    let now = Utc::now();

    session.chat.send(message, now);
    if let Some(due) = session.chat.pending_due_at() {
        session.chat.tick(due);
    }

    for message in session.chat.messages() {
        print_message(message);
    }
    Ok(())
}

fn print_message(message: &ChatMessage) {
    let who = match message.sender {
        Sender::User => "you",
        Sender::Assistant => "companion",
    };
    println!("{who}> {}", message.text);
}
