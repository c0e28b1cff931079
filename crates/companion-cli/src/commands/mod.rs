//! CLI subcommand implementations.
//!
//! Every invocation operates on a fresh in-memory session -- one "page
//! load". Nothing about task or achievement state survives the process;
//! only configuration is read from disk.

pub mod achievement;
pub mod chat;
pub mod config;
pub mod session;
pub mod suggest;
pub mod task;

use chrono::Utc;
use companion_core::{Config, Session};

/// Build the session this invocation operates on.
pub fn open_session(empty: bool) -> (Session, Config) {
    let config = Config::load().unwrap_or_default();
    let now = Utc::now();
    let mut session = if empty || !config.seed_demo_records {
        Session::new()
    } else {
        Session::with_demo_records(now)
    };
    session.chat.set_reply_delay_ms(config.chat.reply_delay_ms);
    (session, config)
}
