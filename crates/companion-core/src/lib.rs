//! # Student Companion Core Library
//!
//! This library provides the core logic for the Student Companion, a small
//! productivity tool for tracking assignments, deadlines, and achievements.
//! All record state is held in memory by a per-owner [`Session`]; nothing
//! is persisted and nothing is shared, so dropping a session is the reload.
//!
//! ## Architecture
//!
//! - **Stores**: explicit state objects ([`TaskStore`], [`AchievementStore`])
//!   mutated only through their operation methods, each of which yields an
//!   [`Event`] for the presentation layer
//! - **Derived values**: urgency classification and the suggestion list are
//!   pure functions of the collection and an injected evaluation instant,
//!   recomputed on every render
//! - **Chat**: a scripted reply on a caller-ticked timer -- no threads,
//!   no async runtime
//! - **Config**: TOML-based preferences; the only thing written to disk
//!
//! ## Key Components
//!
//! - [`TaskStore`]: task collection with completion toggling
//! - [`generate_suggestions`]: rule-based advisory list
//! - [`AchievementStore`]: append-only achievement log
//! - [`ChatThread`]: transcript with a deterministic delayed reply
//! - [`Config`]: application configuration management

pub mod achievement;
pub mod chat;
pub mod config;
pub mod error;
pub mod events;
pub mod notice;
pub mod session;
pub mod task;

pub use achievement::{Achievement, AchievementCategory, AchievementStore, ProofArtifact};
pub use chat::{ChatMessage, ChatThread, Sender, DEFAULT_REPLY_DELAY_MS, SCRIPTED_REPLY};
pub use config::Config;
pub use error::{ConfigError, CoreError, Result, ValidationError};
pub use events::Event;
pub use notice::{Notice, NoticeSeverity};
pub use session::Session;
pub use task::{
    classify, generate_suggestions, Suggestion, Task, TaskStore, Urgency, URGENT_WINDOW_HOURS,
};
