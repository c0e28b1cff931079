//! Scripted chat thread with a deterministic reply timer.
//!
//! The assistant reply is canned and appears a fixed delay after the user's
//! message -- simulated latency, not a real computation. There is no thread
//! and no async runtime: the owner passes `now` into every call and polls
//! `tick()` periodically; the pending reply fires once its due instant has
//! passed. Tests drive the clock directly.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::events::Event;

/// Default delay before the scripted reply is appended, in milliseconds.
pub const DEFAULT_REPLY_DELAY_MS: u64 = 1000;

/// The canned assistant reply.
pub const SCRIPTED_REPLY: &str = "I'm here to help! Add your assignments in the task manager \
and I'll flag anything due in the next 24 hours.";

/// Who authored a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Assistant,
}

/// One entry in the chat transcript.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: String,
    pub sender: Sender,
    pub text: String,
    pub at: DateTime<Utc>,
}

impl ChatMessage {
    fn new(sender: Sender, text: impl Into<String>, now: DateTime<Utc>) -> Self {
        ChatMessage {
            id: format!("msg-{}-{}", now.timestamp(), uuid::Uuid::new_v4()),
            sender,
            text: text.into(),
            at: now,
        }
    }
}

/// A reply that has been scheduled but not yet delivered.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct PendingReply {
    text: String,
    deliver_at: DateTime<Utc>,
}

/// Ordered transcript plus at most one pending scripted reply.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatThread {
    messages: Vec<ChatMessage>,
    reply_delay_ms: u64,
    #[serde(default)]
    pending: Option<PendingReply>,
}

impl ChatThread {
    pub fn new() -> Self {
        Self::with_reply_delay(DEFAULT_REPLY_DELAY_MS)
    }

    pub fn with_reply_delay(reply_delay_ms: u64) -> Self {
        ChatThread {
            messages: Vec::new(),
            reply_delay_ms,
            pending: None,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn reply_delay_ms(&self) -> u64 {
        self.reply_delay_ms
    }

    pub fn set_reply_delay_ms(&mut self, reply_delay_ms: u64) {
        self.reply_delay_ms = reply_delay_ms;
    }

    pub fn has_pending_reply(&self) -> bool {
        self.pending.is_some()
    }

    /// Due instant of the scheduled reply, if one is pending.
    pub fn pending_due_at(&self) -> Option<DateTime<Utc>> {
        self.pending.as_ref().map(|p| p.deliver_at)
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Append a user message and schedule the scripted reply.
    ///
    /// A reply already pending is replaced; the returned events record the
    /// cancellation when that happens.
    pub fn send(&mut self, text: impl Into<String>, now: DateTime<Utc>) -> Vec<Event> {
        let message = ChatMessage::new(Sender::User, text, now);
        let mut events = vec![Event::ChatMessageSent {
            message_id: message.id.clone(),
            at: now,
        }];

        if self.pending.take().is_some() {
            events.push(Event::ChatReplyCancelled { at: now });
        }

        let deliver_at = now + Duration::milliseconds(self.reply_delay_ms as i64);
        self.pending = Some(PendingReply {
            text: SCRIPTED_REPLY.to_string(),
            deliver_at,
        });
        events.push(Event::ChatReplyScheduled {
            deliver_at,
            at: now,
        });

        tracing::debug!("Chat message sent, reply due at {}", deliver_at);
        self.messages.push(message);
        events
    }

    /// Deliver the pending reply once its due instant has passed.
    ///
    /// Returns `None` while nothing is due. The owner calls this
    /// periodically; delivery happens at most once per scheduled reply.
    pub fn tick(&mut self, now: DateTime<Utc>) -> Option<Event> {
        let due = self.pending.as_ref()?.deliver_at;
        if now < due {
            return None;
        }

        let pending = self.pending.take()?;
        let message = ChatMessage::new(Sender::Assistant, pending.text, now);
        let event = Event::ChatReplyDelivered {
            message_id: message.id.clone(),
            at: now,
        };
        self.messages.push(message);
        Some(event)
    }

    /// Cancel the scheduled reply, if any.
    pub fn cancel_pending(&mut self, now: DateTime<Utc>) -> Option<Event> {
        self.pending
            .take()
            .map(|_| Event::ChatReplyCancelled { at: now })
    }
}

impl Default for ChatThread {
    fn default() -> Self {
        Self::new()
    }
}
