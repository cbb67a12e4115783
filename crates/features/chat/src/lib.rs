//! # Study-Room Chat
//!
//! Append-only chat transcript for a study room: an ordered message list
//! with a capacity bound, seeded with the room's opening history. Message
//! rendering is the UI's concern; this slice only owns the state.

mod error;
mod history;

pub use crate::error::{ChatError, MSG_EMPTY_MESSAGE};

use chrono::Local;
use ehub_kernel::safe_nanoid;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};
use tracing::debug;

/// Participant role shown next to a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize)]
pub enum Role {
    Host,
    Manager,
    Member,
    Joiner,
}

/// One transcript entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Unambiguous 12-character message ID.
    pub id: String,
    /// Display name of the sender.
    pub from: String,
    pub role: Role,
    pub body: String,
    /// Wall-clock send time, `HH:MM:SS`.
    pub sent_at: String,
}

/// Append-only, capacity-bounded chat transcript for one study room.
#[derive(Debug, Clone)]
pub struct ChatRoom {
    title: String,
    capacity: usize,
    messages: Vec<ChatMessage>,
}

impl ChatRoom {
    /// Creates an empty transcript.
    ///
    /// A `capacity` of zero means unbounded; otherwise the oldest message is
    /// dropped once the bound is reached.
    #[must_use]
    pub fn new(title: impl Into<String>, capacity: usize) -> Self {
        Self { title: title.into(), capacity, messages: Vec::new() }
    }

    /// Creates a transcript pre-loaded with the room's opening history.
    #[must_use]
    pub fn with_seed_history(title: impl Into<String>, capacity: usize) -> Self {
        let mut room = Self::new(title, capacity);
        for (from, role, body, sent_at) in history::SEED {
            room.messages.push(ChatMessage {
                id: safe_nanoid!(),
                from: (*from).to_owned(),
                role: *role,
                body: (*body).to_owned(),
                sent_at: (*sent_at).to_owned(),
            });
        }
        room
    }

    /// Appends a message to the transcript, stamped with the local wall clock.
    ///
    /// # Errors
    /// Returns [`ChatError::EmptyMessage`] when `body` contains no text; the
    /// send box requires at least one character before submitting.
    pub fn send(
        &mut self,
        from: impl Into<String>,
        role: Role,
        body: impl Into<String>,
    ) -> Result<&ChatMessage, ChatError> {
        let body = body.into();
        if body.is_empty() {
            return Err(ChatError::EmptyMessage);
        }

        if self.capacity > 0 && self.messages.len() == self.capacity {
            self.messages.remove(0);
        }

        let message = ChatMessage {
            id: safe_nanoid!(),
            from: from.into(),
            role,
            body,
            sent_at: Local::now().format("%H:%M:%S").to_string(),
        };
        debug!(room = %self.title, id = %message.id, "Chat message appended");

        let idx = self.messages.len();
        self.messages.push(message);
        Ok(&self.messages[idx])
    }

    /// The transcript in arrival order.
    #[must_use]
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Room display title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}
