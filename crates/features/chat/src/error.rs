/// Message shown when the send box is submitted without any text.
pub const MSG_EMPTY_MESSAGE: &str = "Vui lòng nhập tin nhắn trước khi gửi đi";

/// A specialized [`ChatError`] enum of this crate.
///
/// Every variant is a user-correctable input problem, surfaced to the chat
/// UI for display rather than treated as a fault.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ChatError {
    /// The send box was submitted empty.
    #[error("{MSG_EMPTY_MESSAGE}")]
    EmptyMessage,
}
