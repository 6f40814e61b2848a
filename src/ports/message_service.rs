//! Messaging and dialog port.
//!
//! The controller never talks to the user directly; every notice,
//! status line, and confirmation goes through this port. Modal calls
//! are async so the calling flow suspends inside them, exactly one
//! logical continuation at a time. Answering "No" or dismissing simply
//! ends the operation; there is no cancellation beyond that.

use async_trait::async_trait;

/// Severity of a user-facing message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageType {
    Information,
    Success,
    Warning,
    Error,
    Question,
}

/// Answer to a modal yes/no question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageAction {
    Yes,
    No,
}

/// User messaging port of the host shell.
#[async_trait]
pub trait MessageService: Send + Sync {
    /// Modal yes/no question. Dismissal counts as `No`.
    async fn confirm(&self, title: &str, message: &str) -> MessageAction;

    /// Modal notice; resolves when the user dismisses it.
    async fn acknowledge(&self, message_type: MessageType, message: &str);

    /// Non-blocking status line (busy/progress messaging).
    fn proceeding(&self, message_type: MessageType, message: &str);
}
