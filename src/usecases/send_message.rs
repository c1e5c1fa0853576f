//! Use case for submitting the composer's text to the conversation.
//!
//! The composer is the only place where input is validated: the store accepts
//! anything it is handed.

use crate::domain::{composer_state::ComposerState, message_store::MessageStore};

/// Result of a submit attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The text was appended and the composer was cleared.
    Appended,
    /// The composer was empty; nothing happened.
    Ignored,
}

/// Destination of submitted messages.
pub trait MessageSink {
    fn append(&mut self, author: &str, body: &str);
}

impl MessageSink for MessageStore {
    fn append(&mut self, author: &str, body: &str) {
        MessageStore::append(self, author, body);
    }
}

/// Forwards the composer buffer to `sink` under `author` and resets the buffer.
///
/// An empty buffer is a silent no-op. No trimming is applied.
pub fn submit_message(
    composer: &mut ComposerState,
    sink: &mut dyn MessageSink,
    author: &str,
) -> SubmitOutcome {
    match composer.take_submission() {
        Some(body) => {
            sink.append(author, &body);
            SubmitOutcome::Appended
        }
        None => SubmitOutcome::Ignored,
    }
}
