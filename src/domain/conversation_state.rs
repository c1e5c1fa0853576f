use std::sync::Arc;

use super::{message::Message, message_store::MessageSequence};

/// View-local state of the conversation pane.
///
/// Expansion flags are keyed by list position and live only as long as this
/// view does; they never leak into [`Message`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversationState {
    messages: MessageSequence,
    expanded: Vec<bool>,
    selected_index: Option<usize>,
    scroll_offset: usize,
}

impl Default for ConversationState {
    fn default() -> Self {
        Self {
            messages: MessageSequence::from(Vec::new()),
            expanded: Vec::new(),
            selected_index: None,
            scroll_offset: 0,
        }
    }
}

impl ConversationState {
    pub fn messages(&self) -> &[Arc<Message>] {
        &self.messages
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected_index
    }

    /// Scroll offset in cards, as last settled by the renderer.
    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    pub fn set_scroll_offset(&mut self, offset: usize) {
        self.scroll_offset = offset;
    }

    pub fn is_expanded(&self, index: usize) -> bool {
        self.expanded.get(index).copied().unwrap_or(false)
    }

    /// Takes a new emission from the message store and pins the view to the
    /// newest card.
    pub fn apply(&mut self, sequence: MessageSequence) {
        self.expanded.resize(sequence.len(), false);
        self.selected_index = sequence.len().checked_sub(1);
        self.messages = sequence;
    }

    /// Flips the expansion flag of one card. Returns false for an unknown index.
    pub fn toggle_expanded(&mut self, index: usize) -> bool {
        match self.expanded.get_mut(index) {
            Some(flag) => {
                *flag = !*flag;
                true
            }
            None => false,
        }
    }

    pub fn toggle_selected(&mut self) -> bool {
        match self.selected_index {
            Some(index) => self.toggle_expanded(index),
            None => false,
        }
    }

    pub fn select_next(&mut self) {
        if self.messages.is_empty() {
            return;
        }

        self.selected_index = match self.selected_index {
            None => Some(0),
            Some(idx) if idx + 1 < self.messages.len() => Some(idx + 1),
            Some(idx) => Some(idx),
        };
    }

    pub fn select_previous(&mut self) {
        if self.messages.is_empty() {
            return;
        }

        self.selected_index = match self.selected_index {
            None => Some(self.messages.len() - 1),
            Some(idx) => Some(idx.saturating_sub(1)),
        };
    }

    /// Drops everything, as when the view tree is recreated.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
