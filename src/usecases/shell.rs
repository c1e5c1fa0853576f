use anyhow::Result;

use crate::domain::{
    events::{AppEvent, KeyInput},
    message_store::{MessageFeed, MessageStore},
    shell_state::{ActivePane, ShellState},
};

use super::{
    contracts::ShellOrchestrator,
    send_message::{submit_message, SubmitOutcome},
};

/// Owns the message store for the lifetime of one mounted shell and routes
/// key input to the composer or the conversation.
pub struct DefaultShellOrchestrator {
    state: ShellState,
    store: MessageStore,
    feed: MessageFeed,
    author: String,
}

impl DefaultShellOrchestrator {
    pub fn new(author: impl Into<String>) -> Self {
        let store = MessageStore::default();
        let feed = store.subscribe();

        let mut orchestrator = Self {
            state: ShellState::default(),
            store,
            feed,
            author: author.into(),
        };
        orchestrator.mount_conversation();
        orchestrator
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    fn mount_conversation(&mut self) {
        let conversation = self.state.conversation_mut();
        conversation.reset();
        conversation.apply(self.feed.latest());
    }

    /// Applies the newest emission, if any. Several appends between two
    /// drains collapse into a single re-render and scroll.
    fn sync_conversation(&mut self) {
        if let Some(sequence) = self.feed.next() {
            self.state.conversation_mut().apply(sequence);
        }
    }

    fn handle_key(&mut self, key: KeyInput) {
        if key.key == "tab" {
            self.focus(self.state.active_pane().toggled());
            return;
        }

        match self.state.active_pane() {
            ActivePane::Composer => self.handle_composer_key(&key),
            ActivePane::Conversation => self.handle_conversation_key(&key),
        }
    }

    fn handle_composer_key(&mut self, key: &KeyInput) {
        if key.ctrl && key.key == "u" {
            self.state.composer_mut().on_text_changed(String::new());
            return;
        }

        if let Some(ch) = key.printable_char() {
            self.state.composer_mut().insert_char(ch);
            return;
        }

        let composer = self.state.composer_mut();
        match key.key.as_str() {
            "enter" => {
                if submit_message(composer, &mut self.store, &self.author)
                    == SubmitOutcome::Appended
                {
                    tracing::info!(count = self.store.len(), "message submitted");
                }
            }
            "backspace" => composer.delete_char_before(),
            "delete" => composer.delete_char_at(),
            "left" => composer.move_cursor_left(),
            "right" => composer.move_cursor_right(),
            "home" => composer.move_cursor_home(),
            "end" => composer.move_cursor_end(),
            "esc" => self.focus(ActivePane::Conversation),
            _ => {}
        }
    }

    fn handle_conversation_key(&mut self, key: &KeyInput) {
        if key.ctrl {
            return;
        }

        let conversation = self.state.conversation_mut();
        match key.key.as_str() {
            "j" | "down" => conversation.select_next(),
            "k" | "up" => conversation.select_previous(),
            "enter" | " " => {
                conversation.toggle_selected();
            }
            "i" => self.focus(ActivePane::Composer),
            "q" => self.state.stop(),
            _ => {}
        }
    }

    fn focus(&mut self, pane: ActivePane) {
        tracing::debug!(pane = pane.as_label(), "focus changed");
        self.state.set_active_pane(pane);
    }
}

impl ShellOrchestrator for DefaultShellOrchestrator {
    fn state(&self) -> &ShellState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut ShellState {
        &mut self.state
    }

    fn handle_event(&mut self, event: AppEvent) -> Result<()> {
        match event {
            AppEvent::Tick => {}
            AppEvent::QuitRequested => self.state.stop(),
            AppEvent::InputKey(key) => self.handle_key(key),
        }

        self.sync_conversation();
        Ok(())
    }
}
