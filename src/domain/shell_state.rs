use super::{composer_state::ComposerState, conversation_state::ConversationState};

/// Which pane receives key input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActivePane {
    #[default]
    Composer,
    Conversation,
}

impl ActivePane {
    pub fn toggled(self) -> Self {
        match self {
            Self::Composer => Self::Conversation,
            Self::Conversation => Self::Composer,
        }
    }

    pub fn as_label(self) -> &'static str {
        match self {
            Self::Composer => "composer",
            Self::Conversation => "conversation",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellState {
    running: bool,
    active_pane: ActivePane,
    composer: ComposerState,
    conversation: ConversationState,
}

impl Default for ShellState {
    fn default() -> Self {
        Self {
            running: true,
            active_pane: ActivePane::default(),
            composer: ComposerState::default(),
            conversation: ConversationState::default(),
        }
    }
}

impl ShellState {
    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn active_pane(&self) -> ActivePane {
        self.active_pane
    }

    pub fn set_active_pane(&mut self, pane: ActivePane) {
        self.active_pane = pane;
    }

    pub fn composer(&self) -> &ComposerState {
        &self.composer
    }

    pub fn composer_mut(&mut self) -> &mut ComposerState {
        &mut self.composer
    }

    pub fn conversation(&self) -> &ConversationState {
        &self.conversation
    }

    pub fn conversation_mut(&mut self) -> &mut ConversationState {
        &mut self.conversation
    }
}
