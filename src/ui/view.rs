use ratatui::{
    layout::{Constraint, Direction, Layout},
    widgets::Paragraph,
    Frame,
};

use crate::domain::shell_state::{ActivePane, ShellState};

use super::{
    composer_view::render_composer,
    conversation_view::render_conversation,
    styles::{self, Palette},
};

/// Conversation on top, composer (1 border + 1 text + 1 border) and status line below.
pub fn render(frame: &mut Frame<'_>, state: &mut ShellState, palette: &Palette) {
    let [conversation_area, composer_area, status_area] = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .areas(frame.area());

    let active_pane = state.active_pane();
    render_conversation(
        frame,
        conversation_area,
        state.conversation_mut(),
        palette,
        active_pane == ActivePane::Conversation,
    );
    render_composer(
        frame,
        composer_area,
        state.composer(),
        palette,
        active_pane == ActivePane::Composer,
    );

    let status = Paragraph::new(status_line(state)).style(styles::status_style(palette));
    frame.render_widget(status, status_area);
}

fn status_line(state: &ShellState) -> String {
    let count = state.conversation().messages().len();
    let hint = match state.active_pane() {
        ActivePane::Composer => "Enter: send | Esc/Tab: messages | Ctrl+C: quit",
        ActivePane::Conversation => {
            "j/k: navigate | Enter/Space: expand | i/Tab: compose | q: quit"
        }
    };
    format!("messages: {count} | {} | {hint}", state.active_pane().as_label())
}
