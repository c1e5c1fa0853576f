//! Composer rendering: input field plus the send button.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::domain::composer_state::ComposerState;

use super::styles::{self, Palette};

/// Hint shown while the buffer is empty and the composer is not focused.
pub const PLACEHOLDER_TEXT: &str = "Type your message";

/// Label of the submit button.
pub const SEND_LABEL: &str = "Send";

/// Prompt symbol shown before the input text.
const PROMPT_SYMBOL: &str = "> ";

const SEND_BUTTON_WIDTH: u16 = 10;

pub fn render_composer(
    frame: &mut Frame<'_>,
    area: Rect,
    composer: &ComposerState,
    palette: &Palette,
    is_focused: bool,
) {
    let [input_area, button_area] = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(1), Constraint::Length(SEND_BUTTON_WIDTH)])
        .areas(area);

    let text_width = (input_area.width.saturating_sub(2) as usize)
        .saturating_sub(PROMPT_SYMBOL.width());
    let window = visible_window(composer, text_width);
    let line = build_input_line(composer, &window, palette, is_focused);

    let input = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(styles::panel_border_style(palette, is_focused)),
    );
    frame.render_widget(input, input_area);

    let button = Paragraph::new(SEND_LABEL)
        .alignment(Alignment::Center)
        .style(styles::send_button_style(palette, !composer.is_empty()))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(styles::panel_border_style(palette, false)),
        );
    frame.render_widget(button, button_area);

    if is_focused {
        let cursor_x = input_area
            .x
            .saturating_add(1)
            .saturating_add(PROMPT_SYMBOL.width() as u16)
            .saturating_add(window.cursor_column.min(u16::MAX as usize) as u16);
        let cursor_y = input_area.y.saturating_add(1);
        frame.set_cursor_position((cursor_x, cursor_y));
    }
}

/// Slice of the buffer that fits the input field, scrolled to keep the cursor
/// in view.
#[derive(Debug, Clone, PartialEq, Eq)]
struct InputWindow {
    text: String,
    cursor_column: usize,
}

fn visible_window(composer: &ComposerState, width: usize) -> InputWindow {
    let cursor_width = composer.text_before_cursor().width();
    // Leave one column for the cursor itself.
    let overflow = cursor_width.saturating_sub(width.saturating_sub(1));

    let text = composer.text();
    let mut skipped = 0;
    let mut start = text.len();
    for (idx, ch) in text.char_indices() {
        if skipped >= overflow {
            start = idx;
            break;
        }
        skipped += ch.width().unwrap_or(0);
    }

    InputWindow {
        text: text[start..].to_owned(),
        cursor_column: cursor_width.saturating_sub(skipped),
    }
}

fn build_input_line(
    composer: &ComposerState,
    window: &InputWindow,
    palette: &Palette,
    is_focused: bool,
) -> Line<'static> {
    let prompt = Span::styled(PROMPT_SYMBOL, styles::input_prompt_style(palette));

    if composer.is_empty() && !is_focused {
        Line::from(vec![
            prompt,
            Span::styled(PLACEHOLDER_TEXT, styles::input_placeholder_style(palette)),
        ])
    } else {
        Line::from(vec![
            prompt,
            Span::styled(window.text.clone(), styles::input_text_style(palette)),
        ])
    }
}
