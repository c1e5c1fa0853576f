//! Conversation pane: every message renders as a card.
//!
//! A card is an author header followed by the body. Collapsed cards clamp the
//! body to one line; expanded cards wrap every line to the card width and
//! switch to the primary background.

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, HighlightSpacing, List, ListItem, ListState, Paragraph},
    Frame,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::domain::{conversation_state::ConversationState, message::Message};

use super::styles::{self, Palette};

const EMPTY_CONVERSATION_TEXT: &str = "No messages yet";
const EMPTY_BODY_PLACEHOLDER: &str = "[Empty message]";
const SELECTION_MARKER: &str = "▌ ";
/// Body text starts under the author name, past the avatar.
const CARD_INDENT: &str = "    ";
const ELLIPSIS: char = '…';

pub fn render_conversation(
    frame: &mut Frame<'_>,
    area: Rect,
    conversation: &mut ConversationState,
    palette: &Palette,
    is_active: bool,
) {
    let messages = conversation.messages();
    let block = Block::default()
        .title(format!("Conversation ({})", messages.len()))
        .borders(Borders::ALL)
        .border_style(styles::panel_border_style(palette, is_active));

    if messages.is_empty() {
        let panel = Paragraph::new(EMPTY_CONVERSATION_TEXT)
            .style(styles::status_style(palette))
            .block(block);
        frame.render_widget(panel, area);
        return;
    }

    // Inner width minus borders and the selection marker column.
    let card_width = (area.width.saturating_sub(2) as usize)
        .saturating_sub(SELECTION_MARKER.width());

    let items: Vec<ListItem<'static>> = messages
        .iter()
        .enumerate()
        .map(|(index, message)| {
            ListItem::new(card_lines(
                message,
                conversation.is_expanded(index),
                card_width,
                palette,
            ))
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_symbol(SELECTION_MARKER)
        .highlight_spacing(HighlightSpacing::Always)
        .scroll_padding(1);

    let mut list_state = ListState::default()
        .with_offset(conversation.scroll_offset())
        .with_selected(conversation.selected_index());
    frame.render_stateful_widget(list, area, &mut list_state);

    conversation.set_scroll_offset(list_state.offset());
}

/// Builds the rows of one card: header, body rows, spacer.
pub fn card_lines(
    message: &Message,
    expanded: bool,
    width: usize,
    palette: &Palette,
) -> Vec<Line<'static>> {
    let body_width = width.saturating_sub(CARD_INDENT.len()).max(1);

    let mut lines = vec![Line::from(vec![
        Span::styled(avatar(message.author()), styles::avatar_style(palette)),
        Span::raw(" "),
        Span::styled(message.author().to_owned(), styles::author_style(palette)),
    ])];

    let (rows, row_style) = if message.is_blank() {
        (
            vec![EMPTY_BODY_PLACEHOLDER.to_owned()],
            styles::empty_body_style(palette, expanded),
        )
    } else if expanded {
        (
            wrap_text(message.body(), body_width),
            styles::card_body_style(palette, expanded),
        )
    } else {
        (
            vec![clamp_line(message.body(), body_width)],
            styles::card_body_style(palette, expanded),
        )
    };

    for row in rows {
        lines.push(Line::from(vec![
            Span::raw(CARD_INDENT),
            Span::styled(pad_to_width(row, body_width), row_style),
        ]));
    }

    lines.push(Line::default());
    lines
}

fn avatar(author: &str) -> String {
    let initial = author
        .chars()
        .next()
        .map(|ch| ch.to_uppercase().collect::<String>())
        .unwrap_or_else(|| "?".to_owned());
    format!("({initial})")
}

/// First line of `text`, cut with an ellipsis when anything is hidden.
fn clamp_line(text: &str, width: usize) -> String {
    let first = text.lines().next().unwrap_or_default();
    let hidden_lines = text.lines().nth(1).is_some();

    if !hidden_lines && first.width() <= width {
        return first.to_owned();
    }

    let budget = width.saturating_sub(ELLIPSIS.width().unwrap_or(1));
    let mut clamped = String::new();
    let mut used = 0;
    for ch in first.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if used + ch_width > budget {
            break;
        }
        clamped.push(ch);
        used += ch_width;
    }
    clamped.push(ELLIPSIS);
    clamped
}

/// Hard-wraps every line of `text` to `width` display columns.
fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let mut rows = Vec::new();

    for line in text.lines() {
        let mut row = String::new();
        let mut used = 0;

        for ch in line.chars() {
            let ch_width = ch.width().unwrap_or(0);
            if used + ch_width > width && !row.is_empty() {
                rows.push(std::mem::take(&mut row));
                used = 0;
            }
            row.push(ch);
            used += ch_width;
        }

        rows.push(row);
    }

    if rows.is_empty() {
        rows.push(String::new());
    }
    rows
}

fn pad_to_width(mut text: String, width: usize) -> String {
    let padding = width.saturating_sub(text.width());
    text.push_str(&" ".repeat(padding));
    text
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use ratatui::{backend::TestBackend, Terminal};

    use super::*;
    use crate::domain::message_store::MessageSequence;

    fn conversation(bodies: &[&str]) -> ConversationState {
        let sequence: MessageSequence = bodies
            .iter()
            .map(|body| Arc::new(Message::new("Me", *body)))
            .collect::<Vec<_>>()
            .into();
        let mut state = ConversationState::default();
        state.apply(sequence);
        state
    }

    fn line_text(line: &Line<'_>) -> String {
        line.spans.iter().map(|span| span.content.as_ref()).collect()
    }

    fn body_rows(lines: &[Line<'_>]) -> Vec<String> {
        lines[1..lines.len() - 1]
            .iter()
            .map(|line| line_text(line).trim().to_owned())
            .collect()
    }

    fn render_to_text(state: &mut ConversationState, width: u16, height: u16) -> String {
        let mut terminal =
            Terminal::new(TestBackend::new(width, height)).expect("test terminal must build");
        terminal
            .draw(|frame| {
                let area = frame.area();
                render_conversation(frame, area, state, &Palette::dark(), true);
            })
            .expect("draw must succeed");

        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer.cell((x, y)).map(|cell| cell.symbol()).unwrap_or(" "));
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn clamp_line_keeps_short_single_line() {
        assert_eq!(clamp_line("hello", 10), "hello");
    }

    #[test]
    fn clamp_line_cuts_long_line_with_ellipsis() {
        assert_eq!(clamp_line("hello world", 6), "hello…");
    }

    #[test]
    fn clamp_line_marks_hidden_following_lines() {
        assert_eq!(clamp_line("first\nsecond", 20), "first…");
    }

    #[test]
    fn clamp_line_counts_wide_characters_by_columns() {
        assert_eq!(clamp_line("日本語テキスト", 7), "日本語…");
    }

    #[test]
    fn wrap_text_splits_long_lines_and_keeps_breaks() {
        assert_eq!(
            wrap_text("abcdefgh\nxy", 3),
            vec!["abc", "def", "gh", "xy"]
        );
    }

    #[test]
    fn wrap_text_keeps_blank_lines() {
        assert_eq!(wrap_text("a\n\nb", 5), vec!["a", "", "b"]);
    }

    #[test]
    fn collapsed_card_shows_single_body_row() {
        let message = Message::new("Me", "one\ntwo\nthree");

        let lines = card_lines(&message, false, 40, &Palette::dark());

        assert_eq!(lines.len(), 3);
        assert!(line_text(&lines[0]).contains("Me"));
        assert_eq!(body_rows(&lines), vec!["one…"]);
    }

    #[test]
    fn expanded_card_shows_every_line_unclamped() {
        let message = Message::new("Me", "one\ntwo\nthree");

        let lines = card_lines(&message, true, 40, &Palette::dark());

        assert_eq!(body_rows(&lines), vec!["one", "two", "three"]);
    }

    #[test]
    fn expanded_card_wraps_to_card_width() {
        let message = Message::new("Me", "abcdefghij");

        let lines = card_lines(&message, true, CARD_INDENT.len() + 4, &Palette::dark());

        assert_eq!(body_rows(&lines), vec!["abcd", "efgh", "ij"]);
    }

    #[test]
    fn card_background_switches_with_expansion() {
        let palette = Palette::light();
        let message = Message::new("Me", "hello");

        let collapsed = card_lines(&message, false, 30, &palette);
        let expanded = card_lines(&message, true, 30, &palette);

        assert_eq!(collapsed[1].spans[1].style.bg, Some(palette.surface));
        assert_eq!(expanded[1].spans[1].style.bg, Some(palette.primary));
    }

    #[test]
    fn toggling_twice_renders_the_same_card() {
        let mut state = conversation(&["some longer text\nwith a second line"]);
        let palette = Palette::dark();
        let before = card_lines(&state.messages()[0], state.is_expanded(0), 30, &palette);

        state.toggle_expanded(0);
        state.toggle_expanded(0);

        let after = card_lines(&state.messages()[0], state.is_expanded(0), 30, &palette);
        assert_eq!(before, after);
    }

    #[test]
    fn empty_body_renders_placeholder() {
        let message = Message::new("Me", "");

        let lines = card_lines(&message, false, 30, &Palette::dark());

        assert_eq!(body_rows(&lines), vec![EMPTY_BODY_PLACEHOLDER]);
    }

    #[test]
    fn avatar_uses_uppercase_initial() {
        assert_eq!(avatar("me"), "(M)");
        assert_eq!(avatar(""), "(?)");
    }

    #[test]
    fn renders_empty_conversation_hint() {
        let mut state = ConversationState::default();

        let text = render_to_text(&mut state, 40, 6);

        assert!(text.contains(EMPTY_CONVERSATION_TEXT));
        assert!(text.contains("Conversation (0)"));
    }

    #[test]
    fn newest_card_stays_visible_after_many_messages() {
        let bodies: Vec<String> = (0..30).map(|i| format!("message-{i:02}")).collect();
        let refs: Vec<&str> = bodies.iter().map(String::as_str).collect();
        let mut state = conversation(&refs);

        let text = render_to_text(&mut state, 40, 12);

        assert!(text.contains("message-29"));
        assert!(!text.contains("message-00"));
        assert!(state.scroll_offset() > 0);
    }
}
