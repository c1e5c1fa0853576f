//! Palette and style definitions for the UI components.

use ratatui::style::{Color, Modifier, Style};

use crate::infra::config::Theme;

/// Fixed colour set for one theme. Switching themes swaps the whole palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub primary: Color,
    pub on_primary: Color,
    pub surface: Color,
    pub on_surface: Color,
    pub secondary: Color,
    pub muted: Color,
    pub border_active: Color,
    pub border_inactive: Color,
}

impl Palette {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Dark => Self::dark(),
            Theme::Light => Self::light(),
        }
    }

    pub fn dark() -> Self {
        Self {
            primary: Color::Rgb(187, 134, 252),
            on_primary: Color::Black,
            surface: Color::Rgb(30, 30, 30),
            on_surface: Color::White,
            secondary: Color::Rgb(3, 218, 197),
            muted: Color::DarkGray,
            border_active: Color::Cyan,
            border_inactive: Color::DarkGray,
        }
    }

    pub fn light() -> Self {
        Self {
            primary: Color::Rgb(98, 0, 238),
            on_primary: Color::White,
            surface: Color::Rgb(245, 245, 245),
            on_surface: Color::Black,
            secondary: Color::Rgb(1, 135, 134),
            muted: Color::Gray,
            border_active: Color::Blue,
            border_inactive: Color::Gray,
        }
    }
}

// =============================================================================
// Panels
// =============================================================================

pub fn panel_border_style(palette: &Palette, is_active: bool) -> Style {
    let color = if is_active {
        palette.border_active
    } else {
        palette.border_inactive
    };
    Style::default().fg(color)
}

pub fn status_style(palette: &Palette) -> Style {
    Style::default().fg(palette.muted)
}

// =============================================================================
// Message cards
// =============================================================================

/// Author name above a card.
pub fn author_style(palette: &Palette) -> Style {
    Style::default()
        .fg(palette.secondary)
        .add_modifier(Modifier::BOLD)
}

pub fn avatar_style(palette: &Palette) -> Style {
    Style::default().fg(palette.secondary)
}

/// Card body: surface when collapsed, primary when expanded.
pub fn card_body_style(palette: &Palette, expanded: bool) -> Style {
    if expanded {
        Style::default().fg(palette.on_primary).bg(palette.primary)
    } else {
        Style::default().fg(palette.on_surface).bg(palette.surface)
    }
}

pub fn empty_body_style(palette: &Palette, expanded: bool) -> Style {
    card_body_style(palette, expanded).add_modifier(Modifier::ITALIC | Modifier::DIM)
}

// =============================================================================
// Composer
// =============================================================================

pub fn input_prompt_style(palette: &Palette) -> Style {
    Style::default().fg(palette.secondary)
}

pub fn input_text_style(palette: &Palette) -> Style {
    Style::default().fg(palette.on_surface)
}

pub fn input_placeholder_style(palette: &Palette) -> Style {
    Style::default().fg(palette.muted)
}

/// Send button; dimmed while there is nothing to send.
pub fn send_button_style(palette: &Palette, enabled: bool) -> Style {
    if enabled {
        Style::default()
            .fg(palette.on_primary)
            .bg(palette.primary)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(palette.muted)
    }
}
