//! Centralized theme module for TUI color constants and styles

use crate::actions::NoticeLevel;
use crate::config::ThemeMode;
use ratatui::prelude::*;

/// Terminal luma above which the light palette is used
const LIGHT_LUMA_THRESHOLD: f32 = 0.6;

/// Complete color palette for the TUI
#[derive(Debug, Clone)]
pub struct ThemeColors {
    // Title bar
    pub title_color: Color,
    pub result_color: Color,

    // Table colors
    pub header_style: Style,
    pub row_alt_bg: Color,
    pub row_selected: Style,
    pub cell_selected: Style,
    pub cell_editing: Style,
    pub index_color: Color,
    pub placeholder: Color,

    // General colors
    pub muted: Color,

    // Status bar colors
    pub status_bar_bg: Color,
    pub status_key_color: Color,
    pub flash_success: Color,
    pub flash_error: Color,

    // Popup overlay colors
    pub popup_border: Color,
    pub popup_title: Style,
    pub popup_bg: Color,
    pub notice_warning: Color,
    pub notice_error: Color,
}

impl ThemeColors {
    /// Dark theme palette
    pub fn dark() -> Self {
        Self {
            title_color: Color::Cyan,
            result_color: Color::Green,
            header_style: Style::new().bold(),
            row_alt_bg: Color::Indexed(235),
            row_selected: Style::new().bg(Color::Indexed(238)),
            cell_selected: Style::new().reversed(),
            cell_editing: Style::new().fg(Color::Black).bg(Color::Yellow),
            index_color: Color::DarkGray,
            placeholder: Color::Indexed(240),
            muted: Color::Gray,
            status_bar_bg: Color::Indexed(236),
            status_key_color: Color::Cyan,
            flash_success: Color::Green,
            flash_error: Color::Red,
            popup_border: Color::Cyan,
            popup_title: Style::new().fg(Color::Cyan).bold(),
            popup_bg: Color::Indexed(234),
            notice_warning: Color::Yellow,
            notice_error: Color::Red,
        }
    }

    /// Light theme palette
    pub fn light() -> Self {
        Self {
            title_color: Color::Blue,
            result_color: Color::Indexed(28),
            header_style: Style::new().bold(),
            row_alt_bg: Color::Indexed(255),
            row_selected: Style::new().bg(Color::Indexed(253)),
            cell_selected: Style::new().reversed(),
            cell_editing: Style::new().fg(Color::Black).bg(Color::Indexed(229)),
            index_color: Color::Indexed(245),
            placeholder: Color::Indexed(250),
            muted: Color::Indexed(242),
            status_bar_bg: Color::Indexed(254),
            status_key_color: Color::Blue,
            flash_success: Color::Indexed(28),
            flash_error: Color::Indexed(160),
            popup_border: Color::Blue,
            popup_title: Style::new().fg(Color::Blue).bold(),
            popup_bg: Color::Indexed(231),
            notice_warning: Color::Indexed(136),
            notice_error: Color::Indexed(160),
        }
    }

    /// Border color for a notice popup
    pub fn notice_color(&self, level: NoticeLevel) -> Color {
        match level {
            NoticeLevel::Warning => self.notice_warning,
            NoticeLevel::Error => self.notice_error,
        }
    }
}

/// Pick a palette. `Auto` asks the terminal for its background luma and
/// falls back to dark when the terminal does not answer.
pub fn resolve_theme(mode: ThemeMode) -> ThemeColors {
    match mode {
        ThemeMode::Dark => ThemeColors::dark(),
        ThemeMode::Light => ThemeColors::light(),
        ThemeMode::Auto => match terminal_light::luma() {
            Ok(luma) if luma > LIGHT_LUMA_THRESHOLD => ThemeColors::light(),
            _ => ThemeColors::dark(),
        },
    }
}
