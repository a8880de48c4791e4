//! Rendering and keyboard tests for the calculator screen

use super::*;
use crate::config::Config;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::backend::TestBackend;
use ratatui::Terminal;

fn app() -> App {
    App::new(&Config::default(), ThemeColors::dark(), false)
}

/// Render the app into a test buffer and return its text, one line per row
fn render(app: &mut App, width: u16, height: u16) -> String {
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|f| ui::draw(f, app)).unwrap();

    let buffer = terminal.backend().buffer();
    let mut content = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            content.push_str(buffer.cell((x, y)).unwrap().symbol());
        }
        content.push('\n');
    }
    content
}

fn press(app: &mut App, code: KeyCode) {
    handle_key_event(app, KeyEvent::new(code, KeyModifiers::NONE));
}

fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        press(app, KeyCode::Char(c));
    }
}

// ============================================================================
// Keyboard
// ============================================================================

#[test]
fn test_keyboard_entry_and_calculate() {
    let mut app = app();

    // Digits start editing; Tab moves units -> grade -> next row
    type_text(&mut app, "3");
    press(&mut app, KeyCode::Tab);
    type_text(&mut app, "1.5");
    press(&mut app, KeyCode::Tab);
    type_text(&mut app, "5");
    press(&mut app, KeyCode::Tab);
    type_text(&mut app, "2.0");
    press(&mut app, KeyCode::Enter);

    press(&mut app, KeyCode::Char('c'));
    assert_eq!(app.input_mode, app::InputMode::Normal);
    assert_eq!(app.calculator.result_label(), "GWA: 1.81");
}

#[test]
fn test_action_letters_are_text_while_editing() {
    let mut app = app();
    press(&mut app, KeyCode::Enter);
    type_text(&mut app, "abc");
    press(&mut app, KeyCode::Enter);

    assert_eq!(app.calculator.rows().len(), 3);
    assert_eq!(app.calculator.rows().get(0).unwrap().units, "abc");

    press(&mut app, KeyCode::Char('c'));
    assert_eq!(app.input_mode, app::InputMode::Notice);
}

#[test]
fn test_backspace_and_escape() {
    let mut app = app();
    type_text(&mut app, "12");
    press(&mut app, KeyCode::Backspace);
    assert_eq!(app.edit_buffer, "1");
    press(&mut app, KeyCode::Esc);
    assert_eq!(app.input_mode, app::InputMode::Normal);
    assert_eq!(app.calculator.rows().get(0).unwrap().units, "");
}

#[test]
fn test_notice_dismissed_by_any_key() {
    let mut app = app();
    press(&mut app, KeyCode::Char('c'));
    assert_eq!(app.input_mode, app::InputMode::Notice);

    // The key only dismisses; it is not handled as a Normal-mode key
    press(&mut app, KeyCode::Char('a'));
    assert_eq!(app.input_mode, app::InputMode::Normal);
    assert_eq!(app.calculator.rows().len(), 3);
}

#[test]
fn test_add_delete_reset_keys() {
    let mut app = app();
    press(&mut app, KeyCode::Char('a'));
    press(&mut app, KeyCode::Char('a'));
    assert_eq!(app.calculator.rows().len(), 5);

    press(&mut app, KeyCode::Delete);
    assert_eq!(app.calculator.rows().len(), 4);

    press(&mut app, KeyCode::Char('r'));
    assert_eq!(app.calculator.rows().len(), 3);
}

#[test]
fn test_column_keys() {
    let mut app = app();
    press(&mut app, KeyCode::Char('l'));
    assert_eq!(app.view.column, Column::Grade);
    press(&mut app, KeyCode::Left);
    assert_eq!(app.view.column, Column::Units);
}

#[test]
fn test_quit_keys() {
    let mut app = app();
    press(&mut app, KeyCode::Char('q'));
    assert!(app.should_quit);

    let mut app = self::app();
    press(&mut app, KeyCode::Enter);
    handle_key_event(&mut app, KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
    assert!(app.should_quit);
}

#[test]
fn test_help_toggle() {
    let mut app = app();
    press(&mut app, KeyCode::Char('?'));
    assert_eq!(app.input_mode, app::InputMode::Help);
    press(&mut app, KeyCode::Char('x'));
    assert_eq!(app.input_mode, app::InputMode::Normal);
}

// ============================================================================
// Rendering
// ============================================================================

#[test]
fn test_renders_title_and_headers() {
    let mut app = app();
    let screen = render(&mut app, 60, 14);
    assert!(screen.contains("GWA Calculator"));
    assert!(screen.contains("GWA: "));
    assert!(screen.contains("Units"));
    assert!(screen.contains("Grade"));
    assert!(screen.contains("3 rows"));
}

#[test]
fn test_renders_result_label_after_calculate() {
    let mut app = app();
    type_text(&mut app, "3");
    press(&mut app, KeyCode::Tab);
    type_text(&mut app, "1.0");
    press(&mut app, KeyCode::Enter);
    press(&mut app, KeyCode::Char('c'));

    let screen = render(&mut app, 60, 14);
    assert!(screen.contains("GWA: 1.00"));
}

#[test]
fn test_renders_editing_cursor() {
    let mut app = app();
    type_text(&mut app, "42");
    let screen = render(&mut app, 60, 14);
    assert!(screen.contains("42|"));
    assert!(screen.contains("Esc:cancel"));
}

#[test]
fn test_renders_notice_popup() {
    let mut app = app();
    press(&mut app, KeyCode::Char('c'));
    let screen = render(&mut app, 70, 16);
    assert!(screen.contains("Input Error"));
    assert!(screen.contains("Press any key to continue"));
}

#[test]
fn test_renders_breakdown_popup() {
    let mut app = app();
    type_text(&mut app, "3");
    press(&mut app, KeyCode::Tab);
    type_text(&mut app, "1.5");
    press(&mut app, KeyCode::Tab);
    type_text(&mut app, "5");
    press(&mut app, KeyCode::Tab);
    type_text(&mut app, "2.0");
    press(&mut app, KeyCode::Enter);
    press(&mut app, KeyCode::Char('c'));
    press(&mut app, KeyCode::Char('b'));

    let screen = render(&mut app, 70, 20);
    assert!(screen.contains("Breakdown"));
    assert!(screen.contains("Total units 8"));
    assert!(screen.contains("= 10.00"));
}

#[test]
fn test_renders_empty_table_message() {
    let mut app = app();
    for _ in 0..3 {
        press(&mut app, KeyCode::Char('d'));
    }
    let screen = render(&mut app, 60, 14);
    assert!(screen.contains("No rows"));
}

#[test]
fn test_renders_too_small() {
    let mut app = app();
    let screen = render(&mut app, 20, 4);
    assert!(screen.contains("Terminal"));
}
