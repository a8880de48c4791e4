pub mod app;
pub mod event;
pub mod theme;
pub mod ui;

#[cfg(test)]
mod tests;

pub use app::App;
pub use theme::{resolve_theme, ThemeColors};

use crate::actions::{dispatch, Action};
use crate::gwa::Column;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use event::{Event, EventHandler};

const TICK_RATE_MS: u64 = 250;

pub async fn run_tui(mut app: App) -> anyhow::Result<()> {
    // Buffer stderr while TUI is active to prevent output corrupting the display
    crate::stderr_buffer::activate();

    // Init terminal (sets up panic hooks automatically)
    let mut terminal = ratatui::init();
    let mut events = EventHandler::new(TICK_RATE_MS);

    let result: anyhow::Result<()> = loop {
        if let Err(e) = terminal.draw(|frame| ui::draw(frame, &mut app)) {
            break Err(e.into());
        }

        match events.next().await {
            Some(Event::Key(key)) => handle_key_event(&mut app, key),
            Some(Event::Tick) => app.update_flash(),
            Some(Event::Resize) => {}
            None => break Ok(()),
        }

        if app.should_quit {
            break Ok(());
        }
    };

    // Restore terminal
    ratatui::restore();

    // Flush buffered stderr messages now that the terminal is restored
    for msg in crate::stderr_buffer::drain() {
        eprintln!("{}", msg);
    }

    result
}

/// Keys that begin editing the current cell with that character
fn starts_edit(c: char) -> bool {
    c.is_ascii_digit() || c == '.' || c == '-' || c == '+'
}

pub fn handle_key_event(app: &mut App, key: KeyEvent) {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.should_quit = true;
        return;
    }

    match app.input_mode {
        app::InputMode::Normal => {
            match key.code {
                // Quit
                KeyCode::Char('q') => app.should_quit = true,

                // Navigation
                KeyCode::Char('j') | KeyCode::Down => app.next_row(),
                KeyCode::Char('k') | KeyCode::Up => app.previous_row(),
                KeyCode::Char('h') | KeyCode::Left => app.select_column(Column::Units),
                KeyCode::Char('l') | KeyCode::Right => app.select_column(Column::Grade),
                KeyCode::Tab => app.toggle_column(),

                // Edit current cell
                KeyCode::Enter | KeyCode::Char('e') | KeyCode::Char('i') => app.start_editing(),
                KeyCode::Char(c) if starts_edit(c) => app.start_editing_with(c),

                // Actions
                KeyCode::Char('a') => dispatch(app, Action::Add),
                KeyCode::Char('d') | KeyCode::Delete => dispatch(app, Action::Delete),
                KeyCode::Char('c') => dispatch(app, Action::Calculate),
                KeyCode::Char('r') => dispatch(app, Action::Reset),

                // Overlays
                KeyCode::Char('b') => app.show_breakdown(),
                KeyCode::Char('?') => app.show_help(),

                _ => {}
            }
        }
        app::InputMode::Editing => {
            match key.code {
                KeyCode::Enter => app.commit_edit(),
                KeyCode::Tab => app.commit_and_advance(),
                KeyCode::Esc => app.cancel_edit(),
                KeyCode::Backspace => {
                    app.edit_buffer.pop();
                }
                // Anything printable; the engine decides what is a number
                KeyCode::Char(c) if !c.is_control() => app.edit_buffer.push(c),

                // Ignore all other keys (don't propagate to Normal mode)
                _ => {}
            }
        }
        app::InputMode::Breakdown => match key.code {
            KeyCode::Esc | KeyCode::Char('b') | KeyCode::Char('q') => app.dismiss_breakdown(),
            _ => {}
        },
        app::InputMode::Notice => {
            // Any key acknowledges the notice
            app.dismiss_notice();
        }
        app::InputMode::Help => {
            // Any key exits help
            app.dismiss_help();
        }
    }
}
