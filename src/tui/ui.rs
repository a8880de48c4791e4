use ratatui::prelude::*;
use ratatui::widgets::{Block, Cell, Clear, Paragraph, Row, Table, Wrap};
use crate::gwa::Column;
use crate::tui::app::{App, InputMode};

const TITLE: &str = "GWA Calculator";

pub fn draw(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    // Handle very small terminal sizes gracefully
    if area.height < 6 || area.width < 30 {
        let msg = Paragraph::new("Terminal too small")
            .alignment(Alignment::Center);
        frame.render_widget(msg, area);
        return;
    }

    // Layout: Title(1) + Table(fill) + Status(1)
    let chunks = Layout::vertical([
        Constraint::Length(1),  // Title bar
        Constraint::Fill(1),    // Row table
        Constraint::Length(1),  // Status bar
    ])
    .split(area);

    render_title(frame, chunks[0], app);
    render_table(frame, chunks[1], app);
    render_status_bar(frame, chunks[2], app);

    // Render overlays based on input mode
    match app.input_mode {
        InputMode::Notice => render_notice_popup(frame, app),
        InputMode::Help => render_help_popup(frame, app),
        InputMode::Breakdown => render_breakdown_popup(frame, app),
        InputMode::Normal | InputMode::Editing => {}
    }
}

fn render_title(frame: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let label = app.calculator.result_label();

    let padding_len = (area.width as usize).saturating_sub(TITLE.len() + label.chars().count());
    let title = Line::from(vec![
        Span::styled(TITLE, Style::default().fg(theme.title_color).bold()),
        Span::raw(" ".repeat(padding_len)),
        Span::styled(label, Style::default().fg(theme.result_color).bold()),
    ]);
    frame.render_widget(Paragraph::new(title), area);
}

fn render_table(frame: &mut Frame, area: Rect, app: &mut App) {
    let theme = &app.theme;
    let rows = app.calculator.rows().rows();

    if rows.is_empty() {
        let empty_msg = Paragraph::new("No rows (a to add one)")
            .alignment(Alignment::Center)
            .style(Style::default().fg(theme.muted))
            .block(Block::default());
        frame.render_widget(empty_msg, area);
        return;
    }

    let selected = app.view.selected();
    let editing = app.input_mode == InputMode::Editing;

    let table_rows: Vec<Row> = rows
        .iter()
        .enumerate()
        .map(|(idx, row)| {
            let index = format!("{}.", idx + 1);

            let cells = [Column::Units, Column::Grade].map(|column| {
                let is_cursor = selected == Some(idx) && app.view.column == column;
                if is_cursor && editing {
                    Cell::from(format!("{}|", app.edit_buffer)).style(theme.cell_editing)
                } else if is_cursor {
                    let text = row.field(column);
                    let text = if text.is_empty() { " " } else { text };
                    Cell::from(text.to_string()).style(theme.cell_selected)
                } else if row.field(column).trim().is_empty() {
                    Cell::from("-").style(Style::default().fg(theme.placeholder))
                } else {
                    Cell::from(row.field(column).to_string())
                }
            });

            // Alternating row background (odd rows get subtle background)
            let row_style = if idx % 2 == 1 {
                Style::default().bg(theme.row_alt_bg)
            } else {
                Style::default()
            };

            let [units, grade] = cells;
            Row::new(vec![
                Cell::from(index).style(Style::default().fg(theme.index_color)),
                units,
                grade,
            ])
            .style(row_style)
        })
        .collect();

    // Column widths
    let widths = [
        Constraint::Length(5),   // Index: "999."
        Constraint::Length(12),  // Units
        Constraint::Fill(1),     // Grade
    ];

    let table = Table::new(table_rows, widths)
        .header(
            Row::new(vec!["#", "Units", "Grade"])
                .style(theme.header_style)
                .bottom_margin(1),
        )
        .row_highlight_style(theme.row_selected);

    frame.render_stateful_widget(table, area, &mut app.view.table_state);
}

fn render_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let text = if let Some((ref msg, _)) = app.flash_message {
        // Show flash message with color based on message type
        let msg_color = if msg.starts_with("Failed") || msg.starts_with("Nothing") {
            theme.flash_error
        } else {
            theme.flash_success
        };
        Line::from(Span::styled(msg.clone(), Style::default().fg(msg_color)))
    } else {
        let count = format!("{} rows", app.calculator.rows().len());

        // Build hints with colored shortcut keys
        let hints: &[(&str, &str)] = match app.input_mode {
            InputMode::Editing => &[
                ("Enter", ":save "),
                ("Tab", ":next "),
                ("Esc", ":cancel"),
            ],
            _ => &[
                ("Enter", ":edit "),
                ("a", ":add "),
                ("d", ":delete "),
                ("c", ":calculate "),
                ("r", ":reset "),
                ("?", ":help "),
                ("q", ":quit"),
            ],
        };

        let mut spans = vec![
            Span::styled(count, Style::default().fg(theme.muted)),
            Span::raw("  "),
        ];
        for (i, (key, label)) in hints.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(" "));
            }
            spans.push(Span::styled(*key, Style::default().fg(theme.status_key_color)));
            spans.push(Span::raw(*label));
        }
        Line::from(spans)
    };

    frame.render_widget(
        Paragraph::new(text).style(Style::default().bg(theme.status_bar_bg)),
        area
    );
}

/// Create a centered rectangle with fixed width and height
fn centered_rect_fixed(width: u16, height: u16, area: Rect) -> Rect {
    // Clamp dimensions to area bounds
    let width = width.min(area.width);
    let height = height.min(area.height);

    // Calculate centered position
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;

    Rect {
        x,
        y,
        width,
        height,
    }
}

/// Render the blocking notice popup (input or selection errors)
fn render_notice_popup(frame: &mut Frame, app: &App) {
    let Some(notice) = &app.notice else {
        return;
    };
    let theme = &app.theme;
    let color = theme.notice_color(notice.level);

    let popup_area = centered_rect_fixed(50, 7, frame.area());
    frame.render_widget(Clear, popup_area);

    let block = Block::bordered()
        .title(format!(" {} ", notice.title))
        .title_style(Style::default().fg(color).bold())
        .border_style(Style::default().fg(color))
        .style(Style::default().bg(theme.popup_bg));
    frame.render_widget(block.clone(), popup_area);

    let inner = block.inner(popup_area);
    let chunks = Layout::vertical([
        Constraint::Fill(1),    // Message
        Constraint::Length(1),  // Dismiss hint
    ])
    .split(inner);

    let message = Paragraph::new(notice.message.as_str()).wrap(Wrap { trim: true });
    frame.render_widget(message, chunks[0]);

    let hint = Paragraph::new("Press any key to continue")
        .style(Style::default().fg(theme.muted));
    frame.render_widget(hint, chunks[1]);
}

/// Render the help overlay popup
fn render_help_popup(frame: &mut Frame, app: &App) {
    let theme = &app.theme;
    let popup_area = centered_rect_fixed(50, 17, frame.area());

    frame.render_widget(Clear, popup_area);

    let block = Block::bordered()
        .title(" Keyboard Shortcuts ")
        .title_style(theme.popup_title)
        .border_style(Style::default().fg(theme.popup_border));
    frame.render_widget(block.clone(), popup_area);

    let inner = block.inner(popup_area);

    let key_style = Style::default().fg(theme.status_key_color).bold();
    let shortcuts = [
        ("j / Down      ", "Next row"),
        ("k / Up        ", "Previous row"),
        ("h l / Left    ", "Switch column"),
        ("Enter / e     ", "Edit cell (digits start editing)"),
        ("Tab           ", "Save cell and move to the next"),
        ("a             ", "Add row"),
        ("d / Delete    ", "Delete selected row"),
        ("c             ", "Calculate GWA"),
        ("b             ", "Show calculation breakdown"),
        ("r             ", "Reset table"),
        ("?             ", "Show/hide this help"),
        ("q / Ctrl-c    ", "Quit"),
    ];

    let mut help_lines: Vec<Line> = shortcuts
        .iter()
        .map(|(key, desc)| Line::from(vec![Span::styled(*key, key_style), Span::raw(*desc)]))
        .collect();
    help_lines.push(Line::from(""));
    help_lines.push(Line::from(
        Span::styled("Press any key to close", Style::default().fg(theme.muted))
    ));

    frame.render_widget(Paragraph::new(help_lines), inner);
}

/// Render the per-row contributions of the last result
fn render_breakdown_popup(frame: &mut Frame, app: &App) {
    let Some(gwa) = app.calculator.last_result() else {
        return;
    };
    let theme = &app.theme;

    // Entries + blank + total + result + blank + hint, plus borders
    let height = (gwa.entries.len() as u16).saturating_add(7);
    let popup_area = centered_rect_fixed(46, height, frame.area());

    frame.render_widget(Clear, popup_area);

    let block = Block::bordered()
        .title(" Breakdown ")
        .title_style(theme.popup_title)
        .border_style(Style::default().fg(theme.popup_border));
    frame.render_widget(block.clone(), popup_area);

    let inner = block.inner(popup_area);

    let mut lines: Vec<Line> = gwa
        .entries
        .iter()
        .map(|entry| {
            Line::from(vec![
                Span::styled(format!("Row {:>3}  ", entry.row + 1), Style::default().fg(theme.index_color)),
                Span::raw(format!(
                    "{:>4} x {:>8} = {}",
                    entry.units,
                    app.calculator.format(entry.grade),
                    app.calculator.format(entry.weighted())
                )),
            ])
        })
        .collect();

    lines.push(Line::from(""));
    lines.push(Line::from(format!(
        "Total units {}, weighted sum {}",
        gwa.total_units,
        app.calculator.format(gwa.total_weighted)
    )));
    lines.push(Line::from(Span::styled(
        app.calculator.result_label(),
        Style::default().fg(theme.result_color).bold(),
    )));
    lines.push(Line::from(""));
    lines.push(Line::from(
        Span::styled("Esc / b to close", Style::default().fg(theme.muted))
    ));

    frame.render_widget(Paragraph::new(lines), inner);
}
