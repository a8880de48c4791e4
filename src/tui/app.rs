use crate::actions::{Actions, Calculator, Notice};
use crate::config::Config;
use crate::gwa::{Column, RowInput};
use crate::rows::{RowEvent, RowObserver};
use crate::tui::theme::ThemeColors;
use std::time::Instant;

const FLASH_SECS: u64 = 3;

#[derive(Debug, Clone, PartialEq)]
pub enum InputMode {
    Normal,
    Editing,
    Notice,
    Help,
    Breakdown,
}

/// Cursor over the row table. Follows row changes as a [`RowObserver`].
#[derive(Debug, Default)]
pub struct TableView {
    pub table_state: ratatui::widgets::TableState,
    pub column: Column,
}

impl TableView {
    pub fn new(row_count: usize) -> Self {
        let mut table_state = ratatui::widgets::TableState::default();
        if row_count > 0 {
            table_state.select(Some(0));
        }
        Self {
            table_state,
            column: Column::Units,
        }
    }

    pub fn selected(&self) -> Option<usize> {
        self.table_state.selected()
    }

    fn clamp(&mut self, len: usize) {
        if len == 0 {
            self.table_state.select(None);
        } else {
            match self.table_state.selected() {
                Some(selected) if selected >= len => self.table_state.select(Some(len - 1)),
                Some(_) => {}
                None => self.table_state.select(Some(0)),
            }
        }
    }
}

impl RowObserver for TableView {
    fn on_row_event(&mut self, event: &RowEvent, rows: &[RowInput]) {
        match event {
            // Jump to the new row so it can be filled in right away
            RowEvent::Appended { index } => self.table_state.select(Some(*index)),
            RowEvent::Removed { .. } => self.clamp(rows.len()),
            RowEvent::Reset { len } => {
                self.table_state.select(if *len > 0 { Some(0) } else { None });
                self.column = Column::Units;
            }
            RowEvent::Edited { .. } => {}
        }
    }
}

pub struct App {
    pub calculator: Calculator,
    pub view: TableView,
    pub input_mode: InputMode,
    pub edit_buffer: String,
    pub notice: Option<Notice>,
    pub flash_message: Option<(String, Instant)>,
    pub should_quit: bool,
    pub theme: ThemeColors,
    pub verbose: bool,
}

impl App {
    pub fn new(config: &Config, theme: ThemeColors, verbose: bool) -> Self {
        let calculator = Calculator::new(config);
        let view = TableView::new(calculator.rows().len());
        Self {
            calculator,
            view,
            input_mode: InputMode::Normal,
            edit_buffer: String::new(),
            notice: None,
            flash_message: None,
            should_quit: false,
            theme,
            verbose,
        }
    }

    /// Deliver pending row changes to the table view
    pub fn sync_rows(&mut self) {
        self.calculator.rows_mut().notify(&mut self.view);
    }

    pub fn selected_row(&self) -> Option<usize> {
        self.view.selected()
    }

    pub fn next_row(&mut self) {
        let len = self.calculator.rows().len();
        if len == 0 {
            return;
        }
        let i = match self.view.selected() {
            Some(i) if i >= len - 1 => 0,
            Some(i) => i + 1,
            None => 0,
        };
        self.view.table_state.select(Some(i));
    }

    pub fn previous_row(&mut self) {
        let len = self.calculator.rows().len();
        if len == 0 {
            return;
        }
        let i = match self.view.selected() {
            Some(0) => len - 1,
            Some(i) => i - 1,
            None => 0,
        };
        self.view.table_state.select(Some(i));
    }

    pub fn toggle_column(&mut self) {
        self.view.column = self.view.column.next();
    }

    pub fn select_column(&mut self, column: Column) {
        self.view.column = column;
    }

    /// Open the editor on the current cell, seeded with its text
    pub fn start_editing(&mut self) {
        let Some(index) = self.view.selected() else {
            return;
        };
        let Some(row) = self.calculator.rows().get(index) else {
            return;
        };
        self.edit_buffer = row.field(self.view.column).to_string();
        self.input_mode = InputMode::Editing;
    }

    /// Open the editor on the current cell, replacing its text with `c`
    pub fn start_editing_with(&mut self, c: char) {
        if self.view.selected().is_none() {
            return;
        }
        self.edit_buffer.clear();
        self.edit_buffer.push(c);
        self.input_mode = InputMode::Editing;
    }

    pub fn commit_edit(&mut self) {
        if self.input_mode != InputMode::Editing {
            return;
        }
        if let Some(index) = self.view.selected() {
            let text = std::mem::take(&mut self.edit_buffer);
            if let Err(e) = self.calculator.rows_mut().set_cell(index, self.view.column, text) {
                self.show_flash(format!("Failed to edit: {}", e));
            }
            self.sync_rows();
        }
        self.edit_buffer.clear();
        self.input_mode = InputMode::Normal;
    }

    pub fn cancel_edit(&mut self) {
        self.edit_buffer.clear();
        self.input_mode = InputMode::Normal;
    }

    /// Commit, then continue editing in the next cell (units -> grade -> next row)
    pub fn commit_and_advance(&mut self) {
        self.commit_edit();
        let Some(index) = self.view.selected() else {
            return;
        };
        match self.view.column {
            Column::Units => self.view.column = Column::Grade,
            Column::Grade => {
                if index + 1 >= self.calculator.rows().len() {
                    return;
                }
                self.view.table_state.select(Some(index + 1));
                self.view.column = Column::Units;
            }
        }
        self.start_editing();
    }

    /// Finish an in-progress edit before acting on the rows
    pub fn stop_editing(&mut self) {
        if self.input_mode == InputMode::Editing {
            self.commit_edit();
        }
    }

    pub fn show_notice(&mut self, notice: Notice) {
        self.notice = Some(notice);
        self.input_mode = InputMode::Notice;
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
        self.input_mode = InputMode::Normal;
    }

    pub fn show_help(&mut self) {
        self.input_mode = InputMode::Help;
    }

    pub fn dismiss_help(&mut self) {
        self.input_mode = InputMode::Normal;
    }

    /// Show how the last result was put together
    pub fn show_breakdown(&mut self) {
        if self.calculator.last_result().is_some() {
            self.input_mode = InputMode::Breakdown;
        } else {
            self.show_flash("Nothing calculated yet (c to calculate)".to_string());
        }
    }

    pub fn dismiss_breakdown(&mut self) {
        self.input_mode = InputMode::Normal;
    }

    pub fn update_flash(&mut self) {
        if let Some((_, timestamp)) = self.flash_message {
            if timestamp.elapsed().as_secs() >= FLASH_SECS {
                self.flash_message = None;
            }
        }
    }

    pub fn show_flash(&mut self, msg: String) {
        self.flash_message = Some((msg, Instant::now()));
    }
}

impl Actions for App {
    fn on_add(&mut self) {
        self.stop_editing();
        let index = self.calculator.add_row();
        self.sync_rows();
        self.show_flash(format!("Added row {}", index + 1));
    }

    fn on_delete(&mut self) {
        self.stop_editing();
        let selection = self.view.selected();
        match self.calculator.delete_row(selection) {
            Ok(_) => {
                self.sync_rows();
                if let Some(index) = selection {
                    self.show_flash(format!("Deleted row {}", index + 1));
                }
            }
            Err(notice) => self.show_notice(notice),
        }
    }

    fn on_calculate(&mut self) {
        self.stop_editing();
        match self.calculator.calculate() {
            Ok(gwa) => {
                let entries = gwa.entries.len();
                let total_units = gwa.total_units;
                let value = gwa.value();
                if self.verbose {
                    crate::buffered_eprintln!(
                        "Calculated GWA {} from {} rows ({} units, {} policy)",
                        value,
                        entries,
                        total_units,
                        self.calculator.policy()
                    );
                }
                let label = self.calculator.result_label();
                self.show_flash(format!("Calculated {} from {} rows", label, entries));
            }
            Err(notice) => {
                if self.verbose {
                    crate::buffered_eprintln!("Calculation failed: {}", notice.message);
                }
                self.show_notice(notice);
            }
        }
    }

    fn on_reset(&mut self) {
        self.stop_editing();
        self.calculator.reset();
        self.sync_rows();
        self.show_flash("Reset".to_string());
    }
}
