//! End-to-end checks through the public API: text rows in, formatted GWA out.

use gwa_calc::actions::{dispatch, Action, Calculator};
use gwa_calc::config::Config;
use gwa_calc::gwa::{compute, format_gwa, ComputeError, RowInput};
use gwa_calc::input::read_rows;

fn rows(pairs: &[(&str, &str)]) -> Vec<RowInput> {
    pairs.iter().map(|&(u, g)| RowInput::new(u, g)).collect()
}

#[test]
fn test_two_subjects() {
    let gwa = compute(&rows(&[("3", "1.5"), ("5", "2.0")])).unwrap();
    assert_eq!(gwa.value(), 1.8125);
    assert_eq!(format_gwa(gwa.value()), "1.81");
}

#[test]
fn test_all_blank_rows() {
    let result = compute(&rows(&[("", ""), ("", "")]));
    assert!(matches!(result, Err(ComputeError::ZeroTotalUnits { .. })));
}

#[test]
fn test_non_numeric_grade() {
    let result = compute(&rows(&[("3", "abc")]));
    assert!(matches!(result, Err(ComputeError::InvalidNumber { row: 0, .. })));
}

#[test]
fn test_trailing_blank_row_ignored() {
    let gwa = compute(&rows(&[("3", "1.0"), ("", "")])).unwrap();
    assert_eq!(gwa.value(), 1.0);
    assert_eq!(format_gwa(gwa.value()), "1.00");
}

#[test]
fn test_blank_rows_do_not_change_result() {
    let dense = compute(&rows(&[("2", "1.25"), ("4", "2.5")])).unwrap();
    let sparse = compute(&rows(&[("", ""), ("2", "1.25"), (" ", "\t"), ("4", "2.5"), ("", "")])).unwrap();
    assert_eq!(dense.value(), sparse.value());
}

#[test]
fn test_stdin_text_matches_pairs() {
    let text = "# units grade\n3\t1.5\n5 2.0\n";
    let from_text = compute(&read_rows(text.as_bytes()).unwrap()).unwrap();
    let from_pairs = compute(&rows(&[("3", "1.5"), ("5", "2.0")])).unwrap();
    assert_eq!(from_text.value(), from_pairs.value());
}

/// Minimal front end driving the calculator through the action set
struct Headless {
    calculator: Calculator,
    selection: Option<usize>,
    notices: Vec<String>,
}

impl gwa_calc::actions::Actions for Headless {
    fn on_add(&mut self) {
        self.selection = Some(self.calculator.add_row());
    }

    fn on_delete(&mut self) {
        match self.calculator.delete_row(self.selection) {
            Ok(_) => self.selection = None,
            Err(notice) => self.notices.push(notice.message),
        }
    }

    fn on_calculate(&mut self) {
        if let Err(notice) = self.calculator.calculate() {
            self.notices.push(notice.message);
        }
    }

    fn on_reset(&mut self) {
        self.calculator.reset();
        self.selection = None;
    }
}

#[test]
fn test_headless_front_end() {
    use gwa_calc::gwa::Column;

    let mut ui = Headless {
        calculator: Calculator::new(&Config::default()),
        selection: None,
        notices: Vec::new(),
    };

    dispatch(&mut ui, Action::Delete);
    assert_eq!(ui.notices, vec!["Please select a row to delete."]);

    let rows = ui.calculator.rows_mut();
    rows.set_cell(0, Column::Units, "3").unwrap();
    rows.set_cell(0, Column::Grade, "1.5").unwrap();
    rows.set_cell(1, Column::Units, "5").unwrap();
    rows.set_cell(1, Column::Grade, "2.0").unwrap();
    dispatch(&mut ui, Action::Calculate);
    assert_eq!(ui.calculator.result_label(), "GWA: 1.81");

    dispatch(&mut ui, Action::Add);
    assert_eq!(ui.calculator.rows().len(), 4);
    dispatch(&mut ui, Action::Delete);
    assert_eq!(ui.calculator.rows().len(), 3);

    dispatch(&mut ui, Action::Reset);
    assert_eq!(ui.calculator.result_label(), "GWA: ");
    assert_eq!(ui.notices.len(), 1);
}
