use super::notice::Notice;
use crate::config::Config;
use crate::gwa::{compute_with, format_gwa_with, Gwa, RowInput, UnitsPolicy};
use crate::rows::RowCollection;

const RESULT_PREFIX: &str = "GWA: ";

/// Toolkit-independent state behind the calculator screen: the rows being
/// edited and the last successful result.
#[derive(Debug, Clone)]
pub struct Calculator {
    rows: RowCollection,
    initial_rows: usize,
    decimal_places: usize,
    policy: UnitsPolicy,
    last: Option<Gwa>,
}

impl Calculator {
    pub fn new(config: &Config) -> Self {
        Self {
            rows: RowCollection::with_blank_rows(config.initial_rows),
            initial_rows: config.initial_rows,
            decimal_places: config.decimal_places,
            policy: config.units_policy,
            last: None,
        }
    }

    pub fn rows(&self) -> &RowCollection {
        &self.rows
    }

    pub fn rows_mut(&mut self) -> &mut RowCollection {
        &mut self.rows
    }

    pub fn policy(&self) -> UnitsPolicy {
        self.policy
    }

    pub fn add_row(&mut self) -> usize {
        self.rows.append()
    }

    pub fn delete_row(&mut self, selection: Option<usize>) -> Result<RowInput, Notice> {
        self.rows.remove(selection).map_err(|e| Notice::from(&e))
    }

    /// Compute from the current rows. On failure the previous result is kept.
    pub fn calculate(&mut self) -> Result<&Gwa, Notice> {
        let snapshot = self.rows.snapshot();
        match compute_with(&snapshot, self.policy) {
            Ok(gwa) => Ok(&*self.last.insert(gwa)),
            Err(e) => Err(Notice::from(&e)),
        }
    }

    /// Back to `initial_rows` blank rows with no result
    pub fn reset(&mut self) {
        self.rows.reset(self.initial_rows);
        self.last = None;
    }

    pub fn last_result(&self) -> Option<&Gwa> {
        self.last.as_ref()
    }

    pub fn format(&self, value: f64) -> String {
        format_gwa_with(value, self.decimal_places)
    }

    /// "GWA: 1.81", or just "GWA: " before the first successful calculation
    pub fn result_label(&self) -> String {
        match &self.last {
            Some(gwa) => format!("{}{}", RESULT_PREFIX, self.format(gwa.value())),
            None => RESULT_PREFIX.to_string(),
        }
    }
}
