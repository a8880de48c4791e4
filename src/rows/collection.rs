use crate::gwa::{Column, RowInput};
use std::fmt;

/// What changed in a [`RowCollection`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowEvent {
    Appended { index: usize },
    Removed { index: usize },
    Edited { index: usize, column: Column },
    Reset { len: usize },
}

/// Receives change notifications from a [`RowCollection`].
///
/// Presentation layers implement this to keep their view state (selection,
/// cached labels) in step with the rows without the collection knowing about them.
pub trait RowObserver {
    fn on_row_event(&mut self, event: &RowEvent, rows: &[RowInput]);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowError {
    /// Delete requested with nothing selected
    NoSelection,
    OutOfRange { index: usize, len: usize },
}

impl fmt::Display for RowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RowError::NoSelection => write!(f, "No row selected"),
            RowError::OutOfRange { index, len } => {
                write!(f, "Row {} out of range ({} rows)", index + 1, len)
            }
        }
    }
}

impl std::error::Error for RowError {}

/// Ordered list of (units, grade) rows being edited.
///
/// Mutations queue a [`RowEvent`]; drain them with [`RowCollection::take_events`]
/// or [`RowCollection::notify`].
#[derive(Debug, Clone, Default)]
pub struct RowCollection {
    rows: Vec<RowInput>,
    pending: Vec<RowEvent>,
}

impl RowCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_blank_rows(count: usize) -> Self {
        Self {
            rows: vec![RowInput::default(); count],
            pending: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[RowInput] {
        &self.rows
    }

    pub fn get(&self, index: usize) -> Option<&RowInput> {
        self.rows.get(index)
    }

    /// Copy of the current rows, taken at calculation time
    pub fn snapshot(&self) -> Vec<RowInput> {
        self.rows.clone()
    }

    /// Add a blank row at the end and return its index
    pub fn append(&mut self) -> usize {
        self.rows.push(RowInput::default());
        let index = self.rows.len() - 1;
        self.pending.push(RowEvent::Appended { index });
        index
    }

    /// Remove the selected row
    pub fn remove(&mut self, selection: Option<usize>) -> Result<RowInput, RowError> {
        let index = selection.ok_or(RowError::NoSelection)?;
        if index >= self.rows.len() {
            return Err(RowError::OutOfRange {
                index,
                len: self.rows.len(),
            });
        }
        let removed = self.rows.remove(index);
        self.pending.push(RowEvent::Removed { index });
        Ok(removed)
    }

    /// Replace all rows with `count` blank ones
    pub fn reset(&mut self, count: usize) {
        self.rows.clear();
        self.rows.resize(count, RowInput::default());
        self.pending.push(RowEvent::Reset { len: count });
    }

    pub fn set_cell(
        &mut self,
        index: usize,
        column: Column,
        text: impl Into<String>,
    ) -> Result<(), RowError> {
        let len = self.rows.len();
        let row = self
            .rows
            .get_mut(index)
            .ok_or(RowError::OutOfRange { index, len })?;
        let text = text.into();
        let field = row.field_mut(column);
        if *field != text {
            *field = text;
            self.pending.push(RowEvent::Edited { index, column });
        }
        Ok(())
    }

    /// Drain queued change events, oldest first
    pub fn take_events(&mut self) -> Vec<RowEvent> {
        std::mem::take(&mut self.pending)
    }

    /// Deliver queued events to `observer`, oldest first
    pub fn notify(&mut self, observer: &mut dyn RowObserver) {
        for event in std::mem::take(&mut self.pending) {
            observer.on_row_event(&event, &self.rows);
        }
    }
}
