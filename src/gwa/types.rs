use serde::{Deserialize, Serialize};
use std::fmt;

/// One table row as the user typed it. Both fields are raw text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowInput {
    pub units: String,
    pub grade: String,
}

impl RowInput {
    pub fn new(units: impl Into<String>, grade: impl Into<String>) -> Self {
        Self {
            units: units.into(),
            grade: grade.into(),
        }
    }

    /// A row whose fields are both empty after trimming. Blank rows are skipped.
    pub fn is_blank(&self) -> bool {
        self.units.trim().is_empty() && self.grade.trim().is_empty()
    }

    pub fn field(&self, column: Column) -> &str {
        match column {
            Column::Units => &self.units,
            Column::Grade => &self.grade,
        }
    }

    pub fn field_mut(&mut self, column: Column) -> &mut String {
        match column {
            Column::Units => &mut self.units,
            Column::Grade => &mut self.grade,
        }
    }
}

impl<U: Into<String>, G: Into<String>> From<(U, G)> for RowInput {
    fn from((units, grade): (U, G)) -> Self {
        RowInput::new(units, grade)
    }
}

/// The two editable columns of a row
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Column {
    #[default]
    Units,
    Grade,
}

impl Column {
    pub fn next(self) -> Self {
        match self {
            Column::Units => Column::Grade,
            Column::Grade => Column::Units,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Column::Units => "units",
            Column::Grade => "grade",
        }
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A non-blank row after parsing. Only lives for one computation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParsedEntry {
    /// 0-based position in the input rows
    pub row: usize,
    pub units: i32,
    pub grade: f64,
}

impl ParsedEntry {
    pub fn weighted(&self) -> f64 {
        self.units as f64 * self.grade
    }
}

/// Whether zero or negative units are accepted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitsPolicy {
    /// Any integer is accepted and contributes to the sums as-is
    #[default]
    Permissive,
    /// Units must be `> 0`
    Strict,
}

impl fmt::Display for UnitsPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnitsPolicy::Permissive => write!(f, "permissive"),
            UnitsPolicy::Strict => write!(f, "strict"),
        }
    }
}

/// Successful computation
#[derive(Debug, Clone, PartialEq)]
pub struct Gwa {
    pub(crate) value: f64,
    pub total_units: i64,
    pub total_weighted: f64,
    pub entries: Vec<ParsedEntry>,
}

impl Gwa {
    /// The full-precision weighted average. Format with [`super::format_gwa`].
    pub fn value(&self) -> f64 {
        self.value
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ComputeError {
    /// A non-blank row has units or grade text that does not parse
    InvalidNumber { row: usize, field: Column },
    /// Contributing units summed to zero. `entries == 0` means every row was blank.
    ZeroTotalUnits { entries: usize },
    /// Units `<= 0` under [`UnitsPolicy::Strict`]
    NonPositiveUnits { row: usize, units: i32 },
}

impl ComputeError {
    /// Stable machine-readable name, used for JSON output
    pub fn kind(&self) -> &'static str {
        match self {
            ComputeError::InvalidNumber { .. } => "invalid_number",
            ComputeError::ZeroTotalUnits { .. } => "zero_total_units",
            ComputeError::NonPositiveUnits { .. } => "non_positive_units",
        }
    }
}

impl fmt::Display for ComputeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComputeError::InvalidNumber { row, field } => {
                write!(f, "Invalid number in row {} ({})", row + 1, field)
            }
            ComputeError::ZeroTotalUnits { entries: 0 } => {
                write!(f, "No rows with data were entered")
            }
            ComputeError::ZeroTotalUnits { entries } => {
                write!(f, "Total units of {} rows is zero", entries)
            }
            ComputeError::NonPositiveUnits { row, units } => {
                write!(f, "Units must be positive in row {} (got {})", row + 1, units)
            }
        }
    }
}

impl std::error::Error for ComputeError {}

/// Outcome of one calculation pass
pub type ComputationResult = Result<Gwa, ComputeError>;
