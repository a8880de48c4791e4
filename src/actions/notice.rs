use crate::gwa::ComputeError;
use crate::rows::RowError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Warning,
    Error,
}

/// A message that blocks the UI until the user acknowledges it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub title: &'static str,
    pub message: String,
}

impl Notice {
    pub fn warning(title: &'static str, message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Warning,
            title,
            message: message.into(),
        }
    }

    pub fn error(title: &'static str, message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            title,
            message: message.into(),
        }
    }
}

impl From<&ComputeError> for Notice {
    fn from(err: &ComputeError) -> Self {
        match err {
            ComputeError::InvalidNumber { row, field } => Notice::error(
                "Input Error",
                format!(
                    "Please enter valid numbers for all units and grades. (row {}, {})",
                    row + 1,
                    field
                ),
            ),
            ComputeError::ZeroTotalUnits { .. } => Notice::error(
                "Input Error",
                "Please ensure at least one subject with valid data is entered.",
            ),
            ComputeError::NonPositiveUnits { row, units } => Notice::error(
                "Input Error",
                format!("Units must be positive. (row {}, got {})", row + 1, units),
            ),
        }
    }
}

impl From<&RowError> for Notice {
    fn from(err: &RowError) -> Self {
        match err {
            RowError::NoSelection => {
                Notice::warning("Selection Error", "Please select a row to delete.")
            }
            RowError::OutOfRange { .. } => Notice::warning("Selection Error", err.to_string()),
        }
    }
}
