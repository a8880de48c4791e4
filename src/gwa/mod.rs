pub mod engine;
pub mod types;

pub use engine::{compute, compute_with, format_gwa, format_gwa_with, parse_entry, DEFAULT_DECIMAL_PLACES};
pub use types::{Column, ComputationResult, ComputeError, Gwa, ParsedEntry, RowInput, UnitsPolicy};
