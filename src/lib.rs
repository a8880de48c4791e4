pub mod actions;
pub mod calc;
pub mod config;
pub mod gwa;
pub mod input;
pub mod output;
pub mod rows;
pub mod stderr_buffer;
pub mod tui;
