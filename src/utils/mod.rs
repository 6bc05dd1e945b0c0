pub mod format;

pub use format::{format_clock, format_duration, position_letter};
