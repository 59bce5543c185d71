//! Input parsers.

pub mod values;

pub use values::parse_values;
