//! Error type for the fallible edges of the pipeline (input parsing,
//! geometry checks, output).
//!
//! The layout core itself never fails on valid input.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("unexpected token '{token}' at byte {position}")]
    Parse { token: String, position: usize },

    #[error("value '{token}' at byte {position} does not fit in a 64-bit integer")]
    Overflow { token: String, position: usize },

    #[error("invalid {field} {value}: {reason}")]
    Geometry {
        field: &'static str,
        value: f64,
        reason: &'static str,
    },

    #[error("failed to serialize chart: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
