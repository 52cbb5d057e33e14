//! Request errors
//!
//! Errors never crash the session. Each variant renders as the exact line
//! shown to the user, so callers can print `to_string()` and move on.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Standard error codes (machine-readable)
pub mod codes {
    pub const PARSE_ERROR: &str = "PARSE_ERROR";
    pub const IMPOSSIBLE_CONVERSION: &str = "IMPOSSIBLE_CONVERSION";
    pub const NEGATIVE_MAGNITUDE: &str = "NEGATIVE_MAGNITUDE";
}

/// Placeholder shown for a side of the request that names no known unit
pub const UNKNOWN_UNIT: &str = "???";

/// Why a single request line produced no conversion
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum RequestError {
    /// The line does not follow the `<value> <unit> <prep> <unit>` shape
    #[error("Parse error")]
    Parse,

    /// Unknown units or units from different domains
    #[error("Conversion from {from} to {to} is impossible")]
    Impossible { from: String, to: String },

    /// A magnitude below zero for a quantity that has a floor
    #[error("{quantity} shouldn't be negative")]
    Negative { quantity: String },
}

impl RequestError {
    pub fn impossible(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self::Impossible {
            from: from.into(),
            to: to.into(),
        }
    }

    /// Both sides unknown
    pub fn impossible_unknown() -> Self {
        Self::impossible(UNKNOWN_UNIT, UNKNOWN_UNIT)
    }

    pub fn negative(quantity: impl Into<String>) -> Self {
        Self::Negative {
            quantity: quantity.into(),
        }
    }

    /// Machine-readable code for log events
    pub fn code(&self) -> &'static str {
        match self {
            RequestError::Parse => codes::PARSE_ERROR,
            RequestError::Impossible { .. } => codes::IMPOSSIBLE_CONVERSION,
            RequestError::Negative { .. } => codes::NEGATIVE_MAGNITUDE,
        }
    }
}
