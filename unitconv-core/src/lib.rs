//! unitconv-core: shared foundation for the unit converter.
//!
//! Contains:
//! - error (request errors whose display text is the user-facing line)
//! - number (magnitude parsing and display formatting)

pub mod error;
pub mod number;

pub use error::{codes, RequestError, UNKNOWN_UNIT};
pub use number::{format_magnitude, is_singular, parse_magnitude};
