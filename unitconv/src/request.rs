//! Request line parser
//!
//! Grammar is decided purely by token count after splitting on single
//! spaces:
//!
//! - 4 tokens: `<value> <unit> <prep> <unit>`
//! - 5 tokens: one side is a two-word unit; the position of "to" (or,
//!   failing that, "in") tells which
//! - 6 tokens: `<value> <word> <word> <prep> <word> <word>`
//!
//! Anything else is a parse error.

use serde::{Deserialize, Serialize};
use tracing::debug;
use unitconv_core::{parse_magnitude, RequestError};

const PREPOSITIONS: [&str; 2] = ["to", "in"];

/// A request line split into magnitude and unit phrases.
/// Unit phrases are not resolved yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionRequest {
    pub value: f64,
    pub from: String,
    pub to: String,
}

impl ConversionRequest {
    pub fn new(value: f64, from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            value,
            from: from.into(),
            to: to.into(),
        }
    }
}

/// Parse a request line
pub fn parse(line: &str) -> Result<ConversionRequest, RequestError> {
    let tokens: Vec<&str> = line.trim().split(' ').collect();
    debug!(count = tokens.len(), "dispatching on token count");

    match tokens.as_slice() {
        [value, from, _, to] => Ok(ConversionRequest::new(parse_magnitude(value)?, *from, *to)),
        [value, ..] if tokens.len() == 5 => {
            let value = parse_magnitude(value)?;
            let (from, to) = split_five(&tokens)?;
            Ok(ConversionRequest::new(value, from, to))
        }
        [value, from_a, from_b, _, to_a, to_b] => Ok(ConversionRequest::new(
            parse_magnitude(value)?,
            join(from_a, from_b),
            join(to_a, to_b),
        )),
        _ => Err(RequestError::Parse),
    }
}

/// Unit phrases of a five-token line
fn split_five(tokens: &[&str]) -> Result<(String, String), RequestError> {
    let preposition = preposition_index(tokens).ok_or(RequestError::Parse)?;
    debug!(preposition, "five-token request");

    if preposition == 3 {
        Ok((join(tokens[1], tokens[2]), tokens[4].to_string()))
    } else {
        Ok((tokens[1].to_string(), join(tokens[3], tokens[4])))
    }
}

/// Index of the first "to"; if there is none, of the first "in"
fn preposition_index(tokens: &[&str]) -> Option<usize> {
    PREPOSITIONS
        .iter()
        .find_map(|prep| tokens.iter().position(|t| t == prep))
}

fn join(first: &str, second: &str) -> String {
    format!("{first} {second}")
}
