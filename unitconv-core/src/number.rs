//! Magnitude parsing and display
//!
//! Display follows the classic double-to-string rules: plain decimal with at
//! least one fractional digit for magnitudes in `[1e-3, 1e7)`, computerized
//! scientific notation (`1.0E7`, `2.5E-4`) outside that range. Digits are the
//! shortest string that round-trips to the same `f64`.

use crate::RequestError;

/// Lower bound (inclusive) of the plain decimal range
const PLAIN_MIN: f64 = 1e-3;
/// Upper bound (exclusive) of the plain decimal range
const PLAIN_MAX: f64 = 1e7;

/// Trailing type suffixes accepted after a decimal literal (`5d`, `2.5f`)
const TYPE_SUFFIXES: [char; 4] = ['d', 'D', 'f', 'F'];

/// Parse the value token of a request.
///
/// Accepts the classic double literal syntax: an optional sign, then either
/// `NaN` / `Infinity` spelled exactly so, or a decimal literal with an
/// optional exponent and one optional `d`/`f` suffix.
pub fn parse_magnitude(token: &str) -> Result<f64, RequestError> {
    let token = token.trim_matches(|c: char| c <= ' ');
    let (negative, body) = match token.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, token.strip_prefix('+').unwrap_or(token)),
    };

    let magnitude = match body {
        "NaN" => f64::NAN,
        "Infinity" => f64::INFINITY,
        _ => {
            let literal = body.strip_suffix(TYPE_SUFFIXES).unwrap_or(body);
            // rules out "inf", "nan" and a second sign before reaching from_str
            if !literal.starts_with(|c: char| c.is_ascii_digit() || c == '.') {
                return Err(RequestError::Parse);
            }
            literal.parse::<f64>().map_err(|_| RequestError::Parse)?
        }
    };

    Ok(if negative { -magnitude } else { magnitude })
}

/// Whether a magnitude takes the singular unit word
pub fn is_singular(value: f64) -> bool {
    value == 1.0
}

/// Format a magnitude for the result sentence
pub fn format_magnitude(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    let sign = if value.is_sign_negative() { "-" } else { "" };
    let abs = value.abs();
    if abs == 0.0 {
        return format!("{sign}0.0");
    }

    // `{:e}` yields the shortest round-trip digits, e.g. "2.7315e2"
    let sci = format!("{:e}", abs);
    let (mantissa, exponent) = sci.split_once('e').unwrap_or((sci.as_str(), "0"));
    let exponent: i32 = exponent.parse().unwrap_or(0);
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();

    if (PLAIN_MIN..PLAIN_MAX).contains(&abs) {
        format!("{sign}{}", plain(&digits, exponent))
    } else {
        format!("{sign}{}", scientific(&digits, exponent))
    }
}

fn plain(digits: &str, exponent: i32) -> String {
    if exponent < 0 {
        let zeros = "0".repeat((-exponent - 1) as usize);
        return format!("0.{zeros}{digits}");
    }

    let int_len = exponent as usize + 1;
    if digits.len() <= int_len {
        let pad = "0".repeat(int_len - digits.len());
        format!("{digits}{pad}.0")
    } else {
        format!("{}.{}", &digits[..int_len], &digits[int_len..])
    }
}

fn scientific(digits: &str, exponent: i32) -> String {
    let (head, tail) = digits.split_at(1);
    let tail = if tail.is_empty() { "0" } else { tail };
    format!("{head}.{tail}E{exponent}")
}
