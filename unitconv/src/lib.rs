//! unitconv - free-text unit conversion
//!
//! Turns a line such as `"100 C to F"` into
//! `"100.0 degrees Celsius is 212.0 degrees Fahrenheit"`, or into the
//! message explaining why it can't.

mod request;
mod dispatch;
mod render;

pub use request::{parse, ConversionRequest};
pub use dispatch::dispatch;
pub use render::Conversion;

use tracing::debug;
use unitconv_core::RequestError;
use unitconv_units::{UnitRegistry, UNITS};

/// Main conversion engine
pub struct Converter {
    registry: &'static UnitRegistry,
}

impl Converter {
    pub fn new() -> Self {
        Self { registry: &UNITS }
    }

    /// Parse, resolve and convert one request line
    pub fn handle(&self, line: &str) -> Result<Conversion, RequestError> {
        let request = request::parse(line)?;
        dispatch::dispatch(&request, self.registry)
    }

    /// One line of output for one line of input. Never fails: errors are
    /// rendered as their message.
    pub fn respond(&self, line: &str) -> String {
        match self.handle(line) {
            Ok(conversion) => conversion.to_string(),
            Err(e) => {
                debug!(code = e.code(), line, "request rejected");
                e.to_string()
            }
        }
    }
}

impl Default for Converter {
    fn default() -> Self {
        Self::new()
    }
}
