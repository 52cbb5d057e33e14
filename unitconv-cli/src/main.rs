//! unitconv - interactive unit converter
//!
//! Reads one request per line from stdin, e.g. `100 C to F` or
//! `1 degree Celsius in Kelvins`, and answers on stdout. `exit` quits.

use std::io;
use std::process::ExitCode;
use tracing::{error, info};
use unitconv::Converter;
use unitconv_cli::{init_logger, run, SessionConfig};

fn main() -> ExitCode {
    init_logger();
    info!(version = env!("CARGO_PKG_VERSION"), "unitconv started");

    let converter = Converter::new();
    let config = SessionConfig::default();

    let stdin = io::stdin();
    let stdout = io::stdout();
    match run(stdin.lock(), stdout.lock(), &converter, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "session aborted");
            ExitCode::FAILURE
        }
    }
}
