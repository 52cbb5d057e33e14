//! Interactive read-convert-print loop

use std::io::{self, BufRead, Write};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use unitconv::Converter;

/// Session settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Printed (without newline) before every read
    pub prompt: String,
    /// First token that ends the session
    pub exit_command: String,
    /// Reply to a blank line
    pub blank_reply: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            prompt: "Enter what you want to convert (or exit): ".to_string(),
            exit_command: "exit".to_string(),
            blank_reply: "Parse error".to_string(),
        }
    }
}

/// What to do with one input line
#[derive(Debug, PartialEq, Eq)]
enum Command<'a> {
    Blank,
    Exit,
    Convert(&'a str),
}

fn classify<'a>(line: &'a str, config: &SessionConfig) -> Command<'a> {
    if line.trim().is_empty() {
        Command::Blank
    } else if line.split(' ').next() == Some(config.exit_command.as_str()) {
        Command::Exit
    } else {
        Command::Convert(line)
    }
}

/// Run the loop until the exit command or end of input.
///
/// Only I/O failures are returned; every request problem is answered on
/// `output` and the loop continues.
pub fn run<R: BufRead, W: Write>(
    mut input: R,
    mut output: W,
    converter: &Converter,
    config: &SessionConfig,
) -> io::Result<()> {
    let mut buf = String::new();

    loop {
        write!(output, "{}", config.prompt)?;
        output.flush()?;

        buf.clear();
        let read = input.read_line(&mut buf).map_err(|e| {
            warn!(error = %e, "failed to read input");
            e
        })?;
        if read == 0 {
            debug!("end of input");
            return Ok(());
        }

        let line = buf.trim_end_matches(['\n', '\r']);
        match classify(line, config) {
            Command::Blank => writeln!(output, "{}", config.blank_reply)?,
            Command::Exit => {
                debug!("exit requested");
                return Ok(());
            }
            Command::Convert(request) => writeln!(output, "{}", converter.respond(request))?,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const PROMPT: &str = "Enter what you want to convert (or exit): ";

    fn session(input: &str) -> String {
        let mut output = Vec::new();
        run(
            Cursor::new(input),
            &mut output,
            &Converter::new(),
            &SessionConfig::default(),
        )
        .unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_conversation() {
        let out = session("100 C to F\n-5 kg to lb\nexit\n");
        let expected = format!(
            "{PROMPT}100.0 degrees Celsius is 212.0 degrees Fahrenheit\n\
             {PROMPT}Weight shouldn't be negative\n\
             {PROMPT}"
        );
        assert_eq!(out, expected);
    }

    #[test]
    fn test_blank_line_is_parse_error() {
        let out = session("   \nexit\n");
        assert_eq!(out, format!("{PROMPT}Parse error\n{PROMPT}"));
    }

    #[test]
    fn test_exit_stops_before_remaining_lines() {
        let out = session("exit now\n1 m to ft\n");
        assert_eq!(out, PROMPT);
    }

    #[test]
    fn test_end_of_input_stops() {
        let out = session("0 C in K");
        assert_eq!(out, format!("{PROMPT}0.0 degrees Celsius is 273.15 Kelvins\n{PROMPT}"));
    }

    #[test]
    fn test_crlf_line_endings() {
        let out = session("banana\r\nexit\r\n");
        assert_eq!(out, format!("{PROMPT}Parse error\n{PROMPT}"));
    }

    #[test]
    fn test_classify() {
        let config = SessionConfig::default();
        assert_eq!(classify("", &config), Command::Blank);
        assert_eq!(classify("\t ", &config), Command::Blank);
        assert_eq!(classify("exit", &config), Command::Exit);
        assert_eq!(classify(" exit", &config), Command::Convert(" exit"));
        assert_eq!(classify("exited", &config), Command::Convert("exited"));
        assert_eq!(classify("1 m to ft", &config), Command::Convert("1 m to ft"));
    }

    #[test]
    fn test_custom_config() {
        let config = SessionConfig {
            prompt: "> ".to_string(),
            exit_command: "quit".to_string(),
            ..SessionConfig::default()
        };
        let mut output = Vec::new();
        run(Cursor::new("exit\nquit\n"), &mut output, &Converter::new(), &config).unwrap();
        assert_eq!(String::from_utf8(output).unwrap(), "> Parse error\n> ");
    }

    #[test]
    fn test_read_failure_is_returned() {
        struct Broken;
        impl io::Read for Broken {
            fn read(&mut self, _: &mut [u8]) -> io::Result<usize> {
                Err(io::Error::new(io::ErrorKind::Other, "boom"))
            }
        }

        let mut output = Vec::new();
        let result = run(
            io::BufReader::new(Broken),
            &mut output,
            &Converter::new(),
            &SessionConfig::default(),
        );
        assert_eq!(result.unwrap_err().kind(), io::ErrorKind::Other);
    }
}
