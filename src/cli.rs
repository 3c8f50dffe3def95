//! Command line options and argument parsing
//!
//! Hand-rolled parser over the small option grammar; every value is
//! validated here so the core never sees a bad configuration.

use std::fmt::Write;

use crate::midi::ALL_TESTS;

/// Validated command line options
#[derive(Debug, Clone, PartialEq)]
pub struct Options {
    /// Requested test name (validated against the catalog later)
    pub test: String,
    /// MIDI output port index
    pub port: usize,
    /// MIDI channel, one-based 1-16 as the user typed it
    pub channel: u8,
    /// Milliseconds to sleep between messages
    pub speed_ms: u64,
    /// Hexadecimal byte rendering (decimal when false)
    pub hex: bool,
    /// Symbolic status byte names in output
    pub name: bool,
    /// List ports and exit
    pub list: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            test: "all".to_string(),
            port: 0,
            channel: 1,
            speed_ms: 500,
            hex: true,
            name: false,
            list: false,
        }
    }
}

/// Result of a successful parse
#[derive(Debug, PartialEq)]
pub enum ParseOutcome {
    Run(Options),
    /// Print help and exit
    Help,
}

/// Parse command line arguments (without the program name).
///
/// Errors are user-facing strings; any error means exit status 1 without
/// sending anything.
pub fn parse<I>(args: I) -> Result<ParseOutcome, String>
where
    I: IntoIterator<Item = String>,
{
    let mut opts = Options::default();
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => return Ok(ParseOutcome::Help),
            "-d" | "--decimal" => opts.hex = false,
            "-n" | "--name" => opts.name = true,
            "-l" | "--list" => {
                opts.list = true;
                break;
            }
            "-p" | "--port" => {
                opts.port = numeric_value(&arg, args.next())?;
            }
            "-c" | "--chan" | "--channel" => {
                let channel: u8 = numeric_value(&arg, args.next())?;
                if !(1..=16).contains(&channel) {
                    return Err(format!("{} option must be 1-16", arg));
                }
                opts.channel = channel;
            }
            "-s" | "--speed" => {
                opts.speed_ms = numeric_value(&arg, args.next())?;
            }
            other if other.starts_with('-') => {
                return Err(format!("unknown option: {}", other));
            }
            // bare argument: the test name
            other => opts.test = other.to_string(),
        }
    }

    Ok(ParseOutcome::Run(opts))
}

/// Parse the value following an option that requires a non-negative integer
fn numeric_value<T: std::str::FromStr>(
    option: &str,
    value: Option<String>,
) -> Result<T, String> {
    let value = match value {
        Some(v) if !v.starts_with('-') => v,
        _ => return Err(format!("{} expects a value", option)),
    };
    value
        .parse()
        .map_err(|_| format!("{} expects a positive integer, got {}", option, value))
}

/// Usage text, with the TEST list generated from the catalog
pub fn help_text() -> String {
    let mut out = String::from(
        "Usage: miditester [OPTIONS] [TEST]\n\
         \n\
         \x20 a utility program which sends MIDI bytes\n\
         \n\
         Options:\n\
         \x20 -p,--port    MIDI port to send to 0-n (default 0)\n\
         \x20 -c,--chan    MIDI channel to send to 1-16 (default 1)\n\
         \x20 -s,--speed   Millis between messages (default 500)\n\
         \x20 -d,--decimal Print decimal byte values instead of hex\n\
         \x20 -n,--name    Print status byte name instead of value\n\
         \x20 -l,--list    List available MIDI ports and exit\n\
         \x20 -h,--help    This help print\n\
         \n\
         TEST:\n\
         \x20 all      Run all tests below except timecode (default)\n",
    );
    for test in ALL_TESTS {
        let _ = writeln!(out, "  {:<8} {}", test.name, test.description);
    }
    out
}
