//! Mode table and positional-argument parsing.
//!
//! A mode is selected by name (case-insensitive) or by its zero-based index
//! in [`Mode::ALL`]. The arguments after the mode are turned into a typed
//! [`Request`], which knows how to generate its program.

use crate::code::Program;
use crate::input::InputReader;
use crate::writer::{print_all_cells, print_one_cell};

/// Largest count accepted on the command line. The seeding alone is about
/// two instructions per cell, far beyond any practical tape at this size.
pub const MAX_COUNT: usize = 1_000_000;

/// Errors in the positional arguments that follow a mode.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ArgumentError {
    #[error("count is required")]
    MissingCount,

    #[error("count must be a non-negative integer, got '{0}'")]
    InvalidCount(String),

    #[error("count must be at most {max}, got '{0}'", max = MAX_COUNT)]
    CountTooLarge(String),

    #[error("delimiter is required")]
    MissingDelimiter,

    #[error("delimiter must be a single ASCII character, got '{0}'")]
    InvalidDelimiter(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    PrintAllCells,
    PrintOneCell,
    ReadFixedCount,
    ReadFixedCountAndEcho,
    ReadUntilDelimiter,
    ReadUntilDelimiterAndEcho,
}

impl Mode {
    /// Every mode, in index order.
    pub const ALL: [Mode; 6] = [
        Mode::PrintAllCells,
        Mode::PrintOneCell,
        Mode::ReadFixedCount,
        Mode::ReadFixedCountAndEcho,
        Mode::ReadUntilDelimiter,
        Mode::ReadUntilDelimiterAndEcho,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Mode::PrintAllCells => "print-all-cells",
            Mode::PrintOneCell => "print-one-cell",
            Mode::ReadFixedCount => "read-fixed-count",
            Mode::ReadFixedCountAndEcho => "read-fixed-count-and-echo",
            Mode::ReadUntilDelimiter => "read-until-delimiter",
            Mode::ReadUntilDelimiterAndEcho => "read-until-delimiter-and-echo",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Mode::PrintAllCells => {
                "Print TEXT using one cell per character, built with increments only"
            }
            Mode::PrintOneCell => "Print TEXT reusing a single cell (see --clear)",
            Mode::ReadFixedCount => {
                "Read COUNT characters; echo them if TEXT is given, with TEXT printed first"
            }
            Mode::ReadFixedCountAndEcho => {
                "Read COUNT characters and echo them, printing TEXT first if given"
            }
            Mode::ReadUntilDelimiter => {
                "Read until DELIMITER; echo the input if TEXT is given, with TEXT printed first"
            }
            Mode::ReadUntilDelimiterAndEcho => {
                "Read until DELIMITER and echo the input, printing TEXT first if given"
            }
        }
    }

    /// Positional arguments, for help output.
    pub fn synopsis(self) -> &'static str {
        match self {
            Mode::PrintAllCells | Mode::PrintOneCell => "[TEXT...]",
            Mode::ReadFixedCount | Mode::ReadFixedCountAndEcho => "<COUNT> [TEXT...]",
            Mode::ReadUntilDelimiter | Mode::ReadUntilDelimiterAndEcho => {
                "<DELIMITER> [TEXT...]"
            }
        }
    }

    pub fn index(self) -> usize {
        Mode::ALL.iter().position(|&m| m == self).unwrap_or_default()
    }

    /// Find a mode by name or by zero-based index.
    pub fn lookup(selector: &str) -> Option<Mode> {
        let selector = selector.trim().to_ascii_lowercase();
        if let Some(mode) = Mode::ALL.into_iter().find(|m| m.name() == selector) {
            return Some(mode);
        }
        selector.parse::<usize>().ok().and_then(|i| Mode::ALL.get(i).copied())
    }
}

/// Settings that come from flags or the config file rather than positional
/// arguments.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerateOptions {
    /// Clear the working cell after `print-one-cell`.
    pub clear_cell: bool,
    /// Prompt printed and erased before any read.
    pub placeholder: Option<String>,
}

/// A fully parsed generation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    PrintAllCells { text: String },
    PrintOneCell { text: String },
    ReadFixedCount { count: usize, echo: bool, lead_in: String },
    ReadUntilDelimiter { delimiter: u8, echo: bool, lead_in: String },
}

impl Request {
    /// Parse the arguments that follow `mode`. Remaining words are joined
    /// with single spaces to form the text.
    pub fn parse(mode: Mode, args: &[String]) -> Result<Self, ArgumentError> {
        match mode {
            Mode::PrintAllCells => Ok(Request::PrintAllCells { text: args.join(" ") }),
            Mode::PrintOneCell => Ok(Request::PrintOneCell { text: args.join(" ") }),
            Mode::ReadFixedCount | Mode::ReadFixedCountAndEcho => {
                let (first, rest) = args.split_first().ok_or(ArgumentError::MissingCount)?;
                let count = parse_count(first)?;
                Ok(Request::ReadFixedCount {
                    count,
                    echo: mode == Mode::ReadFixedCountAndEcho || !rest.is_empty(),
                    lead_in: rest.join(" "),
                })
            }
            Mode::ReadUntilDelimiter | Mode::ReadUntilDelimiterAndEcho => {
                let (first, rest) = args.split_first().ok_or(ArgumentError::MissingDelimiter)?;
                let delimiter = parse_delimiter(first)?;
                Ok(Request::ReadUntilDelimiter {
                    delimiter,
                    echo: mode == Mode::ReadUntilDelimiterAndEcho || !rest.is_empty(),
                    lead_in: rest.join(" "),
                })
            }
        }
    }

    pub fn generate(&self, options: &GenerateOptions) -> Program {
        match self {
            Request::PrintAllCells { text } => print_all_cells(text.as_bytes()),
            Request::PrintOneCell { text } => print_one_cell(text.as_bytes(), options.clear_cell),
            Request::ReadFixedCount { count, echo, lead_in } => {
                let reader = InputReader::fixed_count(*count);
                read_with(reader, *echo, lead_in, options)
            }
            Request::ReadUntilDelimiter { delimiter, echo, lead_in } => {
                let reader = InputReader::until(*delimiter);
                read_with(reader, *echo, lead_in, options)
            }
        }
    }
}

fn read_with(
    mut reader: InputReader,
    echo: bool,
    lead_in: &str,
    options: &GenerateOptions,
) -> Program {
    if echo {
        reader = reader.with_echo(lead_in.as_bytes());
    }
    if let Some(placeholder) = &options.placeholder {
        reader = reader.with_placeholder(placeholder.as_bytes());
    }
    reader.generate()
}

fn parse_count(raw: &str) -> Result<usize, ArgumentError> {
    let trimmed = raw.trim();
    let digits = trimmed.strip_prefix('+').unwrap_or(trimmed);
    if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
        // All digits but too big for usize is still "too large", not "invalid".
        return match digits.parse::<usize>() {
            Ok(count) if count <= MAX_COUNT => Ok(count),
            _ => Err(ArgumentError::CountTooLarge(raw.to_string())),
        };
    }
    Err(ArgumentError::InvalidCount(raw.to_string()))
}

fn parse_delimiter(raw: &str) -> Result<u8, ArgumentError> {
    match raw.as_bytes() {
        [b] => Ok(*b),
        _ => Err(ArgumentError::InvalidDelimiter(raw.to_string())),
    }
}
