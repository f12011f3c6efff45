//! A small Brainfuck code generator.
//!
//! This crate emits Brainfuck source text for a handful of I/O behaviors:
//! printing literal text, reading a fixed number of input bytes, and reading
//! input until a delimiter byte. It never executes the code it produces.
//!
//! Assumed machine:
//! - Tape of 8-bit wrapping cells, all starting at 0, large enough for the
//!   generated program.
//! - Pointer starts at cell 0.
//! - `,` reads one byte, `.` writes one byte.
//!
//! Text is handled as bytes, so UTF-8 input is printed as its encoded bytes
//! and every value fits a cell.
//!
//! Quick start:
//!
//! ```
//! use bfgen::{read_until_delimiter, print_all_cells};
//!
//! assert_eq!(print_all_cells(b"\x02").to_string(), "++.>");
//!
//! // Read until ';' and echo what was typed.
//! let code = read_until_delimiter(b';', true, b"").to_string();
//! assert!(code.ends_with("<<[<]>[.>]"));
//! ```

pub mod cli_util;
pub mod code;
pub mod config;
pub mod input;
pub mod mode;
pub mod writer;

pub mod commands {
    pub mod generate;
}

pub use code::{Op, Program, Segment};
pub use input::{InputReader, Stop, placeholder_prompt, read_fixed_count, read_until_delimiter};
pub use mode::{ArgumentError, GenerateOptions, Mode, Request};
pub use writer::{BrainfuckWriter, CellLayout, WriterOptions, print_all_cells, print_one_cell};
