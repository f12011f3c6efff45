//! Brainfuck generators that read input into consecutive cells.
//!
//! Two ways to know when to stop reading:
//! - [`Stop::Count`]: a fixed number of bytes. The cells are pre-seeded with
//!   1s so a single `[,>]` loop reads exactly that many.
//! - [`Stop::Delimiter`]: until a sentinel byte is read. The sentinel is
//!   consumed but never stored.
//!
//! Either reader can echo what it stored, optionally preceded by a lead-in
//! text, and can print a placeholder prompt before reading.
//!
//! Tape after a delimiter read with echo:
//!
//! ```text
//! [blank] [in 1] [in 2] ... [in k] [if-flag = 0] [while-flag = 0]
//! ```
//!
//! Without echo the leading blank cell is not reserved.

use crate::code::{Op, Program, run};
use crate::writer::print_one_cell;

/// Control character used to erase the placeholder prompt.
pub const BACKSPACE: u8 = 0x08;

/// When the generated reader stops consuming input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stop {
    Count(usize),
    Delimiter(u8),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputReader {
    stop: Stop,
    // Some(lead_in) when the stored input is echoed back.
    echo: Option<Vec<u8>>,
    placeholder: Option<Vec<u8>>,
}

impl InputReader {
    /// Read exactly `count` bytes into cells `0..count`.
    pub fn fixed_count(count: usize) -> Self {
        Self { stop: Stop::Count(count), echo: None, placeholder: None }
    }

    /// Read until `delimiter` is seen.
    pub fn until(delimiter: u8) -> Self {
        Self { stop: Stop::Delimiter(delimiter), echo: None, placeholder: None }
    }

    /// Echo the stored input after reading, printing `lead_in` first.
    /// An empty lead-in prints nothing before the echo.
    pub fn with_echo(mut self, lead_in: &[u8]) -> Self {
        self.echo = Some(lead_in.to_vec());
        self
    }

    /// Print `placeholder` before reading, then erase it with backspaces.
    pub fn with_placeholder(mut self, placeholder: &[u8]) -> Self {
        self.placeholder = Some(placeholder.to_vec());
        self
    }

    pub fn stop(&self) -> Stop {
        self.stop
    }

    pub fn echoes(&self) -> bool {
        self.echo.is_some()
    }

    /// Largest number of input bytes that fit on a tape of `tape_len` cells.
    pub fn capacity(&self, tape_len: usize) -> usize {
        let reserved = match (self.stop, self.echoes()) {
            (Stop::Count(_), _) => 1,
            (Stop::Delimiter(_), false) => 2,
            (Stop::Delimiter(_), true) => 3,
        };
        tape_len.saturating_sub(reserved)
    }

    pub fn generate(&self) -> Program {
        let mut program = Program::new();

        if let Some(placeholder) = &self.placeholder {
            program.append(placeholder_prompt(placeholder));
        }

        match self.stop {
            Stop::Count(count) => self.fixed_count_body(count, &mut program),
            Stop::Delimiter(delimiter) => self.delimiter_body(delimiter, &mut program),
        }

        program
    }

    fn fixed_count_body(&self, count: usize, program: &mut Program) {
        program.emit(format!("seed {count} cells with 1"), seed_run(count));
        program.emit("back to the first cell", run(Op::Left, count.saturating_sub(1)));
        // Each `>` lands on the next seed; the cell after the last seed is 0.
        program.emit("read until the unseeded cell", "[,>]");

        let Some(lead_in) = &self.echo else { return };

        // The pointer rests on the 0 cell just past the input.
        program.append(print_one_cell(lead_in, true));
        program.emit("back to the first input cell", run(Op::Left, count));
        program.emit("print until the 0 cell", "[.>]");
    }

    fn delimiter_body(&self, delimiter: u8, program: &mut Program) {
        let d = usize::from(delimiter);

        if self.echoes() {
            program.emit("reserve a blank cell to mark the start", ">");
        }

        // The cell right of the first input cell doubles as the while-flag
        // for the first pass.
        program.emit("set the entry flag", ">+");
        program.emit("loop while the flag is set", "[");
        program.emit("clear the flag", "-");
        program.emit("step onto the next input cell", "<");
        program.emit("read", ",");
        program.emit(format!("subtract the delimiter ({delimiter})"), run(Op::Dec, d));

        program.emit("if the byte was not the delimiter", "[");
        program.emit("restore the byte", run(Op::Inc, d));
        program.emit("raise the while-flag", ">>+");
        program.emit("leave on the zero if-flag", "<]");

        program.emit("check the while-flag", ">]");

        let Some(lead_in) = &self.echo else { return };

        // The pointer rests on the while-flag, two cells past the last byte.
        program.append(print_one_cell(lead_in, true));
        program.emit("skip the two flag cells", "<<");
        program.emit("walk back to the blank start cell", "[<]");
        program.emit("step onto the first input cell", ">");
        program.emit("print until the if-flag", "[.>]");
    }
}

/// `count` increments separated by right moves: `+>+>...>+`.
fn seed_run(count: usize) -> String {
    let mut seeds = String::new();
    for i in 0..count {
        if i > 0 {
            seeds.push(Op::Right.symbol());
        }
        seeds.push(Op::Inc.symbol());
    }
    seeds
}

/// Print `placeholder` followed by one backspace per displayed character
/// through a single cleared cell, so neither the pointer nor the tape changes.
///
/// UTF-8 text is erased per `char`; other bytes fall back to one backspace each.
pub fn placeholder_prompt(placeholder: &[u8]) -> Program {
    let shown = std::str::from_utf8(placeholder)
        .map(|s| s.chars().count())
        .unwrap_or(placeholder.len());
    let mut text = placeholder.to_vec();
    text.extend(std::iter::repeat_n(BACKSPACE, shown));
    print_one_cell(&text, true)
}

/// Read exactly `count` bytes, optionally echoing them after `lead_in`.
pub fn read_fixed_count(count: usize, echo: bool, lead_in: &[u8]) -> Program {
    let mut reader = InputReader::fixed_count(count);
    if echo {
        reader = reader.with_echo(lead_in);
    }
    reader.generate()
}

/// Read until `delimiter`, optionally echoing the stored bytes after `lead_in`.
pub fn read_until_delimiter(delimiter: u8, echo: bool, lead_in: &[u8]) -> Program {
    let mut reader = InputReader::until(delimiter);
    if echo {
        reader = reader.with_echo(lead_in);
    }
    reader.generate()
}
