//! Brainfuck instruction text.
//!
//! Generators never build raw strings directly. They emit [`Segment`]s into a
//! [`Program`], each carrying a short note about what that run of instructions
//! does to the tape. Concatenating the segments (via `Display`) yields the
//! final instruction text, which only ever contains the eight symbols
//! `><+-.,[]`. The notes are what `--debug` prints.

use std::cmp::Ordering;
use std::fmt;

/// The eight Brainfuck primitives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    /// `>` move the pointer one cell right.
    Right,
    /// `<` move the pointer one cell left.
    Left,
    /// `+` increment the current cell.
    Inc,
    /// `-` decrement the current cell.
    Dec,
    /// `.` output the current cell.
    Output,
    /// `,` read one byte into the current cell.
    Input,
    /// `[` jump past the matching `]` if the current cell is zero.
    LoopStart,
    /// `]` jump back to the matching `[` if the current cell is non-zero.
    LoopEnd,
}

impl Op {
    pub const ALL: [Op; 8] = [
        Op::Right,
        Op::Left,
        Op::Inc,
        Op::Dec,
        Op::Output,
        Op::Input,
        Op::LoopStart,
        Op::LoopEnd,
    ];

    pub fn symbol(self) -> char {
        match self {
            Op::Right => '>',
            Op::Left => '<',
            Op::Inc => '+',
            Op::Dec => '-',
            Op::Output => '.',
            Op::Input => ',',
            Op::LoopStart => '[',
            Op::LoopEnd => ']',
        }
    }

    pub fn from_symbol(c: char) -> Option<Op> {
        Op::ALL.into_iter().find(|op| op.symbol() == c)
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// `n` copies of a single instruction.
pub fn run(op: Op, n: usize) -> String {
    std::iter::repeat_n(op.symbol(), n).collect()
}

/// Step a cell from `from` to `to` with plain `+`/`-` runs.
///
/// Never relies on cell wrapping: the run length is always `|to - from|`.
pub fn adjust(from: u8, to: u8) -> String {
    match to.cmp(&from) {
        Ordering::Greater => run(Op::Inc, usize::from(to - from)),
        Ordering::Less => run(Op::Dec, usize::from(from - to)),
        Ordering::Equal => String::new(),
    }
}

/// A run of instructions plus a note describing its effect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub note: String,
    pub code: String,
}

/// Generated Brainfuck, kept as annotated segments.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Program {
    segments: Vec<Segment>,
}

impl Program {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `code` with a note. Empty code is dropped so the segment list
    /// only shows instructions that are actually emitted.
    pub fn emit(&mut self, note: impl Into<String>, code: impl Into<String>) {
        let code = code.into();
        if code.is_empty() {
            return;
        }
        self.segments.push(Segment { note: note.into(), code });
    }

    /// Append every segment of `other`, in order.
    pub fn append(&mut self, other: Program) {
        self.segments.extend(other.segments);
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Number of instructions.
    pub fn len(&self) -> usize {
        self.segments.iter().map(|s| s.code.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// How many times `op` occurs in the instruction text.
    pub fn count(&self, op: Op) -> usize {
        let symbol = op.symbol();
        self.segments
            .iter()
            .map(|s| s.code.chars().filter(|&c| c == symbol).count())
            .sum()
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for segment in &self.segments {
            f.write_str(&segment.code)?;
        }
        Ok(())
    }
}

impl From<Program> for String {
    fn from(program: Program) -> Self {
        program.to_string()
    }
}
