//! Brainfuck generators that print text.
//!
//! Two layouts are supported:
//! - [`CellLayout::AllCells`]: one fresh cell per byte, built up from zero
//!   with `+` only. Every visited cell keeps its byte afterwards and the
//!   pointer ends one cell past the last printed byte.
//! - [`CellLayout::OneCell`]: a single working cell stepped from byte to byte
//!   with `+`/`-`. The pointer never moves. With `clear_cell` set, the cell
//!   is walked back down to 0 at the end.
//!
//! Quick start:
//!
//! ```
//! use bfgen::{BrainfuckWriter, CellLayout, WriterOptions};
//!
//! let options = WriterOptions { layout: CellLayout::OneCell, clear_cell: false };
//! let code = BrainfuckWriter::with_options(b"AB", options).generate().to_string();
//! assert_eq!(code, format!("{}.+.", "+".repeat(65)));
//! ```

use crate::code::{Op, Program, adjust, run};

/// How the printed bytes are laid out on the tape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CellLayout {
    /// One cell per byte, no reuse.
    AllCells,
    /// Reuse a single cell for every byte.
    #[default]
    OneCell,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WriterOptions {
    pub layout: CellLayout,
    /// Return the working cell to 0 after a one-cell print. Ignored for `AllCells`.
    pub clear_cell: bool,
}

pub struct BrainfuckWriter<'writer> {
    input: &'writer [u8],
    options: WriterOptions,
}

impl<'writer> BrainfuckWriter<'writer> {
    pub fn new(input: &'writer [u8]) -> Self {
        Self { input, options: WriterOptions::default() }
    }

    pub fn with_options(input: &'writer [u8], options: WriterOptions) -> Self {
        Self { input, options }
    }

    pub fn generate(&self) -> Program {
        match self.options.layout {
            CellLayout::AllCells => self.all_cells(),
            CellLayout::OneCell => self.one_cell(),
        }
    }

    fn all_cells(&self) -> Program {
        let mut program = Program::new();

        for &b in self.input {
            program.emit(format!("build {} from 0", describe(b)), run(Op::Inc, usize::from(b)));
            program.emit("print and step to a fresh cell", ".>");
        }

        program
    }

    /// Greedy left-to-right deltas against the previous byte. The text is
    /// never reordered, even when that would give a shorter run.
    fn one_cell(&self) -> Program {
        let mut program = Program::new();
        let mut cursor = 0u8;

        for &b in self.input {
            program.emit(
                format!("step {} -> {}", cursor, describe(b)),
                adjust(cursor, b),
            );
            program.emit("print", Op::Output.symbol().to_string());
            cursor = b;
        }

        if self.options.clear_cell {
            program.emit("clear the working cell", adjust(cursor, 0));
        }

        program
    }
}

/// Print `text` using one cell per byte.
pub fn print_all_cells(text: &[u8]) -> Program {
    let options = WriterOptions { layout: CellLayout::AllCells, clear_cell: false };
    BrainfuckWriter::with_options(text, options).generate()
}

/// Print `text` through a single cell, optionally clearing it afterwards.
pub fn print_one_cell(text: &[u8], clear_cell: bool) -> Program {
    let options = WriterOptions { layout: CellLayout::OneCell, clear_cell };
    BrainfuckWriter::with_options(text, options).generate()
}

fn describe(b: u8) -> String {
    if b.is_ascii_graphic() || b == b' ' {
        format!("'{}' ({b})", b as char)
    } else {
        format!("{b}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_cell_uses_deltas_between_neighbours() {
        let code = print_one_cell(b"AB", false).to_string();
        assert_eq!(code, format!("{}.+.", "+".repeat(65)));
    }

    #[test]
    fn one_cell_steps_down_when_the_next_byte_is_lower() {
        assert_eq!(print_one_cell(b"ca", false).to_string(), format!("{}.--.", "+".repeat(99)));
    }

    #[test]
    fn one_cell_repeated_byte_prints_twice_without_steps() {
        assert_eq!(print_one_cell(&[3, 3], false).to_string(), "+++..");
    }

    #[test]
    fn one_cell_clear_walks_back_to_zero() {
        let code = print_one_cell(b"AB", true).to_string();
        assert!(code.ends_with(&format!(".{}", "-".repeat(66))));
        assert_eq!(code.matches('+').count(), code.matches('-').count());
    }

    #[test]
    fn one_cell_never_moves_the_pointer() {
        let program = print_one_cell(b"Hello, World!", true);
        assert_eq!(program.count(Op::Right), 0);
        assert_eq!(program.count(Op::Left), 0);
        assert_eq!(program.count(Op::Output), 13);
    }

    #[test]
    fn all_cells_builds_each_byte_from_zero() {
        assert_eq!(print_all_cells(&[2, 1]).to_string(), "++.>+.>");
        let program = print_all_cells(b"hi");
        assert_eq!(program.count(Op::Inc), usize::from(b'h') + usize::from(b'i'));
        assert_eq!(program.count(Op::Right), 2);
        assert_eq!(program.count(Op::Dec), 0);
    }

    #[test]
    fn zero_byte_needs_no_increments() {
        assert_eq!(print_all_cells(&[0]).to_string(), ".>");
        assert_eq!(print_one_cell(&[0, 0, 0], true).to_string(), "...");
    }

    #[test]
    fn empty_text_generates_nothing() {
        assert!(print_all_cells(b"").is_empty());
        assert!(print_one_cell(b"", true).is_empty());
        assert!(BrainfuckWriter::new(b"").generate().is_empty());
    }
}
