//! Idealized Brainfuck machine used to check generated programs.
//!
//! - Tape grows to the right on demand; every cell starts at 0.
//! - Cells are `u8` and wrap.
//! - `,` takes the next scripted input byte; running out of input is an error
//!   so a reader that consumes too much is caught.
//! - `.` appends to a captured output buffer.
#![allow(dead_code)]

use std::collections::VecDeque;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum MachineError {
    #[error("pointer moved left of cell 0 at instruction {ip}")]
    PointerUnderflow { ip: usize },

    #[error("unmatched bracket at instruction {ip}")]
    UnmatchedBracket { ip: usize },

    #[error("input exhausted at instruction {ip}")]
    InputExhausted { ip: usize },

    #[error("step limit exceeded ({limit})")]
    StepLimitExceeded { limit: usize },

    #[error("invalid character '{ch}' at instruction {ip}")]
    InvalidCharacter { ch: char, ip: usize },
}

pub struct Machine {
    pub tape: Vec<u8>,
    pub pointer: usize,
    pub output: Vec<u8>,
    /// Highest cell index the pointer ever reached.
    pub max_pointer: usize,
    input: VecDeque<u8>,
}

const STEP_LIMIT: usize = 10_000_000;

impl Machine {
    pub fn new(input: &[u8]) -> Self {
        Self {
            tape: vec![0; 16],
            pointer: 0,
            output: Vec::new(),
            max_pointer: 0,
            input: input.iter().copied().collect(),
        }
    }

    /// Run `code` and return the machine for inspection.
    pub fn execute(code: &str, input: &[u8]) -> Result<Self, MachineError> {
        let mut machine = Self::new(input);
        machine.run(code)?;
        Ok(machine)
    }

    pub fn remaining_input(&self) -> usize {
        self.input.len()
    }

    pub fn cell(&self, index: usize) -> u8 {
        self.tape.get(index).copied().unwrap_or(0)
    }

    pub fn run(&mut self, code: &str) -> Result<(), MachineError> {
        let chars: Vec<char> = code.chars().collect();
        let jump_map = jump_map(&chars)?;

        let mut ip = 0;
        let mut steps = 0usize;
        while ip < chars.len() {
            steps += 1;
            if steps > STEP_LIMIT {
                return Err(MachineError::StepLimitExceeded { limit: STEP_LIMIT });
            }

            match chars[ip] {
                '>' => {
                    self.pointer += 1;
                    if self.pointer >= self.tape.len() {
                        self.tape.resize(self.pointer * 2, 0);
                    }
                    self.max_pointer = self.max_pointer.max(self.pointer);
                }
                '<' => {
                    if self.pointer == 0 {
                        return Err(MachineError::PointerUnderflow { ip });
                    }
                    self.pointer -= 1;
                }
                '+' => self.tape[self.pointer] = self.tape[self.pointer].wrapping_add(1),
                '-' => self.tape[self.pointer] = self.tape[self.pointer].wrapping_sub(1),
                '.' => self.output.push(self.tape[self.pointer]),
                ',' => {
                    let Some(b) = self.input.pop_front() else {
                        return Err(MachineError::InputExhausted { ip });
                    };
                    self.tape[self.pointer] = b;
                }
                '[' => {
                    if self.tape[self.pointer] == 0 {
                        ip = jump_map[ip].expect("validated bracket");
                    }
                }
                ']' => {
                    if self.tape[self.pointer] != 0 {
                        ip = jump_map[ip].expect("validated bracket");
                    }
                }
                ch => return Err(MachineError::InvalidCharacter { ch, ip }),
            }
            ip += 1;
        }

        Ok(())
    }
}

/// Matching bracket positions; also validates bracket balance.
pub fn jump_map(chars: &[char]) -> Result<Vec<Option<usize>>, MachineError> {
    let mut map = vec![None; chars.len()];
    let mut stack = Vec::new();
    for (i, &c) in chars.iter().enumerate() {
        if c == '[' {
            stack.push(i);
        } else if c == ']' {
            let Some(open) = stack.pop() else {
                return Err(MachineError::UnmatchedBracket { ip: i });
            };
            map[open] = Some(i);
            map[i] = Some(open);
        }
    }
    if let Some(&open) = stack.last() {
        return Err(MachineError::UnmatchedBracket { ip: open });
    }
    Ok(map)
}

/// True when `code` only contains the eight instruction symbols and its
/// brackets nest properly.
pub fn is_well_formed(code: &str) -> bool {
    let chars: Vec<char> = code.chars().collect();
    chars.iter().all(|c| "><+-.,[]".contains(*c)) && jump_map(&chars).is_ok()
}

/// Sample texts shared by the property-style tests.
pub fn sample_texts() -> Vec<&'static [u8]> {
    let texts: [&'static [u8]; 9] = [
        b"",
        b"A",
        b"AB",
        b"Hello, World!",
        b"zyxwvu",
        b"aaaa",
        b" \t\n~",
        "caf\u{e9} \u{2603}".as_bytes(),
        &[255, 0, 1, 254],
    ];
    texts.to_vec()
}
