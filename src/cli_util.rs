use std::io::{self, IsTerminal, Write};
use nu_ansi_term::Style;
use crate::code::Program;
use crate::mode::Mode;

/// Print usage and the mode table to stdout.
pub fn print_usage(program: &str) {
    let styled = io::stdout().is_terminal();
    let bold = |s: &str| {
        if styled { Style::new().bold().paint(s).to_string() } else { s.to_string() }
    };

    println!(
        r#"Usage:
  {0} [OPTIONS] <MODE|INDEX> [COUNT|DELIMITER] [TEXT...]

Options (must come before the mode):
  --clear,       -c         Clear the working cell after print-one-cell
  --no-clear                Do not clear it, even if the config file says so
  --placeholder, -p <TEXT>  Print TEXT, then erase it, before reading input
  --debug,       -d         Print a table of generated segments to stderr
  --help,        -h         Show this help

Modes:"#,
        program
    );
    for mode in Mode::ALL {
        println!(
            "  {} {} {}",
            mode.index(),
            bold(mode.name()),
            mode.synopsis()
        );
        println!("      {}", mode.description());
    }
    println!(
        r#"
Notes:
  - Words after the COUNT/DELIMITER are joined with single spaces.
  - COUNT may be at most 1000000.
  - Defaults for --clear and --placeholder are read from the [generate]
    section of ~/.config/bfgen.toml (or the file named by $BFGEN_CONFIG)."#
    );
    let _ = io::stdout().flush();
}

/// Print a step table of the generated segments to stderr.
pub fn print_segments(program: &Program) {
    // Keep long increment runs from swamping the table
    const CODE_CHARS: usize = 40;

    eprintln!("SEG  | AT    | LEN  | NOTE                                     | CODE");
    eprintln!("-----+-------+------+------------------------------------------+------------------------------------------");

    let mut at = 0usize;
    for (i, segment) in program.segments().iter().enumerate() {
        let len = segment.code.len();
        let code = if len > CODE_CHARS {
            format!("{}...", &segment.code[..CODE_CHARS])
        } else {
            segment.code.clone()
        };
        eprintln!(
            "{:<4} | {:<5} | {:<4} | {:<40} | {}",
            i, at, len, segment.note, code
        );
        at += len;
    }
    eprintln!("total: {} instructions in {} segments", program.len(), program.segments().len());
    let _ = io::stderr().flush();
}
