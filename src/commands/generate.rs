use clap::Args;
use std::io::{self, Write};
use crate::cli_util::{print_segments, print_usage};
use crate::config;
use crate::mode::{GenerateOptions, Mode, Request};

#[derive(Args, Debug, Default)]
#[command(disable_help_flag = true)]
pub struct GenerateArgs {
    /// Clear the working cell after print-one-cell
    #[arg(short = 'c', long = "clear", overrides_with = "no_clear")]
    pub clear: bool,

    /// Keep the working cell's last value, even if the config enables clearing
    #[arg(long = "no-clear", overrides_with = "clear")]
    pub no_clear: bool,

    /// Print TEXT, then erase it with backspaces, before reading input
    #[arg(short = 'p', long = "placeholder", value_name = "TEXT")]
    pub placeholder: Option<String>,

    /// Print a table of generated segments to stderr
    #[arg(short = 'd', long = "debug")]
    pub debug: bool,

    /// Mode name or index, followed by its arguments
    #[arg(value_name = "MODE", trailing_var_arg = true, allow_hyphen_values = true)]
    pub words: Vec<String>,

    /// Show this help
    #[arg(short = 'h', long = "help", action = clap::ArgAction::SetTrue)]
    pub help: bool,
}

/// Resolve options (flags, then config file, then defaults), dispatch to the
/// selected generator and print the result.
///
/// User errors are reported on stdout; the exit code is always 0.
pub fn run(program: &str, args: GenerateArgs) -> i32 {
    let GenerateArgs { clear, no_clear, placeholder, debug, words, help } = args;

    let Some((selector, rest)) = words.split_first().filter(|_| !help) else {
        print_usage(program);
        return 0;
    };

    let Some(mode) = Mode::lookup(selector) else {
        println!("Invalid mode '{selector}'");
        print_usage(program);
        return 0;
    };

    let settings = config::settings();
    let options = GenerateOptions {
        clear_cell: !no_clear && (clear || settings.clear_cell),
        placeholder: placeholder.or_else(|| settings.placeholder.clone()),
    };

    match Request::parse(mode, rest) {
        Ok(request) => {
            let code = request.generate(&options);
            if debug {
                print_segments(&code);
            }
            println!("{code}");
        }
        Err(err) => println!("Error: {err}"),
    }
    let _ = io::stdout().flush();
    0
}
