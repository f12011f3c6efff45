use bfgen::cli_util::print_usage;
use bfgen::commands::generate::{self, GenerateArgs};
use clap::Parser;
use std::env;

#[derive(Parser, Debug)]
#[command(name = "bfgen", disable_help_flag = true, disable_help_subcommand = true)]
struct Cli {
    #[command(flatten)]
    args: GenerateArgs,
}

fn main() {
    // We still pull the program name for help rendering consistency
    let program = env::args().next().unwrap_or_else(|| String::from("bfgen"));

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // Argument mistakes are reported like every other user error:
            // on stdout, followed by help, with a successful exit.
            let rendered = err.to_string();
            println!("{}", rendered.lines().next().unwrap_or_default());
            print_usage(&program);
            return;
        }
    };

    std::process::exit(generate::run(&program, cli.args));
}
