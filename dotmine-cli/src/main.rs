//! Main entry point for the dotmine CLI.
//!
//! dotmine moves dotfiles into a single directory, the mine, and leaves
//! symlinks behind:
//! - `add`: Move a file or directory into the mine
//! - `show`: List what the mine contains
//! - `show-mine`: Print the location of the mine
//! - `completions`: Generate shell completion scripts

mod cli;
mod commands;
mod error;
mod utils;

use clap::Parser;
use cli::Cli;
use utils::GlobalOptions;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    let _logger = dotmine::init_logger(cli.verbose, cli.quiet);

    // Convert CLI args to GlobalOptions
    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
        mine: cli.mine,
        config: cli.config,
    };

    // Execute the command
    let result = match cli.command {
        cli::Command::Add(cmd) => cmd.execute(&global),
        cli::Command::Show(cmd) => cmd.execute(&global),
        cli::Command::ShowMine(cmd) => cmd.execute(&global),
        cli::Command::Completions(cmd) => cmd.execute(&global),
    };

    // Handle errors and set exit code
    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
