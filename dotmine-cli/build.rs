//! Build script for dotmine-cli.
//!
//! This script generates man pages at build time using clap_mangen.
//! The generated man page is placed in OUT_DIR for inclusion in release builds.
//!
//! Note: We build a minimal command structure here rather than importing from
//! the main crate, since build scripts cannot depend on the crate being built.

use clap::{Arg, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// IMPORTANT: Keep this structure synchronized with src/cli.rs
/// When adding/removing/modifying commands, update both files.
fn build_cli() -> Command {
    Command::new("dotmine")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Move dotfiles into a mine and link them back")
        .long_about(
            "Moves files and directories from the home directory into a single directory \
             (the mine) and leaves symlinks in their place",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("mine")
                .long("mine")
                .help("Location of the mine (relative paths are taken from the home directory)")
                .value_name("PATH")
                .global(true)
                .env("DOTMINE_DIR"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("Read configuration from this file instead of ~/.config/dotmine/config.yaml")
                .value_name("PATH")
                .global(true)
                .env("DOTMINE_CONFIG"),
        )
        .subcommands(vec![
            Command::new("add")
                .about("Move a file or directory into the mine and leave a symlink behind")
                .long_about(
                    "Move PATH to the same location inside the mine, creating parent \
                     directories as needed, and replace it with a symlink. Conflicts with \
                     existing mine entries are resolved interactively.",
                )
                .arg(Arg::new("path").value_name("PATH").required(true)),
            Command::new("show")
                .about("List the mine's entries and whether they are linked")
                .long_about("Walk the mine and print each entry with its home-side link state")
                .arg(
                    Arg::new("unlinked")
                        .long("unlinked")
                        .help("Only list entries that are not linked")
                        .action(clap::ArgAction::SetTrue),
                ),
            Command::new("show-mine")
                .about("Print the location of the mine")
                .long_about("Display the mine directory resolved from flags, environment and configuration"),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell")
                .arg(
                    Arg::new("shell")
                        .value_name("SHELL")
                        .required(true)
                        .value_parser(["bash", "elvish", "fish", "powershell", "zsh"]),
                ),
        ])
}

fn main() {
    // Generate man pages at build time
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").unwrap());
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir).unwrap();

    // Generate main dotmine.1 man page
    let app = build_cli();
    let man = Man::new(app);
    let mut buffer = Vec::new();
    man.render(&mut buffer).unwrap();

    fs::write(man_dir.join("dotmine.1"), buffer).unwrap();

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
}
