//! Command to list the contents of the mine.

use crate::error::CliError;
use crate::utils::{resolve_roots, shorten_path, GlobalOptions};
use clap::Args;
use dotmine::{inspect_mine, LinkState};

/// List the mine's entries and whether the home side links to them.
#[derive(Args)]
pub struct ShowCommand {
    /// Only list entries that are not linked
    #[arg(long)]
    pub unlinked: bool,
}

impl ShowCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let roots = resolve_roots(global)?;
        let entries = inspect_mine(&roots)?;
        let home = roots.home();

        if entries.is_empty() && !global.quiet {
            eprintln!("the mine at {} is empty", shorten_path(roots.mine(), home));
        }

        for entry in entries {
            match entry.state {
                LinkState::Linked if !self.unlinked => println!(
                    "{} -> {}",
                    shorten_path(&entry.home_path, home),
                    shorten_path(&entry.mine_path, home)
                ),
                LinkState::Linked => {}
                LinkState::Unlinked => {
                    println!("{} (unlinked)", shorten_path(&entry.mine_path, home));
                }
            }
        }
        Ok(())
    }
}
