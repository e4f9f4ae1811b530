//! Command to move a path into the mine.

use crate::error::CliError;
use crate::utils::{normalize_path, resolve_roots, shorten_path, GlobalOptions};
use clap::Args;
use dotmine::{Outcome, PathResolver, Reconciler, TerminalPrompter};
use std::path::PathBuf;

/// Move a file or directory into the mine and leave a symlink behind.
#[derive(Args)]
pub struct AddCommand {
    /// Path to add (must be inside the home directory)
    #[arg(value_name = "PATH")]
    pub path: PathBuf,
}

impl AddCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        if self.path.as_os_str().is_empty() {
            return Err(CliError::InvalidArguments("path cannot be empty".into()));
        }

        let roots = resolve_roots(global)?;
        let source = normalize_path(&self.path)?;
        log::debug!("normalized `{}` to `{}`", self.path.display(), source.display());

        let mut reconciler = Reconciler::new(&roots, TerminalPrompter::stdio());
        let outcome = reconciler.add(&source)?;

        let home = roots.home();
        let shown = shorten_path(&source, home);
        match outcome {
            Outcome::AlreadyLinked => println!("{shown} is already in the mine"),
            Outcome::Declined => println!("skipped {shown}; nothing was changed"),
            _ => {
                if !global.quiet {
                    let destination = PathResolver::new(&roots).resolve(&source)?;
                    println!(
                        "success! {shown} -> {} ({outcome})",
                        shorten_path(&destination, home)
                    );
                }
            }
        }
        Ok(())
    }
}
