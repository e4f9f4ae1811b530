//! Command to show the resolved mine location.

use crate::error::CliError;
use crate::utils::{resolve_roots, GlobalOptions};
use clap::Args;

/// Show the resolved mine path.
#[derive(Args)]
pub struct ShowMineCommand {}

impl ShowMineCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        // Resolve the mine using the same logic as other commands
        let roots = resolve_roots(global)?;

        println!("{}", roots.mine().display());
        Ok(())
    }
}
