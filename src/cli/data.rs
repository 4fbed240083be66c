//! Data exchange CLI commands

use std::path::PathBuf;

use clap::Subcommand;

use crate::error::BudgetResult;
use crate::snapshot;
use crate::store::LedgerStore;

/// Data exchange subcommands
#[derive(Subcommand)]
pub enum DataCommands {
    /// Write the full ledger to a JSON file
    Export {
        /// Destination path
        path: PathBuf,
    },
    /// Merge a JSON file into the ledger. Only fields present in the file
    /// are replaced; everything else is kept.
    Merge {
        /// Source path
        path: PathBuf,
    },
}

/// Handle a data command
pub fn handle_data_command(store: &mut LedgerStore, cmd: DataCommands) -> BudgetResult<()> {
    match cmd {
        DataCommands::Export { path } => {
            snapshot::export_to_file(store, &path)?;
            println!("Exported ledger to {}", path.display());
        }

        DataCommands::Merge { path } => {
            let outcome = snapshot::import_from_file(store, &path)?;
            if outcome.nothing_applied() {
                println!("Nothing applied from {}", path.display());
            } else {
                println!("Applied fields: {}", outcome.applied.join(", "));
            }
            if !outcome.skipped.is_empty() {
                println!("Skipped malformed fields: {}", outcome.skipped.join(", "));
            }
        }
    }

    Ok(())
}
