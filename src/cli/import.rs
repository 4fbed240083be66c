//! Statement import CLI command
//!
//! Drives the staging workflow in one invocation: segment and extract the
//! pasted statement, print the staged candidates, and commit the selected
//! ones when `--commit` is given. Without `--commit` nothing reaches the
//! ledger, so a preview run is always safe.

use std::fs;
use std::path::PathBuf;

use clap::Args;

use crate::display::format_pending_list;
use crate::error::{BudgetError, BudgetResult};
use crate::import::ImportWorkflow;
use crate::store::LedgerStore;

/// Arguments for the import command
#[derive(Args)]
pub struct ImportArgs {
    /// Path to a text file containing the pasted statement
    pub file: PathBuf,

    /// Commit the selected candidates to the ledger
    #[arg(long)]
    pub commit: bool,

    /// Candidate indexes to deselect before committing (comma-separated)
    #[arg(long, value_delimiter = ',')]
    pub deselect: Vec<usize>,
}

/// Handle the import command
pub fn handle_import_command(store: &mut LedgerStore, args: ImportArgs) -> BudgetResult<()> {
    let text = fs::read_to_string(&args.file)?;

    let mut workflow = ImportWorkflow::new();
    let staged = workflow.start_review(&text, store)?;
    println!("Staged {} candidate(s) from {}\n", staged, args.file.display());

    for index in &args.deselect {
        let id = workflow
            .pending()
            .get(*index)
            .map(|p| p.id.clone())
            .ok_or_else(|| {
                BudgetError::Validation(format!(
                    "No staged candidate at index {} (0..{})",
                    index,
                    workflow.pending().len()
                ))
            })?;
        workflow.set_selected(&id, false)?;
    }

    print!("{}", format_pending_list(workflow.pending(), store));

    if args.commit {
        let committed = workflow.confirm(store)?;
        println!("\nCommitted {} transaction(s) to the ledger.", committed.len());
    } else {
        println!("\nPreview only. Re-run with --commit to append the selected candidates.");
    }

    Ok(())
}
