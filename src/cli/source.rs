//! Source CLI commands
//!
//! Implements CLI commands for spending source management.

use clap::Subcommand;

use crate::error::{BudgetError, BudgetResult};
use crate::models::{SourceId, SourceType, SpendingSource};
use crate::store::LedgerStore;

/// Source subcommands
#[derive(Subcommand)]
pub enum SourceCommands {
    /// Create a new spending source
    Create {
        /// Source name
        name: String,
        /// Source type (bank, card, cash)
        #[arg(short = 't', long, default_value = "bank")]
        source_type: String,
        /// Make this the default source
        #[arg(long)]
        default: bool,
    },
    /// List all sources
    List,
    /// Make a source the default for imported transactions
    SetDefault {
        /// Source name or ID
        source: String,
    },
}

/// Handle a source command
pub fn handle_source_command(store: &mut LedgerStore, cmd: SourceCommands) -> BudgetResult<()> {
    match cmd {
        SourceCommands::Create {
            name,
            source_type,
            default,
        } => {
            let source_type: SourceType = source_type.parse().map_err(BudgetError::Validation)?;
            let source = store.add_source(&name, source_type)?;
            if default {
                store.set_default_source(&source.id)?;
            }

            println!("Created source: {}", source.name);
            println!("  Type:    {}", source.source_type);
            println!(
                "  Default: {}",
                if default || source.is_default { "Yes" } else { "No" }
            );
            println!("  ID:      {}", source.id);
        }

        SourceCommands::List => {
            if store.sources().is_empty() {
                println!("No sources defined.");
                return Ok(());
            }
            for source in store.sources() {
                let mark = if source.is_default { "*" } else { " " };
                println!("{} {}  [{}]  {}", mark, source.name, source.source_type, source.id);
            }
        }

        SourceCommands::SetDefault { source } => {
            let found = find_source(store, &source)
                .ok_or_else(|| BudgetError::source_not_found(&source))?;
            let name = found.name.clone();
            let id = found.id.clone();
            store.set_default_source(&id)?;
            println!("Default source is now: {}", name);
        }
    }

    Ok(())
}

/// Resolve a source by id first, then by case-insensitive name
pub(crate) fn find_source<'a>(store: &'a LedgerStore, query: &str) -> Option<&'a SpendingSource> {
    let by_id = store.source(&SourceId::from_raw(query));
    by_id.or_else(|| {
        store
            .sources()
            .iter()
            .find(|s| s.name.eq_ignore_ascii_case(query))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_source_by_name_is_case_insensitive() {
        let store = LedgerStore::with_defaults();
        assert!(find_source(&store, "main bank").is_some());
        assert!(find_source(&store, "no such source").is_none());
    }

    #[test]
    fn test_find_source_by_id() {
        let store = LedgerStore::with_defaults();
        let id = store.sources()[1].id.clone();
        let found = find_source(&store, id.as_str()).unwrap();
        assert_eq!(found.id, id);
    }
}
