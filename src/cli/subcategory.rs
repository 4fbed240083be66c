//! Sub-category CLI commands

use clap::Subcommand;

use crate::error::{BudgetError, BudgetResult};
use crate::models::{Category, SubCategory, SubCategoryId};
use crate::store::LedgerStore;

/// Sub-category subcommands
#[derive(Subcommand)]
pub enum SubcategoryCommands {
    /// Create a new sub-category
    Create {
        /// Sub-category name
        name: String,
        /// Parent category (essential, wants, investment, income)
        #[arg(short, long)]
        category: String,
    },
    /// List sub-categories grouped by category
    List,
    /// Delete a sub-category. Transactions keep the dangling reference and
    /// display as "Uncategorized".
    Delete {
        /// Sub-category name or ID
        sub_category: String,
    },
}

/// Handle a sub-category command
pub fn handle_subcategory_command(
    store: &mut LedgerStore,
    cmd: SubcategoryCommands,
) -> BudgetResult<()> {
    match cmd {
        SubcategoryCommands::Create { name, category } => {
            let parent: Category = category.parse().map_err(BudgetError::Validation)?;
            let sub = store.add_sub_category(&name, parent)?;
            println!("Created sub-category: {} (under {})", sub.name, sub.parent);
            println!("  ID: {}", sub.id);
        }

        SubcategoryCommands::List => {
            for category in Category::ALL {
                let subs: Vec<&SubCategory> = store
                    .sub_categories()
                    .iter()
                    .filter(|s| s.parent == category)
                    .collect();
                if subs.is_empty() {
                    continue;
                }
                println!("{}:", category);
                for sub in subs {
                    println!("  {}  [{}]", sub.name, sub.id);
                }
            }
        }

        SubcategoryCommands::Delete { sub_category } => {
            let found = find_sub_category(store, &sub_category)
                .ok_or_else(|| BudgetError::sub_category_not_found(&sub_category))?;
            let name = found.name.clone();
            let id = found.id.clone();
            store.delete_sub_category(&id)?;
            println!("Deleted sub-category: {}", name);
        }
    }

    Ok(())
}

/// Resolve a sub-category by id first, then by case-insensitive name
pub(crate) fn find_sub_category<'a>(
    store: &'a LedgerStore,
    query: &str,
) -> Option<&'a SubCategory> {
    let by_id = store.sub_category(&SubCategoryId::from_raw(query));
    by_id.or_else(|| {
        store
            .sub_categories()
            .iter()
            .find(|s| s.name.eq_ignore_ascii_case(query))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_sub_category_by_name() {
        let store = LedgerStore::with_defaults();
        let found = find_sub_category(&store, "rent").unwrap();
        assert_eq!(found.parent, Category::Essential);
    }

    #[test]
    fn test_find_sub_category_by_id() {
        let store = LedgerStore::with_defaults();
        let id = store.sub_categories()[0].id.clone();
        assert!(find_sub_category(&store, id.as_str()).is_some());
    }
}
