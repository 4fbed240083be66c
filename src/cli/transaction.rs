//! Transaction CLI commands

use chrono::NaiveDate;
use clap::Subcommand;

use crate::cli::source::find_source;
use crate::cli::subcategory::find_sub_category;
use crate::display::format_transaction_register;
use crate::error::{BudgetError, BudgetResult};
use crate::models::{Category, Transaction, TransactionId, TransactionType};
use crate::store::LedgerStore;

/// Transaction subcommands
#[derive(Subcommand)]
pub enum TransactionCommands {
    /// Add a new transaction
    Add {
        /// Description
        name: String,
        /// Amount in rupees
        amount: f64,
        /// Transaction date (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        date: Option<NaiveDate>,
        /// Direction (debit, credit)
        #[arg(short = 't', long, default_value = "debit")]
        txn_type: String,
        /// Category (essential, wants, investment, income)
        #[arg(short, long, default_value = "essential")]
        category: String,
        /// Sub-category name or ID
        #[arg(short, long)]
        sub_category: Option<String>,
        /// Source name or ID (defaults to the default source)
        #[arg(long)]
        source: Option<String>,
    },
    /// List transactions
    List {
        /// Number of transactions to show, most recent first
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },
    /// Edit a transaction
    Edit {
        /// Transaction ID
        id: String,
        /// New description
        #[arg(long)]
        name: Option<String>,
        /// New amount
        #[arg(long)]
        amount: Option<f64>,
        /// New date (YYYY-MM-DD)
        #[arg(long)]
        date: Option<NaiveDate>,
        /// New category
        #[arg(long)]
        category: Option<String>,
        /// New sub-category name or ID
        #[arg(long)]
        sub_category: Option<String>,
    },
    /// Delete a transaction
    Delete {
        /// Transaction ID
        id: String,
    },
    /// Delete ALL transactions, keeping sources and sub-categories
    Reset {
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}

/// Handle a transaction command
pub fn handle_transaction_command(
    store: &mut LedgerStore,
    cmd: TransactionCommands,
) -> BudgetResult<()> {
    match cmd {
        TransactionCommands::Add {
            name,
            amount,
            date,
            txn_type,
            category,
            sub_category,
            source,
        } => {
            let txn_type: TransactionType = txn_type.parse().map_err(BudgetError::Validation)?;
            let category: Category = category.parse().map_err(BudgetError::Validation)?;
            let date = date.unwrap_or_else(|| chrono::Local::now().date_naive());

            let mut txn = Transaction::new(date, name, amount, txn_type, category);
            if let Some(query) = sub_category {
                let sub = find_sub_category(store, &query)
                    .ok_or_else(|| BudgetError::sub_category_not_found(&query))?;
                txn.sub_category_id = Some(sub.id.clone());
            }
            txn.source_id = match source {
                Some(query) => Some(
                    find_source(store, &query)
                        .ok_or_else(|| BudgetError::source_not_found(&query))?
                        .id
                        .clone(),
                ),
                None => store.default_source_id(),
            };

            let id = txn.id.clone();
            store.add_transaction(txn)?;
            println!("Added transaction: {}", id);
        }

        TransactionCommands::List { limit } => {
            let mut recent: Vec<Transaction> = store.transactions().to_vec();
            recent.sort_by(|a, b| b.date.cmp(&a.date));
            recent.truncate(limit);
            print!("{}", format_transaction_register(&recent, store));
        }

        TransactionCommands::Edit {
            id,
            name,
            amount,
            date,
            category,
            sub_category,
        } => {
            let id = TransactionId::from_raw(id);
            let mut txn = store
                .transaction(&id)
                .cloned()
                .ok_or_else(|| BudgetError::transaction_not_found(id.as_str()))?;

            if let Some(name) = name {
                txn.name = name;
            }
            if let Some(amount) = amount {
                txn.amount = amount;
            }
            if let Some(date) = date {
                txn.date = date;
            }
            if let Some(category) = category {
                txn.category = category.parse().map_err(BudgetError::Validation)?;
            }
            if let Some(query) = sub_category {
                let sub = find_sub_category(store, &query)
                    .ok_or_else(|| BudgetError::sub_category_not_found(&query))?;
                txn.sub_category_id = Some(sub.id.clone());
            }

            store.update_transaction(txn)?;
            println!("Updated transaction: {}", id);
        }

        TransactionCommands::Delete { id } => {
            let id = TransactionId::from_raw(id);
            store.delete_transaction(&id)?;
            println!("Deleted transaction: {}", id);
        }

        TransactionCommands::Reset { yes } => {
            if !yes {
                println!(
                    "This deletes ALL transactions (sources and sub-categories are kept)."
                );
                println!("Re-run with --yes to confirm.");
                return Ok(());
            }
            let count = store.transactions().len();
            store.clear_transactions();
            println!("Deleted {} transaction(s).", count);
        }
    }

    Ok(())
}
