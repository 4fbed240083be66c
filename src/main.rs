use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use budget_tracker::cli::{
    handle_data_command, handle_import_command, handle_source_command,
    handle_subcategory_command, handle_transaction_command, DataCommands, ImportArgs,
    SourceCommands, SubcategoryCommands, TransactionCommands,
};
use budget_tracker::display::format_summary;
use budget_tracker::reports::{insights, Summary};
use budget_tracker::{config, BudgetError};

#[derive(Parser)]
#[command(
    name = "budget",
    version,
    about = "Personal 50/25/25 budget tracker with a bank-statement importer",
    long_about = "Tracks spending against a 50/25/25 allocation \
                  (Essential / Wants / Investment) and imports transactions \
                  from pasted bank-statement text through a review workflow."
)]
struct Cli {
    /// Path to the budget data file
    #[arg(long, global = true, env = config::DATA_FILE_ENV,
          default_value = config::DEFAULT_DATA_FILE)]
    data: PathBuf,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Spending source management commands
    #[command(subcommand)]
    Source(SourceCommands),

    /// Sub-category management commands
    #[command(subcommand, alias = "sub")]
    Subcategory(SubcategoryCommands),

    /// Transaction management commands
    #[command(subcommand, alias = "txn")]
    Transaction(TransactionCommands),

    /// Import transactions from pasted bank-statement text
    Import(ImportArgs),

    /// Show the budget summary, targets and insights
    Summary,

    /// Set the declared monthly income and savings carve-out
    Set {
        /// Monthly income in rupees
        #[arg(long)]
        income: Option<f64>,
        /// Monthly savings carve-out in rupees
        #[arg(long)]
        savings: Option<f64>,
    },

    /// Export or merge the JSON data file
    #[command(subcommand)]
    Data(DataCommands),
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut store = config::load_store(&cli.data)?;

    match cli.command {
        Some(Commands::Source(cmd)) => handle_source_command(&mut store, cmd)?,
        Some(Commands::Subcategory(cmd)) => handle_subcategory_command(&mut store, cmd)?,
        Some(Commands::Transaction(cmd)) => handle_transaction_command(&mut store, cmd)?,
        Some(Commands::Import(args)) => handle_import_command(&mut store, args)?,
        Some(Commands::Summary) => {
            let summary = Summary::compute(&store);
            let insights = insights(&store, &summary);
            print!("{}", format_summary(&summary, &insights));
        }
        Some(Commands::Set { income, savings }) => {
            if income.is_none() && savings.is_none() {
                return Err(
                    BudgetError::Validation("Specify --income and/or --savings.".into()).into(),
                );
            }
            if let Some(income) = income {
                store.set_income(income);
                println!("Income set to {}", income);
            }
            if let Some(savings) = savings {
                store.set_savings(savings);
                println!("Savings set to {}", savings);
            }
        }
        Some(Commands::Data(cmd)) => handle_data_command(&mut store, cmd)?,
        None => {
            println!("budget - Personal 50/25/25 budget tracker");
            println!();
            println!("Run 'budget --help' for usage information.");
            println!("Run 'budget import <statement.txt>' to stage a statement.");
        }
    }

    config::save_store(&store, &cli.data)?;
    Ok(())
}
