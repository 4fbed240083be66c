//! CLI command handlers
//!
//! Bridges clap argument parsing with the store, importer and report layers.

pub mod data;
pub mod import;
pub mod source;
pub mod subcategory;
pub mod transaction;

pub use data::{handle_data_command, DataCommands};
pub use import::{handle_import_command, ImportArgs};
pub use source::{handle_source_command, SourceCommands};
pub use subcategory::{handle_subcategory_command, SubcategoryCommands};
pub use transaction::{handle_transaction_command, TransactionCommands};
