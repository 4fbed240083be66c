//! Personal budget tracker built around the 50/25/25 allocation rule
//! (Essential / Wants / Investment) with a heuristic bank-statement importer.
//!
//! The crate is layered like the binary uses it:
//!
//! - [`models`]: plain data types (categories, sources, transactions)
//! - [`store`]: the in-memory ledger and its invariants
//! - [`import`]: statement text segmentation, field extraction,
//!   auto-categorization and the staging/review workflow
//! - [`snapshot`]: the JSON exchange format (export + partial-merge import)
//! - [`reports`]: budget summary, allocation targets and insights
//! - [`display`], [`cli`], [`config`]: the terminal presentation shell

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod import;
pub mod models;
pub mod reports;
pub mod snapshot;
pub mod store;

pub use error::{BudgetError, BudgetResult};
pub use store::LedgerStore;
