//! Data file handling
//!
//! The CLI keeps all state in one JSON document, the same document `data
//! export` produces. Every invocation loads it, runs the command against the
//! in-memory ledger and writes it back.

use std::path::Path;

use crate::error::BudgetResult;
use crate::snapshot;
use crate::store::LedgerStore;

/// Default data file, relative to the working directory
pub const DEFAULT_DATA_FILE: &str = "budget.json";

/// Environment variable overriding the data file path
pub const DATA_FILE_ENV: &str = "BUDGET_FILE";

/// Load the ledger from a data file. A missing file yields the seeded
/// starter ledger rather than an error.
pub fn load_store(path: impl AsRef<Path>) -> BudgetResult<LedgerStore> {
    let path = path.as_ref();
    if !path.exists() {
        return Ok(LedgerStore::with_defaults());
    }

    let mut store = LedgerStore::new();
    snapshot::import_from_file(&mut store, path)?;
    Ok(store)
}

/// Write the ledger back to the data file
pub fn save_store(store: &LedgerStore, path: impl AsRef<Path>) -> BudgetResult<()> {
    snapshot::export_to_file(store, path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_yields_seeded_store() {
        let dir = TempDir::new().unwrap();
        let store = load_store(dir.path().join("nope.json")).unwrap();
        assert!(!store.sources().is_empty());
        assert!(!store.sub_categories().is_empty());
        assert!(store.transactions().is_empty());
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("budget.json");

        let mut store = LedgerStore::with_defaults();
        store.set_income(85_000.0);
        save_store(&store, &path).unwrap();

        let loaded = load_store(&path).unwrap();
        assert_eq!(loaded.income(), 85_000.0);
        assert_eq!(loaded.sources(), store.sources());
    }

    #[test]
    fn test_corrupt_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("budget.json");
        std::fs::write(&path, "{ broken").unwrap();
        assert!(load_store(&path).is_err());
    }
}
