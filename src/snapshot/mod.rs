//! Snapshot exchange format
//!
//! Serializes the whole ledger to the JSON exchange format and applies it
//! back. Import is a partial, field-by-field merge: each top-level field is
//! applied independently and only if present and of the expected shape;
//! anything absent or malformed leaves the current in-memory value alone.
//! A file that fails to parse as JSON at all changes nothing.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{BudgetError, BudgetResult};
use crate::models::{SpendingSource, SubCategory, Transaction};
use crate::store::LedgerStore;

/// The exchanged top-level document
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub income: f64,
    pub savings: f64,
    pub sources: Vec<SpendingSource>,
    pub sub_categories: Vec<SubCategory>,
    pub transactions: Vec<Transaction>,
}

impl Snapshot {
    /// Capture the store's current state
    pub fn from_store(store: &LedgerStore) -> Self {
        Self {
            income: store.income(),
            savings: store.savings(),
            sources: store.sources().to_vec(),
            sub_categories: store.sub_categories().to_vec(),
            transactions: store.transactions().to_vec(),
        }
    }

    /// Serialize to pretty-printed JSON
    pub fn to_json(&self) -> BudgetResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| BudgetError::Export(e.to_string()))
    }
}

/// Which top-level fields an import applied and which it skipped for being
/// present but of the wrong shape
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ImportOutcome {
    pub applied: Vec<&'static str>,
    pub skipped: Vec<&'static str>,
}

impl ImportOutcome {
    pub fn nothing_applied(&self) -> bool {
        self.applied.is_empty()
    }
}

/// Apply a JSON document to the store, field by field.
///
/// Fails with [`BudgetError::MalformedImportFile`] before touching any state
/// when the document is not JSON at all.
pub fn apply_json(store: &mut LedgerStore, data: &str) -> BudgetResult<ImportOutcome> {
    let value: Value =
        serde_json::from_str(data).map_err(|e| BudgetError::MalformedImportFile(e.to_string()))?;

    let mut outcome = ImportOutcome::default();

    match value.get("income").map(Value::as_f64) {
        Some(Some(income)) => {
            store.set_income(income);
            outcome.applied.push("income");
        }
        Some(None) => outcome.skipped.push("income"),
        None => {}
    }

    match value.get("savings").map(Value::as_f64) {
        Some(Some(savings)) => {
            store.set_savings(savings);
            outcome.applied.push("savings");
        }
        Some(None) => outcome.skipped.push("savings"),
        None => {}
    }

    if let Some(v) = value.get("sources") {
        match serde_json::from_value::<Vec<SpendingSource>>(v.clone()) {
            Ok(sources) => {
                store.replace_sources(sources);
                outcome.applied.push("sources");
            }
            Err(_) => outcome.skipped.push("sources"),
        }
    }

    if let Some(v) = value.get("subCategories") {
        match serde_json::from_value::<Vec<SubCategory>>(v.clone()) {
            Ok(subs) => {
                store.replace_sub_categories(subs);
                outcome.applied.push("subCategories");
            }
            Err(_) => outcome.skipped.push("subCategories"),
        }
    }

    if let Some(v) = value.get("transactions") {
        match serde_json::from_value::<Vec<Transaction>>(v.clone()) {
            Ok(txns) => {
                store.replace_transactions(txns);
                outcome.applied.push("transactions");
            }
            Err(_) => outcome.skipped.push("transactions"),
        }
    }

    Ok(outcome)
}

/// Export the store to a file. The write goes to a sibling temp file first
/// and is moved into place, so a crash mid-write cannot truncate the target.
pub fn export_to_file(store: &LedgerStore, path: impl AsRef<Path>) -> BudgetResult<()> {
    let path = path.as_ref();
    let json = Snapshot::from_store(store).to_json()?;

    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, json)?;
    fs::rename(&tmp, path)?;
    Ok(())
}

/// Load a file's contents into the store via the partial merge
pub fn import_from_file(
    store: &mut LedgerStore,
    path: impl AsRef<Path>,
) -> BudgetResult<ImportOutcome> {
    let data = fs::read_to_string(path.as_ref())?;
    apply_json(store, &data)
}
