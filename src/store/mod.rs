//! Ledger store
//!
//! The canonical in-memory collections: spending sources, sub-categories,
//! transactions, and the income/savings scalars. All state is owned by one
//! store instance and every mutation runs synchronously to completion, so
//! each transition is atomic from the perspective of any other operation.
//!
//! Referential invariants enforced here:
//! - exactly one source is the default at any time (recomputed across the
//!   whole collection, never toggled on a single record)
//! - sub-category deletion does not cascade; transactions keep the dangling
//!   id and lookups resolve to an explicit fallback

use crate::error::{BudgetError, BudgetResult};
use crate::models::{
    Category, SourceId, SourceType, SpendingSource, SubCategory, SubCategoryId, Transaction,
    TransactionId,
};

/// Display fallback for dangling or absent sub-category references
pub const UNCATEGORIZED: &str = "Uncategorized";

/// The canonical in-memory ledger
#[derive(Debug, Clone, Default)]
pub struct LedgerStore {
    income: f64,
    savings: f64,
    sources: Vec<SpendingSource>,
    sub_categories: Vec<SubCategory>,
    transactions: Vec<Transaction>,
}

impl LedgerStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store seeded with the starter sources and sub-categories
    pub fn with_defaults() -> Self {
        let mut store = Self::new();

        let mut main = SpendingSource::new("Main Bank", SourceType::Bank);
        main.is_default = true;
        store.sources.push(main);
        store
            .sources
            .push(SpendingSource::new("Credit Card", SourceType::Card));
        store.sources.push(SpendingSource::new("Cash", SourceType::Cash));

        let seed: [(&str, Category); 12] = [
            ("Rent", Category::Essential),
            ("Electricity", Category::Essential),
            ("Grocery", Category::Essential),
            ("Mobile", Category::Essential),
            ("Outside Food", Category::Wants),
            ("Entertainment", Category::Wants),
            ("miscellenous", Category::Wants),
            ("Mutual Fund", Category::Investment),
            ("Stocks", Category::Investment),
            ("Salary", Category::Income),
            ("Refund", Category::Income),
            ("Interest", Category::Income),
        ];
        for (name, parent) in seed {
            store.sub_categories.push(SubCategory::new(name, parent));
        }

        store
    }

    // === Scalars ===

    pub fn income(&self) -> f64 {
        self.income
    }

    pub fn set_income(&mut self, income: f64) {
        self.income = income;
    }

    pub fn savings(&self) -> f64 {
        self.savings
    }

    pub fn set_savings(&mut self, savings: f64) {
        self.savings = savings;
    }

    // === Sources ===

    pub fn sources(&self) -> &[SpendingSource] {
        &self.sources
    }

    /// Add a new source. The first source ever added becomes the default.
    pub fn add_source(
        &mut self,
        name: impl Into<String>,
        source_type: SourceType,
    ) -> BudgetResult<SpendingSource> {
        let mut source = SpendingSource::new(name, source_type);
        source.validate().map_err(BudgetError::Validation)?;
        source.is_default = self.sources.is_empty();
        self.sources.push(source.clone());
        Ok(source)
    }

    /// Make one source the default, clearing the flag on every other source
    /// in the same pass so there is never a zero- or multi-default state.
    pub fn set_default_source(&mut self, id: &SourceId) -> BudgetResult<()> {
        if !self.sources.iter().any(|s| &s.id == id) {
            return Err(BudgetError::source_not_found(id.as_str()));
        }
        for source in &mut self.sources {
            source.is_default = &source.id == id;
        }
        Ok(())
    }

    /// The default source id, falling back to the first source
    pub fn default_source_id(&self) -> Option<SourceId> {
        self.sources
            .iter()
            .find(|s| s.is_default)
            .or_else(|| self.sources.first())
            .map(|s| s.id.clone())
    }

    pub fn source(&self, id: &SourceId) -> Option<&SpendingSource> {
        self.sources.iter().find(|s| &s.id == id)
    }

    /// Resolve a source reference to a display name
    pub fn source_name(&self, id: Option<&SourceId>) -> &str {
        id.and_then(|id| self.source(id))
            .map(|s| s.name.as_str())
            .unwrap_or("(no source)")
    }

    // === Sub-categories ===

    pub fn sub_categories(&self) -> &[SubCategory] {
        &self.sub_categories
    }

    pub fn add_sub_category(
        &mut self,
        name: impl Into<String>,
        parent: Category,
    ) -> BudgetResult<SubCategory> {
        let sub = SubCategory::new(name, parent);
        sub.validate().map_err(BudgetError::Validation)?;
        self.sub_categories.push(sub.clone());
        Ok(sub)
    }

    /// Delete a sub-category. Transactions referencing it keep the dangling
    /// id; lookups fall back to [`UNCATEGORIZED`].
    pub fn delete_sub_category(&mut self, id: &SubCategoryId) -> BudgetResult<()> {
        let before = self.sub_categories.len();
        self.sub_categories.retain(|s| &s.id != id);
        if self.sub_categories.len() == before {
            return Err(BudgetError::sub_category_not_found(id.as_str()));
        }
        Ok(())
    }

    pub fn sub_category(&self, id: &SubCategoryId) -> Option<&SubCategory> {
        self.sub_categories.iter().find(|s| &s.id == id)
    }

    /// First sub-category under a category, in collection order
    pub fn first_sub_category_in(&self, category: Category) -> Option<&SubCategory> {
        self.sub_categories.iter().find(|s| s.parent == category)
    }

    /// Exact-name lookup scoped to a category
    pub fn sub_category_by_name(&self, name: &str, parent: Category) -> Option<&SubCategory> {
        self.sub_categories
            .iter()
            .find(|s| s.name == name && s.parent == parent)
    }

    /// Resolve a sub-category reference to a display name
    pub fn sub_category_name(&self, id: Option<&SubCategoryId>) -> &str {
        id.and_then(|id| self.sub_category(id))
            .map(|s| s.name.as_str())
            .unwrap_or(UNCATEGORIZED)
    }

    // === Transactions ===

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn add_transaction(&mut self, txn: Transaction) -> BudgetResult<()> {
        txn.validate().map_err(BudgetError::Validation)?;
        self.transactions.push(txn);
        Ok(())
    }

    /// Replace an existing transaction wholesale (edit)
    pub fn update_transaction(&mut self, txn: Transaction) -> BudgetResult<()> {
        txn.validate().map_err(BudgetError::Validation)?;
        match self.transactions.iter_mut().find(|t| t.id == txn.id) {
            Some(slot) => {
                *slot = txn;
                Ok(())
            }
            None => Err(BudgetError::transaction_not_found(txn.id.as_str())),
        }
    }

    pub fn delete_transaction(&mut self, id: &TransactionId) -> BudgetResult<()> {
        let before = self.transactions.len();
        self.transactions.retain(|t| &t.id != id);
        if self.transactions.len() == before {
            return Err(BudgetError::transaction_not_found(id.as_str()));
        }
        Ok(())
    }

    pub fn transaction(&self, id: &TransactionId) -> Option<&Transaction> {
        self.transactions.iter().find(|t| &t.id == id)
    }

    /// Append a batch of transactions in one step. The whole batch is
    /// validated before anything is appended, so a bad item commits nothing.
    pub fn append_transactions(&mut self, batch: Vec<Transaction>) -> BudgetResult<()> {
        for txn in &batch {
            txn.validate().map_err(BudgetError::Validation)?;
        }
        self.transactions.extend(batch);
        Ok(())
    }

    /// Delete all transactions, keeping sources and sub-categories
    pub fn clear_transactions(&mut self) {
        self.transactions.clear();
    }

    // === Snapshot replacement (used by import) ===

    pub fn replace_sources(&mut self, sources: Vec<SpendingSource>) {
        self.sources = sources;
    }

    pub fn replace_sub_categories(&mut self, sub_categories: Vec<SubCategory>) {
        self.sub_categories = sub_categories;
    }

    pub fn replace_transactions(&mut self, transactions: Vec<Transaction>) {
        self.transactions = transactions;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TransactionType;
    use chrono::NaiveDate;

    fn txn(name: &str, amount: f64) -> Transaction {
        Transaction::new(
            NaiveDate::from_ymd_opt(2025, 11, 28).unwrap(),
            name,
            amount,
            TransactionType::Debit,
            Category::Essential,
        )
    }

    #[test]
    fn test_first_source_becomes_default() {
        let mut store = LedgerStore::new();
        let first = store.add_source("Main Bank", SourceType::Bank).unwrap();
        let second = store.add_source("Cash", SourceType::Cash).unwrap();
        assert!(first.is_default);
        assert!(!second.is_default);
        assert_eq!(store.default_source_id(), Some(first.id));
    }

    #[test]
    fn test_set_default_source_is_exclusive() {
        let mut store = LedgerStore::with_defaults();
        let target = store.sources()[2].id.clone();
        store.set_default_source(&target).unwrap();

        let defaults: Vec<_> = store.sources().iter().filter(|s| s.is_default).collect();
        assert_eq!(defaults.len(), 1);
        assert_eq!(defaults[0].id, target);
    }

    #[test]
    fn test_set_default_source_unknown_id() {
        let mut store = LedgerStore::with_defaults();
        let err = store
            .set_default_source(&SourceId::from_raw("missing"))
            .unwrap_err();
        assert!(err.is_not_found());
        // The previous default is untouched
        assert_eq!(
            store.sources().iter().filter(|s| s.is_default).count(),
            1
        );
    }

    #[test]
    fn test_delete_sub_category_does_not_cascade() {
        let mut store = LedgerStore::new();
        let sub = store.add_sub_category("Grocery", Category::Essential).unwrap();
        let mut t = txn("BigBasket", 540.0);
        t.sub_category_id = Some(sub.id.clone());
        store.add_transaction(t).unwrap();

        store.delete_sub_category(&sub.id).unwrap();

        let kept = &store.transactions()[0];
        assert_eq!(kept.sub_category_id.as_ref(), Some(&sub.id));
        assert_eq!(store.sub_category_name(kept.sub_category_id.as_ref()), UNCATEGORIZED);
    }

    #[test]
    fn test_append_transactions_all_or_nothing() {
        let mut store = LedgerStore::new();
        let mut bad = txn("bad", 10.0);
        bad.amount = -1.0;
        let batch = vec![txn("ok", 10.0), bad];

        assert!(store.append_transactions(batch).is_err());
        assert!(store.transactions().is_empty());
    }

    #[test]
    fn test_update_transaction_replaces_by_id() {
        let mut store = LedgerStore::new();
        let original = txn("Rent", 19000.0);
        store.add_transaction(original.clone()).unwrap();

        let mut edited = original.clone();
        edited.amount = 20000.0;
        store.update_transaction(edited).unwrap();

        assert_eq!(store.transactions().len(), 1);
        assert_eq!(store.transactions()[0].amount, 20000.0);
    }

    #[test]
    fn test_clear_transactions_keeps_catalogs() {
        let mut store = LedgerStore::with_defaults();
        store.add_transaction(txn("Rent", 19000.0)).unwrap();
        store.clear_transactions();
        assert!(store.transactions().is_empty());
        assert!(!store.sources().is_empty());
        assert!(!store.sub_categories().is_empty());
    }

    #[test]
    fn test_seed_contains_categorizer_targets() {
        let store = LedgerStore::with_defaults();
        assert!(store.sub_category_by_name("miscellenous", Category::Wants).is_some());
        assert!(store.first_sub_category_in(Category::Income).is_some());
        assert!(store.first_sub_category_in(Category::Essential).is_some());
    }
}
