//! Pending transaction model
//!
//! A staged, not-yet-committed candidate produced by the statement importer.
//! Pending items live only inside one import session and are never persisted;
//! confirming promotes the selected ones into the ledger with fresh ids.

use chrono::NaiveDate;

use super::category::Category;
use super::ids::{PendingId, SourceId, SubCategoryId};
use super::transaction::{Transaction, TransactionType};

/// A staged candidate awaiting user review
#[derive(Debug, Clone, PartialEq)]
pub struct PendingTransaction {
    /// Session-local identifier
    pub id: PendingId,

    /// Extracted transaction date
    pub date: NaiveDate,

    /// First 100 characters of the raw block, for reference during review
    pub original_description: String,

    /// Cleaned description (editable)
    pub name: String,

    /// Extracted amount (editable)
    pub amount: f64,

    /// Direction (editable; flipping resets category and sub-category)
    pub txn_type: TransactionType,

    /// Best-guess category (editable)
    pub category: Category,

    /// Best-guess sub-category (editable)
    pub sub_category_id: Option<SubCategoryId>,

    /// Attributed source (defaults to the store's default source)
    pub source_id: Option<SourceId>,

    /// Whether this item will be committed on confirm
    pub is_selected: bool,
}

impl PendingTransaction {
    /// Promote into a ledger transaction: transient fields are stripped and a
    /// fresh identity is assigned
    pub fn promote(&self) -> Transaction {
        let mut txn = Transaction::new(
            self.date,
            self.name.clone(),
            self.amount,
            self.txn_type,
            self.category,
        );
        txn.sub_category_id = self.sub_category_id.clone();
        txn.source_id = self.source_id.clone();
        txn
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> PendingTransaction {
        PendingTransaction {
            id: PendingId::new(),
            date: NaiveDate::from_ymd_opt(2025, 11, 28).unwrap(),
            original_description: "28-11-2025 UPI/P2M/AMAZON 479.05...".to_string(),
            name: "AMAZON".to_string(),
            amount: 479.05,
            txn_type: TransactionType::Debit,
            category: Category::Essential,
            sub_category_id: Some(SubCategoryId::from_raw("sub-1")),
            source_id: Some(SourceId::from_raw("src-1")),
            is_selected: true,
        }
    }

    #[test]
    fn test_promote_assigns_fresh_identity() {
        let pending = sample();
        let a = pending.promote();
        let b = pending.promote();
        assert_ne!(a.id, b.id);
        assert_ne!(a.id.as_str(), pending.id.as_str());
    }

    #[test]
    fn test_promote_copies_fields_and_strips_transients() {
        let pending = sample();
        let txn = pending.promote();
        assert_eq!(txn.name, "AMAZON");
        assert_eq!(txn.amount, 479.05);
        assert_eq!(txn.category, Category::Essential);
        assert_eq!(txn.sub_category_id, pending.sub_category_id);
        assert_eq!(txn.source_id, pending.source_id);
        // Transaction carries neither original_description nor is_selected
        let json = serde_json::to_value(&txn).unwrap();
        assert!(json.get("originalDescription").is_none());
        assert!(json.get("isSelected").is_none());
    }
}
