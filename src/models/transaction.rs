//! Transaction model
//!
//! A committed ledger entry. Sub-category and source are weak references:
//! deleting a sub-category does not cascade, so a transaction may point at a
//! missing id. Display layers resolve such lookups with an explicit fallback.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::category::Category;
use super::ids::{SourceId, SubCategoryId, TransactionId};

/// Direction of a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    /// Money going out
    #[default]
    Debit,
    /// Money coming in
    Credit,
}

impl TransactionType {
    pub fn is_credit(&self) -> bool {
        matches!(self, Self::Credit)
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Debit => write!(f, "debit"),
            Self::Credit => write!(f, "credit"),
        }
    }
}

impl FromStr for TransactionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "debit" | "expense" => Ok(Self::Debit),
            "credit" | "income" => Ok(Self::Credit),
            other => Err(format!("Unknown transaction type: '{}'", other)),
        }
    }
}

/// A committed ledger entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// Unique identifier
    pub id: TransactionId,

    /// Transaction date
    pub date: NaiveDate,

    /// Short description
    pub name: String,

    /// Non-negative amount; direction is carried by `txn_type`
    pub amount: f64,

    /// Direction (debit/credit)
    #[serde(rename = "type")]
    pub txn_type: TransactionType,

    /// Top-level budget bucket
    pub category: Category,

    /// Weak reference to a sub-category; may be absent or dangling
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_category_id: Option<SubCategoryId>,

    /// Weak reference to a spending source; may be absent or dangling
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_id: Option<SourceId>,
}

impl Transaction {
    /// Create a new transaction with a fresh identity
    pub fn new(
        date: NaiveDate,
        name: impl Into<String>,
        amount: f64,
        txn_type: TransactionType,
        category: Category,
    ) -> Self {
        Self {
            id: TransactionId::new(),
            date,
            name: name.into(),
            amount,
            txn_type,
            category,
            sub_category_id: None,
            source_id: None,
        }
    }

    /// Validate the transaction
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Transaction description cannot be empty".to_string());
        }
        if !self.amount.is_finite() || self.amount < 0.0 {
            return Err(format!("Amount must be non-negative, got {}", self.amount));
        }
        Ok(())
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} ({})",
            self.date.format("%Y-%m-%d"),
            self.name,
            self.amount,
            self.txn_type
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Transaction {
        Transaction::new(
            NaiveDate::from_ymd_opt(2025, 11, 28).unwrap(),
            "AMAZON",
            479.05,
            TransactionType::Debit,
            Category::Essential,
        )
    }

    #[test]
    fn test_validate_rejects_negative_amount() {
        let mut txn = sample();
        txn.amount = -1.0;
        assert!(txn.validate().is_err());
    }

    #[test]
    fn test_type_serializes_lowercase() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["type"], "debit");
        assert_eq!(json["date"], "2025-11-28");
        assert_eq!(json["category"], "Essential");
    }

    #[test]
    fn test_deserialize_from_exchange_format() {
        let json = r#"{
            "id": "txn-1",
            "date": "2025-12-01",
            "name": "Rent Payment",
            "amount": 19000.0,
            "type": "debit",
            "category": "Essential",
            "subCategoryId": "sub-1",
            "sourceId": "src-1"
        }"#;
        let txn: Transaction = serde_json::from_str(json).unwrap();
        assert_eq!(txn.amount, 19000.0);
        assert_eq!(txn.sub_category_id.unwrap().as_str(), "sub-1");
        assert_eq!(txn.source_id.unwrap().as_str(), "src-1");
    }

    #[test]
    fn test_parse_type_aliases() {
        assert_eq!("Expense".parse::<TransactionType>().unwrap(), TransactionType::Debit);
        assert_eq!("income".parse::<TransactionType>().unwrap(), TransactionType::Credit);
    }
}
