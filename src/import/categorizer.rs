//! Auto-categorizer
//!
//! Assigns a best-guess category and sub-category to an extracted candidate.
//! Intentionally coarse: the rules only need to reduce review effort, the
//! workflow always permits a full override.

use crate::models::{Category, SubCategoryId, TransactionType};
use crate::store::LedgerStore;

/// Debits under this amount are assumed to be small "wants" purchases
const SMALL_DEBIT_THRESHOLD: f64 = 100.0;

/// Sub-category name looked up for small debits (sic, matches user data)
const SMALL_DEBIT_SUB: &str = "miscellenous";

/// Best-guess categorization for one candidate
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryGuess {
    pub category: Category,
    pub sub_category_id: Option<SubCategoryId>,
}

/// Guess a category and sub-category from the candidate's amount and
/// direction. Tie-breaks are deterministic: "first by collection order".
pub fn categorize(amount: f64, txn_type: TransactionType, store: &LedgerStore) -> CategoryGuess {
    if txn_type.is_credit() {
        return CategoryGuess {
            category: Category::Income,
            sub_category_id: store
                .first_sub_category_in(Category::Income)
                .map(|s| s.id.clone()),
        };
    }

    if amount < SMALL_DEBIT_THRESHOLD {
        if let Some(sub) = store.sub_category_by_name(SMALL_DEBIT_SUB, Category::Wants) {
            return CategoryGuess {
                category: Category::Wants,
                sub_category_id: Some(sub.id.clone()),
            };
        }
    }

    CategoryGuess {
        category: Category::Essential,
        sub_category_id: store
            .first_sub_category_in(Category::Essential)
            .map(|s| s.id.clone()),
    }
}
