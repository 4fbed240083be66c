//! Budget summaries and insights
//!
//! Everything here is derived on demand from the ledger; nothing is cached or
//! persisted. Spending totals only count debit transactions, and debits filed
//! under Income are excluded from every spending figure.

use crate::models::{Category, SubCategoryId};
use crate::store::LedgerStore;

/// Debit totals per spending category
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CategoryTotals {
    pub essential: f64,
    pub wants: f64,
    pub investment: f64,
}

impl CategoryTotals {
    pub fn for_category(&self, category: Category) -> f64 {
        match category {
            Category::Essential => self.essential,
            Category::Wants => self.wants,
            Category::Investment => self.investment,
            Category::Income => 0.0,
        }
    }
}

/// Snapshot of the budget position
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    pub totals: CategoryTotals,
    pub total_spent: f64,
    /// Declared monthly income plus all credit transactions
    pub total_income: f64,
    /// Income remaining after the savings carve-out, floored at zero
    pub net_income: f64,
}

impl Summary {
    pub fn compute(store: &LedgerStore) -> Self {
        let credits: f64 = store
            .transactions()
            .iter()
            .filter(|t| t.txn_type.is_credit())
            .map(|t| t.amount)
            .sum();
        let total_income = credits + store.income();
        let net_income = (total_income - store.savings()).max(0.0);

        let mut totals = CategoryTotals::default();
        for txn in store.transactions() {
            if txn.txn_type.is_credit() || txn.category == Category::Income {
                continue;
            }
            match txn.category {
                Category::Essential => totals.essential += txn.amount,
                Category::Wants => totals.wants += txn.amount,
                Category::Investment => totals.investment += txn.amount,
                Category::Income => unreachable!(),
            }
        }
        let total_spent = totals.essential + totals.wants + totals.investment;

        Self {
            totals,
            total_spent,
            total_income,
            net_income,
        }
    }

    /// 50/25/25 allocation target for a category, over net income
    pub fn target(&self, category: Category) -> f64 {
        self.net_income * category.target_share()
    }
}

/// Derived observations surfaced alongside the summary
#[derive(Debug, Clone, PartialEq)]
pub struct Insights {
    pub highest_sub_name: String,
    pub highest_sub_amount: f64,
    pub alerts: Vec<String>,
    /// Investment spend as a rounded percentage of total income
    pub investment_rate: i64,
}

/// Compute insights from the store and an already-computed summary
pub fn insights(store: &LedgerStore, summary: &Summary) -> Insights {
    // Totals per sub-category over all debits, in first-seen order so that
    // ties resolve deterministically to the earlier transaction.
    let mut sub_totals: Vec<(Option<&SubCategoryId>, f64)> = Vec::new();
    for txn in store.transactions() {
        if txn.txn_type.is_credit() {
            continue;
        }
        let key = txn.sub_category_id.as_ref();
        match sub_totals.iter_mut().find(|(k, _)| *k == key) {
            Some((_, total)) => *total += txn.amount,
            None => sub_totals.push((key, txn.amount)),
        }
    }

    let mut highest_sub_id: Option<&SubCategoryId> = None;
    let mut highest_sub_amount = 0.0;
    for &(id, amount) in &sub_totals {
        if amount > highest_sub_amount {
            highest_sub_amount = amount;
            highest_sub_id = id;
        }
    }
    let highest_sub_name = highest_sub_id
        .and_then(|id| store.sub_category(id))
        .map(|s| s.name.clone())
        .unwrap_or_else(|| "None".to_string());

    let mut alerts = Vec::new();
    let essential_target = summary.target(Category::Essential);
    if summary.totals.essential > essential_target && essential_target > 0.0 {
        let pct = ((summary.totals.essential - essential_target) / essential_target * 100.0)
            .round() as i64;
        alerts.push(format!("Essential spending is {pct}% over target."));
    }
    let wants_target = summary.target(Category::Wants);
    if summary.totals.wants > wants_target && wants_target > 0.0 {
        let pct = ((summary.totals.wants - wants_target) / wants_target * 100.0).round() as i64;
        alerts.push(format!("'Wants' budget exceeded by {pct}%."));
    }

    let investment_rate = if summary.total_income > 0.0 {
        (summary.totals.investment / summary.total_income * 100.0).round() as i64
    } else {
        0
    };

    Insights {
        highest_sub_name,
        highest_sub_amount,
        alerts,
        investment_rate,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Transaction, TransactionType};
    use chrono::NaiveDate;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 12, d).unwrap()
    }

    fn txn(name: &str, amount: f64, txn_type: TransactionType, category: Category) -> Transaction {
        Transaction::new(date(1), name, amount, txn_type, category)
    }

    fn store_with(income: f64, savings: f64, txns: Vec<Transaction>) -> LedgerStore {
        let mut store = LedgerStore::with_defaults();
        store.set_income(income);
        store.set_savings(savings);
        for t in txns {
            store.add_transaction(t).unwrap();
        }
        store
    }

    #[test]
    fn test_total_income_adds_credits_to_declared_income() {
        let store = store_with(
            80_000.0,
            0.0,
            vec![txn("Bonus", 5_000.0, TransactionType::Credit, Category::Income)],
        );
        let summary = Summary::compute(&store);
        assert_eq!(summary.total_income, 85_000.0);
    }

    #[test]
    fn test_net_income_floors_at_zero() {
        let store = store_with(10_000.0, 50_000.0, vec![]);
        assert_eq!(Summary::compute(&store).net_income, 0.0);
    }

    #[test]
    fn test_income_category_debits_excluded_from_spending() {
        let store = store_with(
            50_000.0,
            0.0,
            vec![
                txn("Rent", 19_000.0, TransactionType::Debit, Category::Essential),
                txn("Reversal", 500.0, TransactionType::Debit, Category::Income),
            ],
        );
        let summary = Summary::compute(&store);
        assert_eq!(summary.total_spent, 19_000.0);
        assert_eq!(summary.totals.essential, 19_000.0);
    }

    #[test]
    fn test_targets_follow_fifty_twenty_five_split() {
        let store = store_with(100_000.0, 20_000.0, vec![]);
        let summary = Summary::compute(&store);
        assert_eq!(summary.net_income, 80_000.0);
        assert_eq!(summary.target(Category::Essential), 40_000.0);
        assert_eq!(summary.target(Category::Wants), 20_000.0);
        assert_eq!(summary.target(Category::Investment), 20_000.0);
        assert_eq!(summary.target(Category::Income), 0.0);
    }

    #[test]
    fn test_highest_spending_sub_category() {
        let mut store = store_with(100_000.0, 0.0, vec![]);
        let rent = store.sub_category_by_name("Rent", Category::Essential).unwrap().id.clone();
        let mut t1 = txn("Rent", 19_000.0, TransactionType::Debit, Category::Essential);
        t1.sub_category_id = Some(rent);
        let mut t2 = txn("Snacks", 300.0, TransactionType::Debit, Category::Wants);
        t2.sub_category_id = store
            .sub_category_by_name("miscellenous", Category::Wants)
            .map(|s| s.id.clone());
        store.add_transaction(t1).unwrap();
        store.add_transaction(t2).unwrap();

        let summary = Summary::compute(&store);
        let insights = insights(&store, &summary);
        assert_eq!(insights.highest_sub_name, "Rent");
        assert_eq!(insights.highest_sub_amount, 19_000.0);
    }

    #[test]
    fn test_no_debits_yields_none_placeholder() {
        let store = store_with(50_000.0, 0.0, vec![]);
        let summary = Summary::compute(&store);
        let insights = insights(&store, &summary);
        assert_eq!(insights.highest_sub_name, "None");
        assert_eq!(insights.highest_sub_amount, 0.0);
        assert!(insights.alerts.is_empty());
    }

    #[test]
    fn test_overspend_alerts_report_percentage_over_target() {
        // net income 40k: Essential target 20k, Wants target 10k
        let store = store_with(
            40_000.0,
            0.0,
            vec![
                txn("Rent", 30_000.0, TransactionType::Debit, Category::Essential),
                txn("Gadget", 15_000.0, TransactionType::Debit, Category::Wants),
            ],
        );
        let summary = Summary::compute(&store);
        let insights = insights(&store, &summary);
        assert_eq!(
            insights.alerts,
            vec![
                "Essential spending is 50% over target.".to_string(),
                "'Wants' budget exceeded by 50%.".to_string(),
            ]
        );
    }

    #[test]
    fn test_investment_rate_rounds_against_total_income() {
        let store = store_with(
            90_000.0,
            0.0,
            vec![txn("Index Fund", 30_000.0, TransactionType::Debit, Category::Investment)],
        );
        let summary = Summary::compute(&store);
        assert_eq!(insights(&store, &summary).investment_rate, 33);
    }

    #[test]
    fn test_investment_rate_zero_without_income() {
        let store = store_with(
            0.0,
            0.0,
            vec![txn("Index Fund", 5_000.0, TransactionType::Debit, Category::Investment)],
        );
        let summary = Summary::compute(&store);
        assert_eq!(insights(&store, &summary).investment_rate, 0);
    }
}
