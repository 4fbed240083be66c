//! Display formatting for terminal output
//!
//! Formats models and reports for terminal display. Amounts render in the
//! Indian numbering system (lakh/crore grouping) with no decimals.

use crate::models::{PendingTransaction, Transaction};
use crate::reports::{Insights, Summary};
use crate::store::LedgerStore;

/// Format a rupee amount with en-IN digit grouping and no decimals,
/// e.g. `1234567` renders as `₹12,34,567`.
pub fn format_inr(amount: f64) -> String {
    let negative = amount < 0.0;
    let digits = (amount.abs().round() as u64).to_string();

    let grouped = if digits.len() <= 3 {
        digits
    } else {
        let (head, tail) = digits.split_at(digits.len() - 3);
        let mut parts: Vec<&str> = Vec::new();
        let mut i = head.len();
        while i > 2 {
            parts.push(&head[i - 2..i]);
            i -= 2;
        }
        parts.push(&head[..i]);
        parts.reverse();
        format!("{},{}", parts.join(","), tail)
    };

    if negative {
        format!("-₹{grouped}")
    } else {
        format!("₹{grouped}")
    }
}

/// Format a single transaction for display (register row)
pub fn format_transaction_row(txn: &Transaction, store: &LedgerStore) -> String {
    let sub_name = store.sub_category_name(txn.sub_category_id.as_ref());
    let source_name = store.source_name(txn.source_id.as_ref());
    let amount = if txn.txn_type.is_credit() {
        format!("+{}", format_inr(txn.amount))
    } else {
        format_inr(txn.amount)
    };

    format!(
        "{} {:25} {:10} {:15} {:15} {:>12}",
        txn.date.format("%Y-%m-%d"),
        truncate(&txn.name, 25),
        txn.category.as_str(),
        truncate(sub_name, 15),
        truncate(source_name, 15),
        amount
    )
}

/// Format a list of transactions as a register
pub fn format_transaction_register(transactions: &[Transaction], store: &LedgerStore) -> String {
    if transactions.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:10} {:25} {:10} {:15} {:15} {:>12}\n",
        "Date", "Name", "Category", "Sub-category", "Source", "Amount"
    ));
    output.push_str(&"-".repeat(94));
    output.push('\n');

    for txn in transactions {
        output.push_str(&format_transaction_row(txn, store));
        output.push('\n');
    }

    output
}

/// Format one staged candidate for the review listing
pub fn format_pending_row(index: usize, item: &PendingTransaction, store: &LedgerStore) -> String {
    let mark = if item.is_selected { "[x]" } else { "[ ]" };
    let sub_name = store.sub_category_name(item.sub_category_id.as_ref());

    format!(
        "{:>3} {} {} {:25} {:6} {:10} {:15} {:>12}",
        index,
        mark,
        item.date.format("%Y-%m-%d"),
        truncate(&item.name, 25),
        item.txn_type.to_string(),
        item.category.as_str(),
        truncate(sub_name, 15),
        format_inr(item.amount)
    )
}

/// Format the staged candidates, with the raw excerpt under each row
pub fn format_pending_list(pending: &[PendingTransaction], store: &LedgerStore) -> String {
    if pending.is_empty() {
        return "No staged candidates.\n".to_string();
    }

    let mut output = String::new();
    for (i, item) in pending.iter().enumerate() {
        output.push_str(&format_pending_row(i, item, store));
        output.push('\n');
        output.push_str(&format!("      raw: {}\n", item.original_description));
    }
    output.push_str(&format!(
        "\n{} of {} selected\n",
        pending.iter().filter(|p| p.is_selected).count(),
        pending.len()
    ));

    output
}

/// Format the budget summary with per-category targets
pub fn format_summary(summary: &Summary, insights: &Insights) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "Total income:  {}\n",
        format_inr(summary.total_income)
    ));
    output.push_str(&format!(
        "Net income:    {}  (after savings)\n",
        format_inr(summary.net_income)
    ));
    output.push_str(&format!(
        "Total spent:   {}\n\n",
        format_inr(summary.total_spent)
    ));

    output.push_str(&format!(
        "{:12} {:>12} {:>12}\n",
        "Category", "Spent", "Target"
    ));
    output.push_str(&"-".repeat(38));
    output.push('\n');
    for category in crate::models::Category::SPENDING {
        output.push_str(&format!(
            "{:12} {:>12} {:>12}\n",
            category.to_string(),
            format_inr(summary.totals.for_category(category)),
            format_inr(summary.target(category))
        ));
    }

    output.push_str(&format!(
        "\nTop sub-category:  {} ({})\n",
        insights.highest_sub_name,
        format_inr(insights.highest_sub_amount)
    ));
    output.push_str(&format!("Investment rate:   {}%\n", insights.investment_rate));
    for alert in &insights.alerts {
        output.push_str(&format!("! {alert}\n"));
    }

    output
}

/// Truncate a string to a maximum length, appending an ellipsis marker
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", truncated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, TransactionType};
    use chrono::NaiveDate;

    #[test]
    fn test_format_inr_small_amounts() {
        assert_eq!(format_inr(0.0), "₹0");
        assert_eq!(format_inr(479.05), "₹479");
        assert_eq!(format_inr(999.6), "₹1,000");
    }

    #[test]
    fn test_format_inr_lakh_crore_grouping() {
        assert_eq!(format_inr(1_200.0), "₹1,200");
        assert_eq!(format_inr(19_000.0), "₹19,000");
        assert_eq!(format_inr(100_000.0), "₹1,00,000");
        assert_eq!(format_inr(1_234_567.0), "₹12,34,567");
        assert_eq!(format_inr(12_345_678.0), "₹1,23,45,678");
    }

    #[test]
    fn test_format_inr_negative() {
        assert_eq!(format_inr(-500.0), "-₹500");
    }

    #[test]
    fn test_truncate_long_names() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a very long merchant name", 10), "a very ...");
    }

    #[test]
    fn test_register_resolves_dangling_references() {
        let store = LedgerStore::new();
        let mut txn = Transaction::new(
            NaiveDate::from_ymd_opt(2025, 12, 1).unwrap(),
            "Rent",
            19_000.0,
            TransactionType::Debit,
            Category::Essential,
        );
        txn.sub_category_id = Some("gone".into());
        txn.source_id = Some("also-gone".into());

        let row = format_transaction_row(&txn, &store);
        assert!(row.contains("Uncategorized"));
        assert!(row.contains("(no source)"));
    }

    #[test]
    fn test_empty_register_message() {
        let store = LedgerStore::new();
        assert_eq!(
            format_transaction_register(&[], &store),
            "No transactions found.\n"
        );
    }
}
