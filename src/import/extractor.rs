//! Field extractor
//!
//! Pulls the typed fields out of one statement block: date, amount, direction
//! and a cleaned description. Blocks without a parseable date or without any
//! monetary token are skipped rather than failing the whole import.

use std::sync::OnceLock;

use chrono::NaiveDate;
use regex::Regex;

use super::segmenter::date_regex;
use crate::models::TransactionType;

/// Statement money format: digits/thousands-commas, a decimal point and
/// exactly two decimals. Integers without a decimal point are never amounts.
fn money_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[\d,]+\.\d{2}").expect("invalid money regex"))
}

/// Boilerplate patterns stripped from descriptions, applied in order
fn boilerplate_regexes() -> &'static Vec<Regex> {
    static RES: OnceLock<Vec<Regex>> = OnceLock::new();
    RES.get_or_init(|| {
        [
            r"UPI/P2M/(?:\d+/)?",
            r"UPI/P2A/(?:\d+/)?",
            r"NEFT/[A-Z0-9]+/",
            r"(?i)/Paymen/.*",
            r"(?i)YES BANK LIMITED YBS",
            r"(?i)HDFC BANK LTD",
            r"(?i)AXIS BANK",
        ]
        .iter()
        .map(|p| Regex::new(p).expect("invalid boilerplate regex"))
        .collect()
    })
}

fn non_alnum_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[^\w\s]").expect("invalid symbol regex"))
}

fn whitespace_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\s+").expect("invalid ws regex"))
}

/// Narration keywords that mark an inflow, checked against upper-cased text
const CREDIT_MARKERS: [&str; 3] = ["SALARY", "CREDIT", "REFUND"];

/// Substitute description when cleanup leaves fewer than 3 characters
const FALLBACK_NAME: &str = "Imported Transaction";

/// Stored description length cap
const NAME_MAX: usize = 30;

/// Raw-block excerpt length kept for review
const ORIGINAL_DESC_MAX: usize = 100;

/// Typed fields extracted from one statement block
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractedFields {
    pub date: NaiveDate,
    pub amount: f64,
    pub txn_type: TransactionType,
    /// Cleaned description, at most 30 characters
    pub name: String,
    /// First 100 characters of the raw block, newlines flattened
    pub original_description: String,
}

/// Extract fields from one block, or `None` when the block has no usable
/// date or no monetary token.
pub fn extract(block: &str) -> Option<ExtractedFields> {
    let date_match = date_regex().find(block)?;
    let date = parse_statement_date(date_match.as_str())?;

    let tokens: Vec<&str> = money_regex().find_iter(block).map(|m| m.as_str()).collect();
    if tokens.is_empty() {
        return None;
    }

    let amounts: Vec<f64> = tokens
        .iter()
        .filter_map(|t| t.replace(',', "").parse::<f64>().ok())
        .collect();
    if amounts.len() != tokens.len() {
        return None;
    }

    // With two or more tokens the trailing pair is usually
    // `amount, running-balance`; the amount precedes the balance. A single
    // token is the amount wherever it sits.
    let (amount, txn_type) = if amounts.len() >= 2 {
        let upper = block.to_uppercase();
        let txn_type = if CREDIT_MARKERS.iter().any(|m| upper.contains(m)) {
            TransactionType::Credit
        } else {
            TransactionType::Debit
        };
        (amounts[amounts.len() - 2], txn_type)
    } else {
        // No balance column to disambiguate narration, so never reclassify
        (amounts[0], TransactionType::Debit)
    };

    Some(ExtractedFields {
        date,
        amount,
        txn_type,
        name: clean_description(block, &tokens),
        original_description: excerpt(block),
    })
}

/// Reinterpret a DD-MM-YYYY (or DD/MM/YYYY) statement date
fn parse_statement_date(raw: &str) -> Option<NaiveDate> {
    let normalized = raw.replace('/', "-");
    let mut parts = normalized.split('-');
    let day: u32 = parts.next()?.parse().ok()?;
    let month: u32 = parts.next()?.parse().ok()?;
    let year: i32 = parts.next()?.parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Strip dates, money tokens and bank boilerplate, collapse symbols and
/// whitespace, and fall back to a placeholder for degenerate results.
fn clean_description(block: &str, tokens: &[&str]) -> String {
    let mut desc = date_regex().replace_all(block, "").into_owned();
    for token in tokens {
        desc = desc.replacen(token, "", 1);
    }
    for re in boilerplate_regexes() {
        desc = re.replace_all(&desc, "").into_owned();
    }
    let desc = non_alnum_regex().replace_all(&desc, " ");
    let desc = whitespace_regex().replace_all(&desc, " ");
    let desc = desc.trim();

    if desc.chars().count() < 3 {
        return FALLBACK_NAME.to_string();
    }
    desc.chars().take(NAME_MAX).collect()
}

/// First 100 characters of the raw block with newlines flattened, plus an
/// ellipsis marker so reviewers know it is an excerpt.
fn excerpt(block: &str) -> String {
    let flat: String = block
        .chars()
        .take(ORIGINAL_DESC_MAX)
        .map(|c| if c == '\n' { ' ' } else { c })
        .collect();
    format!("{}...", flat)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_token_amount_is_second_to_last() {
        let fields = extract("28-11-2025 some long store purchase 1,000.00 5,000.00").unwrap();
        assert_eq!(fields.amount, 1000.00);
    }

    #[test]
    fn test_single_token_amount() {
        let fields = extract("28-11-2025 UPI/P2M/AMAZON 479.05").unwrap();
        assert_eq!(fields.amount, 479.05);
        assert_eq!(fields.txn_type, TransactionType::Debit);
    }

    #[test]
    fn test_date_reinterpreted_day_month_year() {
        let fields = extract("28-11-2025 UPI/P2M/AMAZON 479.05").unwrap();
        assert_eq!(fields.date, NaiveDate::from_ymd_opt(2025, 11, 28).unwrap());
    }

    #[test]
    fn test_slash_date_normalized() {
        let fields = extract("05/01/2026 coffee shop visit 120.00").unwrap();
        assert_eq!(fields.date, NaiveDate::from_ymd_opt(2026, 1, 5).unwrap());
    }

    #[test]
    fn test_no_money_token_skips_block() {
        assert!(extract("28-11-2025 ATM withdrawal of 5000").is_none());
    }

    #[test]
    fn test_credit_needs_two_tokens() {
        let two = extract("30-11-2025 NEFT SALARY NOVEMBER 50,000.00 55,000.00").unwrap();
        assert_eq!(two.txn_type, TransactionType::Credit);

        let one = extract("30-11-2025 NEFT SALARY NOVEMBER 50,000.00").unwrap();
        assert_eq!(one.txn_type, TransactionType::Debit);
    }

    #[test]
    fn test_refund_marker_is_case_insensitive_via_uppercase() {
        let fields = extract("30-11-2025 refund from store 250.00 1,250.00").unwrap();
        assert_eq!(fields.txn_type, TransactionType::Credit);
    }

    #[test]
    fn test_upi_reference_stripped() {
        let fields = extract("28-11-2025 UPI/P2M/1234567890/AMAZON 479.05").unwrap();
        assert_eq!(fields.name, "AMAZON");
    }

    #[test]
    fn test_upi_prefix_without_reference_number_stripped() {
        let fields = extract("28-11-2025 UPI/P2M/AMAZON 479.05").unwrap();
        assert_eq!(fields.name, "AMAZON");
    }

    #[test]
    fn test_neft_reference_stripped() {
        let fields = extract("30-11-2025 NEFT/AB12CD34/ACME CORP 50,000.00 55,000.00").unwrap();
        assert_eq!(fields.name, "ACME CORP");
    }

    #[test]
    fn test_bank_name_literal_stripped() {
        let fields = extract("28-11-2025 AXIS BANK transfer to landlord 19,000.00").unwrap();
        assert!(!fields.name.to_uppercase().contains("AXIS"));
        assert!(fields.name.contains("transfer to landlord"));
    }

    #[test]
    fn test_degenerate_description_falls_back() {
        let fields = extract("28-11-2025 ** 479.05").unwrap();
        assert_eq!(fields.name, "Imported Transaction");
    }

    #[test]
    fn test_name_truncated_to_30_chars() {
        let fields =
            extract("28-11-2025 a very long merchant narration that keeps going 479.05").unwrap();
        assert!(fields.name.chars().count() <= 30);
    }

    #[test]
    fn test_original_description_excerpt() {
        let block = format!("28-11-2025 line one\nline two {}", "x".repeat(120));
        let fields = extract(&format!("{} 479.05", block)).unwrap();
        assert!(fields.original_description.ends_with("..."));
        assert!(!fields.original_description.contains('\n'));
        assert!(fields.original_description.chars().count() <= ORIGINAL_DESC_MAX + 3);
    }

    #[test]
    fn test_invalid_calendar_date_skips_block() {
        assert!(extract("45-13-2025 some purchase text 479.05").is_none());
    }
}
