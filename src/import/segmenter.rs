//! Statement segmenter
//!
//! Splits raw pasted statement text into date-anchored blocks, each believed
//! to describe one transaction. A date match only starts a new block if enough
//! text accumulated since the previous anchor; this skips secondary date
//! fields (e.g. a value date printed next to the transaction date).

use std::sync::OnceLock;

use regex::Regex;

use crate::error::{BudgetError, BudgetResult};

/// Statement date pattern: DD-MM-YYYY or DD/MM/YYYY
pub(crate) fn date_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\d{2}[-/]\d{2}[-/]\d{4}").expect("invalid date regex"))
}

/// A later date anchor only ends the current block if the text from the
/// current anchor up to it is longer than this once trimmed.
const MIN_RECORD_SPAN: usize = 15;

/// Blocks shorter than this after trimming are discarded as noise.
const MIN_BLOCK_LEN: usize = 5;

/// Split raw statement text into one block per transaction record.
///
/// Fails with [`BudgetError::NoDatesFound`] when the text contains no date
/// anchors at all; the caller surfaces that as an actionable message.
pub fn segment(text: &str) -> BudgetResult<Vec<String>> {
    let anchors: Vec<usize> = date_regex().find_iter(text).map(|m| m.start()).collect();
    if anchors.is_empty() {
        return Err(BudgetError::NoDatesFound);
    }

    let mut blocks = Vec::new();
    for (i, &start) in anchors.iter().enumerate() {
        let mut end = text.len();
        for &next in &anchors[i + 1..] {
            if text[start..next].trim().chars().count() > MIN_RECORD_SPAN {
                end = next;
                break;
            }
        }

        let block = text[start..end].trim();
        if block.chars().count() < MIN_BLOCK_LEN {
            continue;
        }
        blocks.push(block.to_string());
    }

    Ok(blocks)
}
