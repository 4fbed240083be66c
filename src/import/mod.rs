//! Heuristic bank-statement importer
//!
//! Pipeline: [`segment`] splits pasted text into date-anchored blocks,
//! [`extract`] pulls typed fields from each block, [`categorize`] guesses a
//! category, and [`ImportWorkflow`] stages the candidates for review before
//! anything reaches the ledger.

pub mod categorizer;
pub mod extractor;
pub mod segmenter;
pub mod workflow;

pub use categorizer::{categorize, CategoryGuess};
pub use extractor::{extract, ExtractedFields};
pub use segmenter::segment;
pub use workflow::{ImportWorkflow, WorkflowState};
