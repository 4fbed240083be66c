//! Staging/review workflow
//!
//! A two-state machine around the import pipeline. In `Input` it accepts raw
//! statement text; parsing it populates the pending list and moves to
//! `Review`, where every field is editable and items can be (de)selected.
//! Confirming commits the selected items to the ledger in one batch and
//! returns to `Input`; unselected items are silently discarded.

use chrono::NaiveDate;

use super::categorizer::categorize;
use super::extractor::extract;
use super::segmenter::segment;
use crate::error::{BudgetError, BudgetResult};
use crate::models::{
    Category, PendingId, PendingTransaction, SubCategory, SubCategoryId, Transaction,
    TransactionType,
};
use crate::store::LedgerStore;

/// The workflow's current state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WorkflowState {
    /// Accepting raw text
    #[default]
    Input,
    /// Pending list populated, awaiting edits and confirmation
    Review,
}

/// One import session: raw text plus the user-editable pending list
#[derive(Debug, Clone, Default)]
pub struct ImportWorkflow {
    state: WorkflowState,
    raw_text: String,
    pending: Vec<PendingTransaction>,
}

impl ImportWorkflow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> WorkflowState {
        self.state
    }

    pub fn pending(&self) -> &[PendingTransaction] {
        &self.pending
    }

    /// Number of currently selected items
    pub fn selected_count(&self) -> usize {
        self.pending.iter().filter(|p| p.is_selected).count()
    }

    /// Parse raw text into the pending list and transition to `Review`.
    ///
    /// On failure (`NoDatesFound`, `NoUsableCandidates`) the workflow stays
    /// in `Input` with nothing staged; the condition is surfaced to the
    /// caller, never swallowed.
    pub fn start_review(&mut self, text: &str, store: &LedgerStore) -> BudgetResult<usize> {
        let blocks = segment(text)?;
        let default_source = store.default_source_id();

        let mut pending = Vec::new();
        for block in &blocks {
            let Some(fields) = extract(block) else {
                continue;
            };
            let guess = categorize(fields.amount, fields.txn_type, store);
            pending.push(PendingTransaction {
                id: PendingId::new(),
                date: fields.date,
                original_description: fields.original_description,
                name: fields.name,
                amount: fields.amount,
                txn_type: fields.txn_type,
                category: guess.category,
                sub_category_id: guess.sub_category_id,
                source_id: default_source.clone(),
                is_selected: true,
            });
        }

        if pending.is_empty() {
            return Err(BudgetError::NoUsableCandidates);
        }

        let count = pending.len();
        self.raw_text = text.to_string();
        self.pending = pending;
        self.state = WorkflowState::Review;
        Ok(count)
    }

    // === Per-item edits (Review state) ===

    pub fn set_name(&mut self, id: &PendingId, name: impl Into<String>) -> BudgetResult<()> {
        self.item_mut(id)?.name = name.into();
        Ok(())
    }

    pub fn set_date(&mut self, id: &PendingId, date: NaiveDate) -> BudgetResult<()> {
        self.item_mut(id)?.date = date;
        Ok(())
    }

    pub fn set_amount(&mut self, id: &PendingId, amount: f64) -> BudgetResult<()> {
        if !amount.is_finite() || amount < 0.0 {
            return Err(BudgetError::Validation(format!(
                "Amount must be non-negative, got {}",
                amount
            )));
        }
        self.item_mut(id)?.amount = amount;
        Ok(())
    }

    /// Change an item's direction. Flipping resets category and sub-category
    /// to the canonical default for the new direction, discarding any manual
    /// category choice made before the flip.
    pub fn set_type(
        &mut self,
        id: &PendingId,
        txn_type: TransactionType,
        store: &LedgerStore,
    ) -> BudgetResult<()> {
        let category = if txn_type.is_credit() {
            Category::Income
        } else {
            Category::Essential
        };
        let sub = store.first_sub_category_in(category).map(|s| s.id.clone());

        let item = self.item_mut(id)?;
        item.txn_type = txn_type;
        item.category = category;
        item.sub_category_id = sub;
        Ok(())
    }

    /// Change an item's category; the sub-category resets to the first one
    /// under the new category.
    pub fn set_category(
        &mut self,
        id: &PendingId,
        category: Category,
        store: &LedgerStore,
    ) -> BudgetResult<()> {
        let sub = store.first_sub_category_in(category).map(|s| s.id.clone());
        let item = self.item_mut(id)?;
        item.category = category;
        item.sub_category_id = sub;
        Ok(())
    }

    pub fn set_sub_category(
        &mut self,
        id: &PendingId,
        sub_category_id: Option<SubCategoryId>,
    ) -> BudgetResult<()> {
        self.item_mut(id)?.sub_category_id = sub_category_id;
        Ok(())
    }

    /// Create a new sub-category under the item's current category and make
    /// it the item's selection in one step.
    pub fn create_sub_category(
        &mut self,
        id: &PendingId,
        name: impl Into<String>,
        store: &mut LedgerStore,
    ) -> BudgetResult<SubCategory> {
        let category = self.item(id)?.category;
        let sub = store.add_sub_category(name, category)?;
        self.item_mut(id)?.sub_category_id = Some(sub.id.clone());
        Ok(sub)
    }

    // === Selection ===

    pub fn set_selected(&mut self, id: &PendingId, selected: bool) -> BudgetResult<()> {
        self.item_mut(id)?.is_selected = selected;
        Ok(())
    }

    /// Bulk select or deselect every pending item
    pub fn select_all(&mut self, selected: bool) {
        for item in &mut self.pending {
            item.is_selected = selected;
        }
    }

    /// Empty the pending list without leaving the review session
    pub fn clear_pending(&mut self) {
        self.pending.clear();
    }

    // === Terminal actions ===

    /// Commit every selected item to the ledger in one atomic batch append,
    /// each promoted with a fresh identity. Clears the session and returns
    /// to `Input`. The committed transactions are returned for display.
    pub fn confirm(&mut self, store: &mut LedgerStore) -> BudgetResult<Vec<Transaction>> {
        if self.state != WorkflowState::Review {
            return Err(BudgetError::Validation(
                "No import session in progress".to_string(),
            ));
        }

        let batch: Vec<Transaction> = self
            .pending
            .iter()
            .filter(|p| p.is_selected)
            .map(PendingTransaction::promote)
            .collect();

        store.append_transactions(batch.clone())?;

        self.pending.clear();
        self.raw_text.clear();
        self.state = WorkflowState::Input;
        Ok(batch)
    }

    /// Discard the whole session and return to `Input`
    pub fn cancel(&mut self) {
        self.pending.clear();
        self.raw_text.clear();
        self.state = WorkflowState::Input;
    }

    // === Internals ===

    fn item(&self, id: &PendingId) -> BudgetResult<&PendingTransaction> {
        self.pending
            .iter()
            .find(|p| &p.id == id)
            .ok_or_else(|| BudgetError::pending_not_found(id.as_str()))
    }

    fn item_mut(&mut self, id: &PendingId) -> BudgetResult<&mut PendingTransaction> {
        self.pending
            .iter_mut()
            .find(|p| &p.id == id)
            .ok_or_else(|| BudgetError::pending_not_found(id.as_str()))
    }
}
