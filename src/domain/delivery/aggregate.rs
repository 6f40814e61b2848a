//! Sales delivery aggregate.
//!
//! Header plus owned line items, treated as one persistence unit.
//! Exactly one instance is current in an edit screen at any time; the
//! edit controller owns it.
//!
//! # Invariants
//!
//! - `doc_entry` is absent until the first successful save
//! - delete-marked lines stay in the collection until a save reconciles
//!   them; the view only ever receives `visible_lines()`
//! - deleting the document is a state change reconciled by save, not a
//!   separate operation

use crate::domain::foundation::{
    Condition, ConditionOperation, Criteria, DocEntry, LineId, Timestamp,
};
use serde::{Deserialize, Serialize};

use super::line::{DeliveryLines, SalesDeliveryItem};

/// Persistence state of the whole document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentStatus {
    New,
    Persisted,
    MarkedDeleted,
}

/// Sales delivery document: header fields plus line items.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesDelivery {
    /// Server-assigned entry number; absent while new.
    doc_entry: Option<DocEntry>,

    /// Code of the delivered-to customer.
    customer_code: String,

    /// Display name of the delivered-to customer.
    customer_name: String,

    /// Owned line items, delete-marked lines included.
    lines: DeliveryLines,

    /// Persistence state.
    status: DocumentStatus,

    /// Unsaved local changes since the last save round-trip.
    dirty: bool,

    /// When the document was created locally or first fetched.
    created_at: Timestamp,

    /// When the document was last touched.
    updated_at: Timestamp,
}

impl SalesDelivery {
    /// Creates an empty, unsaved document.
    pub fn new() -> Self {
        let now = Timestamp::now();
        Self {
            doc_entry: None,
            customer_code: String::new(),
            customer_name: String::new(),
            lines: DeliveryLines::new(),
            status: DocumentStatus::New,
            dirty: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// Reconstitutes a persisted document, e.g. from a fetch result.
    pub fn reconstitute(
        doc_entry: DocEntry,
        customer_code: impl Into<String>,
        customer_name: impl Into<String>,
        items: Vec<SalesDeliveryItem>,
    ) -> Self {
        let now = Timestamp::now();
        Self {
            doc_entry: Some(doc_entry),
            customer_code: customer_code.into(),
            customer_name: customer_name.into(),
            lines: DeliveryLines::from_items(items),
            status: DocumentStatus::Persisted,
            dirty: false,
            created_at: now,
            updated_at: now,
        }
    }

    // ─────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────

    pub fn doc_entry(&self) -> Option<DocEntry> {
        self.doc_entry
    }

    pub fn customer_code(&self) -> &str {
        &self.customer_code
    }

    pub fn customer_name(&self) -> &str {
        &self.customer_name
    }

    pub fn status(&self) -> DocumentStatus {
        self.status
    }

    /// Whether the document was never saved.
    pub fn is_new(&self) -> bool {
        self.status == DocumentStatus::New
    }

    /// Whether the document is flagged for deletion on the next save.
    pub fn is_deleted(&self) -> bool {
        self.status == DocumentStatus::MarkedDeleted
    }

    /// Whether there are unsaved local changes.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    pub fn updated_at(&self) -> &Timestamp {
        &self.updated_at
    }

    /// Lines the view shows: everything not marked deleted.
    pub fn visible_lines(&self) -> Vec<&SalesDeliveryItem> {
        self.lines.visible()
    }

    /// The whole line collection, delete-marked lines included.
    pub fn lines(&self) -> &DeliveryLines {
        &self.lines
    }

    /// Criteria selecting this document on re-fetch; `None` while the
    /// document has no entry number yet.
    pub fn criteria(&self) -> Option<Criteria> {
        let entry = self.doc_entry?;
        Some(Criteria::new().with_condition(Condition::new(
            "DocEntry",
            ConditionOperation::Equal,
            entry.to_string(),
        )))
    }

    // ─────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────

    /// Sets the customer the delivery goes to.
    pub fn set_customer(&mut self, code: impl Into<String>, name: impl Into<String>) {
        self.customer_code = code.into();
        self.customer_name = name.into();
        self.touch();
    }

    /// Appends a fresh line and returns its id.
    pub fn add_line(&mut self) -> LineId {
        let id = self.lines.create();
        self.touch();
        id
    }

    /// Removes a line following the tagged-state rule: a new line is
    /// dropped from the collection, a persisted one is soft-deleted.
    ///
    /// Returns `false` (and changes nothing) when the id is unknown.
    pub fn remove_line(&mut self, id: LineId) -> bool {
        let Some(item) = self.lines.get(id) else {
            return false;
        };
        if item.is_new() {
            self.lines.remove(id);
        } else if let Some(item) = self.lines.get_mut(id) {
            // Checked above: not new, so the transition cannot fail.
            let _ = item.mark_deleted();
        }
        self.touch();
        true
    }

    /// Sets the material code on a line. Unknown id is a no-op.
    pub fn set_line_item_code(&mut self, id: LineId, item_code: impl Into<String>) -> bool {
        match self.lines.get_mut(id) {
            Some(item) => {
                item.set_item_code(item_code);
                self.touch();
                true
            }
            None => false,
        }
    }

    /// Sets the quantity on a line. Unknown id is a no-op.
    pub fn set_line_quantity(&mut self, id: LineId, quantity: f64) -> bool {
        match self.lines.get_mut(id) {
            Some(item) => {
                item.set_quantity(quantity);
                self.touch();
                true
            }
            None => false,
        }
    }

    /// Flags the whole document for deletion on the next save.
    pub fn mark_deleted(&mut self) {
        self.status = DocumentStatus::MarkedDeleted;
        self.touch();
    }

    /// Deep copy reset to unsaved state: no entry number, all surviving
    /// lines re-tagged new, delete-marked lines left behind.
    pub fn clone_as_new(&self) -> Self {
        let now = Timestamp::now();
        let items = self
            .lines
            .iter()
            .filter(|item| !item.is_deleted())
            .map(|item| item.clone_as_new())
            .collect();
        Self {
            doc_entry: None,
            customer_code: self.customer_code.clone(),
            customer_name: self.customer_name.clone(),
            lines: DeliveryLines::from_items(items),
            status: DocumentStatus::New,
            dirty: true,
            created_at: now,
            updated_at: now,
        }
    }

    /// Save-side reconciliation: assigns the entry number, drops
    /// delete-marked lines, tags everything persisted and clean.
    pub fn mark_saved(&mut self, doc_entry: DocEntry) {
        self.doc_entry = Some(doc_entry);
        self.lines.purge_deleted();
        for item in self.lines.iter_mut() {
            item.mark_persisted();
        }
        self.status = DocumentStatus::Persisted;
        self.dirty = false;
        self.updated_at = Timestamp::now();
    }

    fn touch(&mut self) {
        self.dirty = true;
        self.updated_at = Timestamp::now();
    }
}

impl Default for SalesDelivery {
    fn default() -> Self {
        Self::new()
    }
}
