//! Sales delivery line items.
//!
//! A line belongs to exactly one document and carries a tagged state
//! instead of separate new/deleted booleans, so a "new and deleted"
//! line is unrepresentable:
//!
//! - `New` - created locally, never saved; removal drops it outright
//! - `Persisted` - returned by the server; removal only marks it
//! - `MarkedDeleted` - kept in the collection until the next save,
//!   hidden from the view

use crate::domain::foundation::{DomainError, ErrorCode, LineId};
use serde::{Deserialize, Serialize};

/// Persistence state of a single line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineState {
    New,
    Persisted,
    MarkedDeleted,
}

/// One line of a sales delivery document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesDeliveryItem {
    /// Local identity, stable across renders.
    line_id: LineId,

    /// Material code delivered by this line.
    item_code: String,

    /// Delivered quantity.
    quantity: f64,

    /// Persistence state.
    state: LineState,
}

impl SalesDeliveryItem {
    /// Creates a fresh, unsaved line.
    pub fn new() -> Self {
        Self {
            line_id: LineId::new(),
            item_code: String::new(),
            quantity: 0.0,
            state: LineState::New,
        }
    }

    /// Reconstitutes a persisted line (no validation).
    pub fn persisted(item_code: impl Into<String>, quantity: f64) -> Self {
        Self {
            line_id: LineId::new(),
            item_code: item_code.into(),
            quantity,
            state: LineState::Persisted,
        }
    }

    /// Returns the line id.
    pub fn line_id(&self) -> LineId {
        self.line_id
    }

    /// Returns the material code.
    pub fn item_code(&self) -> &str {
        &self.item_code
    }

    /// Returns the delivered quantity.
    pub fn quantity(&self) -> f64 {
        self.quantity
    }

    /// Returns the persistence state.
    pub fn state(&self) -> LineState {
        self.state
    }

    /// Whether the line was never saved.
    pub fn is_new(&self) -> bool {
        self.state == LineState::New
    }

    /// Whether the line is hidden pending delete reconciliation.
    pub fn is_deleted(&self) -> bool {
        self.state == LineState::MarkedDeleted
    }

    /// Sets the material code.
    pub fn set_item_code(&mut self, item_code: impl Into<String>) {
        self.item_code = item_code.into();
    }

    /// Sets the delivered quantity.
    pub fn set_quantity(&mut self, quantity: f64) {
        self.quantity = quantity;
    }

    /// Soft-deletes a persisted line.
    ///
    /// # Errors
    ///
    /// - `InvalidStateTransition` for a `New` line; new lines are
    ///   removed from the collection, never marked
    pub fn mark_deleted(&mut self) -> Result<(), DomainError> {
        if self.state == LineState::New {
            return Err(DomainError::new(
                ErrorCode::InvalidStateTransition,
                "A new line is removed outright, not marked deleted",
            ));
        }
        self.state = LineState::MarkedDeleted;
        Ok(())
    }

    /// Tags the line as saved. Called after a successful save round-trip.
    pub fn mark_persisted(&mut self) {
        self.state = LineState::Persisted;
    }

    /// Copy of this line reset to unsaved state, with a fresh id.
    pub fn clone_as_new(&self) -> Self {
        Self {
            line_id: LineId::new(),
            item_code: self.item_code.clone(),
            quantity: self.quantity,
            state: LineState::New,
        }
    }
}

impl Default for SalesDeliveryItem {
    fn default() -> Self {
        Self::new()
    }
}

/// Ordered line collection owned by a document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeliveryLines {
    items: Vec<SalesDeliveryItem>,
}

impl DeliveryLines {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a collection from existing lines (reconstitution).
    pub fn from_items(items: Vec<SalesDeliveryItem>) -> Self {
        Self { items }
    }

    /// Appends a fresh line and returns its id.
    pub fn create(&mut self) -> LineId {
        let item = SalesDeliveryItem::new();
        let id = item.line_id();
        self.items.push(item);
        id
    }

    /// Whether a line with the given id is in the collection.
    pub fn contains(&self, id: LineId) -> bool {
        self.items.iter().any(|item| item.line_id() == id)
    }

    /// Borrows a line by id.
    pub fn get(&self, id: LineId) -> Option<&SalesDeliveryItem> {
        self.items.iter().find(|item| item.line_id() == id)
    }

    /// Mutably borrows a line by id.
    pub fn get_mut(&mut self, id: LineId) -> Option<&mut SalesDeliveryItem> {
        self.items.iter_mut().find(|item| item.line_id() == id)
    }

    /// Physically removes a line. Returns the removed line, if present.
    pub fn remove(&mut self, id: LineId) -> Option<SalesDeliveryItem> {
        let index = self.items.iter().position(|item| item.line_id() == id)?;
        Some(self.items.remove(index))
    }

    /// Lines not marked deleted, in order. This is what the view shows.
    pub fn visible(&self) -> Vec<&SalesDeliveryItem> {
        self.items.iter().filter(|item| !item.is_deleted()).collect()
    }

    /// All lines including delete-marked ones.
    pub fn iter(&self) -> impl Iterator<Item = &SalesDeliveryItem> {
        self.items.iter()
    }

    /// Mutable iteration over all lines.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut SalesDeliveryItem> {
        self.items.iter_mut()
    }

    /// Stored length, delete-marked lines included.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Drops delete-marked lines. Called on the save side when the
    /// server reconciles deletions.
    pub fn purge_deleted(&mut self) {
        self.items.retain(|item| !item.is_deleted());
    }
}
