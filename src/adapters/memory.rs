//! In-memory sales repository.
//!
//! Stand-in for the remote business-object service, used by the demo
//! binary and the integration tests. Implements the server side of the
//! save contract: entry-number assignment, delete reconciliation, and
//! the envelope-only failure channel.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use tracing::debug;

use crate::domain::delivery::SalesDelivery;
use crate::domain::foundation::{ConditionOperation, Criteria, DocEntry, OperationResult};
use crate::ports::SalesRepository;

/// Result code the store answers with when it rejects a document.
const CODE_REJECTED: i32 = 4001;

/// Result code for a criteria the store cannot evaluate.
const CODE_BAD_CRITERIA: i32 = 4002;

#[derive(Default)]
struct Store {
    deliveries: HashMap<DocEntry, SalesDelivery>,
    next_entry: i32,
}

/// In-memory implementation of [`SalesRepository`].
#[derive(Default)]
pub struct InMemorySalesRepository {
    store: Mutex<Store>,
}

impl InMemorySalesRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored documents.
    pub fn len(&self) -> usize {
        self.store.lock().unwrap().deliveries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn entry_from(criteria: &Criteria) -> Option<DocEntry> {
        criteria
            .conditions
            .iter()
            .find(|c| c.alias == "DocEntry" && c.operation == ConditionOperation::Equal)
            .and_then(|c| c.value.parse().ok())
    }
}

#[async_trait]
impl SalesRepository for InMemorySalesRepository {
    async fn fetch_delivery(&self, criteria: &Criteria) -> OperationResult<SalesDelivery> {
        let Some(entry) = Self::entry_from(criteria) else {
            return OperationResult::failure(CODE_BAD_CRITERIA, "Unsupported criteria");
        };
        let store = self.store.lock().unwrap();
        match store.deliveries.get(&entry) {
            Some(delivery) => {
                debug!(%entry, "fetch hit");
                OperationResult::success(vec![delivery.clone()])
            }
            None => {
                debug!(%entry, "fetch miss");
                OperationResult::success(vec![])
            }
        }
    }

    async fn save_delivery(&self, delivery: &SalesDelivery) -> OperationResult<SalesDelivery> {
        let mut store = self.store.lock().unwrap();

        if delivery.is_deleted() {
            if let Some(entry) = delivery.doc_entry() {
                store.deliveries.remove(&entry);
                debug!(%entry, "delivery deleted");
            }
            // Successful delete answers with an empty object list.
            return OperationResult::success(vec![]);
        }

        if delivery.customer_code().trim().is_empty() {
            return OperationResult::failure(CODE_REJECTED, "Customer is required");
        }

        let entry = match delivery.doc_entry() {
            Some(entry) => entry,
            None => {
                store.next_entry += 1;
                DocEntry::new(store.next_entry)
            }
        };

        let mut saved = delivery.clone();
        saved.mark_saved(entry);
        store.deliveries.insert(entry, saved.clone());
        debug!(%entry, lines = saved.lines().len(), "delivery saved");
        OperationResult::success(vec![saved])
    }
}
