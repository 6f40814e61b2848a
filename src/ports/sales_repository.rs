//! Sales repository port.
//!
//! Contract for fetching and saving sales delivery documents against the
//! remote business-object service. Outcomes travel in the operation-result
//! envelope, never as errors across this boundary: adapters fold transport
//! faults into a nonzero result code so the controller has a single
//! failure channel.

use crate::domain::delivery::SalesDelivery;
use crate::domain::foundation::{Criteria, OperationResult};
use async_trait::async_trait;

/// Repository port for sales delivery persistence.
#[async_trait]
pub trait SalesRepository: Send + Sync {
    /// Fetch deliveries matching the criteria.
    ///
    /// A successful result with an empty object list means nothing
    /// matched; callers treat that as a recoverable miss, not an error.
    async fn fetch_delivery(&self, criteria: &Criteria) -> OperationResult<SalesDelivery>;

    /// Save the delivery and return the server's authoritative post-save
    /// state.
    ///
    /// Saving a delete-marked document succeeds with an empty object
    /// list. Deletion is a save, there is no separate endpoint.
    async fn save_delivery(&self, delivery: &SalesDelivery) -> OperationResult<SalesDelivery>;
}
