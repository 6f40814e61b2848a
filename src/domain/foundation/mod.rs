//! Foundation module - Shared domain primitives.
//!
//! Value objects, identifiers, query criteria, the operation-result
//! envelope, and error types that form the vocabulary of the sales-desk
//! domain.

mod criteria;
mod errors;
mod ids;
mod operation_result;
mod timestamp;

pub use criteria::{Condition, ConditionOperation, Criteria};
pub use errors::{DomainError, ErrorCode};
pub use ids::{DocEntry, LineId};
pub use operation_result::OperationResult;
pub use timestamp::Timestamp;
