//! Operation result envelope.
//!
//! Repository calls report their outcome in this wrapper instead of
//! propagating errors across the service boundary: a status code, the
//! server's message, and the returned objects. Code zero is success;
//! everything else carries a user-facing message.

use serde::{Deserialize, Serialize};

/// Response wrapper of a repository operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperationResult<T> {
    /// Zero on success, nonzero on failure.
    pub result_code: i32,
    /// Server message, meaningful on failure.
    pub message: String,
    /// Returned objects. A successful save of a deleted document
    /// returns an empty list.
    pub result_objects: Vec<T>,
}

impl<T> OperationResult<T> {
    /// Successful result carrying the given objects.
    pub fn success(result_objects: Vec<T>) -> Self {
        Self {
            result_code: 0,
            message: String::new(),
            result_objects,
        }
    }

    /// Failure with a server message. The code must be nonzero.
    pub fn failure(result_code: i32, message: impl Into<String>) -> Self {
        debug_assert!(result_code != 0);
        Self {
            result_code,
            message: message.into(),
            result_objects: Vec::new(),
        }
    }

    /// Whether the operation succeeded.
    pub fn is_ok(&self) -> bool {
        self.result_code == 0
    }

    /// First returned object, if any.
    pub fn first(&self) -> Option<&T> {
        self.result_objects.first()
    }

    /// Consumes the envelope, yielding the first returned object.
    pub fn into_first(self) -> Option<T> {
        self.result_objects.into_iter().next()
    }
}
