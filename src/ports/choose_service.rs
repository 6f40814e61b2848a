//! Choose service port.
//!
//! Generic modal selection dialog, parameterized by business-object code
//! and filter conditions. The call suspends until the user picks or
//! dismisses; a dismissed dialog yields an empty selection.

use crate::domain::foundation::Condition;
use async_trait::async_trait;

/// Business-object code of customers, for choose scoping.
pub const BO_CODE_CUSTOMER: &str = "CC_BP_CUSTOMER";

/// Business-object code of materials, for choose scoping.
pub const BO_CODE_MATERIAL: &str = "CC_MM_MATERIAL";

/// What a choose dialog is asked to offer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChooseRequest {
    /// Business-object code the dialog lists.
    pub bo_code: String,
    /// Filter conditions narrowing the offered items.
    pub criteria: Vec<Condition>,
}

impl ChooseRequest {
    pub fn new(bo_code: impl Into<String>, criteria: Vec<Condition>) -> Self {
        Self {
            bo_code: bo_code.into(),
            criteria,
        }
    }
}

/// One item the user picked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub code: String,
    pub name: String,
}

impl Selection {
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
        }
    }
}

/// Modal selection port.
#[async_trait]
pub trait ChooseService: Send + Sync {
    /// Runs the dialog and returns the picked items, empty on dismissal.
    async fn choose(&self, request: ChooseRequest) -> Vec<Selection>;
}
