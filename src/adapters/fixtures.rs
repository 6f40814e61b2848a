//! Fixture choose service.
//!
//! Serves a fixed candidate list per business-object code and applies
//! the request's not-equal conditions the way the real dialog narrows
//! its offer. The "user" picks the first remaining candidate.

use std::collections::HashMap;

use async_trait::async_trait;
use tracing::debug;

use crate::domain::foundation::ConditionOperation;
use crate::ports::{ChooseRequest, ChooseService, Selection};

/// Choose service answering from fixed candidate lists.
#[derive(Default)]
pub struct FixtureChooseService {
    candidates: HashMap<String, Vec<Selection>>,
}

impl FixtureChooseService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the candidates offered for a business-object code.
    pub fn with_candidates(
        mut self,
        bo_code: impl Into<String>,
        candidates: Vec<Selection>,
    ) -> Self {
        self.candidates.insert(bo_code.into(), candidates);
        self
    }
}

#[async_trait]
impl ChooseService for FixtureChooseService {
    async fn choose(&self, request: ChooseRequest) -> Vec<Selection> {
        let Some(candidates) = self.candidates.get(&request.bo_code) else {
            debug!(bo_code = %request.bo_code, "no candidates, dialog dismissed");
            return vec![];
        };
        let excluded: Vec<&str> = request
            .criteria
            .iter()
            .filter(|c| c.operation == ConditionOperation::NotEqual)
            .map(|c| c.value.as_str())
            .collect();
        let picked: Vec<Selection> = candidates
            .iter()
            .filter(|s| !excluded.contains(&s.code.as_str()))
            .take(1)
            .cloned()
            .collect();
        debug!(bo_code = %request.bo_code, picked = picked.len(), "choose resolved");
        picked
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::Condition;
    use crate::ports::BO_CODE_CUSTOMER;

    fn service() -> FixtureChooseService {
        FixtureChooseService::new().with_candidates(
            BO_CODE_CUSTOMER,
            vec![
                Selection::new("C0001", "Ipsum Ltd"),
                Selection::new("C0002", "Dolor AG"),
            ],
        )
    }

    #[tokio::test]
    async fn picks_the_first_candidate() {
        let picked = service()
            .choose(ChooseRequest::new(BO_CODE_CUSTOMER, vec![]))
            .await;
        assert_eq!(picked.len(), 1);
        assert_eq!(picked[0].code, "C0001");
    }

    #[tokio::test]
    async fn not_equal_conditions_narrow_the_offer() {
        let picked = service()
            .choose(ChooseRequest::new(
                BO_CODE_CUSTOMER,
                vec![Condition::new(
                    BO_CODE_CUSTOMER,
                    ConditionOperation::NotEqual,
                    "C0001",
                )],
            ))
            .await;
        assert_eq!(picked[0].code, "C0002");
    }

    #[tokio::test]
    async fn unknown_bo_code_behaves_like_a_dismissal() {
        let picked = service()
            .choose(ChooseRequest::new("CC_XX_UNKNOWN", vec![]))
            .await;
        assert!(picked.is_empty());
    }
}
