//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, ids, criteria,
//!   operation-result envelope, errors)
//! - `delivery` - Sales delivery aggregate and line items

pub mod delivery;
pub mod foundation;
