//! Application layer.
//!
//! Edit controllers that orchestrate domain operations against the
//! ports, one per business document screen.

pub mod delivery_edit;

pub use delivery_edit::DeliveryEditController;
