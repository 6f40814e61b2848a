//! Sales delivery document aggregate and its line items.

mod aggregate;
mod line;

pub use aggregate::{DocumentStatus, SalesDelivery};
pub use line::{DeliveryLines, LineState, SalesDeliveryItem};

/// Business-object code of the sales delivery document.
pub const BO_CODE_SALESDELIVERY: &str = "CC_SL_SALESDELIVERY";
