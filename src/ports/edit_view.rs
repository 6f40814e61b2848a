//! Edit view port.
//!
//! The rendering surface of the edit screen. The original shell wired
//! view events through mutable function-valued slots; here the shell
//! calls the controller's named methods directly and the controller
//! pushes state out through this trait, so every callback has a fixed,
//! typed signature.

use crate::domain::delivery::{SalesDelivery, SalesDeliveryItem};

/// View surface of the sales delivery edit screen.
pub trait DeliveryEditView: Send + Sync {
    /// Renders the document header.
    fn show_delivery(&self, delivery: &SalesDelivery);

    /// Renders the line grid. Only ever receives non-deleted lines.
    fn show_delivery_lines(&self, lines: &[&SalesDeliveryItem]);

    /// Toggles the busy indicator while a repository call is in flight.
    fn set_busy(&self, busy: bool);
}
