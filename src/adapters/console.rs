//! Console view and messaging adapters for the demo binary.
//!
//! Non-interactive: the message adapter answers every confirmation with
//! a configured default instead of blocking on stdin.

use async_trait::async_trait;

use crate::domain::delivery::{SalesDelivery, SalesDeliveryItem};
use crate::ports::{DeliveryEditView, MessageAction, MessageService, MessageType};

/// Renders the edit screen as plain console output.
#[derive(Default)]
pub struct ConsoleView;

impl ConsoleView {
    pub fn new() -> Self {
        Self
    }
}

impl DeliveryEditView for ConsoleView {
    fn show_delivery(&self, delivery: &SalesDelivery) {
        let entry = delivery
            .doc_entry()
            .map(|e| e.to_string())
            .unwrap_or_else(|| "-".to_string());
        println!(
            "┌ Sales Delivery #{} [{:?}]{}",
            entry,
            delivery.status(),
            if delivery.is_dirty() { " *" } else { "" }
        );
        println!(
            "│ Customer: {} {}",
            delivery.customer_code(),
            delivery.customer_name()
        );
    }

    fn show_delivery_lines(&self, lines: &[&SalesDeliveryItem]) {
        for (pos, line) in lines.iter().enumerate() {
            println!(
                "│ {:>3}  {:<10} x {}",
                pos + 1,
                line.item_code(),
                line.quantity()
            );
        }
        println!("└ {} line(s)", lines.len());
    }

    fn set_busy(&self, busy: bool) {
        if busy {
            println!("  ... working ...");
        }
    }
}

/// Console messaging that answers confirmations with a fixed default.
pub struct ConsoleMessages {
    default_answer: MessageAction,
}

impl ConsoleMessages {
    /// Messages that answer every question with "Yes".
    pub fn agreeable() -> Self {
        Self {
            default_answer: MessageAction::Yes,
        }
    }

    /// Messages that answer every question with "No".
    pub fn declining() -> Self {
        Self {
            default_answer: MessageAction::No,
        }
    }
}

#[async_trait]
impl MessageService for ConsoleMessages {
    async fn confirm(&self, title: &str, message: &str) -> MessageAction {
        println!("[{}] {} -> {:?}", title, message, self.default_answer);
        self.default_answer
    }

    async fn acknowledge(&self, message_type: MessageType, message: &str) {
        println!("[{:?}] {}", message_type, message);
    }

    fn proceeding(&self, message_type: MessageType, message: &str) {
        println!("[{:?}] {}", message_type, message);
    }
}
