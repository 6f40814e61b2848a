//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the edit controller and the outside world. Adapters implement these
//! ports.
//!
//! - `SalesRepository` - remote business-object persistence
//! - `ChooseService` - generic modal selection dialog
//! - `MessageService` - dialogs, notices, and status messaging
//! - `DeliveryEditView` - the rendering surface of the edit screen

mod choose_service;
mod edit_view;
mod message_service;
mod sales_repository;

pub use choose_service::{
    ChooseRequest, ChooseService, Selection, BO_CODE_CUSTOMER, BO_CODE_MATERIAL,
};
pub use edit_view::DeliveryEditView;
pub use message_service::{MessageAction, MessageService, MessageType};
pub use sales_repository::SalesRepository;
