//! Sales delivery edit screen.

mod controller;

pub use controller::DeliveryEditController;
