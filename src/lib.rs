//! Sales Desk - headless edit controller for sales delivery documents.
//!
//! Wires a master-detail edit screen (header fields plus a line grid)
//! to a business-object repository: create/clone/delete/save lifecycle,
//! dirty-state confirmation dialogs, and modal choose dialogs, all
//! behind hexagonal ports.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod i18n;
pub mod ports;
