//! Adapters - Port implementations.
//!
//! - `memory` - in-memory sales repository (demo + integration tests)
//! - `fixtures` - fixed-list choose service
//! - `console` - console view and non-interactive messaging

mod console;
mod fixtures;
mod memory;

pub use console::{ConsoleMessages, ConsoleView};
pub use fixtures::FixtureChooseService;
pub use memory::InMemorySalesRepository;
