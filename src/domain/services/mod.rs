//! Domain Services
//!
//! Pure logic over the item tree. No I/O.

mod selection_engine;
pub mod walk;

pub use selection_engine::{Badge, EngineOptions, SelectionEngine, Toggled};
