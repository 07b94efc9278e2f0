//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `items/` - item sources (nested files, skillset rows)
//! - `repositories/` - record persistence
//! - `events/` - selection listeners

pub mod events;
pub mod items;
pub mod repositories;

// Re-export for convenience
pub use events::JsonSelectionSink;
pub use items::{ItemFile, ItemLayout};
pub use repositories::JsonRecordRepository;
