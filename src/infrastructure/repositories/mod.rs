//! Repository Implementations
//!
//! Concrete implementations of domain repository ports.

mod record;

pub use record::{JsonRecordRepository, UPDATED_AT_FIELD};
