//! Event Sink Implementations
//!
//! Concrete `SelectionListener`s:
//! - JsonSelectionSink: NDJSON output for automation

mod json;

pub use json::JsonSelectionSink;
