//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `SelectionUseCase` - Opens a selection session from an item source and a
//!   record, applies scripted actions, validates and persists the result

pub mod selection;

pub use selection::{
    Action, ActionOutcome, BadgeSummary, OpenOptions, SelectionUseCase, SessionSummary,
    SubmitResult,
};
