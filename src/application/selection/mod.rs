//! Selection Use Case
//!
//! This module handles:
//! - Loading the item forest and building the tree
//! - Seeding the session from explicit ids or the record column
//! - Applying scripted actions (`toggle:ID`, `expand:ID`, `remove:ID`, `clear`)
//! - Validating and writing the selection back to the record

mod action;
mod options;
mod result;
mod use_case;

pub use action::Action;
pub use options::OpenOptions;
pub use result::{ActionOutcome, BadgeSummary, SessionSummary, SubmitResult};
pub use use_case::SelectionUseCase;
