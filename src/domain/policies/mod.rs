//! Domain Policies
//!
//! Business rules applied at the edges of a selection session.
//! These are pure functions that operate on domain entities.

mod submission;

pub use submission::validate_submission;
