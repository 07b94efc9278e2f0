//! Submission policy
//!
//! The owning form rejects an empty selection at submit time. The engine
//! itself never enforces this.

use crate::error::{SkilltreeError, SkilltreeResult};

/// Check a selection before it is persisted
pub fn validate_submission(selected: &[String], require_selection: bool) -> SkilltreeResult<()> {
    if require_selection && selected.is_empty() {
        return Err(SkilltreeError::EmptySelection);
    }
    Ok(())
}
