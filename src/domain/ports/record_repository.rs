//! RecordRepository port - persistence of the flat selection list
//!
//! A record is one profile/project row; the selection lives in a single
//! string-array column such as `skills` or `required_skills`.

use crate::error::SkilltreeResult;

/// Abstract store for a record's selection column
pub trait RecordRepository {
    /// Read the column; a missing or null column is an empty list
    fn load_column(&self, column: &str) -> SkilltreeResult<Vec<String>>;

    /// Replace the column with `values`, leaving the rest of the record intact
    fn save_column(&self, column: &str, values: &[String]) -> SkilltreeResult<()>;
}
