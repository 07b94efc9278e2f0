//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod propagation_mode;
mod selection_state;
mod stale_id_policy;

pub use propagation_mode::PropagationMode;
pub use selection_state::SelectionState;
pub use stale_id_policy::StaleIdPolicy;
