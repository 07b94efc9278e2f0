//! Skilltree - hierarchical skills and interests selection
//!
//! Skilltree models a fixed tree of up to three levels (category, skill,
//! sub-skill) and a flat, ordered selection over it. Selecting a branch
//! selects everything beneath it; a parent is selected exactly when all of
//! its direct children are. The selection is what gets stored on a profile
//! or project record.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{Action, OpenOptions, SelectionUseCase};
pub use config::Config;
pub use domain::entities::{Item, ItemTree, MAX_DEPTH};
pub use domain::services::{Badge, EngineOptions, SelectionEngine, Toggled};
pub use domain::value_objects::{PropagationMode, SelectionState, StaleIdPolicy};
pub use error::{SkilltreeError, SkilltreeResult};
