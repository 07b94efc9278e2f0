//! Domain Layer
//!
//! The selection core - pure logic without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - Item, ItemTree, SelectionSet, ExpansionMap
//! - `value_objects/` - PropagationMode, StaleIdPolicy, SelectionState
//! - `services/` - tree walks and the SelectionEngine
//! - `policies/` - submission validation
//! - `ports/` - interfaces implemented by infrastructure

pub mod entities;
pub mod policies;
pub mod ports;
pub mod services;
pub mod value_objects;
