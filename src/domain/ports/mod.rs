//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod item_source;
pub mod record_repository;
pub mod selection_listener;

pub use item_source::ItemSource;
pub use record_repository::RecordRepository;
pub use selection_listener::SelectionListener;
