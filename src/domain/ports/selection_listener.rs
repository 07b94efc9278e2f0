//! SelectionListener port - the engine's `on_change` callback
//!
//! The owning form (or CLI) receives the full selection after every mutation.

/// Receives the selection set after each mutation
pub trait SelectionListener {
    fn on_change(&mut self, selected: &[String]);
}

impl<F> SelectionListener for F
where
    F: FnMut(&[String]),
{
    fn on_change(&mut self, selected: &[String]) {
        self(selected)
    }
}
