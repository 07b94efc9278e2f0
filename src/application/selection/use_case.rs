//! Selection Use Case
//!
//! Wires an [`ItemSource`] and an optional [`RecordRepository`] around a
//! [`SelectionEngine`].

use crate::domain::entities::ItemTree;
use crate::domain::policies::validate_submission;
use crate::domain::ports::{ItemSource, RecordRepository};
use crate::domain::services::SelectionEngine;
use crate::error::SkilltreeResult;

use super::action::Action;
use super::options::OpenOptions;
use super::result::{ActionOutcome, SubmitResult};

/// Selection use case - one form field bound to one record column
pub struct SelectionUseCase<S, R>
where
    S: ItemSource,
    R: RecordRepository,
{
    source: S,
    record: Option<R>,
    options: OpenOptions,
}

impl<S, R> SelectionUseCase<S, R>
where
    S: ItemSource,
    R: RecordRepository,
{
    /// Create a new selection use case
    pub fn new(source: S, record: Option<R>, options: OpenOptions) -> Self {
        Self {
            source,
            record,
            options,
        }
    }

    pub fn options(&self) -> &OpenOptions {
        &self.options
    }

    /// Load and validate the tree without opening a session
    pub fn load_tree(&self) -> SkilltreeResult<ItemTree> {
        ItemTree::new(self.source.load_items()?)
    }

    /// Ids the session starts from: explicit ones win over the record
    pub fn initial_values(&self) -> SkilltreeResult<Vec<String>> {
        if let Some(initial) = &self.options.initial {
            return Ok(initial.clone());
        }
        match &self.record {
            Some(record) => record.load_column(&self.options.column),
            None => Ok(Vec::new()),
        }
    }

    /// Open a session over a freshly loaded tree
    pub fn open(&self) -> SkilltreeResult<SelectionEngine> {
        let tree = self.load_tree()?;
        let initial = self.initial_values()?;
        Ok(SelectionEngine::new(tree, initial, self.options.engine))
    }

    /// Apply actions in order. Unknown ids are no-ops, not errors.
    pub fn apply(&self, engine: &mut SelectionEngine, actions: &[Action]) -> Vec<ActionOutcome> {
        actions
            .iter()
            .map(|action| ActionOutcome {
                action: action.clone(),
                changed: action.apply(engine),
            })
            .collect()
    }

    /// When `persist` is set and a record is bound, validate the selection
    /// and write it back. Nothing is validated for a selection that stays
    /// unsaved.
    pub fn submit(&self, engine: &SelectionEngine, persist: bool) -> SkilltreeResult<SubmitResult> {
        let selected = engine.selected_ids();

        let saved_column = match (&self.record, persist) {
            (Some(record), true) => {
                validate_submission(&selected, self.options.require_selection)?;
                record.save_column(&self.options.column, &selected)?;
                Some(self.options.column.clone())
            }
            _ => None,
        };

        Ok(SubmitResult {
            selected,
            saved_column,
        })
    }
}
