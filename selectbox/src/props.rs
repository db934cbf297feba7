//! Controlled value and change callback, tagged by mode.

use std::fmt;
use std::sync::Arc;

use crate::error::SelectError;
use crate::option::SelectOption;
use crate::selection::{MultiSelection, Selection, SelectionMode};

/// Change callback for single-mode widgets.
pub type SingleChangeHandler = Arc<dyn Fn(Option<SelectOption>) + Send + Sync>;

/// Change callback for multiple-mode widgets.
pub type MultipleChangeHandler = Arc<dyn Fn(Vec<SelectOption>) + Send + Sync>;

/// The externally owned value and the callback that proposes changes to it.
///
/// The mode is the variant: a single-mode value can only ever be paired with
/// a single-mode callback.
#[derive(Clone)]
pub enum SelectProps {
    Single {
        value: Option<SelectOption>,
        on_change: SingleChangeHandler,
    },
    Multiple {
        value: MultiSelection,
        on_change: MultipleChangeHandler,
    },
}

impl fmt::Debug for SelectProps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectProps::Single { value, .. } => {
                f.debug_struct("Single").field("value", value).finish()
            }
            SelectProps::Multiple { value, .. } => {
                f.debug_struct("Multiple").field("value", value).finish()
            }
        }
    }
}

impl SelectProps {
    pub fn mode(&self) -> SelectionMode {
        match self {
            SelectProps::Single { .. } => SelectionMode::Single,
            SelectProps::Multiple { .. } => SelectionMode::Multiple,
        }
    }

    /// Snapshot of the current value.
    pub fn selection(&self) -> Selection {
        match self {
            SelectProps::Single { value, .. } => Selection::Single(value.clone()),
            SelectProps::Multiple { value, .. } => Selection::Multiple(value.clone()),
        }
    }

    /// Replace the value, keeping the callback. The mode must match.
    pub fn set_selection(&mut self, selection: Selection) -> Result<(), SelectError> {
        match (self, selection) {
            (SelectProps::Single { value, .. }, Selection::Single(next)) => {
                *value = next;
                Ok(())
            }
            (SelectProps::Multiple { value, .. }, Selection::Multiple(next)) => {
                *value = next;
                Ok(())
            }
            (props, next) => Err(SelectError::ModeMismatch {
                expected: props.mode(),
                found: next.mode(),
            }),
        }
    }

    /// Pair a proposed selection with this widget's callback.
    ///
    /// Returns `None` if the selection's mode does not match.
    pub(crate) fn propose(&self, selection: Selection) -> Option<PendingChange> {
        match (self, selection) {
            (SelectProps::Single { on_change, .. }, Selection::Single(next)) => {
                Some(PendingChange::Single {
                    on_change: Arc::clone(on_change),
                    value: next,
                })
            }
            (SelectProps::Multiple { on_change, .. }, Selection::Multiple(next)) => {
                Some(PendingChange::Multiple {
                    on_change: Arc::clone(on_change),
                    value: next.to_vec(),
                })
            }
            _ => None,
        }
    }
}

/// A selection change that has been decided but not yet delivered.
///
/// Produced while the widget state is borrowed; call [`emit`](Self::emit)
/// once that borrow is released so the callback can touch the widget again.
#[derive(Clone)]
pub enum PendingChange {
    Single {
        on_change: SingleChangeHandler,
        value: Option<SelectOption>,
    },
    Multiple {
        on_change: MultipleChangeHandler,
        value: Vec<SelectOption>,
    },
}

impl fmt::Debug for PendingChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PendingChange::Single { value, .. } => {
                f.debug_tuple("Single").field(value).finish()
            }
            PendingChange::Multiple { value, .. } => {
                f.debug_tuple("Multiple").field(value).finish()
            }
        }
    }
}

impl PendingChange {
    /// The proposed selection, in selection order.
    pub fn options(&self) -> Vec<SelectOption> {
        match self {
            PendingChange::Single { value, .. } => value.iter().cloned().collect(),
            PendingChange::Multiple { value, .. } => value.clone(),
        }
    }

    /// Invoke the callback with the full new selection.
    pub fn emit(self) {
        match self {
            PendingChange::Single { on_change, value } => on_change(value),
            PendingChange::Multiple { on_change, value } => on_change(value),
        }
    }
}
