//! Construction and re-seeding errors.

use thiserror::Error;

use crate::option::OptionValue;
use crate::selection::SelectionMode;

/// Errors raised when a widget is built or fed inputs that break its contract.
///
/// Event handling itself never fails; these only come out of the builder and
/// the `set_*` methods a host calls between renders.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectError {
    /// Two options in the same list share a value.
    #[error("duplicate option value '{0}'")]
    DuplicateOption(OptionValue),

    /// A multiple-mode value lists the same option twice.
    #[error("option '{0}' appears more than once in the selection")]
    DuplicateSelection(OptionValue),

    /// A value of the wrong mode was supplied to a widget.
    #[error("expected a {expected} selection, got a {found} selection")]
    ModeMismatch {
        expected: SelectionMode,
        found: SelectionMode,
    },
}
