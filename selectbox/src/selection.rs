//! Selection policy: what the selection becomes when an option is toggled.
//!
//! Everything here is pure. Methods take the current selection by reference
//! and return the next one; nothing is mutated in place and no callbacks run.

use std::fmt;

use indexmap::IndexMap;

use crate::error::SelectError;
use crate::option::{OptionValue, SelectOption};

/// Selection mode, fixed for the lifetime of a widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SelectionMode {
    /// Zero or one option selected.
    #[default]
    Single,
    /// Ordered set of selected options.
    Multiple,
}

impl fmt::Display for SelectionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectionMode::Single => write!(f, "single"),
            SelectionMode::Multiple => write!(f, "multiple"),
        }
    }
}

/// Ordered set of selected options, keyed by option value.
///
/// Insertion order is preserved and removal keeps the order of the rest.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MultiSelection {
    entries: IndexMap<OptionValue, SelectOption>,
}

impl MultiSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from a list, rejecting repeated keys.
    pub fn try_from_options(options: Vec<SelectOption>) -> Result<Self, SelectError> {
        let mut entries = IndexMap::with_capacity(options.len());
        for option in options {
            let key = option.value.clone();
            if entries.insert(key.clone(), option).is_some() {
                return Err(SelectError::DuplicateSelection(key));
            }
        }
        Ok(Self { entries })
    }

    pub fn contains(&self, key: &OptionValue) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Selected options in selection order.
    pub fn iter(&self) -> impl Iterator<Item = &SelectOption> {
        self.entries.values()
    }

    /// Option at `index` in selection order.
    pub fn get(&self, index: usize) -> Option<&SelectOption> {
        self.entries.get_index(index).map(|(_, option)| option)
    }

    pub fn to_vec(&self) -> Vec<SelectOption> {
        self.entries.values().cloned().collect()
    }

    /// A copy with `option` removed if present, appended otherwise.
    pub fn toggled(&self, option: &SelectOption) -> Self {
        let mut entries = self.entries.clone();
        if entries.shift_remove(option.key()).is_none() {
            entries.insert(option.value.clone(), option.clone());
        }
        Self { entries }
    }
}

impl FromIterator<SelectOption> for MultiSelection {
    /// Keeps the first occurrence of each key.
    fn from_iter<I: IntoIterator<Item = SelectOption>>(iter: I) -> Self {
        let mut entries = IndexMap::new();
        for option in iter {
            entries.entry(option.value.clone()).or_insert(option);
        }
        Self { entries }
    }
}

/// The current selection, shaped by mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    Single(Option<SelectOption>),
    Multiple(MultiSelection),
}

impl Selection {
    /// The "nothing selected" value for a mode.
    pub fn empty(mode: SelectionMode) -> Self {
        match mode {
            SelectionMode::Single => Selection::Single(None),
            SelectionMode::Multiple => Selection::Multiple(MultiSelection::new()),
        }
    }

    pub fn mode(&self) -> SelectionMode {
        match self {
            Selection::Single(_) => SelectionMode::Single,
            Selection::Multiple(_) => SelectionMode::Multiple,
        }
    }

    /// Selection after the user activates `option`.
    ///
    /// Single mode: the result is always `option`, so re-activating the
    /// selected option yields a value with the same key. Multiple mode:
    /// removes the option if present, appends it otherwise.
    pub fn toggle(&self, option: &SelectOption) -> Selection {
        match self {
            Selection::Single(_) => Selection::Single(Some(option.clone())),
            Selection::Multiple(selected) => Selection::Multiple(selected.toggled(option)),
        }
    }

    /// Membership test by option value.
    pub fn is_selected(&self, option: &SelectOption) -> bool {
        match self {
            Selection::Single(current) => current.as_ref().is_some_and(|c| c.same_key(option)),
            Selection::Multiple(selected) => selected.contains(option.key()),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Selection::Single(current) => usize::from(current.is_some()),
            Selection::Multiple(selected) => selected.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Selected options in selection order.
    pub fn options(&self) -> Vec<SelectOption> {
        match self {
            Selection::Single(current) => current.iter().cloned().collect(),
            Selection::Multiple(selected) => selected.to_vec(),
        }
    }
}

impl From<Option<SelectOption>> for Selection {
    fn from(value: Option<SelectOption>) -> Self {
        Selection::Single(value)
    }
}

impl From<MultiSelection> for Selection {
    fn from(value: MultiSelection) -> Self {
        Selection::Multiple(value)
    }
}

/// Toggle `option` within `current`. See [`Selection::toggle`].
pub fn toggle(current: &Selection, option: &SelectOption) -> Selection {
    current.toggle(option)
}

/// The empty selection for `mode`.
pub fn clear(mode: SelectionMode) -> Selection {
    Selection::empty(mode)
}

/// Whether `option` is part of `current`.
pub fn is_selected(current: &Selection, option: &SelectOption) -> bool {
    current.is_selected(option)
}
