//! Per-widget behavior configuration.

use serde::{Deserialize, Serialize};

/// Behavior knobs for a select widget.
///
/// Deserializable so hosts can ship it in their own settings files; missing
/// fields fall back to the defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectConfig {
    /// Text shown when nothing is selected.
    pub placeholder: String,

    /// Close the list after an option row is clicked.
    pub close_on_pick: bool,

    /// Notify `on_change` even when a single-mode pick leaves the selection
    /// as it was.
    pub notify_unchanged: bool,
}

impl Default for SelectConfig {
    fn default() -> Self {
        Self {
            placeholder: "Select...".into(),
            close_on_pick: true,
            notify_unchanged: true,
        }
    }
}

impl SelectConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the placeholder text.
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Keep the list open after an option row is clicked.
    pub fn keep_open_on_pick(mut self) -> Self {
        self.close_on_pick = false;
        self
    }

    /// Only notify when the selection actually changes.
    pub fn skip_unchanged(mut self) -> Self {
        self.notify_unchanged = false;
        self
    }
}
