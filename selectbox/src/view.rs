//! Render model handed to whatever draws the widget.

use crate::option::OptionValue;

/// What the closed widget shows in its value region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayValue {
    /// Nothing selected.
    Placeholder(String),
    /// Single mode: label of the selected option.
    Label(String),
    /// Multiple mode: one removable badge per selected option, in order.
    Badges(Vec<Badge>),
}

/// A removable badge for one selected option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Badge {
    /// Element id to target clicks at.
    pub id: String,
    pub label: String,
    pub value: OptionValue,
}

/// Visual emphasis of an option row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowEmphasis {
    Normal,
    Selected,
    Highlighted,
}

/// One row of the open option list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionRow {
    /// Element id to target clicks and hovers at.
    pub id: String,
    pub label: String,
    pub selected: bool,
    pub highlighted: bool,
}

impl OptionRow {
    /// Highlight wins over selection.
    pub fn emphasis(&self) -> RowEmphasis {
        if self.highlighted {
            RowEmphasis::Highlighted
        } else if self.selected {
            RowEmphasis::Selected
        } else {
            RowEmphasis::Normal
        }
    }
}

/// Everything needed to draw a select widget for one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectView {
    /// Focusable, clickable container; toggles the list.
    pub container_id: String,
    /// Clear affordance.
    pub clear_id: String,
    pub open: bool,
    pub display: DisplayValue,
    /// Option rows. Empty while closed.
    pub rows: Vec<OptionRow>,
}

impl SelectView {
    /// Open/closed indicator glyph.
    pub fn indicator(&self) -> &'static str {
        if self.open { "▲" } else { "▼" }
    }

    /// Flat text of the value region.
    pub fn display_text(&self) -> String {
        match &self.display {
            DisplayValue::Placeholder(text) | DisplayValue::Label(text) => text.clone(),
            DisplayValue::Badges(badges) => badges
                .iter()
                .map(|b| format!("[{} ×]", b.label))
                .collect::<Vec<_>>()
                .join(" "),
        }
    }
}
