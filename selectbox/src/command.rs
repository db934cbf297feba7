//! Commands a select widget understands.
//!
//! Raw events are resolved into commands by the widget (pointer events by
//! target role, key events through the keymap); hosts may also apply
//! commands directly.

/// A single state transition request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// Toggle list visibility (click on the container).
    Activate,
    /// Focus left the widget.
    Blur,
    /// Commit the highlighted option and close; opens a closed list.
    Confirm,
    /// Highlight the next option; opens a closed list.
    MoveNext,
    /// Highlight the previous option; opens a closed list.
    MovePrevious,
    MoveFirst,
    MoveLast,
    /// Close an open list without committing.
    Dismiss,
    /// Empty the selection. Leaves list visibility alone.
    Clear,
    /// Pointer over the option row at this index.
    Hover(usize),
    /// Click on the option row at this index.
    Pick(usize),
    /// Click on the badge at this index in selection order.
    RemoveBadge(usize),
}
