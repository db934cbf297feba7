//! Open/closed state and keyboard highlight of the option list.

/// Navigation state of a select widget.
///
/// Starts closed with the highlight at 0. Every transition takes the current
/// option count so the highlight can never point past the end of the list;
/// with zero options no highlight is ever reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Navigation {
    open: bool,
    highlighted: usize,
}

impl Navigation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Raw highlight index. Only meaningful while open.
    pub fn highlighted_index(&self) -> usize {
        self.highlighted
    }

    /// The highlighted option index, if the list is open and non-empty.
    pub fn highlighted(&self, count: usize) -> Option<usize> {
        (self.open && self.highlighted < count).then_some(self.highlighted)
    }

    /// Open the list. Resets the highlight to the first option.
    /// Returns true if the list was closed.
    pub fn open(&mut self) -> bool {
        if self.open {
            return false;
        }
        self.open = true;
        self.highlighted = 0;
        true
    }

    /// Close the list. Returns true if it was open.
    pub fn close(&mut self) -> bool {
        std::mem::replace(&mut self.open, false)
    }

    /// Flip between open and closed.
    pub fn toggle(&mut self) {
        if self.open {
            self.close();
        } else {
            self.open();
        }
    }

    /// Focus left the widget.
    pub fn blur(&mut self) -> bool {
        self.close()
    }

    /// Highlight the next option, wrapping to the first.
    ///
    /// Opens the list (highlight 0) if it was closed.
    pub fn move_next(&mut self, count: usize) -> bool {
        if self.open() {
            return true;
        }
        if count == 0 {
            return false;
        }
        self.highlighted = (self.highlighted + 1) % count;
        true
    }

    /// Highlight the previous option, wrapping to the last.
    ///
    /// Opens the list (highlight 0) if it was closed.
    pub fn move_previous(&mut self, count: usize) -> bool {
        if self.open() {
            return true;
        }
        if count == 0 {
            return false;
        }
        let current = self.highlighted.min(count - 1);
        self.highlighted = if current == 0 { count - 1 } else { current - 1 };
        true
    }

    /// Highlight the first option. Only while open.
    pub fn move_first(&mut self, count: usize) -> bool {
        self.set_highlight(0, count)
    }

    /// Highlight the last option. Only while open.
    pub fn move_last(&mut self, count: usize) -> bool {
        self.set_highlight(count.saturating_sub(1), count)
    }

    /// Pointer moved over the option row at `index`.
    pub fn hover(&mut self, index: usize, count: usize) -> bool {
        self.set_highlight(index, count)
    }

    /// Keep the highlight inside a list that changed length.
    pub fn sync_options(&mut self, count: usize) {
        if count == 0 {
            self.highlighted = 0;
        } else if self.highlighted >= count {
            self.highlighted = count - 1;
        }
    }

    fn set_highlight(&mut self, index: usize, count: usize) -> bool {
        if !self.open || index >= count || self.highlighted == index {
            return false;
        }
        self.highlighted = index;
        true
    }
}
