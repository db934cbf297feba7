//! Key bindings for select widgets.

use crate::command::Command;
use crate::event::{Key, Modifiers};

/// A key combination (key + modifiers)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyCombo {
    /// The key code
    pub key: Key,
    /// Modifier keys
    pub modifiers: Modifiers,
}

impl KeyCombo {
    /// Create a new key combo
    pub const fn new(key: Key, modifiers: Modifiers) -> Self {
        Self { key, modifiers }
    }

    /// Create a key combo without modifiers
    pub const fn key(key: Key) -> Self {
        Self {
            key,
            modifiers: Modifiers::NONE,
        }
    }

    /// Add ctrl modifier
    pub const fn ctrl(mut self) -> Self {
        self.modifiers.ctrl = true;
        self
    }

    /// Add alt modifier
    pub const fn alt(mut self) -> Self {
        self.modifiers.alt = true;
        self
    }

    /// Whether a pressed key matches this combo.
    ///
    /// Shift is ignored unless the combo asks for it, so `Char(' ')` still
    /// matches with shift held.
    pub fn matches(&self, key: Key, modifiers: Modifiers) -> bool {
        self.key == key
            && self.modifiers.ctrl == modifiers.ctrl
            && self.modifiers.alt == modifiers.alt
            && (!self.modifiers.shift || modifiers.shift)
    }
}

/// Keyboard bindings, one list of combos per command.
///
/// Defaults:
/// - `Space`/`Enter` confirm (open a closed list)
/// - `Down`/`Up` move the highlight, opening a closed list
/// - `Home`/`End` jump to the first/last option
/// - `Esc` closes the list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectKeymap {
    pub confirm: Vec<KeyCombo>,
    pub next: Vec<KeyCombo>,
    pub previous: Vec<KeyCombo>,
    pub first: Vec<KeyCombo>,
    pub last: Vec<KeyCombo>,
    pub dismiss: Vec<KeyCombo>,
    pub clear: Vec<KeyCombo>,
}

impl Default for SelectKeymap {
    fn default() -> Self {
        Self {
            confirm: vec![KeyCombo::key(Key::Char(' ')), KeyCombo::key(Key::Enter)],
            next: vec![KeyCombo::key(Key::Down)],
            previous: vec![KeyCombo::key(Key::Up)],
            first: vec![KeyCombo::key(Key::Home)],
            last: vec![KeyCombo::key(Key::End)],
            dismiss: vec![KeyCombo::key(Key::Escape)],
            clear: Vec::new(),
        }
    }
}

impl SelectKeymap {
    /// Empty keymap; keyboard input is never consumed.
    pub fn none() -> Self {
        Self {
            confirm: Vec::new(),
            next: Vec::new(),
            previous: Vec::new(),
            first: Vec::new(),
            last: Vec::new(),
            dismiss: Vec::new(),
            clear: Vec::new(),
        }
    }

    /// Bind an extra combo that clears the selection.
    pub fn with_clear(mut self, combo: KeyCombo) -> Self {
        self.clear.push(combo);
        self
    }

    /// Resolve a key press into a command.
    pub fn resolve(&self, key: Key, modifiers: Modifiers) -> Option<Command> {
        let bindings = [
            (&self.confirm, Command::Confirm),
            (&self.next, Command::MoveNext),
            (&self.previous, Command::MovePrevious),
            (&self.first, Command::MoveFirst),
            (&self.last, Command::MoveLast),
            (&self.dismiss, Command::Dismiss),
            (&self.clear, Command::Clear),
        ];
        bindings
            .into_iter()
            .find(|(combos, _)| combos.iter().any(|c| c.matches(key, modifiers)))
            .map(|(_, command)| command)
    }
}
