//! Event handling for the Select widget.

use crate::command::Command;
use crate::event::{Event, EventResult, MouseButton};
use crate::props::{PendingChange, SelectProps};

use super::SelectWidget;

/// Which part of a select widget an element id refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementRole {
    /// Focusable container; clicks toggle the list.
    Container,
    /// Clear affordance.
    Clear,
    /// Option row at this index.
    Option(usize),
    /// Badge at this index in selection order.
    Badge(usize),
}

/// What handling one event or command did.
#[derive(Debug, Clone)]
pub struct Outcome {
    /// Whether the event should stop propagating.
    pub result: EventResult,
    /// Selection change to deliver once the widget is no longer borrowed.
    pub change: Option<PendingChange>,
}

impl Outcome {
    fn ignored() -> Self {
        Self {
            result: EventResult::Ignored,
            change: None,
        }
    }

    fn consumed() -> Self {
        Self {
            result: EventResult::Consumed,
            change: None,
        }
    }

    fn changed(change: Option<PendingChange>) -> Self {
        Self {
            result: EventResult::Consumed,
            change,
        }
    }
}

impl SelectWidget {
    /// Classify an element id belonging to this widget.
    pub fn role_of(&self, target: &str) -> Option<ElementRole> {
        let id = self.id_string();
        let rest = target.strip_prefix(id.as_str())?;
        if rest.is_empty() {
            return Some(ElementRole::Container);
        }
        if rest == "-clear" {
            return Some(ElementRole::Clear);
        }
        if let Some(index) = rest.strip_prefix("-opt-") {
            return index.parse().ok().map(ElementRole::Option);
        }
        if let Some(index) = rest.strip_prefix("-badge-") {
            return index.parse().ok().map(ElementRole::Badge);
        }
        None
    }

    /// Whether `target` is one of this widget's elements.
    pub fn owns(&self, target: &str) -> bool {
        self.role_of(target).is_some()
    }

    /// Route a targeted input event.
    ///
    /// Keys are honored only when aimed at the container itself. Clicks on
    /// the clear affordance, option rows and badges are consumed here and
    /// never reach the container's toggle.
    pub fn handle_event(&mut self, event: &Event) -> Outcome {
        let Some(role) = event.target().and_then(|t| self.role_of(t)) else {
            return Outcome::ignored();
        };

        let command = match (event, role) {
            (Event::Key { key, modifiers, .. }, ElementRole::Container) => {
                match self.keymap.resolve(*key, *modifiers) {
                    Some(command) => command,
                    None => {
                        log::trace!("Select {} ignoring key {:?}", self.id, key);
                        return Outcome::ignored();
                    }
                }
            }
            (Event::Click { button, .. }, _) if *button != MouseButton::Left => {
                return Outcome::ignored();
            }
            (Event::Click { .. }, ElementRole::Container) => Command::Activate,
            (Event::Click { .. }, ElementRole::Clear) => Command::Clear,
            (Event::Click { .. }, ElementRole::Option(index)) => Command::Pick(index),
            (Event::Click { .. }, ElementRole::Badge(index)) => Command::RemoveBadge(index),
            (Event::Hover { .. }, ElementRole::Option(index)) => Command::Hover(index),
            (Event::Blur { .. }, ElementRole::Container) => Command::Blur,
            _ => return Outcome::ignored(),
        };

        self.apply(command)
    }

    /// Apply a command to the widget.
    pub fn apply(&mut self, command: Command) -> Outcome {
        let count = self.options.len();
        match command {
            Command::Activate => {
                self.nav.toggle();
                log::debug!("Select {} activated, open={}", self.id, self.nav.is_open());
                self.mark(true);
                Outcome::consumed()
            }
            Command::Blur => {
                let closed = self.nav.blur();
                if closed {
                    log::debug!("Select {} closed on blur", self.id);
                }
                self.mark(closed);
                Outcome::ignored()
            }
            Command::Confirm => {
                if !self.nav.is_open() {
                    self.nav.open();
                    log::debug!("Select {} opened by confirm", self.id);
                    self.mark(true);
                    return Outcome::consumed();
                }
                let change = self
                    .nav
                    .highlighted(count)
                    .and_then(|index| self.options.get(index))
                    .and_then(|option| {
                        log::debug!("Select {} committing {}", self.id, option.value);
                        self.propose_toggle(option)
                    });
                self.nav.close();
                self.mark(true);
                Outcome::changed(change)
            }
            Command::MoveNext => {
                let moved = self.nav.move_next(count);
                self.mark(moved);
                Outcome::consumed()
            }
            Command::MovePrevious => {
                let moved = self.nav.move_previous(count);
                self.mark(moved);
                Outcome::consumed()
            }
            Command::MoveFirst => self.consume_if_open(|nav| nav.move_first(count)),
            Command::MoveLast => self.consume_if_open(|nav| nav.move_last(count)),
            Command::Dismiss => {
                if self.nav.close() {
                    log::debug!("Select {} dismissed", self.id);
                    self.mark(true);
                    Outcome::consumed()
                } else {
                    Outcome::ignored()
                }
            }
            Command::Clear => {
                log::debug!("Select {} cleared", self.id);
                Outcome::changed(self.propose_clear())
            }
            Command::Hover(_) | Command::Pick(_) if !self.nav.is_open() => Outcome::ignored(),
            Command::Hover(index) => {
                let moved = self.nav.hover(index, count);
                if moved {
                    log::trace!("Select {} hover {}", self.id, index);
                }
                self.mark(moved);
                if index < count {
                    Outcome::consumed()
                } else {
                    Outcome::ignored()
                }
            }
            Command::Pick(index) => {
                let Some(option) = self.options.get(index) else {
                    return Outcome::consumed();
                };
                log::debug!("Select {} picked {}", self.id, option.value);
                let change = self.propose_toggle(option);
                self.nav.hover(index, count);
                if self.config.close_on_pick {
                    self.nav.close();
                }
                self.mark(true);
                Outcome::changed(change)
            }
            Command::RemoveBadge(index) => {
                let SelectProps::Multiple { value, .. } = &self.props else {
                    return Outcome::ignored();
                };
                let Some(option) = value.get(index).cloned() else {
                    return Outcome::consumed();
                };
                log::debug!("Select {} removing badge {}", self.id, option.value);
                Outcome::changed(self.propose_toggle(&option))
            }
        }
    }

    fn consume_if_open(
        &mut self,
        f: impl FnOnce(&mut crate::navigation::Navigation) -> bool,
    ) -> Outcome {
        if !self.nav.is_open() {
            return Outcome::ignored();
        }
        let moved = f(&mut self.nav);
        self.mark(moved);
        Outcome::consumed()
    }

    fn mark(&mut self, changed: bool) {
        if changed {
            self.dirty = true;
        }
    }
}
