//! Event binding between a host's input loop and its select widgets.
//!
//! A host subscribes once: it builds an [`EventRouter`], registers a
//! [`SelectHandle`] per widget, and forwards every input event to
//! [`EventRouter::dispatch`]. Handlers read the widget through the handle,
//! so state changes never require re-registering anything.

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::command::Command;
use crate::error::SelectError;
use crate::event::{Event, EventResult};
use crate::option::SelectOption;
use crate::selection::Selection;
use crate::view::SelectView;
use crate::widget::{Outcome, SelectWidget};

/// Shared, cloneable reference to a select widget.
///
/// Cheap to clone; all clones see the same widget.
#[derive(Debug, Clone)]
pub struct SelectHandle {
    id: String,
    inner: Arc<RwLock<SelectWidget>>,
}

impl SelectHandle {
    pub fn new(widget: SelectWidget) -> Self {
        Self {
            id: widget.id_string(),
            inner: Arc::new(RwLock::new(widget)),
        }
    }

    /// Container element id of the wrapped widget.
    pub fn id(&self) -> &str {
        &self.id
    }

    fn read(&self) -> RwLockReadGuard<'_, SelectWidget> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, SelectWidget> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Run `f` against the current widget state.
    pub fn with<R>(&self, f: impl FnOnce(&SelectWidget) -> R) -> R {
        f(&self.read())
    }

    /// Handle an event and deliver any resulting change.
    ///
    /// The change callback runs after the widget is released, so it may use
    /// this handle (e.g. to feed the new value back in).
    pub fn dispatch(&self, event: &Event) -> EventResult {
        let outcome = self.write().handle_event(event);
        Self::deliver(outcome)
    }

    /// Apply a command and deliver any resulting change.
    pub fn apply(&self, command: Command) -> EventResult {
        let outcome = self.write().apply(command);
        Self::deliver(outcome)
    }

    /// Toggle `option` programmatically. Foreign options are ignored.
    pub fn select(&self, option: &SelectOption) {
        let change = self.read().select(option);
        if let Some(change) = change {
            change.emit();
        }
    }

    fn deliver(outcome: Outcome) -> EventResult {
        if let Some(change) = outcome.change {
            change.emit();
        }
        outcome.result
    }

    pub fn owns(&self, target: &str) -> bool {
        self.read().owns(target)
    }

    pub fn set_value(&self, selection: impl Into<Selection>) -> Result<(), SelectError> {
        self.write().set_value(selection)
    }

    pub fn set_options(&self, options: Vec<SelectOption>) -> Result<(), SelectError> {
        self.write().set_options(options)
    }

    pub fn selection(&self) -> Selection {
        self.read().selection()
    }

    pub fn is_open(&self) -> bool {
        self.read().is_open()
    }

    pub fn highlighted(&self) -> Option<usize> {
        self.read().highlighted()
    }

    pub fn view(&self) -> SelectView {
        self.read().view()
    }

    pub fn is_dirty(&self) -> bool {
        self.read().is_dirty()
    }

    pub fn clear_dirty(&self) {
        self.write().clear_dirty();
    }
}

/// Routes targeted events to the widgets that own them.
#[derive(Debug, Clone, Default)]
pub struct EventRouter {
    handles: Vec<SelectHandle>,
}

impl EventRouter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a widget. Registering the same widget twice is a no-op.
    pub fn register(&mut self, handle: SelectHandle) {
        if self.handles.iter().any(|h| h.id() == handle.id()) {
            return;
        }
        log::debug!("EventRouter registered {}", handle.id());
        self.handles.push(handle);
    }

    /// Stop routing to a widget. Returns true if it was registered.
    pub fn unregister(&mut self, id: &str) -> bool {
        let before = self.handles.len();
        self.handles.retain(|h| h.id() != id);
        before != self.handles.len()
    }

    pub fn handles(&self) -> &[SelectHandle] {
        &self.handles
    }

    pub fn get(&self, id: &str) -> Option<&SelectHandle> {
        self.handles.iter().find(|h| h.id() == id)
    }

    /// Deliver an event to the widget owning its target.
    pub fn dispatch(&self, event: &Event) -> EventResult {
        let Some(target) = event.target() else {
            return EventResult::Ignored;
        };
        match self.handles.iter().find(|h| h.owns(target)) {
            Some(handle) => handle.dispatch(event),
            None => EventResult::Ignored,
        }
    }

    /// Whether any routed widget needs a redraw.
    pub fn is_dirty(&self) -> bool {
        self.handles.iter().any(SelectHandle::is_dirty)
    }

    pub fn clear_dirty(&self) {
        for handle in &self.handles {
            handle.clear_dirty();
        }
    }
}
