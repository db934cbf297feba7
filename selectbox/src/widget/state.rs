//! Select widget state.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::config::SelectConfig;
use crate::error::SelectError;
use crate::keymap::SelectKeymap;
use crate::navigation::Navigation;
use crate::option::{OptionValue, SelectOption, first_duplicate};
use crate::props::{MultipleChangeHandler, PendingChange, SelectProps, SingleChangeHandler};
use crate::selection::{MultiSelection, Selection, SelectionMode};

/// Unique identifier for a Select widget instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SelectId(usize);

impl SelectId {
    fn new() -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

impl std::fmt::Display for SelectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "__select_{}", self.0)
    }
}

/// A select widget: navigation state plus the controlled value it was given.
///
/// The widget never applies selection changes to itself. Every change is
/// handed out as a [`PendingChange`]; the host delivers it, updates its own
/// state, and feeds the value back in with [`set_value`](Self::set_value).
///
/// # Example
///
/// ```
/// use std::sync::{Arc, Mutex};
/// use selectbox::{Command, SelectOption, SelectWidget};
///
/// let options = vec![SelectOption::new("First", 1), SelectOption::new("Second", 2)];
/// let seen = Arc::new(Mutex::new(None));
/// let sink = Arc::clone(&seen);
///
/// let mut select = SelectWidget::builder(options.clone())
///     .single(Some(options[0].clone()), move |value| *sink.lock().unwrap() = value)
///     .build()
///     .unwrap();
///
/// select.apply(Command::Activate);
/// if let Some(change) = select.apply(Command::Pick(1)).change {
///     change.emit();
/// }
/// assert_eq!(*seen.lock().unwrap(), Some(options[1].clone()));
/// ```
#[derive(Debug)]
pub struct SelectWidget {
    pub(super) id: SelectId,
    pub(super) options: Vec<SelectOption>,
    pub(super) props: SelectProps,
    pub(super) nav: Navigation,
    pub(super) config: SelectConfig,
    pub(super) keymap: SelectKeymap,
    pub(super) dirty: bool,
}

impl SelectWidget {
    /// Start building a widget over `options`.
    pub fn builder(options: Vec<SelectOption>) -> SelectBuilder<NeedsMode> {
        SelectBuilder {
            mode_marker: NeedsMode,
            options,
            config: SelectConfig::default(),
            keymap: SelectKeymap::default(),
        }
    }

    /// Get the unique ID for this select.
    pub fn id(&self) -> SelectId {
        self.id
    }

    /// Container element id.
    pub fn id_string(&self) -> String {
        self.id.to_string()
    }

    /// Clear affordance element id.
    pub fn clear_id(&self) -> String {
        format!("{}-clear", self.id)
    }

    /// Option row element id.
    pub fn option_id(&self, index: usize) -> String {
        format!("{}-opt-{}", self.id, index)
    }

    /// Badge element id.
    pub fn badge_id(&self, index: usize) -> String {
        format!("{}-badge-{}", self.id, index)
    }

    // -------------------------------------------------------------------------
    // Selection state
    // -------------------------------------------------------------------------

    pub fn mode(&self) -> SelectionMode {
        self.props.mode()
    }

    /// Snapshot of the controlled value as last supplied.
    pub fn selection(&self) -> Selection {
        self.props.selection()
    }

    pub fn is_selected(&self, option: &SelectOption) -> bool {
        match &self.props {
            SelectProps::Single { value, .. } => {
                value.as_ref().is_some_and(|v| v.same_key(option))
            }
            SelectProps::Multiple { value, .. } => value.contains(option.key()),
        }
    }

    /// Re-supply the controlled value. Must match the widget's mode.
    pub fn set_value(&mut self, selection: impl Into<Selection>) -> Result<(), SelectError> {
        let selection = selection.into();
        self.props.set_selection(selection)?;
        self.dirty = true;
        Ok(())
    }

    /// Propose toggling `option`, as if its row had been clicked.
    ///
    /// Options that are not in the current list are ignored.
    pub fn select(&self, option: &SelectOption) -> Option<PendingChange> {
        if !self.options.iter().any(|o| o.same_key(option)) {
            log::trace!("Select {} ignoring foreign option {}", self.id, option.value);
            return None;
        }
        self.propose_toggle(option)
    }

    // -------------------------------------------------------------------------
    // Options
    // -------------------------------------------------------------------------

    pub fn options(&self) -> &[SelectOption] {
        &self.options
    }

    pub fn options_count(&self) -> usize {
        self.options.len()
    }

    /// Replace the options list. Keeps the highlight inside the new list.
    pub fn set_options(&mut self, options: Vec<SelectOption>) -> Result<(), SelectError> {
        if let Some(duplicate) = first_duplicate(&options) {
            return Err(SelectError::DuplicateOption(duplicate));
        }
        self.options = options;
        self.nav.sync_options(self.options.len());
        self.dirty = true;
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Navigation
    // -------------------------------------------------------------------------

    pub fn is_open(&self) -> bool {
        self.nav.is_open()
    }

    /// Index of the highlighted option, if the list is open and non-empty.
    pub fn highlighted(&self) -> Option<usize> {
        self.nav.highlighted(self.options.len())
    }

    pub fn navigation(&self) -> Navigation {
        self.nav
    }

    pub fn config(&self) -> &SelectConfig {
        &self.config
    }

    pub fn keymap(&self) -> &SelectKeymap {
        &self.keymap
    }

    // -------------------------------------------------------------------------
    // Dirty tracking
    // -------------------------------------------------------------------------

    /// Check if the select state has changed.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Clear the dirty flag.
    pub fn clear_dirty(&mut self) {
        self.dirty = false;
    }

    pub(super) fn propose_toggle(&self, option: &SelectOption) -> Option<PendingChange> {
        let current = self.props.selection();
        let next = current.toggle(option);
        if next == current && !self.config.notify_unchanged {
            return None;
        }
        self.props.propose(next)
    }

    pub(super) fn propose_clear(&self) -> Option<PendingChange> {
        self.props.propose(Selection::empty(self.mode()))
    }
}

/// Typestate marker: builder still needs a mode.
pub struct NeedsMode;

/// Typestate marker: builder has its mode, value and callback.
pub struct HasMode {
    props: SelectProps,
    duplicate_selection: Option<OptionValue>,
}

/// Builder for [`SelectWidget`].
///
/// Uses typestate so `single()` or `multiple()` must be called before
/// `build()`.
pub struct SelectBuilder<S = NeedsMode> {
    mode_marker: S,
    options: Vec<SelectOption>,
    config: SelectConfig,
    keymap: SelectKeymap,
}

impl SelectBuilder<NeedsMode> {
    /// Single mode with an optional initial value.
    pub fn single<F>(self, value: Option<SelectOption>, on_change: F) -> SelectBuilder<HasMode>
    where
        F: Fn(Option<SelectOption>) + Send + Sync + 'static,
    {
        let on_change: SingleChangeHandler = Arc::new(on_change);
        self.with_props(SelectProps::Single { value, on_change }, None)
    }

    /// Multiple mode with an initial ordered value.
    ///
    /// Duplicate entries are reported by `build()`.
    pub fn multiple<F>(self, value: Vec<SelectOption>, on_change: F) -> SelectBuilder<HasMode>
    where
        F: Fn(Vec<SelectOption>) + Send + Sync + 'static,
    {
        let on_change: MultipleChangeHandler = Arc::new(on_change);
        let duplicate = first_duplicate(&value);
        let value = value.into_iter().collect::<MultiSelection>();
        self.with_props(SelectProps::Multiple { value, on_change }, duplicate)
    }

    /// Build from props assembled elsewhere.
    pub fn props(self, props: SelectProps) -> SelectBuilder<HasMode> {
        self.with_props(props, None)
    }

    fn with_props(
        self,
        props: SelectProps,
        duplicate_selection: Option<OptionValue>,
    ) -> SelectBuilder<HasMode> {
        SelectBuilder {
            mode_marker: HasMode {
                props,
                duplicate_selection,
            },
            options: self.options,
            config: self.config,
            keymap: self.keymap,
        }
    }
}

impl<S> SelectBuilder<S> {
    pub fn config(mut self, config: SelectConfig) -> Self {
        self.config = config;
        self
    }

    pub fn keymap(mut self, keymap: SelectKeymap) -> Self {
        self.keymap = keymap;
        self
    }

    /// Set the placeholder text shown when nothing is selected.
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.config.placeholder = placeholder.into();
        self
    }
}

impl SelectBuilder<HasMode> {
    /// Build the widget.
    ///
    /// Fails if two options share a value or a multiple-mode value repeats
    /// an option.
    pub fn build(self) -> Result<SelectWidget, SelectError> {
        if let Some(duplicate) = first_duplicate(&self.options) {
            return Err(SelectError::DuplicateOption(duplicate));
        }
        if let Some(duplicate) = self.mode_marker.duplicate_selection {
            return Err(SelectError::DuplicateSelection(duplicate));
        }

        let widget = SelectWidget {
            id: SelectId::new(),
            options: self.options,
            props: self.mode_marker.props,
            nav: Navigation::new(),
            config: self.config,
            keymap: self.keymap,
            dirty: true,
        };
        log::debug!(
            "Select::build id={} mode={} options_count={}",
            widget.id,
            widget.mode(),
            widget.options.len()
        );
        Ok(widget)
    }
}
