//! Select widget core: single and multiple selection over a list of options,
//! keyboard navigation, and a render model with badges for multi-select.
//!
//! The widget is a controlled component. It owns only its navigation state
//! (open/closed, highlighted row); the selection belongs to the host, which
//! receives proposed changes through the `on_change` callback and feeds the
//! new value back in.

pub mod bridge;
pub mod command;
pub mod config;
pub mod error;
pub mod event;
pub mod keymap;
pub mod navigation;
pub mod option;
pub mod props;
pub mod selection;
pub mod view;
pub mod widget;

pub use bridge::{EventRouter, SelectHandle};
pub use command::Command;
pub use config::SelectConfig;
pub use error::SelectError;
pub use event::{Event, EventResult, Key, Modifiers, MouseButton};
pub use keymap::{KeyCombo, SelectKeymap};
pub use navigation::Navigation;
pub use option::{OptionValue, SelectOption};
pub use props::{MultipleChangeHandler, PendingChange, SelectProps, SingleChangeHandler};
pub use selection::{MultiSelection, Selection, SelectionMode};
pub use view::{Badge, DisplayValue, OptionRow, RowEmphasis, SelectView};
pub use widget::{ElementRole, Outcome, SelectBuilder, SelectId, SelectWidget};
