//! Select widget - a dropdown select field over a controlled value.

mod events;
mod render;
mod state;

pub use events::{ElementRole, Outcome};
pub use state::{HasMode, NeedsMode, SelectBuilder, SelectId, SelectWidget};
