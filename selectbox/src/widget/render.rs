//! View-model building for the Select widget.

use crate::props::SelectProps;
use crate::view::{Badge, DisplayValue, OptionRow, SelectView};

use super::SelectWidget;

impl SelectWidget {
    /// Build the render model for the current state.
    pub fn view(&self) -> SelectView {
        let open = self.nav.is_open();
        log::trace!(
            "Select::view id={} open={} options_count={}",
            self.id,
            open,
            self.options.len()
        );

        let rows = if open {
            let highlighted = self.highlighted();
            self.options
                .iter()
                .enumerate()
                .map(|(i, option)| OptionRow {
                    id: self.option_id(i),
                    label: option.label.clone(),
                    selected: self.is_selected(option),
                    highlighted: highlighted == Some(i),
                })
                .collect()
        } else {
            Vec::new()
        };

        SelectView {
            container_id: self.id_string(),
            clear_id: self.clear_id(),
            open,
            display: self.display_value(),
            rows,
        }
    }

    fn display_value(&self) -> DisplayValue {
        let placeholder = || DisplayValue::Placeholder(self.config.placeholder.clone());
        match &self.props {
            SelectProps::Single { value: Some(option), .. } => {
                DisplayValue::Label(option.label.clone())
            }
            SelectProps::Multiple { value, .. } if !value.is_empty() => DisplayValue::Badges(
                value
                    .iter()
                    .enumerate()
                    .map(|(i, option)| Badge {
                        id: self.badge_id(i),
                        label: option.label.clone(),
                        value: option.value.clone(),
                    })
                    .collect(),
            ),
            _ => placeholder(),
        }
    }
}
