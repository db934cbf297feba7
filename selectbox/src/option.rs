//! Option model: the items a select widget offers.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identity key of an option.
///
/// Options are compared by this key everywhere in the crate, so two option
/// values built independently (e.g. on every render) still match.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptionValue {
    Number(i64),
    Text(String),
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionValue::Number(n) => write!(f, "{}", n),
            OptionValue::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<i64> for OptionValue {
    fn from(n: i64) -> Self {
        OptionValue::Number(n)
    }
}

impl From<&str> for OptionValue {
    fn from(s: &str) -> Self {
        OptionValue::Text(s.to_string())
    }
}

impl From<String> for OptionValue {
    fn from(s: String) -> Self {
        OptionValue::Text(s)
    }
}

/// A selectable item: display label plus unique identity key.
///
/// # Example
///
/// ```
/// use selectbox::SelectOption;
///
/// let first = SelectOption::new("First", 1);
/// assert_eq!(first.label, "First");
/// assert!(first.same_key(&SelectOption::new("Renamed", 1)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    /// Display text.
    pub label: String,
    /// Identity key, unique within an options list.
    pub value: OptionValue,
}

impl SelectOption {
    /// Create a new option.
    pub fn new(label: impl Into<String>, value: impl Into<OptionValue>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }

    /// The identity key used for membership tests.
    pub fn key(&self) -> &OptionValue {
        &self.value
    }

    /// Whether both options share the same identity key.
    pub fn same_key(&self, other: &SelectOption) -> bool {
        self.value == other.value
    }
}

/// Find the first duplicated key in a list of options, if any.
pub(crate) fn first_duplicate<'a>(
    options: impl IntoIterator<Item = &'a SelectOption>,
) -> Option<OptionValue> {
    let mut seen = std::collections::HashSet::new();
    options
        .into_iter()
        .find(|o| !seen.insert(o.key()))
        .map(|o| o.value.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_deserializes_number_or_text() {
        let options: Vec<SelectOption> = serde_json::from_str(
            r#"[{"label":"First","value":1},{"label":"United States","value":"us"}]"#,
        )
        .unwrap();

        assert_eq!(options[0].value, OptionValue::Number(1));
        assert_eq!(options[1].value, OptionValue::Text("us".into()));
    }

    #[test]
    fn test_value_display() {
        assert_eq!(OptionValue::from(7).to_string(), "7");
        assert_eq!(OptionValue::from("de").to_string(), "de");
    }

    #[test]
    fn test_first_duplicate() {
        let options = vec![
            SelectOption::new("A", 1),
            SelectOption::new("B", 2),
            SelectOption::new("C", 1),
        ];
        assert_eq!(first_duplicate(&options), Some(OptionValue::Number(1)));
        assert_eq!(first_duplicate(&options[..2]), None);
    }
}
