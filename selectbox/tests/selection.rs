use selectbox::selection::{clear, is_selected, toggle};
use selectbox::{MultiSelection, SelectError, SelectOption, Selection, SelectionMode};

fn options() -> Vec<SelectOption> {
    vec![
        SelectOption::new("First", 1),
        SelectOption::new("Second", 2),
        SelectOption::new("Third", 3),
    ]
}

fn multi(items: &[SelectOption]) -> Selection {
    Selection::Multiple(items.iter().cloned().collect())
}

// ============================================================================
// Single Mode
// ============================================================================

#[test]
fn test_single_toggle_selected_is_unchanged() {
    let opts = options();
    let current = Selection::Single(Some(opts[0].clone()));

    assert_eq!(toggle(&current, &opts[0]), current);
}

#[test]
fn test_single_toggle_selected_takes_current_label() {
    let stale = Selection::Single(Some(SelectOption::new("Old label", 1)));
    let opts = options();

    assert_eq!(
        toggle(&stale, &opts[0]),
        Selection::Single(Some(opts[0].clone()))
    );
}

#[test]
fn test_single_toggle_other_replaces() {
    let opts = options();
    let current = Selection::Single(Some(opts[0].clone()));

    assert_eq!(
        toggle(&current, &opts[1]),
        Selection::Single(Some(opts[1].clone()))
    );
}

#[test]
fn test_single_toggle_from_nothing() {
    let opts = options();
    let next = toggle(&Selection::empty(SelectionMode::Single), &opts[2]);

    assert_eq!(next, Selection::Single(Some(opts[2].clone())));
}

#[test]
fn test_single_membership_is_by_value() {
    let current = Selection::Single(Some(SelectOption::new("First", 1)));
    // Freshly built option with the same value, different label
    let rebuilt = SelectOption::new("First (renamed)", 1);

    assert!(is_selected(&current, &rebuilt));
    assert_eq!(toggle(&current, &rebuilt), current);
    assert!(!is_selected(&current, &SelectOption::new("First", 2)));
}

// ============================================================================
// Multiple Mode
// ============================================================================

#[test]
fn test_multiple_toggle_appends_at_end() {
    let opts = options();
    let current = multi(&[opts[2].clone(), opts[0].clone()]);

    let next = toggle(&current, &opts[1]);

    assert_eq!(
        next.options(),
        vec![opts[2].clone(), opts[0].clone(), opts[1].clone()]
    );
}

#[test]
fn test_multiple_toggle_removes_only_that_entry() {
    let opts = options();
    let current = multi(&opts);

    let next = toggle(&current, &opts[1]);

    assert_eq!(next.options(), vec![opts[0].clone(), opts[2].clone()]);
}

#[test]
fn test_multiple_never_duplicates() {
    let opts = options();
    let mut current = Selection::empty(SelectionMode::Multiple);
    for option in [&opts[0], &opts[1], &opts[0], &opts[0], &opts[2]] {
        current = toggle(&current, option);
    }

    // First toggled in, out, in again: it moves to the end
    assert_eq!(
        current.options(),
        vec![opts[1].clone(), opts[0].clone(), opts[2].clone()]
    );
}

#[test]
fn test_multiple_removal_matches_rebuilt_option() {
    let current = multi(&[SelectOption::new("First", 1), SelectOption::new("Second", 2)]);

    let next = toggle(&current, &SelectOption::new("First", 1));

    assert_eq!(next.options(), vec![SelectOption::new("Second", 2)]);
}

#[test]
fn test_multi_selection_rejects_duplicates() {
    let opts = options();
    let result = MultiSelection::try_from_options(vec![opts[0].clone(), opts[0].clone()]);

    assert_eq!(result, Err(SelectError::DuplicateSelection(1.into())));
}

#[test]
fn test_multi_selection_from_iter_keeps_first() {
    let selection: MultiSelection = [
        SelectOption::new("One", 1),
        SelectOption::new("Uno", 1),
        SelectOption::new("Two", 2),
    ]
    .into_iter()
    .collect();

    assert_eq!(selection.len(), 2);
    assert_eq!(selection.get(0).map(|o| o.label.as_str()), Some("One"));
}

// ============================================================================
// Clear
// ============================================================================

#[test]
fn test_clear_single() {
    assert_eq!(clear(SelectionMode::Single), Selection::Single(None));
    assert!(clear(SelectionMode::Single).is_empty());
}

#[test]
fn test_clear_multiple() {
    let cleared = clear(SelectionMode::Multiple);

    assert_eq!(cleared.mode(), SelectionMode::Multiple);
    assert!(cleared.options().is_empty());
}
