use selectbox::Navigation;

// ============================================================================
// Open / Close
// ============================================================================

#[test]
fn test_initial_state() {
    let nav = Navigation::new();

    assert!(!nav.is_open());
    assert_eq!(nav.highlighted_index(), 0);
    assert_eq!(nav.highlighted(3), None);
}

#[test]
fn test_open_resets_highlight() {
    let mut nav = Navigation::new();
    nav.open();
    nav.move_next(5);
    nav.move_next(5);
    assert_eq!(nav.highlighted(5), Some(2));

    nav.close();
    assert!(nav.open());
    assert_eq!(nav.highlighted(5), Some(0));
}

#[test]
fn test_open_when_open_is_noop() {
    let mut nav = Navigation::new();
    nav.open();
    nav.move_next(3);

    assert!(!nav.open());
    assert_eq!(nav.highlighted(3), Some(1));
}

#[test]
fn test_toggle_and_blur() {
    let mut nav = Navigation::new();

    nav.toggle();
    assert!(nav.is_open());
    nav.toggle();
    assert!(!nav.is_open());

    nav.open();
    assert!(nav.blur());
    assert!(!nav.is_open());
    // Blur while closed
    assert!(!nav.blur());
    assert!(!nav.is_open());
}

// ============================================================================
// Move Next / Previous
// ============================================================================

#[test]
fn test_move_next_opens_closed_list_at_zero() {
    let mut nav = Navigation::new();

    assert!(nav.move_next(3));
    assert!(nav.is_open());
    assert_eq!(nav.highlighted(3), Some(0));
}

#[test]
fn test_move_next_cycles() {
    let mut nav = Navigation::new();
    nav.open();

    let mut seen = vec![nav.highlighted(4).unwrap()];
    for _ in 0..5 {
        nav.move_next(4);
        seen.push(nav.highlighted(4).unwrap());
    }

    assert_eq!(seen, vec![0, 1, 2, 3, 0, 1]);
}

#[test]
fn test_move_previous_wraps_to_last() {
    let mut nav = Navigation::new();
    nav.open();

    nav.move_previous(3);
    assert_eq!(nav.highlighted(3), Some(2));
    nav.move_previous(3);
    assert_eq!(nav.highlighted(3), Some(1));
}

#[test]
fn test_move_previous_clamps_when_count_shrinks() {
    let mut nav = Navigation::new();
    nav.open();
    nav.hover(4, 5);

    assert!(nav.move_previous(3));
    assert_eq!(nav.highlighted(3), Some(1));
    assert!(nav.is_open());
}

#[test]
fn test_move_previous_opens_closed_list_at_zero() {
    let mut nav = Navigation::new();

    nav.move_previous(3);
    assert!(nav.is_open());
    assert_eq!(nav.highlighted(3), Some(0));
}

#[test]
fn test_empty_list_has_no_highlight() {
    let mut nav = Navigation::new();
    nav.open();

    assert!(!nav.move_next(0));
    assert!(!nav.move_previous(0));
    assert!(!nav.move_last(0));
    assert!(!nav.hover(0, 0));
    assert_eq!(nav.highlighted(0), None);
    assert_eq!(nav.highlighted_index(), 0);
}

// ============================================================================
// Hover / Jumps / Option Changes
// ============================================================================

#[test]
fn test_hover_sets_highlight_in_range() {
    let mut nav = Navigation::new();
    nav.open();

    assert!(nav.hover(2, 3));
    assert_eq!(nav.highlighted(3), Some(2));

    // Out of range hover is ignored
    assert!(!nav.hover(7, 3));
    assert_eq!(nav.highlighted(3), Some(2));
}

#[test]
fn test_hover_ignored_while_closed() {
    let mut nav = Navigation::new();

    assert!(!nav.hover(1, 3));
    assert!(!nav.is_open());
}

#[test]
fn test_first_and_last() {
    let mut nav = Navigation::new();
    assert!(!nav.move_last(4));

    nav.open();
    assert!(nav.move_last(4));
    assert_eq!(nav.highlighted(4), Some(3));
    assert!(nav.move_first(4));
    assert_eq!(nav.highlighted(4), Some(0));
}

#[test]
fn test_sync_options_clamps_highlight() {
    let mut nav = Navigation::new();
    nav.open();
    nav.move_last(5);

    nav.sync_options(2);
    assert_eq!(nav.highlighted(2), Some(1));

    nav.sync_options(0);
    assert_eq!(nav.highlighted(0), None);
    assert_eq!(nav.highlighted_index(), 0);
}
