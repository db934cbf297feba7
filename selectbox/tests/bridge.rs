use std::sync::{Arc, Mutex, OnceLock};

use selectbox::{
    Event, EventResult, EventRouter, Key, SelectHandle, SelectOption, SelectWidget, Selection,
};

fn options() -> Vec<SelectOption> {
    ["First", "Second", "Third", "Fourth", "Fifth"]
        .into_iter()
        .zip(1_i64..)
        .map(|(label, value)| SelectOption::new(label, value))
        .collect()
}

/// Single-mode widget whose callback feeds the value straight back in,
/// the way a controlled host would.
fn controlled_single(initial: Option<SelectOption>) -> SelectHandle {
    let slot: Arc<OnceLock<SelectHandle>> = Arc::default();
    let echo = Arc::clone(&slot);
    let widget = SelectWidget::builder(options())
        .single(initial, move |value| {
            if let Some(handle) = echo.get() {
                handle.set_value(Selection::Single(value)).unwrap();
            }
        })
        .build()
        .unwrap();
    let handle = SelectHandle::new(widget);
    slot.set(handle.clone()).unwrap();
    handle
}

fn controlled_multiple(initial: Vec<SelectOption>) -> SelectHandle {
    let slot: Arc<OnceLock<SelectHandle>> = Arc::default();
    let echo = Arc::clone(&slot);
    let widget = SelectWidget::builder(options())
        .multiple(initial, move |value| {
            if let Some(handle) = echo.get() {
                let selection = Selection::Multiple(value.into_iter().collect());
                handle.set_value(selection).unwrap();
            }
        })
        .build()
        .unwrap();
    let handle = SelectHandle::new(widget);
    slot.set(handle.clone()).unwrap();
    handle
}

fn option_target(handle: &SelectHandle, index: usize) -> String {
    handle.with(|w| w.option_id(index))
}

// ============================================================================
// Handle
// ============================================================================

#[test]
fn test_callback_can_reenter_handle() {
    let opts = options();
    let handle = controlled_single(Some(opts[0].clone()));

    handle.dispatch(&Event::click(handle.id()));
    handle.dispatch(&Event::click(option_target(&handle, 3)));

    assert_eq!(handle.selection(), Selection::Single(Some(opts[3].clone())));
    assert!(!handle.is_open());
}

#[test]
fn test_handle_clones_share_state() {
    let handle = controlled_single(None);
    let other = handle.clone();

    handle.dispatch(&Event::key(handle.id(), Key::Down));

    assert!(other.is_open());
    assert_eq!(other.highlighted(), Some(0));
}

#[test]
fn test_handle_select_ignores_foreign_option() {
    let opts = options();
    let handle = controlled_multiple(vec![opts[0].clone()]);

    handle.select(&SelectOption::new("Elsewhere", 42));
    assert_eq!(handle.selection().len(), 1);

    handle.select(&opts[4]);
    assert_eq!(
        handle.selection().options(),
        vec![opts[0].clone(), opts[4].clone()]
    );
}

// ============================================================================
// Router
// ============================================================================

#[test]
fn test_router_routes_by_target() {
    let opts = options();
    let single = controlled_single(Some(opts[0].clone()));
    let multiple = controlled_multiple(vec![opts[0].clone()]);

    let mut router = EventRouter::new();
    router.register(single.clone());
    router.register(multiple.clone());

    assert_eq!(
        router.dispatch(&Event::click(multiple.id())),
        EventResult::Consumed
    );
    assert!(multiple.is_open());
    assert!(!single.is_open());

    router.dispatch(&Event::click(option_target(&multiple, 1)));
    assert_eq!(
        multiple.selection().options(),
        vec![opts[0].clone(), opts[1].clone()]
    );
    assert_eq!(single.selection(), Selection::Single(Some(opts[0].clone())));
}

#[test]
fn test_router_stable_across_state_changes() {
    let handle = controlled_single(None);
    let mut router = EventRouter::new();
    router.register(handle.clone());

    // Same router, no re-registration, sees each new state
    for expected in [0, 1, 2, 3, 4, 0] {
        router.dispatch(&Event::key(handle.id(), Key::Down));
        assert_eq!(handle.highlighted(), Some(expected));
    }
    router.dispatch(&Event::key(handle.id(), Key::Enter));

    assert_eq!(handle.selection().options()[0].label, "First");
    assert_eq!(router.handles().len(), 1);
}

#[test]
fn test_router_ignores_unknown_targets() {
    let handle = controlled_single(None);
    let mut router = EventRouter::new();
    router.register(handle.clone());

    assert_eq!(router.dispatch(&Event::click("nobody")), EventResult::Ignored);
    assert_eq!(
        router.dispatch(&Event::Hover { target: None }),
        EventResult::Ignored
    );
    assert!(!handle.is_open());
}

#[test]
fn test_clear_button_does_not_toggle_container() {
    let opts = options();
    let handle = controlled_multiple(vec![opts[0].clone(), opts[1].clone()]);
    let mut router = EventRouter::new();
    router.register(handle.clone());

    let clear_id = handle.with(|w| w.clear_id());
    assert_eq!(router.dispatch(&Event::click(clear_id)), EventResult::Consumed);

    assert!(handle.selection().is_empty());
    assert!(!handle.is_open());
}

#[test]
fn test_register_twice_and_unregister() {
    let handle = controlled_single(None);
    let mut router = EventRouter::new();
    router.register(handle.clone());
    router.register(handle.clone());
    assert_eq!(router.handles().len(), 1);
    assert!(router.get(handle.id()).is_some());

    assert!(router.unregister(handle.id()));
    assert!(!router.unregister(handle.id()));
    assert_eq!(router.dispatch(&Event::click(handle.id())), EventResult::Ignored);
}

#[test]
fn test_router_dirty_tracking() {
    let changes = Arc::new(Mutex::new(0));
    let counter = Arc::clone(&changes);
    let widget = SelectWidget::builder(options())
        .single(None, move |_| *counter.lock().unwrap() += 1)
        .build()
        .unwrap();
    let handle = SelectHandle::new(widget);
    let mut router = EventRouter::new();
    router.register(handle.clone());

    assert!(router.is_dirty());
    router.clear_dirty();
    assert!(!router.is_dirty());

    router.dispatch(&Event::click(handle.id()));
    assert!(router.is_dirty());
    assert_eq!(*changes.lock().unwrap(), 0);
}
