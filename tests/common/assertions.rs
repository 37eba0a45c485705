//! Domain-specific assertion macros for active-window harnesses.
//!
//! These add context-rich failure messages that make it clear which event
//! in the parsed sequence broke the expectation.
#![allow(dead_code)]

use active_window_core::{EventKind, WindowEvent};

/// Collect a parse into events, panicking with the error on failure.
///
/// ```rust
/// let events = parse_ok!(&dump.path, ParseOptions::default());
/// ```
#[macro_export]
macro_rules! parse_ok {
    ($path:expr, $options:expr) => {{
        let options: active_window_core::ParseOptions = $options;
        match active_window_core::parse($path, &options) {
            Ok(events) => events
                .collect::<active_window_core::Result<Vec<_>>>()
                .unwrap_or_else(|e| panic!("parse_ok! failed mid-sequence: {e}")),
            Err(e) => panic!("parse_ok! failed to open dump: {e}"),
        }
    }};
}

/// Assert that a parsed sequence has exactly the given event kinds, in order.
///
/// ```rust
/// assert_kinds!(events, [EventKind::Computer, EventKind::Android]);
/// ```
#[macro_export]
macro_rules! assert_kinds {
    ($events:expr, [$($kind:expr),* $(,)?]) => {{
        let events: &[active_window_core::WindowEvent] = &$events;
        let actual: Vec<active_window_core::EventKind> = events.iter().map(|e| e.kind()).collect();
        let expected: Vec<active_window_core::EventKind> = vec![$($kind),*];
        if actual != expected {
            panic!(
                "assert_kinds! failed:\n  expected: {:?}\n  actual:   {:?}",
                expected, actual
            );
        }
    }};
}

/// Every event's duration must be a finite float.
pub fn assert_finite_durations(events: &[WindowEvent]) {
    for (i, event) in events.iter().enumerate() {
        assert!(
            event.duration().is_finite(),
            "event {i} has non-finite duration: {event:?}"
        );
    }
}

/// All events in `events` must be of `kind`.
pub fn assert_all_kind(events: &[WindowEvent], kind: EventKind) {
    if let Some((i, event)) = events.iter().enumerate().find(|(_, e)| e.kind() != kind) {
        panic!("event {i} is {} not {kind}: {event:?}", event.kind());
    }
}
