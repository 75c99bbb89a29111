//! Fuzz target: screen id parsing.
//!
//! `Screen::parse` must accept any string, and the breadcrumb of whatever it
//! yields must exist.

#![no_main]

use kiosk_core::{Screen, breadcrumb::breadcrumb_for};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|id: &str| {
    let screen = Screen::parse(id);
    assert_eq!(screen.id(), id);
    assert_eq!(screen.is_known(), Screen::KNOWN.contains(&screen));
    assert!(breadcrumb_for(&screen).starts_with("Home"));
});
