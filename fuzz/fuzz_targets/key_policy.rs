//! Fuzz target: key suppression policy.
//!
//! Only exit chords are prevented, and F11 is prevented under every modifier
//! combination.

#![no_main]

use arbitrary::Arbitrary;
use kiosk_core::{Disposition, InputEvent, Key, KeyEvent, Modifiers, input::disposition};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
enum FuzzKey {
    Character(char),
    Function(u8),
    Named(String),
}

#[derive(Debug, Arbitrary)]
struct Input {
    key: FuzzKey,
    modifiers: u8,
}

fuzz_target!(|input: Input| {
    let key = match input.key {
        FuzzKey::Character(c) => Key::Character(c),
        FuzzKey::Function(n) => Key::Function(n),
        FuzzKey::Named(name) => Key::Named(name),
    };
    let modifiers = Modifiers::from_bits_truncate(input.modifiers);
    let event = KeyEvent::with_modifiers(key, modifiers);

    let expected =
        if event.is_exit_chord() { Disposition::Prevent } else { Disposition::PassThrough };
    assert_eq!(disposition(&InputEvent::Key(event.clone())), expected);

    if event.key == Key::Function(11) {
        assert_eq!(expected, Disposition::Prevent);
    }
});
