//! Fuzz target: console command parsing never panics.

#![no_main]

use kiosk_shell::{Command, commands};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|line: &str| {
    if let Command::Timeout { seconds } = commands::parse(line) {
        assert!(seconds > 0);
    }
    let _ = commands::parse_chord(line);
});
