//! Fuzz target: arbitrary operation sequences against the controller.
//!
//! At most one screen may be active after every operation, and an active
//! screen is always the one the controller reports.

#![no_main]

use std::{
    collections::BTreeSet,
    time::{Duration, Instant},
};

use kiosk_core::{
    InputEvent, KioskAction, KioskConfig, KioskController, ScreenRegistry, TimerHandle, TimerSlot,
};
use kiosk_harness::Operation;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|ops: Vec<Operation>| {
    let mut controller = KioskController::new(KioskConfig::default(), ScreenRegistry::all());
    let mut now = Instant::now();
    let mut active = BTreeSet::new();
    let mut pending: Vec<(TimerSlot, TimerHandle, Instant)> = Vec::new();

    let Ok(actions) = controller.initialize(now) else { return };
    let mut queue = actions;

    for op in ops.iter().take(256) {
        for action in queue.drain(..) {
            match action {
                KioskAction::DeactivateAll => active.clear(),
                KioskAction::Activate(screen) => {
                    active.insert(screen);
                },
                KioskAction::ArmTimer { timer, handle, delay } => {
                    pending.retain(|(slot, _, _)| *slot != timer);
                    pending.push((timer, handle, now + delay));
                },
                KioskAction::CancelTimer { timer } => pending.retain(|(slot, _, _)| *slot != timer),
                _ => {},
            }
        }
        assert!(active.len() <= 1);
        if let Some(screen) = active.iter().next() {
            assert_eq!(screen, controller.current_screen());
        }

        queue = match op {
            Operation::Navigate { target } => {
                controller.navigate_to_id(target.id(), now).unwrap_or_default()
            },
            Operation::GoHome => controller.go_home(now).unwrap_or_default(),
            Operation::ReturnToWelcome => controller.return_to_welcome(now).unwrap_or_default(),
            Operation::Activity => controller.handle_input(&InputEvent::click(), now).actions,
            Operation::Release => Vec::new(),
            Operation::SetIdleTimeout { seconds } => {
                controller.set_idle_timeout(u64::from(*seconds), now).unwrap_or_default()
            },
            Operation::AdvanceTime { millis } => {
                now += Duration::from_millis(u64::from(*millis));
                let due: Vec<_> = pending.iter().filter(|(_, _, at)| *at <= now).cloned().collect();
                pending.retain(|(_, _, at)| *at > now);
                due.into_iter()
                    .flat_map(|(slot, handle, at)| controller.handle_timer(&slot, handle, at))
                    .collect()
            },
        };
    }
});
