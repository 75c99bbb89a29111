//! Kiosk navigation core logic
//!
//! Pure state machine logic for an unattended touchscreen kiosk, completely
//! decoupled from rendering, input delivery and timers. This enables
//! deterministic testing of the idle watchdog without waiting on a clock.
//!
//! # Architecture
//!
//! The [`KioskController`] is a deterministic state machine. Time is supplied
//! explicitly by the caller as an [`std::time::Instant`], and every transition
//! returns declarative [`KioskAction`]s describing the intended effects
//! (activate a screen, set the breadcrumb, arm a timer) rather than executing
//! them. A runtime or test harness interprets those actions against a real or
//! simulated rendering surface.
//!
//! # Components
//!
//! - [`screen`]: Closed set of screens and the registry present on a surface
//! - [`breadcrumb`]: Screen to breadcrumb label mapping
//! - [`timer`]: Single-shot timer slots with generation handles
//! - [`input`]: Input events, activity detection, gesture suppression policy
//! - [`affordance`]: Fullscreen/orientation capability probing
//! - [`controller`]: The kiosk controller itself
//! - [`config`]: Controller configuration
//! - [`error`]: Controller error types

#![forbid(unsafe_code)]

pub mod affordance;
pub mod breadcrumb;
pub mod config;
pub mod controller;
pub mod error;
pub mod input;
pub mod screen;
pub mod timer;

pub use affordance::{FullscreenApi, OrientationLock, PlatformError};
pub use config::{IdleTimeout, KioskConfig};
pub use controller::{InputOutcome, KioskAction, KioskController, Opacity};
pub use error::KioskError;
pub use input::{ButtonId, Disposition, InputEvent, Key, KeyEvent, Modifiers, PointerKind, TouchPhase};
pub use screen::{Screen, ScreenRegistry};
pub use timer::{SingleShot, TimerHandle, TimerSlot};
