//! Application layer for the kiosk
//!
//! Generic runtime that drives the pure [`kiosk_core::KioskController`]
//! against a platform-specific [`Driver`], so the same orchestration runs in a
//! production shell and in deterministic simulation.
//!
//! # Components
//!
//! - [`Driver`]: Trait for platform-specific I/O abstraction
//! - [`Surface`]: Rendering surface (screens, breadcrumb, feedback)
//! - [`Platform`]: Host capabilities (fullscreen, orientation lock)
//! - [`Runtime`]: Orchestration loop executing controller actions
//! - [`KioskHandle`]: Trigger and utility surface for UI elements and hosts
//! - [`TimerTable`]: One pending deadline per timer slot

#![forbid(unsafe_code)]

pub mod affordance;
mod driver;
mod handle;
mod runtime;
mod surface;
mod timers;

pub use driver::{Driver, DriverEvent};
pub use handle::{HandleError, KioskHandle};
pub use runtime::{Runtime, RuntimeError};
pub use surface::{Platform, Surface};
pub use timers::TimerTable;
