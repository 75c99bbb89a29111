//! Terminal shell for the kiosk
//!
//! A thin shell over [`kiosk_app::Driver`] that provides terminal-specific
//! I/O. All orchestration logic lives in the generic [`kiosk_app::Runtime`].

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod commands;
pub mod console;
pub mod terminal;

pub use commands::Command;
pub use kiosk_app::{Driver, KioskHandle, Runtime};
pub use terminal::{TerminalDriver, TerminalError, TerminalPlatform, TerminalSurface};
