//! Deterministic simulation harness for kiosk testing.
//!
//! In-memory implementations of the [`kiosk_app::Driver`], [`kiosk_app::Surface`]
//! and [`kiosk_app::Platform`] traits. Tests run on tokio's paused clock
//! (`#[tokio::test(start_paused = true)]`), so a 30 second idle timeout
//! elapses instantly and reproducibly.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod model;
pub mod sim_driver;
pub mod sim_kiosk;
pub mod sim_platform;
pub mod sim_surface;

pub use model::{ModelKiosk, ModelScreen, Operation, OperationResult};
pub use sim_driver::{SimConfig, SimDriver, SimError, SimHost};
pub use sim_kiosk::SimKiosk;
pub use sim_platform::{PlatformCall, PlatformState, SimPlatform};
pub use sim_surface::{OpacityChange, SimSurface, SurfaceState};
