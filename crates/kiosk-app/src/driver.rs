//! Driver trait for abstracting I/O operations.
//!
//! The [`Driver`] trait decouples the kiosk runtime from specific hosts. Each
//! frontend implements the trait to deliver environment events and expose its
//! rendering surface and platform capabilities, while the generic
//! [`crate::Runtime`] handles all orchestration.

use std::{future::Future, time::Instant};

use kiosk_core::{Disposition, InputEvent};

use crate::surface::{Platform, Surface};

/// Event delivered by the hosting environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DriverEvent {
    /// The environment finished loading. Delivered once.
    Ready,

    /// Raw user input.
    Input(InputEvent),

    /// The device orientation changed.
    OrientationChanged,
}

/// Abstracts I/O operations for the kiosk runtime.
///
/// Implementations provide the host-specific event source, surface and
/// platform while [`crate::Runtime`] handles orchestration logic. This ensures
/// the same orchestration code runs in the shell and in simulation.
pub trait Driver: Send {
    /// Platform-specific error type.
    type Error: std::error::Error + Send + 'static;

    /// Rendering surface type.
    type Surface: Surface;

    /// Host capability type.
    type Platform: Platform;

    /// Wait for the next environment event.
    ///
    /// Returns `None` once the environment is gone (page unload, shell exit).
    /// Must be cancel-safe: the runtime polls it inside `select!`.
    ///
    /// # Errors
    ///
    /// Returns an error if the event source failed.
    fn poll_event(&mut self) -> impl Future<Output = Result<Option<DriverEvent>, Self::Error>> + Send;

    /// Current time instant.
    ///
    /// Defaults to the tokio clock so paused-time tests see virtual time.
    fn now(&self) -> Instant {
        tokio::time::Instant::now().into_std()
    }

    /// Rendering surface.
    fn surface(&mut self) -> &mut Self::Surface;

    /// Host capabilities.
    fn platform(&mut self) -> &mut Self::Platform;

    /// Apply the suppression decision for an input event.
    fn resolve_input(&mut self, event: &InputEvent, disposition: Disposition);
}
