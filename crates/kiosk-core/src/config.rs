//! Controller configuration.

use std::{num::NonZeroU64, time::Duration};

use crate::{affordance::OrientationLock, error::KioskError};

/// Idle period after which the kiosk returns to the welcome screen.
///
/// Always a positive number of milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IdleTimeout(NonZeroU64);

impl IdleTimeout {
    /// Default idle timeout: 30 seconds.
    pub const DEFAULT: IdleTimeout = match NonZeroU64::new(30_000) {
        Some(millis) => IdleTimeout(millis),
        None => IdleTimeout(NonZeroU64::MIN),
    };

    /// Timeout of `millis` milliseconds.
    ///
    /// # Errors
    ///
    /// `InvalidIdleTimeout` if `millis` is zero.
    pub fn from_millis(millis: u64) -> Result<Self, KioskError> {
        NonZeroU64::new(millis).map(Self).ok_or(KioskError::InvalidIdleTimeout { millis })
    }

    /// Timeout of `seconds` seconds.
    ///
    /// # Errors
    ///
    /// `InvalidIdleTimeout` if `seconds` is zero.
    pub fn from_secs(seconds: u64) -> Result<Self, KioskError> {
        Self::from_millis(seconds.saturating_mul(1000))
    }

    /// Timeout in milliseconds.
    pub fn as_millis(self) -> u64 {
        self.0.get()
    }

    /// Timeout as a [`Duration`].
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0.get())
    }
}

impl Default for IdleTimeout {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Kiosk controller configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KioskConfig {
    /// Inactivity period before returning to the welcome screen.
    pub idle_timeout: IdleTimeout,
    /// How long the welcome screen stays transparent after an idle return.
    pub fade_delay: Duration,
    /// Delay between releasing a touch button and clearing its pressed state.
    pub feedback_release_delay: Duration,
    /// Orientation to lock on ready and on every orientation change.
    pub orientation: OrientationLock,
    /// Request fullscreen as part of initialization.
    pub fullscreen_on_ready: bool,
}

impl Default for KioskConfig {
    fn default() -> Self {
        Self {
            idle_timeout: IdleTimeout::DEFAULT,
            fade_delay: Duration::from_millis(100),
            feedback_release_delay: Duration::from_millis(100),
            orientation: OrientationLock::Portrait,
            fullscreen_on_ready: false,
        }
    }
}

impl KioskConfig {
    /// Replace the idle timeout.
    #[must_use]
    pub fn with_idle_timeout(mut self, idle_timeout: IdleTimeout) -> Self {
        self.idle_timeout = idle_timeout;
        self
    }

    /// Replace the orientation lock.
    #[must_use]
    pub fn with_orientation(mut self, orientation: OrientationLock) -> Self {
        self.orientation = orientation;
        self
    }

    /// Enable or disable fullscreen on ready.
    #[must_use]
    pub fn with_fullscreen_on_ready(mut self, enabled: bool) -> Self {
        self.fullscreen_on_ready = enabled;
        self
    }
}
