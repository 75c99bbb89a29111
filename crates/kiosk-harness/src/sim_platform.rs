//! Simulated host capabilities.
//!
//! Tests choose which fullscreen variants exist and whether the host rejects
//! requests, then assert on the recorded call sequence.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use kiosk_app::Platform;
use kiosk_core::{FullscreenApi, OrientationLock, PlatformError};

/// A platform call the runtime made.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlatformCall {
    /// `request_fullscreen(api)`.
    RequestFullscreen(FullscreenApi),
    /// `exit_fullscreen(api)`.
    ExitFullscreen(FullscreenApi),
    /// `lock_orientation(lock)`.
    LockOrientation(OrientationLock),
}

/// Observable platform state.
#[derive(Debug, Clone, Default)]
pub struct PlatformState {
    /// Fullscreen variants the host offers.
    pub available: Vec<FullscreenApi>,
    /// Reject every fullscreen request.
    pub reject_fullscreen: bool,
    /// Whether an orientation lock API exists.
    pub orientation_lock: bool,
    /// Reject every orientation lock.
    pub reject_orientation: bool,
    /// Whether the host is currently fullscreen.
    pub fullscreen: bool,
    /// Orientation currently locked.
    pub locked: Option<OrientationLock>,
    /// Every call, in order.
    pub calls: Vec<PlatformCall>,
}

/// Platform writing into shared [`PlatformState`].
#[derive(Debug, Clone)]
pub struct SimPlatform {
    state: Arc<Mutex<PlatformState>>,
}

impl SimPlatform {
    /// Platform with the given initial state.
    pub fn new(state: PlatformState) -> Self {
        Self { state: Arc::new(Mutex::new(state)) }
    }

    /// Copy of the current state.
    pub fn snapshot(&self) -> PlatformState {
        self.lock().clone()
    }

    fn lock(&self) -> MutexGuard<'_, PlatformState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Platform for SimPlatform {
    fn fullscreen_available(&self, api: FullscreenApi) -> bool {
        self.lock().available.contains(&api)
    }

    fn request_fullscreen(&mut self, api: FullscreenApi) -> Result<(), PlatformError> {
        let mut state = self.lock();
        state.calls.push(PlatformCall::RequestFullscreen(api));
        if state.reject_fullscreen {
            return Err(PlatformError::Rejected {
                capability: format!("{api} fullscreen"),
                reason: "permission denied".into(),
            });
        }
        state.fullscreen = true;
        Ok(())
    }

    fn exit_fullscreen(&mut self, api: FullscreenApi) -> Result<(), PlatformError> {
        let mut state = self.lock();
        state.calls.push(PlatformCall::ExitFullscreen(api));
        state.fullscreen = false;
        Ok(())
    }

    fn orientation_lock_available(&self) -> bool {
        self.lock().orientation_lock
    }

    fn lock_orientation(&mut self, lock: OrientationLock) -> Result<(), PlatformError> {
        let mut state = self.lock();
        state.calls.push(PlatformCall::LockOrientation(lock));
        if state.reject_orientation {
            return Err(PlatformError::Unsupported { capability: "orientation lock".into() });
        }
        state.locked = Some(lock);
        Ok(())
    }
}
