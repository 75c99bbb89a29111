//! Fullscreen and orientation helpers.
//!
//! Each helper probes the host once, calls the first available variant and
//! swallows any failure after logging it. Nothing is retried.

use kiosk_core::{FullscreenApi, OrientationLock, affordance::probe};
use tracing::{debug, info, warn};

use crate::surface::Platform;

/// Enter fullscreen with the first available API.
///
/// Returns whether the host accepted the request.
pub fn enter_fullscreen<P: Platform + ?Sized>(platform: &mut P) -> bool {
    let Some(api) = probe(&FullscreenApi::CANDIDATES, |api| platform.fullscreen_available(api))
    else {
        debug!("no fullscreen api available");
        return false;
    };

    match platform.request_fullscreen(api) {
        Ok(()) => {
            info!(%api, "entered fullscreen");
            true
        },
        Err(error) => {
            warn!(%api, %error, "fullscreen request failed");
            false
        },
    }
}

/// Leave fullscreen with the first available API.
///
/// Returns whether the host accepted the request.
pub fn exit_fullscreen<P: Platform + ?Sized>(platform: &mut P) -> bool {
    let Some(api) = probe(&FullscreenApi::CANDIDATES, |api| platform.fullscreen_available(api))
    else {
        debug!("no fullscreen api available");
        return false;
    };

    match platform.exit_fullscreen(api) {
        Ok(()) => {
            info!(%api, "left fullscreen");
            true
        },
        Err(error) => {
            warn!(%api, %error, "fullscreen exit failed");
            false
        },
    }
}

/// Lock the screen orientation if the host supports it.
///
/// Returns whether the lock was applied.
pub fn lock_orientation<P: Platform + ?Sized>(platform: &mut P, lock: OrientationLock) -> bool {
    if !platform.orientation_lock_available() {
        debug!(%lock, "orientation lock not available");
        return false;
    }

    match platform.lock_orientation(lock) {
        Ok(()) => {
            debug!(%lock, "orientation locked");
            true
        },
        Err(error) => {
            warn!(%lock, %error, "orientation lock not supported");
            false
        },
    }
}
