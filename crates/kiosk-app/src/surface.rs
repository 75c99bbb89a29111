//! Rendering surface and host capability seams.

use kiosk_core::{ButtonId, FullscreenApi, OrientationLock, PlatformError, Screen};

/// The presentation layer the controller toggles.
///
/// Every screen is either active or inactive. All methods are infallible: a
/// surface that lacks an element (for example the breadcrumb label) treats
/// the call as a no-op.
pub trait Surface: Send {
    /// Screens this surface can render.
    fn registered_screens(&self) -> Vec<Screen>;

    /// Mark every screen inactive.
    fn deactivate_all(&mut self);

    /// Mark `screen` active.
    fn activate(&mut self, screen: &Screen);

    /// Set the breadcrumb text. No-op if the surface has no breadcrumb target.
    fn set_breadcrumb(&mut self, text: &str);

    /// Set a screen's opacity in `0.0..=1.0`.
    fn set_opacity(&mut self, screen: &Screen, opacity: f32);

    /// Show or clear pressed feedback on a touch button.
    fn set_pressed(&mut self, button: &ButtonId, pressed: bool);
}

/// Host capabilities for an unattended kiosk.
///
/// Vendor variants are probed in [`FullscreenApi::CANDIDATES`] order by the
/// helpers in [`crate::affordance`].
pub trait Platform: Send {
    /// Whether the host offers `api`.
    fn fullscreen_available(&self, api: FullscreenApi) -> bool;

    /// Enter fullscreen through `api`.
    ///
    /// # Errors
    ///
    /// Returns an error if the host refused.
    fn request_fullscreen(&mut self, api: FullscreenApi) -> Result<(), PlatformError>;

    /// Leave fullscreen through `api`.
    ///
    /// # Errors
    ///
    /// Returns an error if the host refused.
    fn exit_fullscreen(&mut self, api: FullscreenApi) -> Result<(), PlatformError>;

    /// Whether the host offers an orientation lock at all.
    fn orientation_lock_available(&self) -> bool;

    /// Lock the screen orientation.
    ///
    /// # Errors
    ///
    /// Returns an error if the host refused or does not support the lock.
    fn lock_orientation(&mut self, lock: OrientationLock) -> Result<(), PlatformError>;
}
