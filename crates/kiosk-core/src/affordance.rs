//! Environment affordances: fullscreen and orientation lock.
//!
//! Hosts expose these capabilities through vendor-specific APIs. Instead of
//! branching at every call site, callers [`probe`] an ordered candidate list
//! and use the first implementation the host offers.

use std::fmt;

/// Vendor variants of the fullscreen API, in fallback order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FullscreenApi {
    /// Unprefixed `requestFullscreen` / `exitFullscreen`.
    Standard,
    /// `webkit`-prefixed variant.
    Webkit,
    /// `ms`-prefixed variant.
    Ms,
}

impl FullscreenApi {
    /// Candidates tried for both entering and leaving fullscreen.
    pub const CANDIDATES: [FullscreenApi; 3] =
        [FullscreenApi::Standard, FullscreenApi::Webkit, FullscreenApi::Ms];

    /// Name used in logs.
    pub fn name(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Webkit => "webkit",
            Self::Ms => "ms",
        }
    }
}

impl fmt::Display for FullscreenApi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Screen orientation to lock to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OrientationLock {
    /// Portrait (the kiosk default).
    #[default]
    Portrait,
    /// Landscape.
    Landscape,
}

impl OrientationLock {
    /// Name used in logs and by hosts.
    pub fn name(self) -> &'static str {
        match self {
            Self::Portrait => "portrait",
            Self::Landscape => "landscape",
        }
    }
}

impl fmt::Display for OrientationLock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Failure reported by a host capability.
///
/// Never fatal: callers log and carry on.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlatformError {
    /// The host does not offer this capability.
    #[error("{capability} not supported")]
    Unsupported {
        /// Capability name.
        capability: String,
    },

    /// The host offers the capability but refused the request.
    #[error("{capability} rejected: {reason}")]
    Rejected {
        /// Capability name.
        capability: String,
        /// Host-provided reason.
        reason: String,
    },
}

/// Return the first candidate the host reports as available.
pub fn probe<C: Copy>(candidates: &[C], is_available: impl Fn(C) -> bool) -> Option<C> {
    candidates.iter().copied().find(|candidate| is_available(*candidate))
}
