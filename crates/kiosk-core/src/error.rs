//! Controller error types.
//!
//! None of these are runtime failures of the kiosk. They describe caller
//! ordering bugs or invalid configuration, and a runtime is expected to log
//! them and keep running.

/// Errors returned by [`crate::KioskController`] operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum KioskError {
    /// Operation attempted before `initialize`.
    #[error("{operation} called before the controller was initialized")]
    NotInitialized {
        /// Operation that was attempted.
        operation: &'static str,
    },

    /// `initialize` called a second time.
    #[error("controller already initialized")]
    AlreadyInitialized,

    /// Idle timeout must be a positive duration.
    #[error("idle timeout must be positive (got {millis}ms)")]
    InvalidIdleTimeout {
        /// Rejected value in milliseconds.
        millis: u64,
    },
}
