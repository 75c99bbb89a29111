//! Handle for UI triggers and host automation.
//!
//! A [`KioskHandle`] is the only way outside code reaches a running
//! controller. It is cloned into whatever wires up on-screen buttons or
//! automation hooks; there is no global instance.

use kiosk_core::Screen;
use tokio::sync::{mpsc, oneshot};

/// Commands sent from a [`KioskHandle`] to the runtime.
#[derive(Debug)]
pub(crate) enum HostCommand {
    Navigate(String),
    GoHome,
    ReturnToWelcome,
    SetIdleTimeout(u64),
    CurrentScreen(oneshot::Sender<Screen>),
    EnterFullscreen,
    ExitFullscreen,
}

/// Error returned when the runtime behind a handle has stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum HandleError {
    /// The runtime is no longer running.
    #[error("kiosk runtime closed")]
    Closed,
}

/// Cloneable handle to a running [`crate::Runtime`].
///
/// Commands are queued and applied in order by the runtime loop.
#[derive(Debug, Clone)]
pub struct KioskHandle {
    commands: mpsc::UnboundedSender<HostCommand>,
}

impl KioskHandle {
    pub(crate) fn new(commands: mpsc::UnboundedSender<HostCommand>) -> Self {
        Self { commands }
    }

    fn send(&self, command: HostCommand) -> Result<(), HandleError> {
        self.commands.send(command).map_err(|_| HandleError::Closed)
    }

    /// Navigate to the screen with id `screen_id`.
    pub fn navigate_to(&self, screen_id: impl Into<String>) -> Result<(), HandleError> {
        self.send(HostCommand::Navigate(screen_id.into()))
    }

    /// Navigate to the welcome screen.
    pub fn go_home(&self) -> Result<(), HandleError> {
        self.send(HostCommand::GoHome)
    }

    /// Force the idle-style return to the welcome screen, fade included.
    pub fn return_to_welcome(&self) -> Result<(), HandleError> {
        self.send(HostCommand::ReturnToWelcome)
    }

    /// Change the idle timeout. Zero is rejected by the controller and logged.
    pub fn set_idle_timeout(&self, seconds: u64) -> Result<(), HandleError> {
        self.send(HostCommand::SetIdleTimeout(seconds))
    }

    /// Request fullscreen from the host.
    pub fn enter_fullscreen(&self) -> Result<(), HandleError> {
        self.send(HostCommand::EnterFullscreen)
    }

    /// Leave fullscreen.
    pub fn exit_fullscreen(&self) -> Result<(), HandleError> {
        self.send(HostCommand::ExitFullscreen)
    }

    /// Screen currently shown, answered after all earlier commands applied.
    pub async fn current_screen(&self) -> Result<Screen, HandleError> {
        let (reply, response) = oneshot::channel();
        self.send(HostCommand::CurrentScreen(reply))?;
        response.await.map_err(|_| HandleError::Closed)
    }
}
