//! Terminal implementation of the kiosk driver.
//!
//! The "page" is a line-oriented log on a writer: every surface change is
//! printed as one line. Fullscreen maps to the terminal's alternate screen;
//! terminals cannot lock orientation.

use std::io::{self, Write};

use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen},
};
use kiosk_app::{Driver, DriverEvent, Platform, Surface};
use kiosk_core::{
    ButtonId, Disposition, FullscreenApi, InputEvent, OrientationLock, PlatformError, Screen,
};
use tokio::sync::mpsc;
use tracing::{debug, warn};

/// Errors from the terminal shell.
#[derive(Debug, thiserror::Error)]
pub enum TerminalError {
    /// I/O error on the console or terminal.
    #[error("terminal I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Surface that prints every change to a writer.
pub struct TerminalSurface {
    out: Box<dyn Write + Send>,
    screens: Vec<Screen>,
}

impl TerminalSurface {
    /// Surface rendering `screens` to `out`.
    pub fn new(out: Box<dyn Write + Send>, screens: Vec<Screen>) -> Self {
        Self { out, screens }
    }

    fn line(&mut self, args: std::fmt::Arguments<'_>) {
        if let Err(error) = writeln!(self.out, "{args}").and_then(|()| self.out.flush()) {
            warn!(%error, "failed to write to terminal");
        }
    }
}

impl Surface for TerminalSurface {
    fn registered_screens(&self) -> Vec<Screen> {
        self.screens.clone()
    }

    fn deactivate_all(&mut self) {}

    fn activate(&mut self, screen: &Screen) {
        match screen.title() {
            Some(title) => self.line(format_args!("[screen] {screen} ({title})")),
            None => self.line(format_args!("[screen] {screen}")),
        }
    }

    fn set_breadcrumb(&mut self, text: &str) {
        self.line(format_args!("[breadcrumb] {text}"));
    }

    fn set_opacity(&mut self, screen: &Screen, opacity: f32) {
        self.line(format_args!("[opacity] {screen} {opacity}"));
    }

    fn set_pressed(&mut self, button: &ButtonId, pressed: bool) {
        let state = if pressed { "pressed" } else { "released" };
        self.line(format_args!("[button] {button} {state}"));
    }
}

/// Terminal host capabilities.
#[derive(Debug, Default)]
pub struct TerminalPlatform {
    alternate_screen: bool,
}

impl TerminalPlatform {
    /// Whether the alternate screen is active.
    pub fn is_fullscreen(&self) -> bool {
        self.alternate_screen
    }

    fn rejected(error: &io::Error) -> PlatformError {
        PlatformError::Rejected { capability: "alternate screen".into(), reason: error.to_string() }
    }
}

impl Platform for TerminalPlatform {
    fn fullscreen_available(&self, api: FullscreenApi) -> bool {
        api == FullscreenApi::Standard
    }

    fn request_fullscreen(&mut self, _api: FullscreenApi) -> Result<(), PlatformError> {
        if !self.alternate_screen {
            execute!(io::stdout(), EnterAlternateScreen).map_err(|e| Self::rejected(&e))?;
            self.alternate_screen = true;
        }
        Ok(())
    }

    fn exit_fullscreen(&mut self, _api: FullscreenApi) -> Result<(), PlatformError> {
        if self.alternate_screen {
            execute!(io::stdout(), LeaveAlternateScreen).map_err(|e| Self::rejected(&e))?;
            self.alternate_screen = false;
        }
        Ok(())
    }

    fn orientation_lock_available(&self) -> bool {
        false
    }

    fn lock_orientation(&mut self, _lock: OrientationLock) -> Result<(), PlatformError> {
        Err(PlatformError::Unsupported { capability: "orientation lock".into() })
    }
}

/// Terminal driver fed by the console task.
pub struct TerminalDriver {
    events: mpsc::UnboundedReceiver<DriverEvent>,
    surface: TerminalSurface,
    platform: TerminalPlatform,
}

impl TerminalDriver {
    /// Create a driver over all known screens and the sender that feeds it.
    pub fn new(out: Box<dyn Write + Send>) -> (Self, mpsc::UnboundedSender<DriverEvent>) {
        let (sender, events) = mpsc::unbounded_channel();
        let surface = TerminalSurface::new(out, Screen::KNOWN.to_vec());
        (Self { events, surface, platform: TerminalPlatform::default() }, sender)
    }
}

impl Driver for TerminalDriver {
    type Error = TerminalError;
    type Surface = TerminalSurface;
    type Platform = TerminalPlatform;

    async fn poll_event(&mut self) -> Result<Option<DriverEvent>, Self::Error> {
        Ok(self.events.recv().await)
    }

    fn surface(&mut self) -> &mut Self::Surface {
        &mut self.surface
    }

    fn platform(&mut self) -> &mut Self::Platform {
        &mut self.platform
    }

    fn resolve_input(&mut self, event: &InputEvent, disposition: Disposition) {
        if disposition == Disposition::Prevent {
            debug!(?event, "default behaviour suppressed");
            self.surface.line(format_args!("[suppressed] {event:?}"));
        }
    }
}

impl Drop for TerminalDriver {
    fn drop(&mut self) {
        if let Err(error) = self.platform.exit_fullscreen(FullscreenApi::Standard) {
            warn!(%error, "failed to restore terminal");
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl Captured {
        fn text(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    #[test]
    fn surface_prints_changes() {
        let out = Captured::default();
        let mut surface = TerminalSurface::new(Box::new(out.clone()), Screen::KNOWN.to_vec());

        surface.deactivate_all();
        surface.activate(&Screen::About);
        surface.set_breadcrumb("Home > Main Menu > About");
        surface.set_opacity(&Screen::Welcome, 0.0);
        surface.set_pressed(&ButtonId::new("home"), true);

        insta::assert_snapshot!(out.text(), @r"
        [screen] about (About)
        [breadcrumb] Home > Main Menu > About
        [opacity] welcome-screen 0
        [button] home pressed
        ");
    }

    #[test]
    fn orientation_lock_is_unsupported() {
        let mut platform = TerminalPlatform::default();
        assert!(!platform.orientation_lock_available());
        assert!(matches!(
            platform.lock_orientation(OrientationLock::Portrait),
            Err(PlatformError::Unsupported { .. })
        ));
    }

    #[test]
    fn only_standard_fullscreen() {
        let platform = TerminalPlatform::default();
        assert!(platform.fullscreen_available(FullscreenApi::Standard));
        assert!(!platform.fullscreen_available(FullscreenApi::Webkit));
        assert!(!platform.fullscreen_available(FullscreenApi::Ms));
    }
}
