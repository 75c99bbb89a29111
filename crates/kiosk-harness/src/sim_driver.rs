//! Simulated environment driver.
//!
//! [`SimDriver`] is handed to the runtime; [`SimHost`] stays with the test and
//! plays the role of the browser: it delivers the ready event, raw input and
//! orientation changes, and exposes what the surface and platform recorded.

use std::sync::{Arc, Mutex, PoisonError};

use kiosk_app::{Driver, DriverEvent};
use kiosk_core::{
    ButtonId, Disposition, FullscreenApi, InputEvent, KeyEvent, PointerKind, Screen, TouchPhase,
};
use tokio::sync::mpsc;

use crate::{
    sim_platform::{PlatformState, SimPlatform},
    sim_surface::{SimSurface, SurfaceState},
};

/// Failure injected into the simulated event source.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SimError {
    /// The event source broke.
    #[error("simulated event source failure: {0}")]
    EventSource(String),
}

/// Shape of the simulated environment.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Screens present on the surface.
    pub screens: Vec<Screen>,
    /// Whether the surface has a breadcrumb label.
    pub breadcrumb_target: bool,
    /// Fullscreen variants the host offers.
    pub fullscreen_apis: Vec<FullscreenApi>,
    /// Reject fullscreen requests.
    pub reject_fullscreen: bool,
    /// Whether an orientation lock exists.
    pub orientation_lock: bool,
    /// Reject orientation locks.
    pub reject_orientation: bool,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            screens: Screen::KNOWN.to_vec(),
            breadcrumb_target: true,
            fullscreen_apis: vec![FullscreenApi::Standard],
            reject_fullscreen: false,
            orientation_lock: true,
            reject_orientation: false,
        }
    }
}

type DispositionLog = Arc<Mutex<Vec<(InputEvent, Disposition)>>>;

/// Driver backed by in-memory channels.
pub struct SimDriver {
    events: mpsc::UnboundedReceiver<Result<DriverEvent, SimError>>,
    surface: SimSurface,
    platform: SimPlatform,
    dispositions: DispositionLog,
}

impl SimDriver {
    /// Create a driver and the host side that feeds it.
    pub fn new(config: SimConfig) -> (Self, SimHost) {
        let (sender, events) = mpsc::unbounded_channel();
        let surface = SimSurface::new(config.screens, config.breadcrumb_target);
        let platform = SimPlatform::new(PlatformState {
            available: config.fullscreen_apis,
            reject_fullscreen: config.reject_fullscreen,
            orientation_lock: config.orientation_lock,
            reject_orientation: config.reject_orientation,
            ..PlatformState::default()
        });
        let dispositions = DispositionLog::default();

        let host = SimHost {
            events: sender,
            surface: surface.clone(),
            platform: platform.clone(),
            dispositions: Arc::clone(&dispositions),
        };
        (Self { events, surface, platform, dispositions }, host)
    }
}

impl Driver for SimDriver {
    type Error = SimError;
    type Surface = SimSurface;
    type Platform = SimPlatform;

    async fn poll_event(&mut self) -> Result<Option<DriverEvent>, Self::Error> {
        self.events.recv().await.transpose()
    }

    fn surface(&mut self) -> &mut Self::Surface {
        &mut self.surface
    }

    fn platform(&mut self) -> &mut Self::Platform {
        &mut self.platform
    }

    fn resolve_input(&mut self, event: &InputEvent, disposition: Disposition) {
        self.dispositions
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((event.clone(), disposition));
    }
}

/// Test-side view of the simulated environment.
///
/// Sends are silently dropped once the runtime has stopped.
#[derive(Debug, Clone)]
pub struct SimHost {
    events: mpsc::UnboundedSender<Result<DriverEvent, SimError>>,
    surface: SimSurface,
    platform: SimPlatform,
    dispositions: DispositionLog,
}

impl SimHost {
    fn deliver(&self, event: DriverEvent) {
        let _ = self.events.send(Ok(event));
    }

    /// The environment finished loading.
    pub fn ready(&self) {
        self.deliver(DriverEvent::Ready);
    }

    /// Deliver a raw input event.
    pub fn input(&self, event: InputEvent) {
        self.deliver(DriverEvent::Input(event));
    }

    /// Pointer click on empty space.
    pub fn click(&self) {
        self.input(InputEvent::click());
    }

    /// Key press.
    pub fn key(&self, key: KeyEvent) {
        self.input(InputEvent::Key(key));
    }

    /// Pointer pressed on `button`.
    pub fn press(&self, button: &str) {
        self.input(InputEvent::Pointer {
            kind: PointerKind::Down,
            target: Some(ButtonId::new(button)),
        });
    }

    /// Pointer released on `button`.
    pub fn release(&self, button: &str) {
        self.input(InputEvent::Pointer { kind: PointerKind::Up, target: Some(ButtonId::new(button)) });
    }

    /// Finger down or up on `button`.
    pub fn touch(&self, phase: TouchPhase, button: &str) {
        self.input(InputEvent::Touch { phase, target: Some(ButtonId::new(button)) });
    }

    /// The device was rotated.
    pub fn orientation_changed(&self) {
        self.deliver(DriverEvent::OrientationChanged);
    }

    /// Break the event source.
    pub fn fail(&self, reason: &str) {
        let _ = self.events.send(Err(SimError::EventSource(reason.to_string())));
    }

    /// Surface state.
    pub fn surface(&self) -> SurfaceState {
        self.surface.snapshot()
    }

    /// Platform state.
    pub fn platform(&self) -> PlatformState {
        self.platform.snapshot()
    }

    /// Every suppression decision the runtime reported, in order.
    pub fn dispositions(&self) -> Vec<(InputEvent, Disposition)> {
        self.dispositions.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }
}
