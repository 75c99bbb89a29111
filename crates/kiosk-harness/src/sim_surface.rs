//! Simulated rendering surface.
//!
//! Records every state change so tests can assert on what a visitor would
//! have seen, and when.

use std::{
    collections::BTreeSet,
    sync::{Arc, Mutex, MutexGuard, PoisonError},
};

use kiosk_app::Surface;
use kiosk_core::{ButtonId, Screen};
use tokio::time::Instant;

/// One opacity change applied to a screen.
#[derive(Debug, Clone, PartialEq)]
pub struct OpacityChange {
    /// Virtual time of the change.
    pub at: Instant,
    /// Target screen.
    pub screen: Screen,
    /// New opacity.
    pub opacity: f32,
}

/// Observable surface state.
#[derive(Debug, Clone, Default)]
pub struct SurfaceState {
    /// Screens present on the surface.
    pub registered: Vec<Screen>,
    /// Screens currently marked active.
    pub active: BTreeSet<Screen>,
    /// Whether a breadcrumb label element exists.
    pub breadcrumb_target: bool,
    /// Breadcrumb text, if the target exists and was ever set.
    pub breadcrumb: Option<String>,
    /// Every opacity change, in order.
    pub opacity_log: Vec<OpacityChange>,
    /// Buttons currently showing pressed feedback.
    pub pressed: BTreeSet<ButtonId>,
    /// Number of `activate` calls.
    pub activations: usize,
}

impl SurfaceState {
    /// The single active screen, `None` if zero or several are active.
    pub fn active_screen(&self) -> Option<&Screen> {
        let mut active = self.active.iter();
        match (active.next(), active.next()) {
            (Some(screen), None) => Some(screen),
            _ => None,
        }
    }

    /// Number of fade-out cues (opacity set to zero) so far.
    pub fn fade_outs(&self) -> usize {
        self.opacity_log.iter().filter(|change| change.opacity == 0.0).count()
    }
}

/// Surface writing into shared [`SurfaceState`].
#[derive(Debug, Clone)]
pub struct SimSurface {
    state: Arc<Mutex<SurfaceState>>,
}

impl SimSurface {
    /// Surface rendering `screens`.
    pub fn new(screens: Vec<Screen>, breadcrumb_target: bool) -> Self {
        let state = SurfaceState { registered: screens, breadcrumb_target, ..SurfaceState::default() };
        Self { state: Arc::new(Mutex::new(state)) }
    }

    /// Copy of the current state.
    pub fn snapshot(&self) -> SurfaceState {
        self.lock().clone()
    }

    fn lock(&self) -> MutexGuard<'_, SurfaceState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Surface for SimSurface {
    fn registered_screens(&self) -> Vec<Screen> {
        self.lock().registered.clone()
    }

    fn deactivate_all(&mut self) {
        self.lock().active.clear();
    }

    fn activate(&mut self, screen: &Screen) {
        let mut state = self.lock();
        if state.registered.contains(screen) {
            state.active.insert(screen.clone());
            state.activations += 1;
        }
    }

    fn set_breadcrumb(&mut self, text: &str) {
        let mut state = self.lock();
        if state.breadcrumb_target {
            state.breadcrumb = Some(text.to_string());
        }
    }

    fn set_opacity(&mut self, screen: &Screen, opacity: f32) {
        self.lock().opacity_log.push(OpacityChange {
            at: Instant::now(),
            screen: screen.clone(),
            opacity,
        });
    }

    fn set_pressed(&mut self, button: &ButtonId, pressed: bool) {
        let mut state = self.lock();
        if pressed {
            state.pressed.insert(button.clone());
        } else {
            state.pressed.remove(button);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn activate_ignores_unregistered() {
        let mut surface = SimSurface::new(vec![Screen::Welcome], true);
        surface.activate(&Screen::Events);
        assert!(surface.snapshot().active.is_empty());

        surface.activate(&Screen::Welcome);
        assert_eq!(surface.snapshot().active_screen(), Some(&Screen::Welcome));
    }

    #[test]
    fn missing_breadcrumb_target_is_silent() {
        let mut surface = SimSurface::new(vec![Screen::Welcome], false);
        surface.set_breadcrumb("Home");
        assert_eq!(surface.snapshot().breadcrumb, None);
    }

    #[test]
    fn active_screen_requires_exactly_one() {
        let mut surface = SimSurface::new(Screen::KNOWN.to_vec(), true);
        surface.activate(&Screen::Welcome);
        surface.activate(&Screen::About);
        assert_eq!(surface.snapshot().active_screen(), None);

        surface.deactivate_all();
        assert_eq!(surface.snapshot().active_screen(), None);
    }
}
