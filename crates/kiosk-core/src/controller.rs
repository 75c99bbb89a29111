//! Kiosk controller state machine.
//!
//! Owns the current screen, the breadcrumb, the idle watchdog and the touch
//! feedback timers for a single kiosk session.
//!
//! # Architecture: Action-Based State Machine
//!
//! - Methods accept time as a parameter (no stored clock)
//! - Methods return `Vec<KioskAction>` (or `Result` for contract checks)
//! - The runtime executes actions against the rendering surface and keeps the
//!   armed timer deadlines, calling [`KioskController::handle_timer`] when one
//!   elapses
//!
//! # Lifecycle
//!
//! ```text
//! ┌─────────┐  initialize   ┌─────────────┐  navigate_to / input
//! │ Created │──────────────>│ Initialized │<──────────┐
//! └─────────┘               └─────────────┘───────────┘
//!                                  │ watchdog fires
//!                                  ↓
//!                           return_to_welcome (fade cue)
//! ```
//!
//! The controller never halts. Navigating to an id that is not on the surface
//! leaves no screen visible and reports [`Screen::Unknown`] as current, so the
//! current screen always describes what the visitor actually sees.

use std::{
    collections::HashMap,
    time::{Duration, Instant},
};

use tracing::{debug, info, warn};

use crate::{
    affordance::OrientationLock,
    breadcrumb::{self, DEFAULT_LABEL},
    config::{IdleTimeout, KioskConfig},
    error::KioskError,
    input::{self, ButtonId, Disposition, InputEvent, PointerKind, TouchPhase},
    screen::{Screen, ScreenRegistry},
    timer::{SingleShot, TimerHandle, TimerSlot},
};

/// Screen opacity used for the idle-return fade cue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Opacity {
    /// Fully transparent.
    Transparent,
    /// Fully opaque.
    Opaque,
}

impl Opacity {
    /// Numeric opacity in `0.0..=1.0`.
    pub fn as_f32(self) -> f32 {
        match self {
            Self::Transparent => 0.0,
            Self::Opaque => 1.0,
        }
    }
}

/// Actions returned by the controller.
///
/// The runtime executes these in order:
/// - Screen and breadcrumb actions go to the rendering surface
/// - `ArmTimer` replaces any pending deadline for the same slot
/// - Fullscreen/orientation actions go to the host platform
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KioskAction {
    /// Mark every screen inactive.
    DeactivateAll,

    /// Mark this screen active.
    Activate(Screen),

    /// Set the breadcrumb text.
    SetBreadcrumb(&'static str),

    /// Set a screen's opacity.
    SetOpacity {
        /// Target screen.
        screen: Screen,
        /// New opacity.
        opacity: Opacity,
    },

    /// Set or clear a touch button's pressed feedback.
    SetPressed {
        /// Target button.
        button: ButtonId,
        /// Pressed state.
        pressed: bool,
    },

    /// Schedule `timer` to fire after `delay`, replacing any pending one.
    ArmTimer {
        /// Slot to arm.
        timer: TimerSlot,
        /// Handle to report back when it fires.
        handle: TimerHandle,
        /// Delay from now.
        delay: Duration,
    },

    /// Drop any pending deadline for `timer`.
    CancelTimer {
        /// Slot to cancel.
        timer: TimerSlot,
    },

    /// Ask the host for fullscreen.
    EnterFullscreen,

    /// Ask the host to lock the screen orientation.
    LockOrientation(OrientationLock),
}

/// Result of feeding one input event to the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputOutcome {
    /// Whether the host must suppress the event's default behaviour.
    pub disposition: Disposition,
    /// Actions to execute.
    pub actions: Vec<KioskAction>,
}

/// Kiosk navigation controller.
#[derive(Debug, Clone)]
pub struct KioskController {
    config: KioskConfig,
    registry: ScreenRegistry,
    current: Screen,
    breadcrumb: &'static str,
    watchdog: SingleShot,
    fade: SingleShot,
    feedback: HashMap<ButtonId, SingleShot>,
    initialized: bool,
}

impl KioskController {
    /// Create a controller for the screens in `registry`.
    ///
    /// Nothing is shown and no timer is armed until [`Self::initialize`].
    pub fn new(config: KioskConfig, registry: ScreenRegistry) -> Self {
        Self {
            config,
            registry,
            current: Screen::Welcome,
            breadcrumb: DEFAULT_LABEL,
            watchdog: SingleShot::new(),
            fade: SingleShot::new(),
            feedback: HashMap::new(),
            initialized: false,
        }
    }

    /// Show the welcome screen, arm the watchdog and apply the environment
    /// affordances.
    ///
    /// # Errors
    ///
    /// `AlreadyInitialized` on a second call.
    pub fn initialize(&mut self, now: Instant) -> Result<Vec<KioskAction>, KioskError> {
        if self.initialized {
            return Err(KioskError::AlreadyInitialized);
        }
        self.initialized = true;

        info!(
            screens = self.registry.len(),
            idle_timeout_ms = self.config.idle_timeout.as_millis(),
            "kiosk controller initialized"
        );

        let mut actions = self.show(Screen::Welcome, now);
        actions.push(KioskAction::LockOrientation(self.config.orientation));
        if self.config.fullscreen_on_ready {
            actions.push(KioskAction::EnterFullscreen);
        }
        Ok(actions)
    }

    /// Switch the visible screen.
    ///
    /// Screens missing from the registry deactivate everything and leave
    /// [`Screen::Unknown`] as the current screen.
    ///
    /// # Errors
    ///
    /// `NotInitialized` before [`Self::initialize`].
    pub fn navigate_to(
        &mut self,
        screen: Screen,
        now: Instant,
    ) -> Result<Vec<KioskAction>, KioskError> {
        self.ensure_initialized("navigate_to")?;
        Ok(self.show(screen, now))
    }

    /// Switch to the screen with string id `id`.
    ///
    /// # Errors
    ///
    /// `NotInitialized` before [`Self::initialize`].
    pub fn navigate_to_id(&mut self, id: &str, now: Instant) -> Result<Vec<KioskAction>, KioskError> {
        self.navigate_to(Screen::parse(id), now)
    }

    /// Manual return to the welcome screen.
    ///
    /// # Errors
    ///
    /// `NotInitialized` before [`Self::initialize`].
    pub fn go_home(&mut self, now: Instant) -> Result<Vec<KioskAction>, KioskError> {
        self.ensure_initialized("go_home")?;
        Ok(self.show(Screen::Welcome, now))
    }

    /// Return to the welcome screen with the fade cue used for idle returns.
    ///
    /// # Errors
    ///
    /// `NotInitialized` before [`Self::initialize`].
    pub fn return_to_welcome(&mut self, now: Instant) -> Result<Vec<KioskAction>, KioskError> {
        self.ensure_initialized("return_to_welcome")?;
        Ok(self.fade_to_welcome(now))
    }

    /// Restart the idle countdown from `now`.
    ///
    /// # Errors
    ///
    /// `NotInitialized` before [`Self::initialize`].
    pub fn reset_watchdog(&mut self, now: Instant) -> Result<Vec<KioskAction>, KioskError> {
        self.ensure_initialized("reset_watchdog")?;
        Ok(vec![self.arm_watchdog(now)])
    }

    /// Change the idle timeout to `seconds` and restart the countdown.
    ///
    /// Before initialization the value is stored and used by the first arming.
    ///
    /// # Errors
    ///
    /// `InvalidIdleTimeout` if `seconds` is zero; the previous timeout stays.
    pub fn set_idle_timeout(
        &mut self,
        seconds: u64,
        now: Instant,
    ) -> Result<Vec<KioskAction>, KioskError> {
        let timeout = IdleTimeout::from_secs(seconds)?;
        Ok(self.apply_idle_timeout(timeout, now))
    }

    /// Change the idle timeout and restart the countdown.
    pub fn apply_idle_timeout(&mut self, timeout: IdleTimeout, now: Instant) -> Vec<KioskAction> {
        debug!(idle_timeout_ms = timeout.as_millis(), "idle timeout changed");
        self.config.idle_timeout = timeout;

        if self.initialized { vec![self.arm_watchdog(now)] } else { Vec::new() }
    }

    /// Feed one raw input event.
    ///
    /// Suppression applies whether or not the controller is initialized;
    /// activity only restarts the watchdog once it is.
    pub fn handle_input(&mut self, event: &InputEvent, now: Instant) -> InputOutcome {
        let disposition = input::disposition(event);
        if disposition == Disposition::Prevent {
            debug!(?event, "suppressed input");
        }

        let mut actions = self.touch_feedback(event, now);
        if self.initialized && event.is_activity() {
            actions.push(self.arm_watchdog(now));
        }

        InputOutcome { disposition, actions }
    }

    /// The host reported an orientation change; lock it again.
    pub fn orientation_changed(&self) -> Vec<KioskAction> {
        vec![KioskAction::LockOrientation(self.config.orientation)]
    }

    /// A timer armed by an earlier [`KioskAction::ArmTimer`] elapsed.
    ///
    /// Firings with a stale handle (the slot was re-armed or cancelled since)
    /// produce no actions.
    pub fn handle_timer(
        &mut self,
        timer: &TimerSlot,
        handle: TimerHandle,
        now: Instant,
    ) -> Vec<KioskAction> {
        match timer {
            TimerSlot::Watchdog => {
                if !self.watchdog.fire(handle, now) {
                    debug!(generation = handle.generation(), "stale watchdog firing ignored");
                    return Vec::new();
                }
                info!(
                    idle_timeout_ms = self.config.idle_timeout.as_millis(),
                    from = %self.current,
                    "idle timeout, returning to welcome screen"
                );
                self.fade_to_welcome(now)
            },
            TimerSlot::FadeIn => {
                if self.fade.fire(handle, now) {
                    vec![KioskAction::SetOpacity { screen: Screen::Welcome, opacity: Opacity::Opaque }]
                } else {
                    Vec::new()
                }
            },
            TimerSlot::FeedbackRelease(button) => {
                let fired = self.feedback.get_mut(button).is_some_and(|slot| slot.fire(handle, now));
                if fired {
                    self.feedback.remove(button);
                    vec![KioskAction::SetPressed { button: button.clone(), pressed: false }]
                } else {
                    Vec::new()
                }
            },
        }
    }

    /// Screen currently shown, or [`Screen::Unknown`] if none is.
    pub fn current_screen(&self) -> &Screen {
        &self.current
    }

    /// Breadcrumb for the current screen.
    pub fn breadcrumb(&self) -> &'static str {
        self.breadcrumb
    }

    /// Active idle timeout.
    pub fn idle_timeout(&self) -> IdleTimeout {
        self.config.idle_timeout
    }

    /// Whether [`Self::initialize`] has run.
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Screens this controller can show.
    pub fn registry(&self) -> &ScreenRegistry {
        &self.registry
    }

    /// When the pending watchdog fires, if armed.
    pub fn watchdog_deadline(&self) -> Option<Instant> {
        self.watchdog.deadline()
    }

    fn ensure_initialized(&self, operation: &'static str) -> Result<(), KioskError> {
        if self.initialized { Ok(()) } else { Err(KioskError::NotInitialized { operation }) }
    }

    fn show(&mut self, screen: Screen, now: Instant) -> Vec<KioskAction> {
        let mut actions = vec![KioskAction::DeactivateAll];

        if self.registry.contains(&screen) {
            debug!(from = %self.current, to = %screen, "navigating");
            actions.push(KioskAction::Activate(screen.clone()));
            self.current = screen;
        } else {
            warn!(screen = %screen, "navigation target not on surface, no screen visible");
            self.current = Screen::Unknown(screen.id().to_string());
        }

        self.breadcrumb = breadcrumb::breadcrumb_for(&self.current);
        actions.push(KioskAction::SetBreadcrumb(self.breadcrumb));
        actions.push(self.arm_watchdog(now));
        actions
    }

    fn fade_to_welcome(&mut self, now: Instant) -> Vec<KioskAction> {
        let mut actions = self.show(Screen::Welcome, now);

        if self.current == Screen::Welcome {
            let handle = self.fade.rearm(now, self.config.fade_delay);
            actions.push(KioskAction::SetOpacity {
                screen: Screen::Welcome,
                opacity: Opacity::Transparent,
            });
            actions.push(KioskAction::ArmTimer {
                timer: TimerSlot::FadeIn,
                handle,
                delay: self.config.fade_delay,
            });
        }
        actions
    }

    fn arm_watchdog(&mut self, now: Instant) -> KioskAction {
        let delay = self.config.idle_timeout.as_duration();
        let handle = self.watchdog.rearm(now, delay);
        KioskAction::ArmTimer { timer: TimerSlot::Watchdog, handle, delay }
    }

    fn touch_feedback(&mut self, event: &InputEvent, now: Instant) -> Vec<KioskAction> {
        let (button, pressed) = match event {
            InputEvent::Pointer { kind: PointerKind::Down, target: Some(button) }
            | InputEvent::Touch { phase: TouchPhase::Start, target: Some(button) } => (button, true),
            InputEvent::Pointer { kind: PointerKind::Up, target: Some(button) }
            | InputEvent::Touch { phase: TouchPhase::End, target: Some(button) } => (button, false),
            _ => return Vec::new(),
        };

        let timer = TimerSlot::FeedbackRelease(button.clone());
        if pressed {
            let mut actions = Vec::new();
            let pending = self.feedback.get_mut(button).and_then(SingleShot::cancel);
            if pending.is_some() {
                actions.push(KioskAction::CancelTimer { timer });
            }
            actions.push(KioskAction::SetPressed { button: button.clone(), pressed: true });
            actions
        } else {
            let delay = self.config.feedback_release_delay;
            let handle = self.feedback.entry(button.clone()).or_default().rearm(now, delay);
            vec![KioskAction::ArmTimer { timer, handle, delay }]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{Key, KeyEvent, Modifiers};

    fn controller() -> KioskController {
        let config = KioskConfig::default().with_idle_timeout(IdleTimeout::from_secs(5).unwrap());
        KioskController::new(config, ScreenRegistry::all())
    }

    fn watchdog_handle(actions: &[KioskAction]) -> TimerHandle {
        actions
            .iter()
            .rev()
            .find_map(|action| match action {
                KioskAction::ArmTimer { timer: TimerSlot::Watchdog, handle, .. } => Some(*handle),
                _ => None,
            })
            .expect("watchdog armed")
    }

    fn timer_handle(actions: &[KioskAction], slot: &TimerSlot) -> TimerHandle {
        actions
            .iter()
            .find_map(|action| match action {
                KioskAction::ArmTimer { timer, handle, .. } if timer == slot => Some(*handle),
                _ => None,
            })
            .expect("timer armed")
    }

    #[test]
    fn initialize_shows_welcome() {
        let t0 = Instant::now();
        let mut kiosk = controller();
        assert!(!kiosk.is_initialized());

        let actions = kiosk.initialize(t0).unwrap();
        assert_eq!(actions[0], KioskAction::DeactivateAll);
        assert_eq!(actions[1], KioskAction::Activate(Screen::Welcome));
        assert_eq!(actions[2], KioskAction::SetBreadcrumb("Home"));
        assert!(matches!(
            actions[3],
            KioskAction::ArmTimer { timer: TimerSlot::Watchdog, delay, .. } if delay == Duration::from_secs(5)
        ));
        assert_eq!(actions[4], KioskAction::LockOrientation(OrientationLock::Portrait));
        assert_eq!(actions.len(), 5);

        assert_eq!(kiosk.current_screen(), &Screen::Welcome);
        assert_eq!(kiosk.watchdog_deadline(), Some(t0 + Duration::from_secs(5)));
    }

    #[test]
    fn initialize_with_fullscreen() {
        let config = KioskConfig::default().with_fullscreen_on_ready(true);
        let mut kiosk = KioskController::new(config, ScreenRegistry::all());
        let actions = kiosk.initialize(Instant::now()).unwrap();
        assert_eq!(actions.last(), Some(&KioskAction::EnterFullscreen));
    }

    #[test]
    fn initialize_twice_is_rejected() {
        let t0 = Instant::now();
        let mut kiosk = controller();
        kiosk.initialize(t0).unwrap();
        assert_eq!(kiosk.initialize(t0), Err(KioskError::AlreadyInitialized));
    }

    #[test]
    fn operations_before_initialize_are_rejected() {
        let t0 = Instant::now();
        let mut kiosk = controller();

        assert!(matches!(
            kiosk.navigate_to(Screen::MainMenu, t0),
            Err(KioskError::NotInitialized { operation: "navigate_to" })
        ));
        assert!(kiosk.go_home(t0).is_err());
        assert!(kiosk.return_to_welcome(t0).is_err());
        assert!(kiosk.reset_watchdog(t0).is_err());
        assert_eq!(kiosk.watchdog_deadline(), None);
    }

    #[test]
    fn navigate_activates_single_screen() {
        let t0 = Instant::now();
        let mut kiosk = controller();
        kiosk.initialize(t0).unwrap();

        let actions = kiosk.navigate_to_id("services", t0).unwrap();
        let activated: Vec<&KioskAction> =
            actions.iter().filter(|a| matches!(a, KioskAction::Activate(_))).collect();
        assert_eq!(activated, [&KioskAction::Activate(Screen::Services)]);
        assert_eq!(actions[0], KioskAction::DeactivateAll);
        assert_eq!(kiosk.current_screen(), &Screen::Services);
        assert_eq!(kiosk.breadcrumb(), "Home > Main Menu > Services");
    }

    #[test]
    fn navigate_to_unknown_shows_nothing() {
        let t0 = Instant::now();
        let mut kiosk = controller();
        kiosk.initialize(t0).unwrap();
        kiosk.navigate_to(Screen::MainMenu, t0).unwrap();

        let actions = kiosk.navigate_to_id("lobby", t0).unwrap();
        assert!(!actions.iter().any(|a| matches!(a, KioskAction::Activate(_))));
        assert!(actions.contains(&KioskAction::DeactivateAll));
        assert!(actions.contains(&KioskAction::SetBreadcrumb("Home")));
        assert_eq!(kiosk.current_screen(), &Screen::Unknown("lobby".into()));

        // Watchdog still armed so the kiosk recovers on its own
        assert!(kiosk.watchdog_deadline().is_some());
    }

    #[test]
    fn navigate_to_unregistered_known_screen_reports_unknown() {
        let t0 = Instant::now();
        let registry = ScreenRegistry::from_screens([Screen::Welcome, Screen::MainMenu]);
        let mut kiosk = KioskController::new(KioskConfig::default(), registry);
        kiosk.initialize(t0).unwrap();

        kiosk.navigate_to(Screen::Events, t0).unwrap();
        assert_eq!(kiosk.current_screen(), &Screen::Unknown("events".into()));
        assert_eq!(kiosk.breadcrumb(), "Home");
    }

    #[test]
    fn go_home_has_no_fade() {
        let t0 = Instant::now();
        let mut kiosk = controller();
        kiosk.initialize(t0).unwrap();
        kiosk.navigate_to(Screen::About, t0).unwrap();

        let actions = kiosk.go_home(t0).unwrap();
        assert_eq!(kiosk.current_screen(), &Screen::Welcome);
        assert!(!actions.iter().any(|a| matches!(a, KioskAction::SetOpacity { .. })));
    }

    #[test]
    fn watchdog_returns_to_welcome_with_fade() {
        let t0 = Instant::now();
        let mut kiosk = controller();
        kiosk.initialize(t0).unwrap();
        let actions = kiosk.navigate_to(Screen::Directory, t0).unwrap();
        let handle = watchdog_handle(&actions);

        let t1 = t0 + Duration::from_secs(5);
        let actions = kiosk.handle_timer(&TimerSlot::Watchdog, handle, t1);
        assert_eq!(kiosk.current_screen(), &Screen::Welcome);
        assert!(actions.contains(&KioskAction::Activate(Screen::Welcome)));
        assert!(actions.contains(&KioskAction::SetOpacity {
            screen: Screen::Welcome,
            opacity: Opacity::Transparent
        }));

        let fade = timer_handle(&actions, &TimerSlot::FadeIn);
        let actions = kiosk.handle_timer(&TimerSlot::FadeIn, fade, t1 + Duration::from_millis(100));
        assert_eq!(actions, [KioskAction::SetOpacity {
            screen: Screen::Welcome,
            opacity: Opacity::Opaque
        }]);

        // Watchdog re-armed for the next idle period
        assert_eq!(kiosk.watchdog_deadline(), Some(t1 + Duration::from_secs(5)));
    }

    #[test]
    fn stale_watchdog_is_ignored() {
        let t0 = Instant::now();
        let mut kiosk = controller();
        let first = watchdog_handle(&kiosk.initialize(t0).unwrap());
        kiosk.navigate_to(Screen::MainMenu, t0).unwrap();

        let actions = kiosk.handle_timer(&TimerSlot::Watchdog, first, t0 + Duration::from_secs(6));
        assert!(actions.is_empty());
        assert_eq!(kiosk.current_screen(), &Screen::MainMenu);
    }

    #[test]
    fn activity_moves_deadline() {
        let t0 = Instant::now();
        let mut kiosk = controller();
        kiosk.initialize(t0).unwrap();

        let click_at = t0 + Duration::from_millis(4999);
        let outcome = kiosk.handle_input(&InputEvent::click(), click_at);
        assert_eq!(outcome.disposition, Disposition::PassThrough);
        let handle = watchdog_handle(&outcome.actions);

        assert_eq!(kiosk.watchdog_deadline(), Some(t0 + Duration::from_millis(9999)));
        assert!(kiosk.handle_timer(&TimerSlot::Watchdog, handle, t0 + Duration::from_secs(5)).is_empty());
        assert!(!kiosk.handle_timer(&TimerSlot::Watchdog, handle, t0 + Duration::from_millis(9999)).is_empty());
    }

    #[test]
    fn non_activity_does_not_reset() {
        let t0 = Instant::now();
        let mut kiosk = controller();
        kiosk.initialize(t0).unwrap();

        let outcome = kiosk.handle_input(&InputEvent::ContextMenu, t0 + Duration::from_secs(1));
        assert_eq!(outcome.disposition, Disposition::Prevent);
        assert!(outcome.actions.is_empty());
        assert_eq!(kiosk.watchdog_deadline(), Some(t0 + Duration::from_secs(5)));
    }

    #[test]
    fn input_before_initialize_is_suppressed_but_not_armed() {
        let t0 = Instant::now();
        let mut kiosk = controller();
        let chord = KeyEvent::with_modifiers(Key::Character('w'), Modifiers::CTRL);

        let outcome = kiosk.handle_input(&InputEvent::Key(chord), t0);
        assert_eq!(outcome.disposition, Disposition::Prevent);
        assert!(outcome.actions.is_empty());
        assert_eq!(kiosk.watchdog_deadline(), None);
    }

    #[test]
    fn set_idle_timeout_rearms_immediately() {
        let t0 = Instant::now();
        let mut kiosk = controller();
        kiosk.initialize(t0).unwrap();

        let t1 = t0 + Duration::from_secs(2);
        let actions = kiosk.set_idle_timeout(60, t1).unwrap();
        assert_eq!(actions.len(), 1);
        assert_eq!(kiosk.idle_timeout().as_millis(), 60_000);
        assert_eq!(kiosk.watchdog_deadline(), Some(t1 + Duration::from_mins(1)));
    }

    #[test]
    fn set_idle_timeout_zero_keeps_previous() {
        let t0 = Instant::now();
        let mut kiosk = controller();
        kiosk.initialize(t0).unwrap();

        assert!(matches!(kiosk.set_idle_timeout(0, t0), Err(KioskError::InvalidIdleTimeout { .. })));
        assert_eq!(kiosk.idle_timeout().as_millis(), 5000);
    }

    #[test]
    fn set_idle_timeout_before_initialize_is_stored() {
        let t0 = Instant::now();
        let mut kiosk = controller();
        assert!(kiosk.set_idle_timeout(1, t0).unwrap().is_empty());

        kiosk.initialize(t0).unwrap();
        assert_eq!(kiosk.watchdog_deadline(), Some(t0 + Duration::from_secs(1)));
    }

    #[test]
    fn touch_feedback_press_and_release() {
        let t0 = Instant::now();
        let mut kiosk = controller();
        kiosk.initialize(t0).unwrap();
        let button = ButtonId::new("start");

        let press = InputEvent::Touch { phase: TouchPhase::Start, target: Some(button.clone()) };
        let outcome = kiosk.handle_input(&press, t0);
        assert_eq!(outcome.actions[0], KioskAction::SetPressed { button: button.clone(), pressed: true });

        let release = InputEvent::Touch { phase: TouchPhase::End, target: Some(button.clone()) };
        let outcome = kiosk.handle_input(&release, t0 + Duration::from_millis(50));
        let slot = TimerSlot::FeedbackRelease(button.clone());
        let handle = timer_handle(&outcome.actions, &slot);

        let actions = kiosk.handle_timer(&slot, handle, t0 + Duration::from_millis(150));
        assert_eq!(actions, [KioskAction::SetPressed { button, pressed: false }]);
    }

    #[test]
    fn released_buttons_are_forgotten() {
        let t0 = Instant::now();
        let mut kiosk = controller();
        kiosk.initialize(t0).unwrap();

        for (step, name) in (0u64..).zip(["a", "b", "c"]) {
            let at = t0 + Duration::from_millis(step * 200);
            let button = ButtonId::new(name);
            let slot = TimerSlot::FeedbackRelease(button.clone());
            let release = InputEvent::Touch { phase: TouchPhase::End, target: Some(button) };
            let handle = timer_handle(&kiosk.handle_input(&release, at).actions, &slot);
            assert!(!kiosk.handle_timer(&slot, handle, at + Duration::from_millis(100)).is_empty());
            assert!(kiosk.handle_timer(&slot, handle, at + Duration::from_millis(150)).is_empty());
        }
        assert!(kiosk.feedback.is_empty());
    }

    #[test]
    fn repress_cancels_pending_release() {
        let t0 = Instant::now();
        let mut kiosk = controller();
        let button = ButtonId::new("menu");
        let slot = TimerSlot::FeedbackRelease(button.clone());

        let up = InputEvent::Pointer { kind: PointerKind::Up, target: Some(button.clone()) };
        let handle = timer_handle(&kiosk.handle_input(&up, t0).actions, &slot);

        let down = InputEvent::Pointer { kind: PointerKind::Down, target: Some(button.clone()) };
        let outcome = kiosk.handle_input(&down, t0 + Duration::from_millis(20));
        assert_eq!(outcome.actions[0], KioskAction::CancelTimer { timer: slot.clone() });

        assert!(kiosk.handle_timer(&slot, handle, t0 + Duration::from_millis(200)).is_empty());
    }

    #[test]
    fn orientation_change_relocks() {
        let kiosk = KioskController::new(
            KioskConfig::default().with_orientation(OrientationLock::Landscape),
            ScreenRegistry::all(),
        );
        assert_eq!(kiosk.orientation_changed(), [KioskAction::LockOrientation(
            OrientationLock::Landscape
        )]);
    }
}
