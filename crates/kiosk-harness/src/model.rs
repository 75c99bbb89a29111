//! Reference model for model-based testing.
//!
//! [`ModelKiosk`] is a deliberately naive restatement of the kiosk rules over
//! integer milliseconds. Property tests drive it and the real controller with
//! the same [`Operation`] sequence and compare the observable state after each
//! step.

use arbitrary::Arbitrary;
use kiosk_core::Screen;

/// Delay between the fade-out and fade-in of an idle return.
pub const FADE_MS: u64 = 100;

/// Screen choice for generated operations, including one unregistered id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Arbitrary)]
pub enum ModelScreen {
    /// `welcome-screen`
    Welcome,
    /// `main-menu`
    MainMenu,
    /// `about`
    About,
    /// `services`
    Services,
    /// `directory`
    Directory,
    /// `events`
    Events,
    /// `contact`
    Contact,
    /// An id that matches no screen.
    Missing,
}

impl ModelScreen {
    /// The screen id a trigger would pass.
    pub fn id(self) -> &'static str {
        match self {
            Self::Welcome => "welcome-screen",
            Self::MainMenu => "main-menu",
            Self::About => "about",
            Self::Services => "services",
            Self::Directory => "directory",
            Self::Events => "events",
            Self::Contact => "contact",
            Self::Missing => "gift-shop",
        }
    }
}

/// One step applied to both the model and the real controller.
#[derive(Debug, Clone, PartialEq, Eq, Arbitrary)]
pub enum Operation {
    /// Navigation trigger.
    Navigate {
        /// Target.
        target: ModelScreen,
    },
    /// Home button.
    GoHome,
    /// Forced idle-style return.
    ReturnToWelcome,
    /// Pointer click (activity).
    Activity,
    /// Pointer release (not activity).
    Release,
    /// Runtime timeout change; zero is invalid.
    SetIdleTimeout {
        /// Seconds.
        seconds: u8,
    },
    /// Let virtual time pass.
    AdvanceTime {
        /// Milliseconds.
        millis: u16,
    },
}

/// Outcome of one operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationResult {
    /// Applied.
    Ok,
    /// Rejected without changing state.
    Rejected,
}

/// Reference kiosk state, times in milliseconds since start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelKiosk {
    /// Current screen id, `None` when no screen is visible.
    pub current: Option<&'static str>,
    /// Breadcrumb text.
    pub breadcrumb: String,
    /// Idle timeout.
    pub idle_ms: u64,
    /// Virtual clock.
    pub now_ms: u64,
    /// Pending watchdog deadline.
    pub watchdog_ms: u64,
    /// Pending fade-in deadline.
    pub fade_ms: Option<u64>,
    /// Whether the welcome screen is fully opaque.
    pub opaque: bool,
    /// Number of idle returns so far.
    pub idle_returns: usize,
}

impl ModelKiosk {
    /// State right after initialization.
    pub fn new(idle_ms: u64) -> Self {
        Self {
            current: Some("welcome-screen"),
            breadcrumb: "Home".into(),
            idle_ms,
            now_ms: 0,
            watchdog_ms: idle_ms,
            fade_ms: None,
            opaque: true,
            idle_returns: 0,
        }
    }

    /// Apply one operation.
    pub fn apply(&mut self, op: &Operation) -> OperationResult {
        match op {
            Operation::Navigate { target } => self.show(*target),
            Operation::GoHome => self.show(ModelScreen::Welcome),
            Operation::ReturnToWelcome => self.fade_home(),
            Operation::Activity => self.watchdog_ms = self.now_ms + self.idle_ms,
            Operation::Release => {},
            Operation::SetIdleTimeout { seconds: 0 } => return OperationResult::Rejected,
            Operation::SetIdleTimeout { seconds } => {
                self.idle_ms = u64::from(*seconds) * 1000;
                self.watchdog_ms = self.now_ms + self.idle_ms;
            },
            Operation::AdvanceTime { millis } => self.advance(u64::from(*millis)),
        }
        OperationResult::Ok
    }

    fn show(&mut self, target: ModelScreen) {
        self.breadcrumb = match target {
            ModelScreen::Welcome | ModelScreen::Missing => "Home".to_string(),
            ModelScreen::MainMenu => "Home > Main Menu".to_string(),
            other => format!("Home > Main Menu > {}", title(other)),
        };
        self.current = (target != ModelScreen::Missing).then(|| target.id());
        self.watchdog_ms = self.now_ms + self.idle_ms;
    }

    fn fade_home(&mut self) {
        self.show(ModelScreen::Welcome);
        self.opaque = false;
        self.fade_ms = Some(self.now_ms + FADE_MS);
    }

    fn advance(&mut self, millis: u64) {
        let target = self.now_ms + millis;
        loop {
            let fade_due = self.fade_ms.filter(|&at| at <= target);
            let watchdog_due = (self.watchdog_ms <= target).then_some(self.watchdog_ms);

            match (watchdog_due, fade_due) {
                (Some(watchdog), fade) if fade.is_none_or(|fade| watchdog <= fade) => {
                    self.now_ms = watchdog;
                    self.idle_returns += 1;
                    self.fade_home();
                },
                (_, Some(fade)) => {
                    self.now_ms = fade;
                    self.fade_ms = None;
                    self.opaque = true;
                },
                _ => break,
            }
        }
        self.now_ms = target;
    }
}

fn title(screen: ModelScreen) -> &'static str {
    match screen {
        ModelScreen::About => "About",
        ModelScreen::Services => "Services",
        ModelScreen::Directory => "Directory",
        ModelScreen::Events => "Events",
        ModelScreen::Contact => "Contact",
        ModelScreen::Welcome | ModelScreen::MainMenu | ModelScreen::Missing => "",
    }
}

/// The real screen a model screen corresponds to.
pub fn real_screen(screen: ModelScreen) -> Screen {
    Screen::parse(screen.id())
}
