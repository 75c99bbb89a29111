//! Generic kiosk runtime.
//!
//! The [`Runtime`] owns the controller, the pending timer deadlines and the
//! driver. One loop iteration handles exactly one of: an environment event, a
//! host command, or the timers due at the earliest deadline, checked in that
//! order. Everything runs
//! on the task that awaits [`Runtime::run`], so controller state never needs
//! locking.

use kiosk_core::{
    KioskAction, KioskConfig, KioskController, KioskError, ScreenRegistry,
};
use tokio::{
    sync::mpsc,
    time::{self, Instant},
};
use tracing::{debug, info, warn};

use crate::{
    affordance,
    driver::{Driver, DriverEvent},
    handle::{HostCommand, KioskHandle},
    surface::Surface,
    timers::TimerTable,
};

/// Error that stopped the runtime.
#[derive(Debug, thiserror::Error)]
pub enum RuntimeError<E: std::error::Error + 'static> {
    /// The driver's event source failed.
    #[error("driver error: {0}")]
    Driver(#[source] E),
}

/// Orchestration loop for one kiosk session.
pub struct Runtime<D: Driver> {
    driver: D,
    controller: KioskController,
    timers: TimerTable,
    commands: mpsc::UnboundedReceiver<HostCommand>,
    commands_open: bool,
}

impl<D: Driver> Runtime<D> {
    /// Create a runtime and the handle used to reach it.
    ///
    /// The controller's screen registry is read from the driver's surface.
    pub fn new(mut driver: D, config: KioskConfig) -> (Self, KioskHandle) {
        let registry = ScreenRegistry::from_screens(driver.surface().registered_screens());
        let controller = KioskController::new(config, registry);
        let (sender, commands) = mpsc::unbounded_channel();

        let runtime =
            Self { driver, controller, timers: TimerTable::new(), commands, commands_open: true };
        (runtime, KioskHandle::new(sender))
    }

    /// The controller state.
    pub fn controller(&self) -> &KioskController {
        &self.controller
    }

    /// Run until the driver reports the environment closed.
    ///
    /// Controller errors are logged and skipped; the kiosk never halts on
    /// them.
    ///
    /// # Errors
    ///
    /// Returns `RuntimeError::Driver` if the driver's event source failed.
    pub async fn run(mut self) -> Result<(), RuntimeError<D::Error>> {
        loop {
            let next_deadline = self.timers.next_deadline();

            // Environment events drain before host commands, so a
            // `current_screen` reply is ordered after every queued input.
            // A sustained input backlog also holds due timers (fade-in,
            // feedback release) until the queue is empty.
            tokio::select! {
                biased;

                event = self.driver.poll_event() => {
                    let Some(event) = event.map_err(RuntimeError::Driver)? else {
                        info!("environment closed, stopping kiosk runtime");
                        return Ok(());
                    };
                    self.handle_event(event);
                },
                command = self.commands.recv(), if self.commands_open => {
                    if let Some(command) = command {
                        self.handle_command(command);
                    } else {
                        debug!("all kiosk handles dropped");
                        self.commands_open = false;
                    }
                },
                () = sleep_until(next_deadline) => self.fire_due_timers(),
            }
        }
    }

    fn handle_event(&mut self, event: DriverEvent) {
        let now = self.driver.now();
        match event {
            DriverEvent::Ready => {
                let result = self.controller.initialize(now);
                self.apply(result);
            },
            DriverEvent::Input(input) => {
                let outcome = self.controller.handle_input(&input, now);
                self.driver.resolve_input(&input, outcome.disposition);
                self.execute(outcome.actions);
            },
            DriverEvent::OrientationChanged => {
                let actions = self.controller.orientation_changed();
                self.execute(actions);
            },
        }
    }

    fn handle_command(&mut self, command: HostCommand) {
        let now = self.driver.now();
        match command {
            HostCommand::Navigate(screen_id) => {
                let result = self.controller.navigate_to_id(&screen_id, now);
                self.apply(result);
            },
            HostCommand::GoHome => {
                let result = self.controller.go_home(now);
                self.apply(result);
            },
            HostCommand::ReturnToWelcome => {
                let result = self.controller.return_to_welcome(now);
                self.apply(result);
            },
            HostCommand::SetIdleTimeout(seconds) => {
                let result = self.controller.set_idle_timeout(seconds, now);
                self.apply(result);
            },
            HostCommand::CurrentScreen(reply) => {
                // Receiver gone means the caller stopped waiting
                let _ = reply.send(self.controller.current_screen().clone());
            },
            HostCommand::EnterFullscreen => {
                affordance::enter_fullscreen(self.driver.platform());
            },
            HostCommand::ExitFullscreen => {
                affordance::exit_fullscreen(self.driver.platform());
            },
        }
    }

    fn fire_due_timers(&mut self) {
        for (slot, handle) in self.timers.take_due(Instant::now()) {
            let actions = self.controller.handle_timer(&slot, handle, self.driver.now());
            self.execute(actions);
        }
    }

    fn apply(&mut self, result: Result<Vec<KioskAction>, KioskError>) {
        match result {
            Ok(actions) => self.execute(actions),
            Err(error) => warn!(%error, "kiosk operation rejected"),
        }
    }

    fn execute(&mut self, actions: Vec<KioskAction>) {
        for action in actions {
            match action {
                KioskAction::DeactivateAll => self.driver.surface().deactivate_all(),
                KioskAction::Activate(screen) => self.driver.surface().activate(&screen),
                KioskAction::SetBreadcrumb(text) => self.driver.surface().set_breadcrumb(text),
                KioskAction::SetOpacity { screen, opacity } => {
                    self.driver.surface().set_opacity(&screen, opacity.as_f32());
                },
                KioskAction::SetPressed { button, pressed } => {
                    self.driver.surface().set_pressed(&button, pressed);
                },
                KioskAction::ArmTimer { timer, handle, delay } => {
                    debug!(?timer, generation = handle.generation(), ?delay, "timer armed");
                    self.timers.arm(timer, handle, Instant::now() + delay);
                },
                KioskAction::CancelTimer { timer } => {
                    self.timers.cancel(&timer);
                },
                KioskAction::EnterFullscreen => {
                    affordance::enter_fullscreen(self.driver.platform());
                },
                KioskAction::LockOrientation(lock) => {
                    affordance::lock_orientation(self.driver.platform(), lock);
                },
            }
        }
    }
}

async fn sleep_until(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => time::sleep_until(deadline).await,
        None => std::future::pending().await,
    }
}
