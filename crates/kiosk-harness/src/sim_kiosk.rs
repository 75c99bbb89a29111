//! A running kiosk in simulation.

use kiosk_app::{HandleError, KioskHandle, Runtime, RuntimeError};
use kiosk_core::{KioskConfig, Screen};
use tokio::task::{JoinError, JoinHandle};
use tracing::debug;

use crate::sim_driver::{SimConfig, SimDriver, SimError, SimHost};

/// Runtime spawned on the current tokio runtime, with both of its inputs.
pub struct SimKiosk {
    host: SimHost,
    handle: KioskHandle,
    task: JoinHandle<Result<(), RuntimeError<SimError>>>,
}

impl SimKiosk {
    /// Spawn a runtime over a fresh simulated environment.
    ///
    /// The environment is not ready yet; call `host().ready()`.
    pub fn launch(sim: SimConfig, config: KioskConfig) -> Self {
        debug!(screens = sim.screens.len(), "launching simulated kiosk");
        let (driver, host) = SimDriver::new(sim);
        let (runtime, handle) = Runtime::new(driver, config);
        let task = tokio::spawn(runtime.run());
        Self { host, handle, task }
    }

    /// Spawn over the default environment and deliver the ready event.
    pub fn start(config: KioskConfig) -> Self {
        let kiosk = Self::launch(SimConfig::default(), config);
        kiosk.host.ready();
        kiosk
    }

    /// Environment side.
    pub fn host(&self) -> &SimHost {
        &self.host
    }

    /// Trigger side.
    pub fn handle(&self) -> &KioskHandle {
        &self.handle
    }

    /// Wait until every event and command sent so far has been applied.
    ///
    /// # Errors
    ///
    /// `HandleError::Closed` if the runtime stopped.
    pub async fn settle(&self) -> Result<Screen, HandleError> {
        self.handle.current_screen().await
    }

    /// Whether the runtime task has exited.
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    /// Close the environment and wait for the runtime to stop.
    ///
    /// # Errors
    ///
    /// `JoinError` if the runtime task panicked.
    pub async fn shutdown(self) -> Result<Result<(), RuntimeError<SimError>>, JoinError> {
        let Self { host, handle, task } = self;
        drop(host);
        drop(handle);
        task.await
    }

    /// Wait for the runtime to stop on its own.
    ///
    /// # Errors
    ///
    /// `JoinError` if the runtime task panicked.
    pub async fn join(self) -> Result<Result<(), RuntimeError<SimError>>, JoinError> {
        self.task.await
    }
}
