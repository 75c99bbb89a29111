//! Line-based console feeding a running kiosk.

use std::io::Write;

use kiosk_app::{DriverEvent, KioskHandle};
use tokio::{
    io::{AsyncBufRead, AsyncBufReadExt},
    sync::mpsc,
};
use tracing::{debug, info};

use crate::{
    commands::{self, Command},
    terminal::TerminalError,
};

/// Read console lines until `/quit` or end of input.
///
/// Host commands go through `handle`; simulated input goes to the driver
/// through `events`. Returning drops `events`, which stops the runtime.
///
/// # Errors
///
/// `TerminalError::Io` if reading the console or writing a reply failed.
pub async fn run<R, W>(
    reader: R,
    out: W,
    events: mpsc::UnboundedSender<DriverEvent>,
    handle: KioskHandle,
) -> Result<(), TerminalError>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let result = forward_lines(reader, out, &events, &handle).await;
    drop(events);
    drop(handle);
    result
}

async fn forward_lines<R, W>(
    reader: R,
    mut out: W,
    events: &mpsc::UnboundedSender<DriverEvent>,
    handle: &KioskHandle,
) -> Result<(), TerminalError>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut lines = reader.lines();

    while let Some(line) = lines.next_line().await? {
        let command = commands::parse(&line);
        debug!(?command, "console command");

        // A closed handle or event channel means the runtime is gone
        let delivered = match command {
            Command::Go { screen_id } => handle.navigate_to(screen_id).is_ok(),
            Command::Home => handle.go_home().is_ok(),
            Command::Welcome => handle.return_to_welcome().is_ok(),
            Command::Timeout { seconds } => handle.set_idle_timeout(seconds).is_ok(),
            Command::Fullscreen => handle.enter_fullscreen().is_ok(),
            Command::Windowed => handle.exit_fullscreen().is_ok(),
            Command::Rotate => events.send(DriverEvent::OrientationChanged).is_ok(),
            Command::Input(inputs) => {
                inputs.into_iter().all(|input| events.send(DriverEvent::Input(input)).is_ok())
            },
            Command::Screen => match handle.current_screen().await {
                Ok(screen) => {
                    writeln!(out, "current screen: {screen}")?;
                    true
                },
                Err(_) => false,
            },
            Command::Quit => {
                info!("quit requested");
                return Ok(());
            },
            Command::Empty => true,
            Command::Unknown { input } => {
                writeln!(out, "unknown command: {input}")?;
                true
            },
            Command::InvalidArgs { command, error } => {
                writeln!(out, "{command}: {error}")?;
                true
            },
        };

        if !delivered {
            info!("kiosk runtime stopped, closing console");
            return Ok(());
        }
    }

    debug!("console input closed");
    Ok(())
}
