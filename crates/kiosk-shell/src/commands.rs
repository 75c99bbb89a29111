//! Command parsing for the kiosk console.
//!
//! Lines starting with `/` are host commands. Bare words simulate visitor
//! input so the watchdog and suppression rules can be exercised from a
//! terminal.

use kiosk_core::{ButtonId, InputEvent, Key, KeyEvent, Modifiers, PointerKind, TouchPhase};

/// Parsed command from a console line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Navigate to a screen id.
    Go {
        /// Target screen id.
        screen_id: String,
    },

    /// Manual return to the welcome screen.
    Home,

    /// Idle-style return with the fade cue.
    Welcome,

    /// Change the idle timeout.
    Timeout {
        /// Seconds, positive.
        seconds: u64,
    },

    /// Print the current screen.
    Screen,

    /// Enter fullscreen.
    Fullscreen,

    /// Leave fullscreen.
    Windowed,

    /// Simulate a device rotation.
    Rotate,

    /// Quit the shell.
    Quit,

    /// Simulated visitor input, delivered in order.
    Input(Vec<InputEvent>),

    /// Blank line.
    Empty,

    /// Unknown or invalid command.
    Unknown {
        /// The original input.
        input: String,
    },

    /// Command with missing or invalid arguments.
    InvalidArgs {
        /// Command name.
        command: String,
        /// Error message.
        error: String,
    },
}

/// Parse a console line into a command.
pub fn parse(input: &str) -> Command {
    let input = input.trim();

    if input.is_empty() {
        return Command::Empty;
    }

    match input.strip_prefix('/') {
        Some(cmd_str) => parse_host_command(input, cmd_str),
        None => parse_input(input),
    }
}

fn parse_host_command(input: &str, cmd_str: &str) -> Command {
    let parts: Vec<&str> = cmd_str.split_whitespace().collect();
    let command = parts.first().copied().unwrap_or("");

    match command {
        "go" => match parts.get(1) {
            Some(id) => Command::Go { screen_id: (*id).to_string() },
            None => Command::InvalidArgs { command: "go".into(), error: "Usage: /go <screen_id>".into() },
        },

        "home" => Command::Home,

        "welcome" => Command::Welcome,

        "timeout" => match parts.get(1).map(|secs| secs.parse::<u64>()) {
            Some(Ok(0)) => Command::InvalidArgs {
                command: "timeout".into(),
                error: "Timeout must be positive".into(),
            },
            Some(Ok(seconds)) => Command::Timeout { seconds },
            Some(Err(_)) => {
                Command::InvalidArgs { command: "timeout".into(), error: "Invalid seconds".into() }
            },
            None => Command::InvalidArgs {
                command: "timeout".into(),
                error: "Usage: /timeout <seconds>".into(),
            },
        },

        "screen" => Command::Screen,

        "fullscreen" => Command::Fullscreen,

        "windowed" => Command::Windowed,

        "rotate" => Command::Rotate,

        "quit" | "q" => Command::Quit,

        _ => Command::Unknown { input: input.to_string() },
    }
}

fn parse_input(input: &str) -> Command {
    let parts: Vec<&str> = input.split_whitespace().collect();
    let command = parts.first().copied().unwrap_or("");
    let button = parts.get(1).map(|id| ButtonId::new(*id));

    match command {
        "click" => Command::Input(vec![
            InputEvent::Pointer { kind: PointerKind::Down, target: button.clone() },
            InputEvent::Pointer { kind: PointerKind::Up, target: button.clone() },
            InputEvent::Pointer { kind: PointerKind::Click, target: button },
        ]),

        "tap" => match button {
            Some(button) => Command::Input(vec![
                InputEvent::Touch { phase: TouchPhase::Start, target: Some(button.clone()) },
                InputEvent::Touch { phase: TouchPhase::End, target: Some(button) },
            ]),
            None => Command::InvalidArgs { command: "tap".into(), error: "Usage: tap <button>".into() },
        },

        "key" => match parts.get(1).map(|chord| parse_chord(chord)) {
            Some(Ok(key)) => Command::Input(vec![InputEvent::Key(key)]),
            Some(Err(error)) => Command::InvalidArgs { command: "key".into(), error },
            None => Command::InvalidArgs { command: "key".into(), error: "Usage: key <chord>".into() },
        },

        "scroll" => Command::Input(vec![InputEvent::Scroll]),

        "menu" => Command::Input(vec![InputEvent::ContextMenu]),

        "select" => Command::Input(vec![InputEvent::SelectStart]),

        "drag" => Command::Input(vec![InputEvent::DragStart]),

        _ => Command::Unknown { input: input.to_string() },
    }
}

/// Parse a key chord such as `ctrl+w`, `alt+f4`, `f11` or `enter`.
///
/// The last `+`-separated part is the key; everything before it is a
/// modifier.
///
/// # Errors
///
/// A description of the first unrecognized part.
pub fn parse_chord(chord: &str) -> Result<KeyEvent, String> {
    let mut parts: Vec<&str> = chord.split('+').collect();
    let key = parts.pop().filter(|key| !key.is_empty()).ok_or_else(|| "Missing key".to_string())?;

    let mut modifiers = Modifiers::empty();
    for part in parts {
        modifiers |= match part.to_ascii_lowercase().as_str() {
            "shift" => Modifiers::SHIFT,
            "ctrl" | "control" => Modifiers::CTRL,
            "alt" | "option" => Modifiers::ALT,
            "meta" | "cmd" | "super" => Modifiers::META,
            other => return Err(format!("Unknown modifier: {other}")),
        };
    }

    Ok(KeyEvent::with_modifiers(parse_key(key)?, modifiers))
}

fn parse_key(key: &str) -> Result<Key, String> {
    let mut chars = key.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        return Ok(Key::Character(c));
    }

    let function = key.strip_prefix(['f', 'F']).map(str::parse::<u8>);
    match function {
        Some(Ok(n @ 1..=24)) => Ok(Key::Function(n)),
        Some(Ok(n)) => Err(format!("No such function key: F{n}")),
        _ => Ok(Key::Named(key.to_string())),
    }
}
