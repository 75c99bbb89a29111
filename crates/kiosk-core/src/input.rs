//! Raw input events, activity detection and gesture suppression.
//!
//! Input serves two purposes only: any recognized activity resets the idle
//! watchdog, and a fixed set of gestures is suppressed so a visitor cannot
//! leave the kiosk. Event content is never interpreted beyond that.

use std::fmt;

use bitflags::bitflags;

bitflags! {
    /// Modifier keys held during a key event.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Modifiers: u8 {
        /// Shift key.
        const SHIFT = 0b0001;
        /// Control key.
        const CTRL = 0b0010;
        /// Alt/Option key.
        const ALT = 0b0100;
        /// Meta/Command/Windows key.
        const META = 0b1000;
    }
}

/// Identifier of an on-screen touch button.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ButtonId(String);

impl ButtonId {
    /// Wrap a button id.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The raw id.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ButtonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Logical key of a key event.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Key {
    /// Printable character, as produced with the current modifiers.
    Character(char),
    /// Function key `F1`..`F24`.
    Function(u8),
    /// Any other named key (`Enter`, `Escape`, `ArrowUp`, ...).
    Named(String),
}

/// A key press.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyEvent {
    /// Pressed key.
    pub key: Key,
    /// Modifiers held.
    pub modifiers: Modifiers,
}

impl KeyEvent {
    /// Key event without modifiers.
    pub fn new(key: Key) -> Self {
        Self { key, modifiers: Modifiers::empty() }
    }

    /// Key event with `modifiers`.
    pub fn with_modifiers(key: Key, modifiers: Modifiers) -> Self {
        Self { key, modifiers }
    }

    /// Whether this chord would close or un-fullscreen the kiosk.
    ///
    /// `F11` (any modifiers), `Alt+F4`, and `Ctrl+W` in either case.
    pub fn is_exit_chord(&self) -> bool {
        match self.key {
            Key::Function(11) => true,
            Key::Function(4) => self.modifiers.contains(Modifiers::ALT),
            Key::Character('w' | 'W') => self.modifiers.contains(Modifiers::CTRL),
            _ => false,
        }
    }
}

/// Pointer (mouse or pen) event kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerKind {
    /// Button pressed.
    Down,
    /// Button released.
    Up,
    /// Pointer moved.
    Move,
    /// Completed click.
    Click,
}

/// Touch event phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TouchPhase {
    /// Finger down.
    Start,
    /// Finger lifted.
    End,
}

/// A raw input event delivered by the host environment.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum InputEvent {
    /// Pointer event, optionally over a touch button.
    Pointer {
        /// Event kind.
        kind: PointerKind,
        /// Button under the pointer.
        target: Option<ButtonId>,
    },
    /// Touch event, optionally over a touch button.
    Touch {
        /// Touch phase.
        phase: TouchPhase,
        /// Button under the finger.
        target: Option<ButtonId>,
    },
    /// Key pressed.
    Key(KeyEvent),
    /// Page or element scrolled.
    Scroll,
    /// Context menu requested (right click, long press).
    ContextMenu,
    /// Text selection started.
    SelectStart,
    /// Drag started.
    DragStart,
}

impl InputEvent {
    /// Pointer click with no button target.
    pub fn click() -> Self {
        Self::Pointer { kind: PointerKind::Click, target: None }
    }

    /// Key press without modifiers.
    pub fn key(key: Key) -> Self {
        Self::Key(KeyEvent::new(key))
    }

    /// Whether this event counts as user activity for the idle watchdog.
    ///
    /// Releases (pointer up, touch end) and the suppressed gestures do not.
    pub fn is_activity(&self) -> bool {
        match self {
            Self::Pointer { kind, .. } => {
                matches!(kind, PointerKind::Down | PointerKind::Move | PointerKind::Click)
            },
            Self::Touch { phase, .. } => *phase == TouchPhase::Start,
            Self::Key(_) | Self::Scroll => true,
            Self::ContextMenu | Self::SelectStart | Self::DragStart => false,
        }
    }
}

/// What the host should do with an event's default browser/OS behaviour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
    /// Suppress the default behaviour.
    Prevent,
    /// Let the event behave normally.
    PassThrough,
}

/// Suppression policy for `event`.
///
/// Context menus, selection starts and drag starts are always prevented. Key
/// events are prevented only for exit chords.
pub fn disposition(event: &InputEvent) -> Disposition {
    match event {
        InputEvent::ContextMenu | InputEvent::SelectStart | InputEvent::DragStart => {
            Disposition::Prevent
        },
        InputEvent::Key(key) if key.is_exit_chord() => Disposition::Prevent,
        _ => Disposition::PassThrough,
    }
}
