//! Screen identifiers and the registry of screens a surface can render.
//!
//! Screens form a closed enumeration. Any id that does not name a known
//! screen parses to [`Screen::Unknown`], so a typo in a trigger degrades to
//! "nothing visible" instead of silently aliasing another screen.

use std::{collections::BTreeSet, fmt};

/// One mutually exclusive visual state of the kiosk UI.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Screen {
    /// Attract screen shown on start and after every idle timeout.
    Welcome,
    /// Top-level menu of information pages.
    MainMenu,
    /// About page.
    About,
    /// Services page.
    Services,
    /// Directory page.
    Directory,
    /// Events page.
    Events,
    /// Contact page.
    Contact,
    /// An id that matches no known screen.
    Unknown(String),
}

impl Screen {
    /// Every known screen, in declaration order.
    pub const KNOWN: [Screen; 7] = [
        Screen::Welcome,
        Screen::MainMenu,
        Screen::About,
        Screen::Services,
        Screen::Directory,
        Screen::Events,
        Screen::Contact,
    ];

    /// Parse a screen id. Never fails: unmatched ids become [`Screen::Unknown`].
    pub fn parse(id: &str) -> Self {
        match id {
            "welcome-screen" => Self::Welcome,
            "main-menu" => Self::MainMenu,
            "about" => Self::About,
            "services" => Self::Services,
            "directory" => Self::Directory,
            "events" => Self::Events,
            "contact" => Self::Contact,
            other => Self::Unknown(other.to_string()),
        }
    }

    /// The string id used by the rendering surface.
    pub fn id(&self) -> &str {
        match self {
            Self::Welcome => "welcome-screen",
            Self::MainMenu => "main-menu",
            Self::About => "about",
            Self::Services => "services",
            Self::Directory => "directory",
            Self::Events => "events",
            Self::Contact => "contact",
            Self::Unknown(id) => id,
        }
    }

    /// Human-readable title, `None` for unknown screens.
    pub fn title(&self) -> Option<&'static str> {
        match self {
            Self::Welcome => Some("Welcome"),
            Self::MainMenu => Some("Main Menu"),
            Self::About => Some("About"),
            Self::Services => Some("Services"),
            Self::Directory => Some("Directory"),
            Self::Events => Some("Events"),
            Self::Contact => Some("Contact"),
            Self::Unknown(_) => None,
        }
    }

    /// Whether this is one of the [`Screen::KNOWN`] screens.
    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Unknown(_))
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Known screens that are actually present on the rendering surface.
///
/// Never contains [`Screen::Unknown`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenRegistry {
    screens: BTreeSet<Screen>,
}

impl ScreenRegistry {
    /// Registry containing every known screen.
    pub fn all() -> Self {
        Self::from_screens(Screen::KNOWN)
    }

    /// Build a registry, dropping unknown screens.
    pub fn from_screens(screens: impl IntoIterator<Item = Screen>) -> Self {
        Self { screens: screens.into_iter().filter(Screen::is_known).collect() }
    }

    /// Whether `screen` can be shown.
    pub fn contains(&self, screen: &Screen) -> bool {
        self.screens.contains(screen)
    }

    /// Iterate registered screens in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &Screen> {
        self.screens.iter()
    }

    /// Number of registered screens.
    pub fn len(&self) -> usize {
        self.screens.len()
    }

    /// Whether no screen is registered.
    pub fn is_empty(&self) -> bool {
        self.screens.is_empty()
    }
}

impl Default for ScreenRegistry {
    fn default() -> Self {
        Self::all()
    }
}
