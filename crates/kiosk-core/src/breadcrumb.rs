//! Breadcrumb labels.
//!
//! The breadcrumb is a pure function of the current screen. It is recomputed
//! synchronously on every navigation.

use crate::screen::Screen;

/// Label used for screens without a mapped path.
pub const DEFAULT_LABEL: &str = "Home";

/// Breadcrumb path for `screen`.
pub fn breadcrumb_for(screen: &Screen) -> &'static str {
    match screen {
        Screen::Welcome => "Home",
        Screen::MainMenu => "Home > Main Menu",
        Screen::About => "Home > Main Menu > About",
        Screen::Services => "Home > Main Menu > Services",
        Screen::Directory => "Home > Main Menu > Directory",
        Screen::Events => "Home > Main Menu > Events",
        Screen::Contact => "Home > Main Menu > Contact",
        Screen::Unknown(_) => DEFAULT_LABEL,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breadcrumb_table() {
        let table = Screen::KNOWN
            .iter()
            .map(|screen| format!("{screen}: {}", breadcrumb_for(screen)))
            .collect::<Vec<_>>()
            .join("\n");

        insta::assert_snapshot!(table, @r"
        welcome-screen: Home
        main-menu: Home > Main Menu
        about: Home > Main Menu > About
        services: Home > Main Menu > Services
        directory: Home > Main Menu > Directory
        events: Home > Main Menu > Events
        contact: Home > Main Menu > Contact
        ");
    }

    #[test]
    fn unknown_falls_back_to_default() {
        assert_eq!(breadcrumb_for(&Screen::parse("lobby")), DEFAULT_LABEL);
    }

    #[test]
    fn page_labels_end_with_title() {
        for screen in &Screen::KNOWN[2..] {
            let title = screen.title().unwrap_or_default();
            assert!(breadcrumb_for(screen).ends_with(title));
        }
    }
}
