//! App-wide keyboard shortcuts

use crate::shared::notifications::use_notifications;
use leptos::ev;
use leptos::prelude::*;

pub const SHORTCUTS: &[&str] = &[
    "Ctrl + / : Show this help",
    "Ctrl + R : Refresh page",
    "Arrow Keys : Navigate calendar (on calendar page)",
    "Escape : Close modals/details",
    "Tab : Navigate form fields",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlobalShortcut {
    ShowHelp,
    Reload,
}

pub fn global_shortcut(ctrl: bool, key: &str) -> Option<GlobalShortcut> {
    if !ctrl {
        return None;
    }
    match key {
        "/" => Some(GlobalShortcut::ShowHelp),
        "r" => Some(GlobalShortcut::Reload),
        _ => None,
    }
}

pub fn shortcuts_help() -> String {
    let mut text = String::from("Keyboard Shortcuts:");
    for line in SHORTCUTS {
        text.push('\n');
        text.push_str(line);
    }
    text
}

/// Installs the window keydown handler for the global shortcuts
#[component]
pub fn GlobalShortcuts() -> impl IntoView {
    let notifications = use_notifications();

    let handle = window_event_listener(ev::keydown, move |e| {
        let Some(shortcut) = global_shortcut(e.ctrl_key(), &e.key()) else {
            return;
        };
        e.prevent_default();
        match shortcut {
            GlobalShortcut::ShowHelp => notifications.info(shortcuts_help()),
            GlobalShortcut::Reload => {
                if let Some(window) = web_sys::window() {
                    let _ = window.location().reload();
                }
            }
        }
    });
    on_cleanup(move || handle.remove());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_global_shortcut() {
        assert_eq!(global_shortcut(true, "/"), Some(GlobalShortcut::ShowHelp));
        assert_eq!(global_shortcut(true, "r"), Some(GlobalShortcut::Reload));
        assert_eq!(global_shortcut(false, "r"), None);
        assert_eq!(global_shortcut(true, "x"), None);
    }

    #[test]
    fn test_shortcuts_help() {
        let help = shortcuts_help();
        assert!(help.starts_with("Keyboard Shortcuts:\n"));
        assert_eq!(help.lines().count(), SHORTCUTS.len() + 1);
    }
}
