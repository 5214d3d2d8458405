//! Platform-specific configuration

use crossterm::event::KeyModifiers;

/// Modifier for the submit shortcut.
/// Ctrl on every platform: macOS terminals swallow Cmd+S.
pub const SUBMIT_MODIFIER: KeyModifiers = KeyModifiers::CONTROL;

/// Submit shortcut display for form help text
pub const SUBMIT_SHORTCUT: &str = "Ctrl+S";
