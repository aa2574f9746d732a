//! Platform-specific configuration

use crossterm::event::KeyModifiers;

/// Platform-appropriate modifier for paste
/// - macOS: SUPER (Cmd key)
/// - Linux/Windows: CONTROL (Ctrl key)
#[cfg(target_os = "macos")]
pub const PASTE_MODIFIER: KeyModifiers = KeyModifiers::SUPER;

#[cfg(not(target_os = "macos"))]
pub const PASTE_MODIFIER: KeyModifiers = KeyModifiers::CONTROL;

/// Paste shortcut display for help text
#[cfg(target_os = "macos")]
pub const PASTE_SHORTCUT: &str = "Cmd+V";

#[cfg(not(target_os = "macos"))]
pub const PASTE_SHORTCUT: &str = "^V";
