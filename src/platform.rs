//! Platform-specific configuration

use crossterm::event::KeyModifiers;

/// Platform-appropriate modifier for the copy shortcut
/// - macOS: SUPER (Cmd key)
/// - Linux/Windows: CONTROL (Ctrl key)
#[cfg(target_os = "macos")]
pub const COPY_MODIFIER: KeyModifiers = KeyModifiers::SUPER;

#[cfg(not(target_os = "macos"))]
pub const COPY_MODIFIER: KeyModifiers = KeyModifiers::CONTROL;

/// Copy shortcut display
#[cfg(target_os = "macos")]
pub const COPY_SHORTCUT: &str = "Cmd+Y";

#[cfg(not(target_os = "macos"))]
pub const COPY_SHORTCUT: &str = "Ctrl+Y";

/// Submit works with Ctrl on every platform
pub const SUBMIT_SHORTCUT: &str = "Ctrl+S";

pub const ADD_TECH_SHORTCUT: &str = "Ctrl+N";

pub const REMOVE_TECH_SHORTCUT: &str = "Ctrl+D";

pub const RESET_SHORTCUT: &str = "Ctrl+R";
