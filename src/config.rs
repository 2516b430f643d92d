//! Application configuration.
//!
//! Centralizes the widget's compile-time constants. Demo assets are loaded at
//! compile time using `include_str!`. Runtime options live in
//! [`filedeck_core::FileManagerConfig`].

// =============================================================================
// Demo Assets (loaded at compile time)
// =============================================================================

/// Sample dataset mounted by the demo binary.
pub const DEMO_FILES: &str = include_str!("../assets/demo_files.json");

/// Widget configuration used by the demo binary.
pub const DEMO_CONFIG: &str = include_str!("../assets/filemanager.toml");

/// Delay before the demo host reports an upload as finished (milliseconds).
pub const DEMO_UPLOAD_DELAY_MS: u32 = 800;

// =============================================================================
// Logging
// =============================================================================

/// Maximum level forwarded to the browser console.
pub const LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;

// =============================================================================
// Layout Configuration
// =============================================================================

/// Below this width the navigation pane becomes a toggled overlay.
pub const NARROW_BREAKPOINT: &str = "(max-width: 768px)";

/// Decimal places for sizes in the list view and upload panel.
pub const SIZE_DECIMALS: usize = 2;

/// CSS custom properties exposed to the host stylesheet.
pub mod css_vars {
    pub const PRIMARY_COLOR: &str = "--file-manager-primary-color";
    pub const FONT_FAMILY: &str = "--file-manager-font-family";
}

// =============================================================================
// UI Configuration
// =============================================================================

/// Icon theme selection.
///
/// Available themes:
/// - `Bootstrap` - Familiar, slightly bolder (default)
/// - `Lucide` - Minimal, thin strokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Bootstrap,
    Lucide,
}

/// Current icon theme used throughout the widget.
/// Change this value to switch icon styles globally.
pub const ICON_THEME: IconTheme = IconTheme::Bootstrap;
