//! Configuration to acknowledge viewer preferences as well as set defaults.
//!
//! Specifically, we try to find a vitrine.toml, and if present we load
//! settings from there. This covers the navigation tuning knobs (cooldown,
//! wheel threshold, compact breakpoint) and the splash duration.

use facet::Facet;
use std::fs;

#[derive(Facet, Clone)]
/// Viewer preferences loaded from vitrine.toml or falling back to defaults.
pub struct Config {
    #[facet(default = 300)]
    /// Cooldown window after an accepted scroll gesture, in milliseconds.
    pub scroll_cooldown_ms: u64,
    #[facet(default = 40)]
    /// Minimum wheel delta magnitude treated as an intentional gesture.
    pub min_wheel_delta: u16,
    #[facet(default = 768)]
    /// Logical widths at or below this render the compact layout.
    pub compact_breakpoint: u16,
    #[facet(default = 1200)]
    /// How long the warm-up splash stays on screen, in milliseconds.
    pub splash_ms: u64,
}

impl Config {
    #[must_use]
    /// Load configuration from vitrine.toml if present.
    ///
    /// # Panics
    ///
    /// Panics if the default configuration cannot be parsed.
    pub fn load() -> Self {
        if let Ok(contents) = fs::read_to_string("vitrine.toml") {
            if let Ok(config) = Self::from_toml(&contents) {
                return config;
            }
        }
        Self::from_toml("").unwrap()
    }

    /// Parse configuration from a TOML string, filling absent fields with
    /// their defaults.
    ///
    /// # Errors
    ///
    /// Returns the facet-toml parse error message for malformed input.
    pub fn from_toml(contents: &str) -> Result<Self, String> {
        facet_toml::from_str::<Self>(contents).map_err(|e| e.to_string())
    }
}
