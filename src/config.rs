// Configuration for the cleaner core and the terminal front end.

use crate::cleaning::CleanOptions;
use std::time::Duration;

/// Cleaning configuration
#[derive(Debug, Clone, PartialEq)]
pub struct CleaningConfig {
    /// Run the CNPJ checksum on every cleaned line (default true)
    pub validate: bool,
}

impl Default for CleaningConfig {
    fn default() -> Self {
        Self { validate: true }
    }
}

impl CleaningConfig {
    pub fn options(&self) -> CleanOptions {
        CleanOptions {
            validate: self.validate,
        }
    }
}

/// Clipboard export configuration
#[derive(Debug, Clone, PartialEq)]
pub struct ClipboardConfig {
    /// How long the "Copied!" state stays visible (default 2000 ms)
    pub copied_feedback_ms: u64,
}

impl Default for ClipboardConfig {
    fn default() -> Self {
        Self {
            copied_feedback_ms: 2000,
        }
    }
}

impl ClipboardConfig {
    pub fn copied_feedback(&self) -> Duration {
        Duration::from_millis(self.copied_feedback_ms)
    }
}

/// TUI configuration
#[derive(Debug, Clone, PartialEq)]
pub struct UiConfig {
    /// Event poll timeout, also the redraw cadence (default 100 ms)
    pub tick_rate_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self { tick_rate_ms: 100 }
    }
}

impl UiConfig {
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }
}

/// Master configuration
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Config {
    pub cleaning: CleaningConfig,
    pub clipboard: ClipboardConfig,
    pub ui: UiConfig,
}
