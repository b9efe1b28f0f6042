// ABOUTME: Configuration module for the weekly-deck application
// ABOUTME: Provides font and log-path settings with environment variable overrides

use std::env;
use std::path::PathBuf;

/// Default CJK-capable display font.
pub const DEFAULT_CJK_FONT: &str = "微軟正黑體";
/// Default font for Latin-only text.
pub const DEFAULT_LATIN_FONT: &str = "Calibri";

/// Global configuration for the application
pub struct Config {
    /// Font face used for CJK-bearing text and all section headers.
    pub cjk_font: String,
    /// Font face used for Latin-only text.
    pub latin_font: String,
    /// Destination of the session work log.
    pub work_log_path: PathBuf,
    /// Side file where session-logger internal failures are recorded.
    pub error_log_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        Self {
            cjk_font: DEFAULT_CJK_FONT.to_string(),
            latin_font: DEFAULT_LATIN_FONT.to_string(),
            work_log_path: home.join(".work-log.md"),
            error_log_path: home.join(".claude").join("log_session_error.log"),
        }
    }
}

impl Config {
    /// Create a new configuration instance
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let cjk_font = env::var("WEEKLY_DECK_CJK_FONT").unwrap_or(defaults.cjk_font);
        let latin_font = env::var("WEEKLY_DECK_LATIN_FONT").unwrap_or(defaults.latin_font);
        let work_log_path = env::var("WORK_LOG_PATH")
            .map(PathBuf::from)
            .unwrap_or(defaults.work_log_path);
        let error_log_path = env::var("WORK_LOG_ERROR_PATH")
            .map(PathBuf::from)
            .unwrap_or(defaults.error_log_path);

        Self {
            cjk_font,
            latin_font,
            work_log_path,
            error_log_path,
        }
    }
}
