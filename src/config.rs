//! App Configuration
//!
//! Static settings for the widget, built in `main` and passed to `App`.

use log::LevelFilter;

/// localStorage key the task list lives under
pub const DEFAULT_STORAGE_KEY: &str = "tasks";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub storage_key: String,
    pub log_level: LevelFilter,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            log_level: if cfg!(debug_assertions) {
                LevelFilter::Debug
            } else {
                LevelFilter::Info
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_key_matches_saved_layout() {
        assert_eq!(AppConfig::default().storage_key, "tasks");
    }

    #[test]
    fn test_default_log_level_follows_build() {
        let expected = if cfg!(debug_assertions) {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        };
        assert_eq!(AppConfig::default().log_level, expected);
    }
}
