//! Global application configuration manager.
//!
//! `AppConfig` is a lazily initialized, globally accessible singleton containing
//! runtime configuration values loaded from environment variables. It provides
//! thread-safe access and mutation for testing or overrides in runtime environments.

use std::env;
use std::sync::{OnceLock, RwLock};

/// Represents the complete application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub log_level: String,
    pub log_dir: String,
    pub log_file: String,
    pub log_to_stdout: bool,
    /// Optional path to a grading options JSON file. Empty means built-in defaults.
    pub grading_config_path: String,
}

/// Lazily-initialized, thread-safe singleton instance of `AppConfig`.
static CONFIG_INSTANCE: OnceLock<RwLock<AppConfig>> = OnceLock::new();

impl AppConfig {
    /// Loads the configuration from `.env` and environment variables.
    ///
    /// Every value has a default, so this never fails.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "grader=info".into()),
            log_dir: env::var("LOG_DIR").unwrap_or_else(|_| "logs".into()),
            log_file: env::var("LOG_FILE").unwrap_or_else(|_| "grader.log".into()),
            log_to_stdout: env::var("LOG_TO_STDOUT").unwrap_or_else(|_| "false".into()) == "true",
            grading_config_path: env::var("GRADING_CONFIG").unwrap_or_default(),
        }
    }

    /// Returns a shared reference to the global configuration.
    ///
    /// # Panics
    /// Panics if the lock is poisoned.
    pub fn global() -> std::sync::RwLockReadGuard<'static, AppConfig> {
        CONFIG_INSTANCE
            .get_or_init(|| RwLock::new(AppConfig::from_env()))
            .read()
            .expect("Failed to acquire AppConfig read lock")
    }

    /// Resets the configuration by reloading from environment variables.
    ///
    /// Useful in tests to clear overrides.
    pub fn reset() {
        if let Some(lock) = CONFIG_INSTANCE.get() {
            let mut guard = lock
                .write()
                .expect("Failed to acquire AppConfig write lock");
            *guard = AppConfig::from_env();
        }
    }

    fn set_field<F>(setter: F)
    where
        F: FnOnce(&mut AppConfig),
    {
        let lock = CONFIG_INSTANCE.get_or_init(|| RwLock::new(AppConfig::from_env()));
        let mut guard = lock
            .write()
            .expect("Failed to acquire AppConfig write lock");
        setter(&mut guard);
    }

    // --- Per-field setters below ---

    pub fn set_log_level(value: impl Into<String>) {
        AppConfig::set_field(|cfg| cfg.log_level = value.into());
    }

    pub fn set_grading_config_path(value: impl Into<String>) {
        AppConfig::set_field(|cfg| cfg.grading_config_path = value.into());
    }
}

// --- Free accessors ---

pub fn log_level() -> String {
    AppConfig::global().log_level.clone()
}

pub fn log_dir() -> String {
    AppConfig::global().log_dir.clone()
}

pub fn log_file() -> String {
    AppConfig::global().log_file.clone()
}

pub fn log_to_stdout() -> bool {
    AppConfig::global().log_to_stdout
}

/// `None` when no grading options file is configured.
pub fn grading_config_path() -> Option<String> {
    let path = AppConfig::global().grading_config_path.clone();
    if path.trim().is_empty() {
        None
    } else {
        Some(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn defaults_apply_when_env_is_empty() {
        unsafe {
            env::remove_var("LOG_DIR");
            env::remove_var("LOG_FILE");
            env::remove_var("LOG_TO_STDOUT");
            env::remove_var("GRADING_CONFIG");
        }
        AppConfig::reset();

        assert_eq!(log_dir(), "logs");
        assert_eq!(log_file(), "grader.log");
        assert!(!log_to_stdout());
        assert_eq!(grading_config_path(), None);
    }

    #[test]
    #[serial]
    fn reads_values_from_env() {
        unsafe {
            env::set_var("LOG_FILE", "lms-grading.log");
            env::set_var("LOG_TO_STDOUT", "true");
            env::set_var("GRADING_CONFIG", "/tmp/grading.json");
        }
        AppConfig::reset();

        assert_eq!(log_file(), "lms-grading.log");
        assert!(log_to_stdout());
        assert_eq!(grading_config_path().as_deref(), Some("/tmp/grading.json"));

        unsafe {
            env::remove_var("LOG_FILE");
            env::remove_var("LOG_TO_STDOUT");
            env::remove_var("GRADING_CONFIG");
        }
        AppConfig::reset();
    }

    #[test]
    #[serial]
    fn setters_override_until_reset() {
        unsafe {
            env::remove_var("LOG_LEVEL");
        }
        AppConfig::reset();

        AppConfig::set_log_level("grader=debug");
        assert_eq!(log_level(), "grader=debug");

        AppConfig::set_grading_config_path("   ");
        assert_eq!(grading_config_path(), None);

        AppConfig::reset();
        assert_eq!(log_level(), "grader=info");
    }
}
