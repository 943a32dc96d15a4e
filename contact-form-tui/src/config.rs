//! Application configuration.

use std::env;
use std::str::FromStr;

use simplelog::LevelFilter;

/// Log level for the file logger, or `off` to skip the log file.
pub const LOG_VAR: &str = "CONTACT_FORM_LOG";
/// Set to `0` to skip printing the last submission on exit.
pub const ECHO_VAR: &str = "CONTACT_FORM_ECHO";

/// Settings for one run of the terminal app. The form itself takes none.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Name written to the log on startup.
    pub name: &'static str,

    /// Most verbose level written to the log file.
    pub log_level: LevelFilter,

    /// Write a log file under the platform cache directory.
    pub log_to_file: bool,

    /// Print the last accepted submission after leaving the alternate screen.
    pub echo_on_exit: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            name: "contact-form",
            log_level: LevelFilter::Debug,
            log_to_file: true,
            echo_on_exit: true,
        }
    }
}

impl AppConfig {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            ..Default::default()
        }
    }

    pub fn log_level(mut self, level: LevelFilter) -> Self {
        self.log_level = level;
        self
    }

    /// Run without a log file.
    pub fn without_log_file(mut self) -> Self {
        self.log_to_file = false;
        self
    }

    pub fn echo_on_exit(mut self, echo: bool) -> Self {
        self.echo_on_exit = echo;
        self
    }

    /// Defaults overridden by `CONTACT_FORM_LOG` and `CONTACT_FORM_ECHO`.
    pub fn from_env(name: &'static str) -> Self {
        let log = env::var(LOG_VAR).ok();
        let echo = env::var(ECHO_VAR).ok();
        Self::new(name).with_overrides(log.as_deref(), echo.as_deref())
    }

    fn with_overrides(self, log: Option<&str>, echo: Option<&str>) -> Self {
        let mut config = self;
        match log.map(str::trim) {
            Some(v) if v.eq_ignore_ascii_case("off") => config = config.without_log_file(),
            Some(v) => match LevelFilter::from_str(v) {
                Ok(level) => config = config.log_level(level),
                Err(_) => eprintln!("ignoring {LOG_VAR}={v:?}: not a log level"),
            },
            None => {}
        }
        if let Some(v) = echo {
            config = config.echo_on_exit(v.trim() != "0");
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_log_debug_to_file() {
        let config = AppConfig::default();
        assert_eq!(config.log_level, LevelFilter::Debug);
        assert!(config.log_to_file);
    }

    #[test]
    fn builder_overrides_defaults() {
        let config = AppConfig::new("demo")
            .log_level(LevelFilter::Warn)
            .without_log_file()
            .echo_on_exit(false);
        assert_eq!(config.name, "demo");
        assert_eq!(config.log_level, LevelFilter::Warn);
        assert!(!config.log_to_file);
        assert!(!config.echo_on_exit);
    }

    #[test]
    fn overrides_parse_level_and_flags() {
        let config = AppConfig::default().with_overrides(Some("warn"), Some("0"));
        assert_eq!(config.log_level, LevelFilter::Warn);
        assert!(config.log_to_file);
        assert!(!config.echo_on_exit);
    }

    #[test]
    fn off_disables_log_file() {
        let config = AppConfig::default().with_overrides(Some("OFF"), None);
        assert!(!config.log_to_file);
        assert!(config.echo_on_exit);
    }

    #[test]
    fn bad_level_keeps_default() {
        let config = AppConfig::default().with_overrides(Some("loud"), None);
        assert_eq!(config.log_level, LevelFilter::Debug);
    }
}
