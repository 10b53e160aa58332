use serde::Deserialize;
use ts_rs::TS;

/// High-level app configuration; deserializable from TOML.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, serde::Serialize)]
pub struct AppConfig {
    #[serde(default = "crate::config::defaults::default_log_level")]
    pub log_level: LogLevel,
    #[serde(default = "crate::config::defaults::default_font_size")]
    pub font_size: FontSize,
    /// JSON catalog to load instead of the built-in sample library.
    #[serde(default)]
    pub catalog_path: Option<String>,
    #[serde(default = "crate::config::defaults::default_user_name")]
    pub user_name: String,
    #[serde(default = "crate::config::defaults::default_user_email")]
    pub user_email: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            log_level: crate::config::defaults::default_log_level(),
            font_size: crate::config::defaults::default_font_size(),
            catalog_path: None,
            user_name: crate::config::defaults::default_user_name(),
            user_email: crate::config::defaults::default_user_email(),
        }
    }
}

/// Text size steps offered by the reading pane.
#[derive(Debug, Clone, Copy, Deserialize, serde::Serialize, PartialEq, Eq, Default, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum FontSize {
    Sm,
    #[default]
    Base,
    Lg,
    Xl,
}

impl std::fmt::Display for FontSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            FontSize::Sm => "Small",
            FontSize::Base => "Base",
            FontSize::Lg => "Large",
            FontSize::Xl => "Extra large",
        };
        write!(f, "{}", label)
    }
}

/// Supported logging verbosity levels.
#[derive(Debug, Clone, Copy, Deserialize, serde::Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl Default for LogLevel {
    fn default() -> Self {
        LogLevel::Info
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_filter_str())
    }
}

impl LogLevel {
    pub fn as_filter_str(self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}
