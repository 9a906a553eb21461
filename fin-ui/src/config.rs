//! Application settings: built-in defaults, overlaid by an optional TOML
//! file, overlaid by command-line flags.
//!
//! ```toml
//! [service]
//! backend = "http"
//! base_url = "http://localhost:5000"
//! connect_timeout_secs = 5
//!
//! [display]
//! locale = "en-IN"
//! currency_symbol = "Rs."
//!
//! [logging]
//! level = "debug"
//! file = "finhealth.log"
//! ```
//!
//! Every key is optional.

use std::path::{Path, PathBuf};

use fin_core::Locale;
use fin_core::service::ServiceConfig;
use serde::Deserialize;
use thiserror::Error;

pub const DEFAULT_CONFIG_FILE: &str = "finhealth.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("cannot read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("config parse error in {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("unsupported locale '{0}' (expected en-IN or en-US)")]
    Locale(String),
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub service: ServiceSection,
    pub display: DisplaySection,
    pub logging: LoggingSection,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServiceSection {
    pub backend: String,
    pub base_url: String,
    pub connect_timeout_secs: Option<u64>,
}

impl Default for ServiceSection {
    fn default() -> Self {
        let defaults = ServiceConfig::default();
        Self {
            backend: defaults.backend,
            base_url: defaults.base_url,
            connect_timeout_secs: defaults.connect_timeout_secs,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DisplaySection {
    pub locale: String,
    /// Overrides the locale's own symbol when set.
    pub currency_symbol: Option<String>,
}

impl Default for DisplaySection {
    fn default() -> Self {
        Self {
            locale: Locale::default().tag().to_string(),
            currency_symbol: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingSection {
    /// Bare level or full `EnvFilter` directive.
    pub level: Option<String>,
    pub file: Option<PathBuf>,
}

/// Values given on the command line; each one, when present, wins over the file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub backend: Option<String>,
    pub base_url: Option<String>,
    pub locale: Option<String>,
    pub log_level: Option<String>,
    pub log_file: Option<PathBuf>,
}

/// Loads settings from `explicit`, or from [`DEFAULT_CONFIG_FILE`] in the
/// working directory when no path is given.
///
/// A missing default file means "all defaults"; a missing explicit file is an
/// error.
pub fn load_config(explicit: Option<&Path>) -> Result<AppConfig, ConfigError> {
    match explicit {
        Some(path) => load_config_from(path, true),
        None => load_config_from(Path::new(DEFAULT_CONFIG_FILE), false),
    }
}

pub(crate) fn load_config_from(
    path: &Path,
    required: bool,
) -> Result<AppConfig, ConfigError> {
    if !path.exists() {
        if required {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }
        tracing::debug!(path = %path.display(), "no config file; using defaults");
        return Ok(AppConfig::default());
    }
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let cfg = toml::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!(path = %path.display(), "config loaded");
    Ok(cfg)
}

impl AppConfig {
    pub fn apply(
        &mut self,
        overrides: Overrides,
    ) {
        if let Some(backend) = overrides.backend {
            self.service.backend = backend;
        }
        if let Some(base_url) = overrides.base_url {
            self.service.base_url = base_url;
        }
        if let Some(locale) = overrides.locale {
            self.display.locale = locale;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = Some(level);
        }
        if let Some(file) = overrides.log_file {
            self.logging.file = Some(file);
        }
    }

    pub fn service_config(&self) -> ServiceConfig {
        ServiceConfig {
            backend: self.service.backend.trim().to_ascii_lowercase(),
            base_url: self.service.base_url.trim().to_string(),
            connect_timeout_secs: self.service.connect_timeout_secs,
        }
    }

    pub fn locale(&self) -> Result<Locale, ConfigError> {
        Locale::parse(&self.display.locale)
            .ok_or_else(|| ConfigError::Locale(self.display.locale.clone()))
    }

    /// Symbol printed before amounts: the configured one, else the locale's.
    pub fn currency_symbol(&self) -> Result<String, ConfigError> {
        match &self.display.currency_symbol {
            Some(symbol) => Ok(symbol.clone()),
            None => Ok(self.locale()?.currency_symbol().to_string()),
        }
    }
}
