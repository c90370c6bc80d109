#[cfg(feature = "cli")]
pub mod cli;
pub mod env_config;
pub mod layered;
pub mod map_config;
pub mod toml_config;

use crate::domain::ports::ConfigSource;
use crate::utils::error::{DoiError, Result};
use env_config::EnvConfig;
use layered::LayeredConfig;
use std::fmt;
use std::path::Path;
use toml_config::TomlConfig;

pub const USERNAME_KEY: &str = "doi.registration.datacite.username";
pub const PASSWORD_KEY: &str = "doi.registration.datacite.password";
pub const SERVICE_URL_KEY: &str = "doi.registration.datacite.serviceUrl";

pub const DEFAULT_CONFIG_FILE: &str = "doi.toml";

/// Environment variables layered over the TOML file.
///
/// An explicit `path` must be readable; without one, `./doi.toml` is used
/// when it exists.
pub fn load(path: Option<&Path>) -> Result<LayeredConfig> {
    load_with(EnvConfig::new(), path, Path::new(DEFAULT_CONFIG_FILE))
}

pub fn load_with(env: EnvConfig, path: Option<&Path>, default_path: &Path) -> Result<LayeredConfig> {
    let config = LayeredConfig::new().with_source(env);

    let file = match path {
        Some(path) => Some(TomlConfig::from_file(path).map_err(|e| DoiError::ConfigError {
            message: format!("cannot load {}: {}", path.display(), e),
        })?),
        None if default_path.exists() => {
            Some(TomlConfig::from_file(default_path).map_err(|e| DoiError::ConfigError {
                message: format!("cannot load {}: {}", default_path.display(), e),
            })?)
        }
        None => None,
    };

    Ok(match file {
        Some(toml_config) => config.with_source(toml_config),
        None => config,
    })
}

/// Credentials and base URL of the DataCite MDS endpoint.
///
/// All three values are non-empty once constructed.
#[derive(Clone, PartialEq, Eq)]
pub struct DataCiteSettings {
    service_url: String,
    username: String,
    password: String,
}

impl DataCiteSettings {
    pub fn new(
        service_url: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self> {
        let settings = Self {
            service_url: service_url.into(),
            username: username.into(),
            password: password.into(),
        };

        let missing: Vec<String> = [
            (USERNAME_KEY, &settings.username),
            (PASSWORD_KEY, &settings.password),
            (SERVICE_URL_KEY, &settings.service_url),
        ]
        .into_iter()
        .filter(|(_, value)| value.is_empty())
        .map(|(key, _)| key.to_string())
        .collect();

        if !missing.is_empty() {
            return Err(DoiError::MissingConfig { missing });
        }
        Ok(settings)
    }

    /// Absent keys and empty strings both count as missing.
    pub fn from_source<C: ConfigSource + ?Sized>(config: &C) -> Result<Self> {
        Self::new(
            config.get(SERVICE_URL_KEY).unwrap_or_default(),
            config.get(USERNAME_KEY).unwrap_or_default(),
            config.get(PASSWORD_KEY).unwrap_or_default(),
        )
    }

    pub fn service_url(&self) -> &str {
        &self.service_url
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

impl fmt::Debug for DataCiteSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DataCiteSettings")
            .field("service_url", &self.service_url)
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}
