use crate::domain::ports::ConfigSource;
use std::env;

/// Reads dotted keys from environment variables.
///
/// `doi.registration.datacite.serviceUrl` is looked up as
/// `DOI_REGISTRATION_DATACITE_SERVICEURL`, optionally behind a prefix.
#[derive(Debug, Clone, Default)]
pub struct EnvConfig {
    prefix: Option<String>,
}

impl EnvConfig {
    pub fn new() -> Self {
        Self { prefix: None }
    }

    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: Some(prefix.into()),
        }
    }

    pub fn variable_name(&self, key: &str) -> String {
        let name = key.replace('.', "_").to_uppercase();
        match &self.prefix {
            Some(prefix) => format!("{}{}", prefix, name),
            None => name,
        }
    }
}

impl ConfigSource for EnvConfig {
    fn get(&self, key: &str) -> Option<String> {
        env::var(self.variable_name(key)).ok()
    }
}
