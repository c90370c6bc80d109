use crate::domain::ports::ConfigSource;
use crate::utils::error::{DoiError, Result};
use regex::Regex;
use std::path::Path;
use toml::{Table, Value};

/// TOML-backed configuration, e.g.
///
/// ```toml
/// [doi.registration.datacite]
/// serviceUrl = "https://mds.test.datacite.org"
/// username = "${DATACITE_USER}"
/// password = "${DATACITE_PASSWORD}"
/// ```
#[derive(Debug, Clone)]
pub struct TomlConfig {
    root: Value,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        // 處理環境變數替換
        let processed_content = Self::substitute_env_vars(content)?;

        let table: Table =
            toml::from_str(&processed_content).map_err(|e| DoiError::ConfigError {
                message: format!("TOML parsing error: {}", e),
            })?;
        Ok(Self {
            root: Value::Table(table),
        })
    }

    /// 替換環境變數 (例如 ${DATACITE_PASSWORD})，未定義的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| DoiError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    fn lookup(&self, key: &str) -> Option<&Value> {
        key.split('.')
            .try_fold(&self.root, |node, segment| node.as_table()?.get(segment))
    }
}

impl ConfigSource for TomlConfig {
    fn get(&self, key: &str) -> Option<String> {
        match self.lookup(key)? {
            Value::String(s) => Some(s.clone()),
            Value::Integer(i) => Some(i.to_string()),
            Value::Float(f) => Some(f.to_string()),
            Value::Boolean(b) => Some(b.to_string()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{PASSWORD_KEY, SERVICE_URL_KEY, USERNAME_KEY};
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_nested_lookup() {
        let toml_content = r#"
[doi.registration.datacite]
serviceUrl = "https://mds.test.datacite.org"
username = "doe"
password = "secret"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(
            config.get(SERVICE_URL_KEY),
            Some("https://mds.test.datacite.org".to_string())
        );
        assert_eq!(config.get(USERNAME_KEY), Some("doe".to_string()));
        assert_eq!(config.get(PASSWORD_KEY), Some("secret".to_string()));
        assert_eq!(config.get("doi.registration.datacite.missing"), None);
        assert_eq!(config.get("doi.registration.datacite.username.deeper"), None);
    }

    #[test]
    fn test_tables_are_not_values() {
        let config = TomlConfig::from_toml_str("[doi.registration]\nprefix = 10\n").unwrap();

        assert_eq!(config.get("doi.registration"), None);
        assert_eq!(config.get("doi.registration.prefix"), Some("10".to_string()));
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("TOMLCFG_TEST_DATACITE_PASSWORD", "from-env");

        let toml_content = r#"
[doi.registration.datacite]
password = "${TOMLCFG_TEST_DATACITE_PASSWORD}"
username = "${TOMLCFG_TEST_UNDEFINED_VAR}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.get(PASSWORD_KEY), Some("from-env".to_string()));
        assert_eq!(
            config.get(USERNAME_KEY),
            Some("${TOMLCFG_TEST_UNDEFINED_VAR}".to_string())
        );

        std::env::remove_var("TOMLCFG_TEST_DATACITE_PASSWORD");
    }

    #[test]
    fn test_invalid_toml() {
        let result = TomlConfig::from_toml_str("[doi\nusername = ");
        assert!(matches!(result, Err(DoiError::ConfigError { .. })));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[doi.registration.datacite]\nusername = \"file-user\"\n")
            .unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.get(USERNAME_KEY), Some("file-user".to_string()));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = TomlConfig::from_file("/nonexistent/doi-mds/doi.toml");
        assert!(matches!(result, Err(DoiError::IoError(_))));
    }
}
