use crate::domain::ports::ConfigSource;
use std::collections::HashMap;

/// In-memory configuration keyed by full dotted paths.
#[derive(Debug, Clone, Default)]
pub struct MapConfig {
    values: HashMap<String, String>,
}

impl MapConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for MapConfig {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl ConfigSource for MapConfig {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collect_and_insert() {
        let mut config: MapConfig = [("a.b", "1"), ("a.c", "2")].into_iter().collect();
        config.insert("a.b", "3");

        assert_eq!(config.get("a.b"), Some("3".to_string()));
        assert_eq!(config.get("a.c"), Some("2".to_string()));
        assert_eq!(config.get("a"), None);
    }
}
