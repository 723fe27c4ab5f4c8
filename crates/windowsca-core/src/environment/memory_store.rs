//! In-memory environment source

use std::collections::HashMap;

use parking_lot::RwLock;

use super::traits::EnvironmentSource;

/// In-memory environment for tests and hosts that inject variables
///
/// # Example
///
/// ```
/// use windowsca_core::environment::{EnvironmentSource, MemoryEnvironment};
///
/// let env = MemoryEnvironment::new();
/// env.set("WINDOWSCA_USERNAME", "svc-ca");
/// assert!(env.has("WINDOWSCA_USERNAME"));
/// ```
#[derive(Debug, Default)]
pub struct MemoryEnvironment {
    vars: RwLock<HashMap<String, String>>,
}

impl MemoryEnvironment {
    pub fn new() -> Self {
        Self {
            vars: RwLock::new(HashMap::new()),
        }
    }

    /// Create from an initial set of variables
    pub fn with_vars<K, V>(vars: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            vars: RwLock::new(vars.into_iter().map(|(k, v)| (k.into(), v.into())).collect()),
        }
    }

    pub fn set(&self, key: &str, value: &str) {
        self.vars.write().insert(key.to_string(), value.to_string());
    }

    pub fn remove(&self, key: &str) -> Option<String> {
        self.vars.write().remove(key)
    }

    pub fn clear(&self) {
        self.vars.write().clear();
    }

    pub fn len(&self) -> usize {
        self.vars.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl EnvironmentSource for MemoryEnvironment {
    fn name(&self) -> &str {
        "memory"
    }

    fn get(&self, key: &str) -> Option<String> {
        self.vars
            .read()
            .get(key)
            .filter(|v| !v.is_empty())
            .cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_env_set_get_remove() {
        let env = MemoryEnvironment::new();
        assert!(env.is_empty());

        env.set("A", "1");
        assert_eq!(env.get("A"), Some("1".to_string()));
        assert_eq!(env.len(), 1);

        assert_eq!(env.remove("A"), Some("1".to_string()));
        assert_eq!(env.get("A"), None);
    }

    #[test]
    fn test_memory_env_with_vars() {
        let env = MemoryEnvironment::with_vars([("A", "1"), ("B", "2")]);
        assert_eq!(env.len(), 2);
        assert!(env.has("B"));

        env.clear();
        assert!(env.is_empty());
    }

    #[test]
    fn test_memory_env_empty_is_absent() {
        let env = MemoryEnvironment::with_vars([("EMPTY", "")]);
        assert_eq!(env.get("EMPTY"), None);
        assert!(!env.has("EMPTY"));
    }
}
