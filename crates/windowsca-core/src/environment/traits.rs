//! Core trait for environment lookups

/// Read-only source of environment variables
///
/// Implementations:
/// - `ProcessEnvironment`: the real process environment
/// - `MemoryEnvironment`: in-memory, for tests and embedding hosts
///
/// # Example
///
/// ```
/// use windowsca_core::environment::{EnvironmentSource, MemoryEnvironment};
///
/// let env = MemoryEnvironment::new();
/// env.set("WINDOWSCA_HOSTNAME", "ca01.corp.example");
/// assert_eq!(env.get("WINDOWSCA_HOSTNAME"), Some("ca01.corp.example".to_string()));
/// ```
pub trait EnvironmentSource: Send + Sync {
    /// Human-readable name of this source
    fn name(&self) -> &str;

    /// Look up a variable
    ///
    /// Empty values are reported as absent.
    fn get(&self, key: &str) -> Option<String>;

    /// Check if a variable is present and non-empty
    fn has(&self, key: &str) -> bool {
        self.get(key).is_some()
    }
}
