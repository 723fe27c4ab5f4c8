//! Process environment source

use std::env;

use super::traits::EnvironmentSource;

/// Environment source that reads the real process environment
///
/// Variables that are unset, empty or not valid unicode are all treated as
/// absent.
#[derive(Debug, Default)]
pub struct ProcessEnvironment {
    _private: (), // Prevent direct construction, use new()
}

impl ProcessEnvironment {
    pub fn new() -> Self {
        Self { _private: () }
    }
}

impl EnvironmentSource for ProcessEnvironment {
    fn name(&self) -> &str {
        "process"
    }

    fn get(&self, key: &str) -> Option<String> {
        match env::var(key) {
            Ok(value) if !value.is_empty() => Some(value),
            _ => None,
        }
    }
}
