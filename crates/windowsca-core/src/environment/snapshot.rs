//! Point-in-time capture of the provider's environment variables

use crate::types::CredentialField;

use super::traits::EnvironmentSource;

/// The three `WINDOWSCA_*` variables as they were when captured
///
/// Captured once at the configure boundary so resolution never touches the
/// live process environment.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct EnvironmentSnapshot {
    hostname: Option<String>,
    username: Option<String>,
    password: Option<String>,
}

impl EnvironmentSnapshot {
    /// Snapshot with no variables set
    pub fn empty() -> Self {
        Self::default()
    }

    /// Read every credential variable from `source`
    pub fn capture(source: &dyn EnvironmentSource) -> Self {
        let mut snapshot = Self::empty();
        for field in CredentialField::ALL {
            if let Some(value) = source.get(field.env_var()) {
                snapshot.set(field, value);
            }
        }
        snapshot
    }

    /// Builder form of [`EnvironmentSnapshot::set`]
    pub fn with(mut self, field: CredentialField, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    pub fn set(&mut self, field: CredentialField, value: impl Into<String>) {
        *self.slot_mut(field) = Some(value.into());
    }

    /// Value for a field, if the variable was present
    pub fn get(&self, field: CredentialField) -> Option<&str> {
        match field {
            CredentialField::Hostname => self.hostname.as_deref(),
            CredentialField::Username => self.username.as_deref(),
            CredentialField::Password => self.password.as_deref(),
        }
    }

    fn slot_mut(&mut self, field: CredentialField) -> &mut Option<String> {
        match field {
            CredentialField::Hostname => &mut self.hostname,
            CredentialField::Username => &mut self.username,
            CredentialField::Password => &mut self.password,
        }
    }
}

impl std::fmt::Debug for EnvironmentSnapshot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EnvironmentSnapshot")
            .field("hostname", &self.hostname)
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::environment::MemoryEnvironment;

    #[test]
    fn test_capture_reads_windowsca_vars() {
        let env = MemoryEnvironment::with_vars([
            ("WINDOWSCA_HOSTNAME", "ca01"),
            ("WINDOWSCA_PASSWORD", "secret"),
            ("UNRELATED", "x"),
        ]);

        let snapshot = EnvironmentSnapshot::capture(&env);
        assert_eq!(snapshot.get(CredentialField::Hostname), Some("ca01"));
        assert_eq!(snapshot.get(CredentialField::Username), None);
        assert_eq!(snapshot.get(CredentialField::Password), Some("secret"));
    }

    #[test]
    fn test_snapshot_is_detached_from_source() {
        let env = MemoryEnvironment::with_vars([("WINDOWSCA_USERNAME", "before")]);
        let snapshot = EnvironmentSnapshot::capture(&env);

        env.set("WINDOWSCA_USERNAME", "after");
        assert_eq!(snapshot.get(CredentialField::Username), Some("before"));
    }

    #[test]
    fn test_builder() {
        let snapshot = EnvironmentSnapshot::empty().with(CredentialField::Username, "u");
        assert_eq!(snapshot.get(CredentialField::Username), Some("u"));
        assert_eq!(snapshot.get(CredentialField::Hostname), None);
    }

    #[test]
    fn test_debug_redacts_password() {
        let snapshot = EnvironmentSnapshot::empty()
            .with(CredentialField::Hostname, "ca01")
            .with(CredentialField::Password, "hunter2");
        let debug = format!("{:?}", snapshot);
        assert!(debug.contains("ca01"));
        assert!(!debug.contains("hunter2"));
    }
}
