//! Fully resolved WinRM credentials

use secrecy::{ExposeSecret, SecretString};

use super::field::CredentialField;

/// Host, username and password after merging configuration and environment
///
/// Only constructed through [`ResolvedCredentials::try_new`], which refuses
/// empty values, so holding one means all three fields are usable.
pub struct ResolvedCredentials {
    host: String,
    username: String,
    password: SecretString,
}

impl ResolvedCredentials {
    /// Build credentials, or report every empty field in reporting order
    pub fn try_new(
        host: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self, Vec<CredentialField>> {
        let host = host.into();
        let username = username.into();
        let password = password.into();

        let missing: Vec<CredentialField> = CredentialField::ALL
            .into_iter()
            .filter(|field| match field {
                CredentialField::Hostname => host.is_empty(),
                CredentialField::Username => username.is_empty(),
                CredentialField::Password => password.is_empty(),
            })
            .collect();

        if !missing.is_empty() {
            return Err(missing);
        }

        Ok(Self {
            host,
            username,
            password: SecretString::from(password),
        })
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    /// The password; callers must not log or echo it
    pub fn password(&self) -> &str {
        self.password.expose_secret()
    }
}

impl std::fmt::Debug for ResolvedCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResolvedCredentials")
            .field("host", &self.host)
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}
