//! The fixed set of credential fields the provider resolves

use serde::Serialize;

/// One of the three WinRM credential fields
///
/// The declaration order is the order diagnostics are reported in, so
/// iterate with [`CredentialField::ALL`] rather than hand-listing fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CredentialField {
    Hostname,
    Username,
    Password,
}

impl CredentialField {
    /// All fields in reporting order
    pub const ALL: [CredentialField; 3] = [
        CredentialField::Hostname,
        CredentialField::Username,
        CredentialField::Password,
    ];

    /// Attribute name in the provider schema
    pub fn attribute_name(&self) -> &'static str {
        match self {
            CredentialField::Hostname => "winrm_hostname",
            CredentialField::Username => "winrm_username",
            CredentialField::Password => "winrm_password",
        }
    }

    /// Environment variable that supplies the default value
    pub fn env_var(&self) -> &'static str {
        match self {
            CredentialField::Hostname => "WINDOWSCA_HOSTNAME",
            CredentialField::Username => "WINDOWSCA_USERNAME",
            CredentialField::Password => "WINDOWSCA_PASSWORD",
        }
    }

    /// Lowercase label used inside diagnostic details
    pub fn label(&self) -> &'static str {
        match self {
            CredentialField::Hostname => "host",
            CredentialField::Username => "username",
            CredentialField::Password => "password",
        }
    }

    /// Capitalized label used in diagnostic summaries
    pub fn title(&self) -> &'static str {
        match self {
            CredentialField::Hostname => "Host",
            CredentialField::Username => "Username",
            CredentialField::Password => "Password",
        }
    }

    /// Whether the host must redact this value
    pub fn is_sensitive(&self) -> bool {
        matches!(self, CredentialField::Password)
    }

    /// Look up a field by its schema attribute name
    pub fn from_attribute_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.attribute_name() == name)
    }
}

impl std::fmt::Display for CredentialField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.attribute_name())
    }
}
