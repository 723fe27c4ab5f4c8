//! Windows CA provider core
//!
//! Configuration handling for the `windowsca` Terraform provider. The
//! provider accepts a WinRM hostname, username and password, each of which
//! may come from the provider block or from a `WINDOWSCA_*` environment
//! variable, and hands the resolved credentials to a certificate authority
//! client shared by every resource and data source.
//!
//! ## Configure
//!
//! ```rust,ignore
//! use windowsca_core::{ConfigureRequest, Provider, WindowsCaProvider};
//!
//! let provider = WindowsCaProvider::new();
//! let response = provider.configure(ConfigureRequest::new(config)).await;
//! if response.diagnostics.has_error() {
//!     // render response.diagnostics to the practitioner
//! }
//! ```
//!
//! The resolver itself is a plain function of its inputs and can be used
//! without a provider:
//!
//! ```
//! use windowsca_core::{resolve_credentials, EnvironmentSnapshot, ProviderConfig};
//! use windowsca_core::types::{AttributeValue, CredentialField};
//!
//! let config = ProviderConfig::default()
//!     .with(CredentialField::Hostname, AttributeValue::set("ca01.corp.example"))
//!     .with(CredentialField::Password, AttributeValue::set("s3cret"));
//! let env = EnvironmentSnapshot::empty().with(CredentialField::Username, "svc-ca");
//!
//! let credentials = resolve_credentials(&config, &env).unwrap();
//! assert_eq!(credentials.username(), "svc-ca");
//! ```

pub mod types;
pub mod environment;
pub mod logging;
pub mod config;
pub mod client;
pub mod resolver;
pub mod provider;

// Re-export commonly used types
pub use types::{
    AttributePath, AttributeValue, CredentialField, Diagnostic, Diagnostics,
    ResolvedCredentials, Severity,
};

pub use environment::{
    EnvironmentSnapshot, EnvironmentSource, MemoryEnvironment, ProcessEnvironment,
};

pub use logging::{ConsoleLogger, Logger, NoOpLogger};

pub use config::{provider_schema, ProviderConfig, ProviderSchema, UNKNOWN_VALUE};

pub use client::{
    CaClient, ClientError, ClientFactory, ClientHandle, MockClientFactory, WinrmClientFactory,
};

pub use resolver::{merge_attribute, resolve_credentials, CredentialResolver};

pub use provider::{
    ConfigureRequest, ConfigureResponse, DataSource, Provider, Resource, WindowsCaProvider,
};
