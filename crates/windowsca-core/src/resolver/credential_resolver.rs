//! Credential resolution for the provider's configure step
//!
//! Gates run in order. Each gate checks all three fields and reports every
//! problem it finds before stopping, so a practitioner sees all unknown
//! values (or all missing values) in a single run:
//!
//! 1. Reject unknown configuration values
//! 2. Default each field from the environment, override with configuration
//! 3. Reject empty values
//! 4. Construct the client
//!
//! Diagnostics within a gate follow `CredentialField::ALL` order.

use std::sync::Arc;

use crate::client::{ClientError, ClientFactory, ClientHandle, WinrmClientFactory};
use crate::config::ProviderConfig;
use crate::environment::EnvironmentSnapshot;
use crate::logging::file_logger as log;
use crate::types::{
    AttributePath, AttributeValue, CredentialField, Diagnostic, Diagnostics, ResolvedCredentials,
};

const MODULE: &str = "credential_resolver";

/// Merge one field: a set configuration value wins, otherwise the
/// environment value, otherwise the empty string
///
/// An explicitly set empty string still wins over the environment.
pub fn merge_attribute(attribute: &AttributeValue, env_value: Option<&str>) -> String {
    match attribute {
        AttributeValue::Set(value) => value.clone(),
        AttributeValue::Null | AttributeValue::Unknown => env_value.unwrap_or_default().to_string(),
    }
}

/// Run gates 1-3 and return the merged credentials
pub fn resolve_credentials(
    config: &ProviderConfig,
    env: &EnvironmentSnapshot,
) -> Result<ResolvedCredentials, Diagnostics> {
    log::trace(MODULE, "checking configuration for unknown values");
    check_known(config)?;

    let [host, username, password] = CredentialField::ALL.map(|field| {
        let attribute = config.get(field);
        let env_value = env.get(field);
        log::debug(
            MODULE,
            &format!("{}: using {}", field.attribute_name(), value_source(attribute, env_value)),
        );
        merge_attribute(attribute, env_value)
    });

    ResolvedCredentials::try_new(host, username, password).map_err(|missing| {
        log::warn(MODULE, &format!("missing credential fields: {:?}", missing));
        missing.into_iter().map(missing_value).collect::<Vec<_>>().into()
    })
}

/// Resolves credentials and builds the client with a [`ClientFactory`]
#[derive(Clone)]
pub struct CredentialResolver {
    client_factory: Arc<dyn ClientFactory>,
}

impl CredentialResolver {
    pub fn new(client_factory: Arc<dyn ClientFactory>) -> Self {
        Self { client_factory }
    }

    /// Resolver using the default WinRM client
    pub fn winrm() -> Self {
        Self::new(Arc::new(WinrmClientFactory::new()))
    }

    /// Gates 1-3 only
    pub fn resolve(
        &self,
        config: &ProviderConfig,
        env: &EnvironmentSnapshot,
    ) -> Result<ResolvedCredentials, Diagnostics> {
        resolve_credentials(config, env)
    }

    /// All four gates: resolve credentials, then build the client
    pub fn configure(
        &self,
        config: &ProviderConfig,
        env: &EnvironmentSnapshot,
    ) -> Result<ClientHandle, Diagnostics> {
        let credentials = resolve_credentials(config, env)?;
        log::trace(MODULE, "credentials resolved, building client");

        match self.client_factory.create(&credentials) {
            Ok(client) => {
                log::info(
                    MODULE,
                    &format!("client created: endpoint={} username={}", client.endpoint(), client.username()),
                );
                Ok(client)
            }
            Err(err) => {
                log::error(MODULE, &format!("client construction failed: {}", err));
                Err(client_construction_failed(&err).into())
            }
        }
    }
}

impl Default for CredentialResolver {
    fn default() -> Self {
        Self::winrm()
    }
}

impl std::fmt::Debug for CredentialResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialResolver").finish_non_exhaustive()
    }
}

fn check_known(config: &ProviderConfig) -> Result<(), Diagnostics> {
    let mut diags = Diagnostics::new();
    for field in CredentialField::ALL {
        if config.get(field).is_unknown() {
            log::warn(MODULE, &format!("{} is unknown", field.attribute_name()));
            diags.push(unknown_value(field));
        }
    }
    diags.into_result()
}

fn value_source(attribute: &AttributeValue, env_value: Option<&str>) -> &'static str {
    match (attribute, env_value) {
        (AttributeValue::Set(_), _) => "configuration",
        (_, Some(_)) => "environment",
        _ => "nothing (unset)",
    }
}

fn unknown_value(field: CredentialField) -> Diagnostic {
    Diagnostic::attribute_error(
        AttributePath::root(field.attribute_name()),
        format!("Unknown Windows WinRM {}", field.title()),
        format!(
            "The provider cannot create the Windows WinRM client as there is an unknown configuration value for the Windows WinRM {}. \
             Either target apply the source of the value first, set the value statically in the configuration, or use the {} environment variable.",
            field.label(),
            field.env_var()
        ),
    )
}

fn missing_value(field: CredentialField) -> Diagnostic {
    Diagnostic::attribute_error(
        AttributePath::root(field.attribute_name()),
        format!("Missing Windows WinRM {}", field.title()),
        format!(
            "The provider cannot create the Windows WinRM client as there is a missing or empty value for the Windows WinRM {label}. \
             Set the {label} value in the configuration or use the {var} environment variable. \
             If either is already set, ensure the value is not empty.",
            label = field.label(),
            var = field.env_var()
        ),
    )
}

fn client_construction_failed(err: &ClientError) -> Diagnostic {
    Diagnostic::error(
        "Unable to Create Windows WinRM Client",
        format!(
            "An unexpected error occurred when creating the Windows WinRM client. \
             If the error is not clear, please contact the provider developers.\n\n\
             Windows WinRM Client Error: {}",
            err
        ),
    )
}
