//! The `windowsca` provider

use std::sync::Arc;

use async_trait::async_trait;
use once_cell::sync::OnceCell;

use crate::client::ClientHandle;
use crate::config::{provider_schema, ProviderConfig, ProviderSchema};
use crate::environment::{EnvironmentSnapshot, EnvironmentSource, ProcessEnvironment};
use crate::logging::{ConsoleLogger, SharedLogger};
use crate::resolver::CredentialResolver;
use crate::types::{Diagnostic, Diagnostics};
use crate::{log_debug, log_error, log_info, log_warn};

use super::traits::{
    ConfigureRequest, ConfigureResponse, DataSourceFactory, Provider, ProviderMetadata,
    ResourceFactory,
};

/// Provider type name; prefix of every resource and data source type
pub const TYPE_NAME: &str = "windowsca";

/// Windows Certificate Authority provider
///
/// Configure resolves the WinRM credentials and keeps the resulting client
/// for the lifetime of the provider. The client is written once and only
/// read afterwards.
pub struct WindowsCaProvider {
    version: String,
    resolver: CredentialResolver,
    environment: Arc<dyn EnvironmentSource>,
    logger: SharedLogger,
    client: OnceCell<ClientHandle>,
}

impl WindowsCaProvider {
    /// Provider reading the process environment and building WinRM clients
    pub fn new() -> Self {
        Self::with_parts(
            CredentialResolver::winrm(),
            Arc::new(ProcessEnvironment::new()),
            Arc::new(ConsoleLogger::new()),
        )
    }

    /// Provider with explicit collaborators
    pub fn with_parts(
        resolver: CredentialResolver,
        environment: Arc<dyn EnvironmentSource>,
        logger: SharedLogger,
    ) -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            resolver,
            environment,
            logger,
            client: OnceCell::new(),
        }
    }

    /// Override the reported provider version
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    /// The configured client, once configure has succeeded
    pub fn client(&self) -> Option<ClientHandle> {
        self.client.get().cloned()
    }

    pub fn is_configured(&self) -> bool {
        self.client.get().is_some()
    }

    /// Concurrent callers are serialized by the cell; only the first
    /// successful one builds a client.
    fn configure_client(&self, request: &ConfigureRequest) -> Result<ClientHandle, Diagnostics> {
        let mut initialized = false;
        let client = self.client.get_or_try_init(|| {
            initialized = true;
            let config = ProviderConfig::from_value(&request.config)?;
            log_debug!(self.logger, "decoded provider block: {:?}", config);
            let env = EnvironmentSnapshot::capture(self.environment.as_ref());
            self.resolver.configure(&config, &env)
        })?;

        if !initialized {
            log_warn!(self.logger, "{} provider configured more than once", TYPE_NAME);
            return Err(already_configured());
        }
        Ok(client.clone())
    }
}

impl Default for WindowsCaProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for WindowsCaProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WindowsCaProvider")
            .field("version", &self.version)
            .field("environment", &self.environment.name())
            .field("client", &self.client.get())
            .finish()
    }
}

fn already_configured() -> Diagnostics {
    Diagnostic::error(
        "Provider Already Configured",
        "The windowsca provider instance has already been configured. \
         This is always an error in the provider host; please report it to the provider developers.",
    )
    .into()
}

#[async_trait]
impl Provider for WindowsCaProvider {
    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            type_name: TYPE_NAME.to_string(),
            version: self.version.clone(),
        }
    }

    fn schema(&self) -> ProviderSchema {
        provider_schema().clone()
    }

    async fn configure(&self, request: ConfigureRequest) -> ConfigureResponse {
        log_info!(self.logger, "configuring {} provider {}", TYPE_NAME, self.version);

        match self.configure_client(&request) {
            Ok(client) => {
                log_info!(self.logger, "WinRM client ready for {}", client.endpoint());
                ConfigureResponse::configured(client)
            }
            Err(diagnostics) => {
                log_error!(
                    self.logger,
                    "configure failed with {} error(s): {}",
                    diagnostics.error_count(),
                    diagnostics
                        .iter()
                        .map(|d| d.summary.as_str())
                        .collect::<Vec<_>>()
                        .join("; ")
                );
                ConfigureResponse::failed(diagnostics)
            }
        }
    }

    fn data_sources(&self) -> Vec<DataSourceFactory> {
        Vec::new()
    }

    fn resources(&self) -> Vec<ResourceFactory> {
        Vec::new()
    }
}
