//! Provider, resource and data source traits

use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;

use crate::client::ClientHandle;
use crate::config::ProviderSchema;
use crate::types::{CredentialField, Diagnostics};

/// Static information about a provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProviderMetadata {
    /// Prefix for every resource and data source type name
    pub type_name: String,
    pub version: String,
}

/// Configure call from the host
#[derive(Clone, Default)]
pub struct ConfigureRequest {
    /// The provider block, one key per schema attribute
    pub config: Value,
}

impl ConfigureRequest {
    pub fn new(config: Value) -> Self {
        Self { config }
    }
}

impl std::fmt::Debug for ConfigureRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut config = self.config.clone();
        if let Value::Object(object) = &mut config {
            for (key, value) in object.iter_mut() {
                let sensitive = CredentialField::from_attribute_name(key)
                    .is_some_and(|field| field.is_sensitive());
                if sensitive && !value.is_null() {
                    *value = Value::String("[REDACTED]".to_string());
                }
            }
        }
        f.debug_struct("ConfigureRequest").field("config", &config).finish()
    }
}

/// Result of a configure call
///
/// On success both data slots hold the same client. On failure they are
/// empty and `diagnostics` holds at least one error.
#[derive(Debug, Default)]
pub struct ConfigureResponse {
    pub diagnostics: Diagnostics,
    pub data_source_data: Option<ClientHandle>,
    pub resource_data: Option<ClientHandle>,
}

impl ConfigureResponse {
    pub fn configured(client: ClientHandle) -> Self {
        Self {
            diagnostics: Diagnostics::new(),
            data_source_data: Some(client.clone()),
            resource_data: Some(client),
        }
    }

    pub fn failed(diagnostics: Diagnostics) -> Self {
        Self {
            diagnostics,
            ..Self::default()
        }
    }

    pub fn is_configured(&self) -> bool {
        !self.diagnostics.has_error() && self.resource_data.is_some()
    }
}

/// A managed infrastructure object type
pub trait Resource: Send + Sync {
    /// Full type name, built from the provider type name
    fn type_name(&self, provider_type_name: &str) -> String;

    /// Receive the provider's client before any CRUD call
    fn configure(&mut self, client: ClientHandle);
}

/// A read-only lookup type
pub trait DataSource: Send + Sync {
    /// Full type name, built from the provider type name
    fn type_name(&self, provider_type_name: &str) -> String;

    /// Receive the provider's client before any read
    fn configure(&mut self, client: ClientHandle);
}

/// Factory function type for creating resources
pub type ResourceFactory = Box<dyn Fn() -> Box<dyn Resource> + Send + Sync>;

/// Factory function type for creating data sources
pub type DataSourceFactory = Box<dyn Fn() -> Box<dyn DataSource> + Send + Sync>;

/// Provider trait the plugin host drives
///
/// The host calls `configure` once, before serving any resource or data
/// source operation.
#[async_trait]
pub trait Provider: Send + Sync {
    fn metadata(&self) -> ProviderMetadata;

    fn schema(&self) -> ProviderSchema;

    async fn configure(&self, request: ConfigureRequest) -> ConfigureResponse;

    fn data_sources(&self) -> Vec<DataSourceFactory>;

    fn resources(&self) -> Vec<ResourceFactory>;
}

/// Instantiate every resource and hand each one the shared client
pub fn build_resources(factories: &[ResourceFactory], client: &ClientHandle) -> Vec<Box<dyn Resource>> {
    factories
        .iter()
        .map(|factory| {
            let mut resource = factory();
            resource.configure(client.clone());
            resource
        })
        .collect()
}

/// Instantiate every data source and hand each one the shared client
pub fn build_data_sources(
    factories: &[DataSourceFactory],
    client: &ClientHandle,
) -> Vec<Box<dyn DataSource>> {
    factories
        .iter()
        .map(|factory| {
            let mut data_source = factory();
            data_source.configure(client.clone());
            data_source
        })
        .collect()
}
