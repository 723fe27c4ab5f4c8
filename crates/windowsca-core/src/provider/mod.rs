//! Provider surface for the plugin host
//!
//! The `Provider`, `Resource` and `DataSource` traits mirror the host
//! framework's extension points. `WindowsCaProvider` is the only provider and
//! currently registers no resources or data sources.

mod traits;
mod windowsca;

pub use traits::{
    build_data_sources, build_resources, ConfigureRequest, ConfigureResponse, DataSource,
    DataSourceFactory, Provider, ProviderMetadata, Resource, ResourceFactory,
};
pub use windowsca::{WindowsCaProvider, TYPE_NAME};
