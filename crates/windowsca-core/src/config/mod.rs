//! Provider configuration
//!
//! - `ProviderSchema`: the attributes the provider block accepts
//! - `ProviderConfig`: the decoded, tri-state attribute values

mod model;
mod schema;

pub use model::{ProviderConfig, UNKNOWN_VALUE};
pub use schema::{provider_schema, ProviderSchema, StringAttribute};
