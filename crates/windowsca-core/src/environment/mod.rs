//! Environment variable sources
//!
//! This module provides the read-only environment lookups the provider
//! takes its default credentials from:
//! - `EnvironmentSource` trait for pluggable lookups
//! - Built-in implementations: `ProcessEnvironment`, `MemoryEnvironment`
//! - `EnvironmentSnapshot`, the immutable capture handed to the resolver

mod traits;
mod env_store;
mod memory_store;
mod snapshot;

pub use traits::EnvironmentSource;
pub use env_store::ProcessEnvironment;
pub use memory_store::MemoryEnvironment;
pub use snapshot::EnvironmentSnapshot;
