//! Credential resolution
//!
//! This module turns the declared provider configuration and a snapshot of
//! the environment into either a ready client or the diagnostics explaining
//! why one could not be built.

mod credential_resolver;

pub use credential_resolver::{merge_attribute, resolve_credentials, CredentialResolver};
