//! Core types for provider configuration
//!
//! This module contains the shared types used by the resolver, the client
//! seam and the provider.

mod attribute;
mod credentials;
mod diagnostic;
mod field;

pub use attribute::AttributeValue;
pub use credentials::ResolvedCredentials;
pub use diagnostic::{AttributePath, Diagnostic, Diagnostics, Severity};
pub use field::CredentialField;
