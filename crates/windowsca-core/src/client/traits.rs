//! Client seam between the provider and the certificate authority client

use std::sync::Arc;

use crate::types::ResolvedCredentials;

use super::error::ClientResult;

/// A configured certificate authority client
///
/// Resources and data sources only ever see this through a [`ClientHandle`].
/// It deliberately exposes no way to read the password back.
pub trait CaClient: Send + Sync + std::fmt::Debug {
    /// WS-Management endpoint the client talks to
    fn endpoint(&self) -> &str;

    /// Account the client authenticates as
    fn username(&self) -> &str;
}

/// Shared client handed to every resource and data source
pub type ClientHandle = Arc<dyn CaClient>;

/// Constructor for [`CaClient`]s
///
/// Called once per provider lifecycle, only with non-empty credentials.
pub trait ClientFactory: Send + Sync {
    fn create(&self, credentials: &ResolvedCredentials) -> ClientResult<ClientHandle>;
}
