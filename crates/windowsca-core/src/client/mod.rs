//! Certificate authority client seam
//!
//! The provider never talks to the CA itself. It resolves credentials and
//! hands them to a `ClientFactory`, keeping the resulting `ClientHandle` for
//! resources and data sources.
//!
//! `MockClientFactory` is kept for testing purposes.

mod error;
mod mock;
mod traits;
mod winrm;

pub use error::{ClientError, ClientResult};
pub use mock::{MockCall, MockClient, MockClientFactory};
pub use traits::{CaClient, ClientFactory, ClientHandle};
pub use winrm::{
    WinrmClient, WinrmClientFactory, WinrmEndpoint, WinrmScheme,
    DEFAULT_WINRM_PORT, DEFAULT_WINRM_SSL_PORT,
};
