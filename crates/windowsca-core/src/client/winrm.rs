//! Default WinRM client construction
//!
//! Only the endpoint is derived here. Sessions, shells and certificate
//! operations belong to the client implementation, not to configure.

use std::net::Ipv6Addr;
use std::sync::Arc;

use secrecy::{ExposeSecret, SecretString};
use url::Url;

use crate::types::ResolvedCredentials;

use super::error::{ClientError, ClientResult};
use super::traits::{CaClient, ClientFactory, ClientHandle};

/// Default WinRM HTTP port
pub const DEFAULT_WINRM_PORT: u16 = 5985;

/// Default WinRM HTTPS port
pub const DEFAULT_WINRM_SSL_PORT: u16 = 5986;

const WSMAN_PATH: &str = "/wsman";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WinrmScheme {
    Http,
    Https,
}

impl WinrmScheme {
    pub fn from_scheme(scheme: &str) -> ClientResult<Self> {
        match scheme {
            "http" => Ok(WinrmScheme::Http),
            "https" => Ok(WinrmScheme::Https),
            other => Err(ClientError::UnsupportedScheme(other.to_string())),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            WinrmScheme::Http => "http",
            WinrmScheme::Https => "https",
        }
    }

    pub fn default_port(&self) -> u16 {
        match self {
            WinrmScheme::Http => DEFAULT_WINRM_PORT,
            WinrmScheme::Https => DEFAULT_WINRM_SSL_PORT,
        }
    }
}

/// Parsed WS-Management endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WinrmEndpoint {
    pub scheme: WinrmScheme,
    pub host: String,
    pub port: u16,
    url: Url,
}

impl WinrmEndpoint {
    /// Parse a host value of the form `[scheme://]host[:port][/]`
    ///
    /// IPv6 literals must be bracketed. User info, paths, queries and
    /// fragments are rejected.
    pub fn parse(raw: &str) -> ClientResult<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ClientError::invalid_host(raw, "host is empty"));
        }

        let (input, authority) = match trimmed.split_once("://") {
            Some((_, rest)) => (trimmed.to_string(), rest),
            None => (format!("http://{trimmed}"), trimmed),
        };
        let authority = authority.strip_suffix('/').unwrap_or(authority);
        if authority.parse::<Ipv6Addr>().is_ok() {
            return Err(ClientError::invalid_host(raw, "IPv6 literals must be bracketed"));
        }

        let mut url = Url::parse(&input).map_err(|e| match e {
            url::ParseError::InvalidPort => ClientError::InvalidPort(port_text(authority).to_string()),
            other => ClientError::invalid_host(raw, other.to_string()),
        })?;

        let scheme = WinrmScheme::from_scheme(url.scheme())?;
        if !url.username().is_empty() || url.password().is_some() {
            return Err(ClientError::invalid_host(raw, "must not contain user information"));
        }
        if url.query().is_some() {
            return Err(ClientError::invalid_host(raw, "must not contain a query"));
        }
        if url.fragment().is_some() {
            return Err(ClientError::invalid_host(raw, "must not contain a fragment"));
        }
        if !matches!(url.path(), "" | "/") {
            return Err(ClientError::invalid_host(raw, "must not contain a path"));
        }
        let host = match url.host_str() {
            Some(h) if !h.is_empty() => h.to_string(),
            _ => return Err(ClientError::invalid_host(raw, "host is empty")),
        };

        // Url drops an explicit :80 / :443, so only fall back to the WinRM
        // port when the input had no port at all.
        let port = match url.port() {
            Some(0) => return Err(ClientError::InvalidPort("0".to_string())),
            Some(p) => p,
            None if !port_text(authority).is_empty() => {
                url.port_or_known_default().unwrap_or(scheme.default_port())
            }
            None => scheme.default_port(),
        };

        url.set_port(Some(port))
            .map_err(|_| ClientError::invalid_host(raw, "cannot carry a port"))?;
        url.set_path(WSMAN_PATH);

        Ok(Self {
            scheme,
            host,
            port,
            url,
        })
    }

    pub fn as_url(&self) -> &Url {
        &self.url
    }

    /// Full endpoint with the port always spelled out
    pub fn url(&self) -> String {
        format!("{}://{}:{}{}", self.scheme.as_str(), self.host, self.port, WSMAN_PATH)
    }
}

/// Text after the last `:` of an authority, outside any IPv6 brackets
fn port_text(authority: &str) -> &str {
    let after_host = match authority.rfind(']') {
        Some(end) => &authority[end + 1..],
        None => authority,
    };
    after_host.rsplit_once(':').map(|(_, port)| port).unwrap_or("")
}

/// WinRM-backed certificate authority client
pub struct WinrmClient {
    endpoint: WinrmEndpoint,
    url: String,
    username: String,
    password: SecretString,
}

impl WinrmClient {
    pub fn new(credentials: &ResolvedCredentials) -> ClientResult<Self> {
        let endpoint = WinrmEndpoint::parse(credentials.host())?;
        let url = endpoint.url();
        Ok(Self {
            endpoint,
            url,
            username: credentials.username().to_string(),
            password: SecretString::from(credentials.password()),
        })
    }

    pub fn winrm_endpoint(&self) -> &WinrmEndpoint {
        &self.endpoint
    }

    /// Password for the transport layer; never log it
    pub fn password(&self) -> &str {
        self.password.expose_secret()
    }
}

impl CaClient for WinrmClient {
    fn endpoint(&self) -> &str {
        &self.url
    }

    fn username(&self) -> &str {
        &self.username
    }
}

impl std::fmt::Debug for WinrmClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WinrmClient")
            .field("endpoint", &self.url)
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// Factory producing [`WinrmClient`]s
#[derive(Debug, Clone, Copy, Default)]
pub struct WinrmClientFactory;

impl WinrmClientFactory {
    pub fn new() -> Self {
        Self
    }
}

impl ClientFactory for WinrmClientFactory {
    fn create(&self, credentials: &ResolvedCredentials) -> ClientResult<ClientHandle> {
        Ok(Arc::new(WinrmClient::new(credentials)?))
    }
}
