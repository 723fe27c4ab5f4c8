//! Mock client factory for testing
//!
//! Records every constructor call and can be switched to fail, without any
//! network dependency.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::types::ResolvedCredentials;

use super::error::{ClientError, ClientResult};
use super::traits::{CaClient, ClientFactory, ClientHandle};

/// Arguments of one recorded constructor call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockCall {
    pub host: String,
    pub username: String,
    pub password: String,
}

/// Client produced by [`MockClientFactory`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockClient {
    endpoint: String,
    username: String,
}

impl CaClient for MockClient {
    fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn username(&self) -> &str {
        &self.username
    }
}

/// Factory that records calls and optionally fails
#[derive(Debug, Default)]
pub struct MockClientFactory {
    failure: Option<String>,
    calls: Mutex<Vec<MockCall>>,
}

impl MockClientFactory {
    /// Factory whose constructor always succeeds
    pub fn new() -> Self {
        Self::default()
    }

    /// Factory whose constructor always fails with `message`
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            failure: Some(message.into()),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Every call made so far, oldest first
    pub fn calls(&self) -> Vec<MockCall> {
        self.calls.lock().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().len()
    }
}

impl ClientFactory for MockClientFactory {
    fn create(&self, credentials: &ResolvedCredentials) -> ClientResult<ClientHandle> {
        self.calls.lock().push(MockCall {
            host: credentials.host().to_string(),
            username: credentials.username().to_string(),
            password: credentials.password().to_string(),
        });

        if let Some(message) = &self.failure {
            return Err(ClientError::Other(message.clone()));
        }

        Ok(Arc::new(MockClient {
            endpoint: format!("mock://{}", credentials.host()),
            username: credentials.username().to_string(),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_records_calls() {
        let factory = MockClientFactory::new();
        let creds = ResolvedCredentials::try_new("h", "u", "p").unwrap();

        let client = factory.create(&creds).unwrap();
        assert_eq!(client.endpoint(), "mock://h");
        assert_eq!(client.username(), "u");

        assert_eq!(
            factory.calls(),
            vec![MockCall {
                host: "h".into(),
                username: "u".into(),
                password: "p".into(),
            }]
        );
    }

    #[test]
    fn test_mock_failure() {
        let factory = MockClientFactory::failing("boom");
        let creds = ResolvedCredentials::try_new("h", "u", "p").unwrap();

        let err = factory.create(&creds).unwrap_err();
        assert_eq!(err.to_string(), "boom");
        assert_eq!(factory.call_count(), 1);
    }
}
