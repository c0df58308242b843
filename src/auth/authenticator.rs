//! Authenticator implementation
//!
//! Applies the configured credentials to outgoing requests.

use super::types::{Credentials, ACCESS_KEY_HEADER, SECRET_KEY_HEADER};
use crate::error::{Error, Result};
use reqwest::RequestBuilder;

/// Authenticator handles applying authentication to HTTP requests
#[derive(Debug, Clone)]
pub struct Authenticator {
    credentials: Credentials,
}

impl Authenticator {
    /// Create a new authenticator for the given key pair
    pub fn new(credentials: Credentials) -> Self {
        Self { credentials }
    }

    /// Check the key pair is usable before any request is sent
    pub fn validate(&self) -> Result<()> {
        if self.credentials.access_key.is_empty() {
            return Err(Error::auth("access key is empty"));
        }
        if self.credentials.secret_key.is_empty() {
            return Err(Error::auth("secret key is empty"));
        }
        Ok(())
    }

    /// Apply authentication to a request builder
    pub fn apply(&self, req: RequestBuilder) -> RequestBuilder {
        req.header(ACCESS_KEY_HEADER, self.credentials.access_key.as_str())
            .header(SECRET_KEY_HEADER, self.credentials.secret_key.as_str())
    }
}
