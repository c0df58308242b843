//! Auth configuration types

use std::fmt;

/// Header carrying the access key
pub const ACCESS_KEY_HEADER: &str = "X-Access-Key";

/// Header carrying the secret key
pub const SECRET_KEY_HEADER: &str = "X-Secret-Key";

/// Access key pair issued by the Usabilla account settings page
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    /// Public access key
    pub access_key: String,
    /// Secret key
    pub secret_key: String,
}

impl Credentials {
    /// Create a new key pair
    pub fn new(access_key: impl Into<String>, secret_key: impl Into<String>) -> Self {
        Self {
            access_key: access_key.into(),
            secret_key: secret_key.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("access_key", &self.access_key)
            .field("secret_key", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod type_tests {
    use super::*;

    #[test]
    fn test_credentials_debug_redacts_secret() {
        let creds = Credentials::new("ak", "very-secret");
        let debug = format!("{creds:?}");
        assert!(debug.contains("ak"));
        assert!(!debug.contains("very-secret"));
    }
}
