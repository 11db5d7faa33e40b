//! Explicit backend credentials.
//!
//! The token is never read from ambient storage inside an operation; it is
//! resolved once at application start and threaded into the client.

/// Base URL and auth token for the property backend.
#[derive(Debug, Clone)]
pub struct Credentials {
    base_url: String,
    secret_key: String,
}

impl Credentials {
    /// Create credentials, normalizing a trailing slash off the base URL.
    pub fn new(base_url: impl Into<String>, secret_key: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            base_url,
            secret_key: secret_key.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn secret_key(&self) -> &str {
        &self.secret_key
    }
}
