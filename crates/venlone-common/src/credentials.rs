use secrecy::SecretString;
use serde::{Deserialize, Serialize};

/// Login material for the V API.
///
/// Carries at most one secret of each kind. Clients check the API key
/// first and fall back to the OAuth session token; providing neither is a
/// construction-time error.
///
/// # Security
///
/// Both secrets are stored as `SecretString` and are skipped during
/// serialization to prevent accidental exposure.
///
/// # Examples
///
/// ```
/// use venlone_common::Credentials;
///
/// let credentials = Credentials::new()
///     .with_apikey("my-api-key")
///     .with_base_url("https://v.example");
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Credentials {
    /// API key issued by V (query string authentication).
    ///
    /// Will not be serialized to prevent accidental exposure.
    #[serde(skip_serializing, default)]
    pub apikey: Option<SecretString>,
    /// OAuth session token (header authentication).
    ///
    /// Will not be serialized to prevent accidental exposure.
    #[serde(skip_serializing, default)]
    pub oauth_token: Option<SecretString>,
    /// Optional custom base URL for API requests.
    ///
    /// Override this for staging deployments or tests. When unset, each
    /// authentication strategy uses its own default endpoint.
    pub base_url: Option<String>,
}

impl Credentials {
    /// Creates empty credentials.
    ///
    /// Chain [`with_apikey`](Self::with_apikey) or
    /// [`with_oauth_token`](Self::with_oauth_token) before handing these
    /// to a client.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the API key.
    ///
    /// The key is stored securely using `SecretString`.
    ///
    /// # Arguments
    ///
    /// * `apikey` - The API key
    #[must_use]
    pub fn with_apikey(mut self, apikey: impl Into<String>) -> Self {
        self.apikey = Some(SecretString::new(apikey.into().into()));
        self
    }

    /// Sets the OAuth session token.
    ///
    /// The token is stored securely using `SecretString`.
    ///
    /// # Arguments
    ///
    /// * `oauth_token` - The session token
    #[must_use]
    pub fn with_oauth_token(mut self, oauth_token: impl Into<String>) -> Self {
        self.oauth_token = Some(SecretString::new(oauth_token.into().into()));
        self
    }

    /// Sets a custom base URL for API requests.
    ///
    /// # Arguments
    ///
    /// * `base_url` - The base URL for the API
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }
}
