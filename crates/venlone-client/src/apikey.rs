//! API key authentication for the V API.
//!
//! The API key travels in the query string of every request, which is how
//! V expects machine-to-machine callers to authenticate. GET parameters
//! share the query string with the key; mutating verbs carry their
//! parameters as a JSON body while the key stays in the query string.
//!
//! # Security
//!
//! The API key is stored using the `secrecy` crate, which:
//! - Prevents accidental logging or display of sensitive data
//! - Zeros memory on drop to minimize exposure window
//! - Requires explicit `expose_secret()` calls for access

use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use log::debug;
use reqwest::Method;
use secrecy::{ExposeSecret, SecretString};
use serde_json::Value;

use venlone_common::Credentials;

use crate::envelope::read_envelope;
use crate::error::ClientError;
use crate::{VProxy, normalize_base_url, query_pairs};

/// Default endpoint for API key authentication.
pub const APIKEY_BASE_URL: &str = "https://v.enl.one";

/// V API transport authenticating with an API key.
///
/// Requests never carry an `Authorization` header; the key rides in the
/// query string as the `apikey` parameter.
#[derive(Clone)]
pub struct ApiKeyProxy {
    client: reqwest::Client,
    apikey: Arc<SecretString>,
    base_url: String,
}

// Custom Debug implementation to avoid exposing the API key
impl std::fmt::Debug for ApiKeyProxy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiKeyProxy")
            .field("apikey", &"[REDACTED]")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl ApiKeyProxy {
    /// Create a new proxy from credentials.
    ///
    /// # Arguments
    ///
    /// * `credentials` - Login material carrying the API key and an
    ///   optional base URL override
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use venlone_client::ApiKeyProxy;
    /// use venlone_common::Credentials;
    ///
    /// let credentials = Credentials::new().with_apikey("your-api-key");
    /// let proxy = ApiKeyProxy::new(&credentials)?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error if the API key is missing, the base URL override
    /// does not parse, or HTTP client creation fails.
    pub fn new(credentials: &Credentials) -> Result<Self> {
        let apikey = credentials
            .apikey
            .clone()
            .ok_or_else(|| ClientError::ConfigurationError("API key is required".to_string()))?;

        let base_url = match &credentials.base_url {
            Some(base_url) => normalize_base_url(base_url)?,
            None => APIKEY_BASE_URL.to_string(),
        };

        let client = reqwest::Client::builder().build()?;

        Ok(Self {
            client,
            apikey: Arc::new(apikey),
            base_url,
        })
    }

    async fn request(
        &self,
        method: Method,
        endpoint: &str,
        params: Value,
    ) -> Result<Value, ClientError> {
        let url = format!("{}{}", self.base_url, endpoint);

        // Validate URL construction
        reqwest::Url::parse(&url)
            .map_err(|e| ClientError::InvalidRequest(format!("Invalid URL '{url}': {e}")))?;

        debug!("{method} {url}");

        let is_get = method == Method::GET;
        let mut request_builder = self.client.request(method, &url);

        if is_get {
            let mut pairs = query_pairs(&params)?;
            // A caller-supplied apikey parameter is dropped; the
            // configured key is authoritative.
            pairs.retain(|(key, _)| key != "apikey");
            pairs.push(("apikey".to_string(), self.apikey.expose_secret().to_string()));
            request_builder = request_builder.query(&pairs);
        } else {
            request_builder = request_builder
                .query(&[("apikey", self.apikey.expose_secret())])
                .json(&params);
        }

        let response = request_builder.send().await?;
        read_envelope(response).await
    }
}

#[async_trait]
impl VProxy for ApiKeyProxy {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get(&self, endpoint: &str, params: Value) -> Result<Value> {
        Ok(self.request(Method::GET, endpoint, params).await?)
    }

    async fn post(&self, endpoint: &str, params: Value) -> Result<Value> {
        Ok(self.request(Method::POST, endpoint, params).await?)
    }

    async fn put(&self, endpoint: &str, params: Value) -> Result<Value> {
        Ok(self.request(Method::PUT, endpoint, params).await?)
    }

    async fn delete(&self, endpoint: &str, params: Value) -> Result<Value> {
        Ok(self.request(Method::DELETE, endpoint, params).await?)
    }
}
