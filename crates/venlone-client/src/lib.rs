//! # venlone-client
//!
//! Transport layer for the V (v.enl.one) agent verification API.
//!
//! This crate provides a unified interface over the two authentication
//! strategies the API supports, through the `VProxy` trait:
//! - API key authentication (key travels in the query string)
//! - OAuth session token authentication (token travels in a header)
//!
//! Every response is unwrapped from the API's `{status, message, data}`
//! envelope before it reaches the caller.
//!
//! ## Example
//!
//! ```no_run
//! use serde_json::json;
//! use venlone_client::{ApiKeyProxy, VProxy};
//! use venlone_common::Credentials;
//!
//! # async fn example() -> anyhow::Result<()> {
//! // Authenticate with an API key
//! let credentials = Credentials::new().with_apikey("your-api-key");
//! let proxy = ApiKeyProxy::new(&credentials)?;
//!
//! // Fetch the verification record for an agent
//! let data = proxy.get("/api/v1/agent/PrimeAgent/trust", json!({})).await?;
//! println!("{data}");
//! # Ok(())
//! # }
//! ```

use anyhow::Result;
use async_trait::async_trait;
use serde_json::Value;
use url::Url;

pub mod apikey;
pub mod envelope;
pub mod error;
pub mod oauth;

pub use apikey::{APIKEY_BASE_URL, ApiKeyProxy};
pub use envelope::{ApiEnvelope, unwrap_body};
pub use error::ClientError;
pub use oauth::{OAUTH_BASE_URL, OAuthProxy};

/// Trait for V API transport implementations.
///
/// Provides a unified interface over the API's authentication strategies.
/// Implementations must support async operations and be thread-safe
/// (Send + Sync).
///
/// All four verbs resolve `endpoint` against the proxy's base URL and
/// return the payload unwrapped from the response envelope.
#[must_use = "VProxy must be used to issue requests"]
#[async_trait]
pub trait VProxy: Send + Sync {
    /// Get the base URL requests are issued against.
    fn base_url(&self) -> &str;

    /// Issue a GET request.
    ///
    /// # Arguments
    ///
    /// * `endpoint` - Path below the base URL, e.g. `/api/v1/whoami`
    /// * `params` - Query parameters as a JSON object
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The parameters cannot be rendered as a query string
    /// - Network communication fails
    /// - The API answers outside the 2xx range
    /// - The API rejects the request inside the response envelope
    async fn get(&self, endpoint: &str, params: Value) -> Result<Value>;

    /// Issue a POST request with `params` as the JSON body.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`get`](Self::get); the parameters travel in
    /// the request body instead of the query string.
    async fn post(&self, endpoint: &str, params: Value) -> Result<Value>;

    /// Issue a PUT request with `params` as the JSON body.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`post`](Self::post).
    async fn put(&self, endpoint: &str, params: Value) -> Result<Value>;

    /// Issue a DELETE request with `params` as the JSON body.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`post`](Self::post).
    async fn delete(&self, endpoint: &str, params: Value) -> Result<Value>;
}

/// Flatten a JSON object into query string pairs.
///
/// String values pass through verbatim, `null` values are skipped, and
/// anything else is rendered as its JSON text.
pub(crate) fn query_pairs(params: &Value) -> Result<Vec<(String, String)>, ClientError> {
    match params {
        Value::Null => Ok(Vec::new()),
        Value::Object(map) => {
            let mut pairs = Vec::with_capacity(map.len());
            for (key, value) in map {
                match value {
                    Value::Null => {}
                    Value::String(text) => pairs.push((key.clone(), text.clone())),
                    other => pairs.push((key.clone(), other.to_string())),
                }
            }
            Ok(pairs)
        }
        other => Err(ClientError::InvalidRequest(format!(
            "query parameters must be a JSON object, got {other}"
        ))),
    }
}

/// Validate a base URL override and strip any trailing slashes.
pub(crate) fn normalize_base_url(base_url: &str) -> Result<String, ClientError> {
    Url::parse(base_url).map_err(|e| {
        ClientError::ConfigurationError(format!("Invalid base URL '{base_url}': {e}"))
    })?;
    Ok(base_url.trim_end_matches('/').to_string())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::expect_used)]

    use serde_json::json;

    use super::*;

    // Mock implementation for testing
    struct EchoProxy;

    #[async_trait]
    impl VProxy for EchoProxy {
        fn base_url(&self) -> &str {
            "https://echo.test"
        }

        async fn get(&self, endpoint: &str, params: Value) -> Result<Value> {
            Ok(json!({"verb": "GET", "endpoint": endpoint, "params": params}))
        }

        async fn post(&self, endpoint: &str, params: Value) -> Result<Value> {
            Ok(json!({"verb": "POST", "endpoint": endpoint, "params": params}))
        }

        async fn put(&self, endpoint: &str, params: Value) -> Result<Value> {
            Ok(json!({"verb": "PUT", "endpoint": endpoint, "params": params}))
        }

        async fn delete(&self, endpoint: &str, params: Value) -> Result<Value> {
            Ok(json!({"verb": "DELETE", "endpoint": endpoint, "params": params}))
        }
    }

    #[tokio::test]
    async fn test_proxy_contract_is_object_safe() {
        let proxy: Box<dyn VProxy> = Box::new(EchoProxy);

        let reply = proxy
            .get("/api/v1/agent/PrimeAgent", json!({"page": "1"}))
            .await
            .unwrap();

        assert_eq!(proxy.base_url(), "https://echo.test");
        assert_eq!(reply["verb"], "GET");
        assert_eq!(reply["endpoint"], "/api/v1/agent/PrimeAgent");
        assert_eq!(reply["params"], json!({"page": "1"}));
    }

    #[tokio::test]
    async fn test_every_verb_reaches_the_implementation() {
        let proxy: Box<dyn VProxy> = Box::new(EchoProxy);

        let post = proxy.post("/e", json!({})).await.unwrap();
        let put = proxy.put("/e", json!({})).await.unwrap();
        let delete = proxy.delete("/e", json!({})).await.unwrap();

        assert_eq!(post["verb"], "POST");
        assert_eq!(put["verb"], "PUT");
        assert_eq!(delete["verb"], "DELETE");
    }

    #[test]
    fn test_query_pairs_flatten_an_object() {
        let params = json!({
            "agent": "PrimeAgent",
            "vlevel": 3,
            "active": true,
            "skipped": null,
        });

        let pairs = query_pairs(&params).unwrap();

        assert_eq!(
            pairs,
            vec![
                ("active".to_string(), "true".to_string()),
                ("agent".to_string(), "PrimeAgent".to_string()),
                ("vlevel".to_string(), "3".to_string()),
            ]
        );
    }

    #[test]
    fn test_query_pairs_keep_strings_unquoted() {
        let pairs = query_pairs(&json!({"query": "space cadet"})).unwrap();

        assert_eq!(pairs, vec![("query".to_string(), "space cadet".to_string())]);
    }

    #[test]
    fn test_query_pairs_accept_null_as_empty() {
        assert!(query_pairs(&Value::Null).unwrap().is_empty());
        assert!(query_pairs(&json!({})).unwrap().is_empty());
    }

    #[test]
    fn test_query_pairs_reject_non_objects() {
        let error = query_pairs(&json!(["a", "b"])).unwrap_err();

        assert!(matches!(error, ClientError::InvalidRequest(_)));
    }

    #[test]
    fn test_nested_values_are_rendered_as_json_text() {
        let pairs = query_pairs(&json!({"filter": {"lat": 48.2}})).unwrap();

        assert_eq!(
            pairs,
            vec![("filter".to_string(), r#"{"lat":48.2}"#.to_string())]
        );
    }

    #[test]
    fn test_base_urls_lose_trailing_slashes() {
        assert_eq!(
            normalize_base_url("https://v.example/").unwrap(),
            "https://v.example"
        );
        assert_eq!(
            normalize_base_url("https://v.example/oauth").unwrap(),
            "https://v.example/oauth"
        );
    }

    #[test]
    fn test_unparseable_base_url_is_configuration_error() {
        let error = normalize_base_url("not a url").unwrap_err();

        assert!(matches!(error, ClientError::ConfigurationError(_)));
    }
}
