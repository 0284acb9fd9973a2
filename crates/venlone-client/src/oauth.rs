//! OAuth session token authentication for the V API.
//!
//! Session-based callers authenticate against the `/oauth` tree with the
//! token in the `Authorization` header. GET parameters travel in the
//! query string; mutating verbs carry theirs as a JSON body. Requests
//! never grow an `apikey` parameter.
//!
//! # Security
//!
//! The session token is stored using the `secrecy` crate, which:
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

/// Default endpoint for OAuth session token authentication.
pub const OAUTH_BASE_URL: &str = "https://v.enl.one/oauth";

/// V API transport authenticating with an OAuth session token.
///
/// The token rides in the `Authorization` header on every request.
#[derive(Clone)]
pub struct OAuthProxy {
    client: reqwest::Client,
    token: Arc<SecretString>,
    base_url: String,
}

// Custom Debug implementation to avoid exposing the session token
impl std::fmt::Debug for OAuthProxy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OAuthProxy")
            .field("token", &"[REDACTED]")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl OAuthProxy {
    /// Create a new proxy from credentials.
    ///
    /// # Arguments
    ///
    /// * `credentials` - Login material carrying the session token and an
    ///   optional base URL override
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use venlone_client::OAuthProxy;
    /// use venlone_common::Credentials;
    ///
    /// let credentials = Credentials::new().with_oauth_token("session-token");
    /// let proxy = OAuthProxy::new(&credentials)?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error if the session token is missing, the base URL
    /// override does not parse, or HTTP client creation fails.
    pub fn new(credentials: &Credentials) -> Result<Self> {
        let token = credentials.oauth_token.clone().ok_or_else(|| {
            ClientError::ConfigurationError("OAuth session token is required".to_string())
        })?;

        let base_url = match &credentials.base_url {
            Some(base_url) => normalize_base_url(base_url)?,
            None => OAUTH_BASE_URL.to_string(),
        };

        let client = reqwest::Client::builder().build()?;

        Ok(Self {
            client,
            token: Arc::new(token),
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
        // V expects the session token bare, not behind a Bearer scheme.
        let mut request_builder = self
            .client
            .request(method, &url)
            .header("Authorization", self.token.expose_secret());

        if is_get {
            request_builder = request_builder.query(&query_pairs(&params)?);
        } else {
            request_builder = request_builder.json(&params);
        }

        let response = request_builder.send().await?;
        read_envelope(response).await
    }
}

#[async_trait]
impl VProxy for OAuthProxy {
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

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::expect_used)]

    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    fn create_success_envelope(data: Value) -> Value {
        json!({"status": "ok", "message": null, "data": data})
    }

    fn create_test_proxy(mock_server: &MockServer) -> OAuthProxy {
        let credentials = Credentials::new()
            .with_oauth_token("session-token")
            .with_base_url(mock_server.uri());
        OAuthProxy::new(&credentials).unwrap()
    }

    #[tokio::test]
    async fn test_token_is_sent_bare_in_authorization_header() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/v1/whoami"))
            .and(header("authorization", "session-token"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(create_success_envelope(json!({"agent": "PrimeAgent"}))),
            )
            .expect(1)
            .mount(&mock_server)
            .await;

        let proxy = create_test_proxy(&mock_server);
        let data = proxy.get("/api/v1/whoami", json!({})).await.unwrap();

        assert_eq!(data["agent"], "PrimeAgent");
    }

    #[tokio::test]
    async fn test_no_apikey_parameter_is_appended() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/v1/whoami"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(create_success_envelope(json!({}))),
            )
            .mount(&mock_server)
            .await;

        let proxy = create_test_proxy(&mock_server);
        proxy.get("/api/v1/whoami", json!({})).await.unwrap();

        let requests = mock_server.received_requests().await.unwrap();
        assert_eq!(requests[0].url.query(), None);
    }

    #[tokio::test]
    async fn test_get_params_ride_in_query_string() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/v1/search"))
            .and(query_param("agent", "Prime"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(create_success_envelope(json!([]))),
            )
            .expect(1)
            .mount(&mock_server)
            .await;

        let proxy = create_test_proxy(&mock_server);
        proxy
            .get("/api/v1/search", json!({"agent": "Prime"}))
            .await
            .unwrap();

        let requests = mock_server.received_requests().await.unwrap();
        let has_apikey = requests[0].url.query_pairs().any(|(key, _)| key == "apikey");
        assert!(!has_apikey);
    }

    #[tokio::test]
    async fn test_mutating_verbs_send_params_as_json_body() {
        let mock_server = MockServer::start().await;

        for verb in ["POST", "PUT", "DELETE"] {
            Mock::given(method(verb))
                .and(path("/api/v1/bulk/agent/info"))
                .and(header("authorization", "session-token"))
                .and(body_json(json!(["a", "b"])))
                .respond_with(
                    ResponseTemplate::new(200).set_body_json(create_success_envelope(json!({}))),
                )
                .expect(1)
                .mount(&mock_server)
                .await;
        }

        let proxy = create_test_proxy(&mock_server);
        proxy
            .post("/api/v1/bulk/agent/info", json!(["a", "b"]))
            .await
            .unwrap();
        proxy
            .put("/api/v1/bulk/agent/info", json!(["a", "b"]))
            .await
            .unwrap();
        proxy
            .delete("/api/v1/bulk/agent/info", json!(["a", "b"]))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_error_envelope_rejects_on_every_verb() {
        let mock_server = MockServer::start().await;

        Mock::given(path("/api/v1/agent/Missing"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"status": "error", "message": "nope"})),
            )
            .mount(&mock_server)
            .await;

        let proxy = create_test_proxy(&mock_server);
        let results = [
            proxy.get("/api/v1/agent/Missing", json!({})).await,
            proxy.post("/api/v1/agent/Missing", json!({})).await,
            proxy.put("/api/v1/agent/Missing", json!({})).await,
            proxy.delete("/api/v1/agent/Missing", json!({})).await,
        ];

        for result in results {
            let error = result.unwrap_err();
            let client_error = error.downcast_ref::<ClientError>().unwrap();
            assert_eq!(client_error.validation_message(), Some("nope"));
        }
    }

    #[tokio::test]
    async fn test_header_is_attached_on_every_verb() {
        let mock_server = MockServer::start().await;

        Mock::given(path("/api/v1/whoami"))
            .and(header("authorization", "session-token"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(create_success_envelope(json!({}))),
            )
            .expect(4)
            .mount(&mock_server)
            .await;

        let proxy = create_test_proxy(&mock_server);
        proxy.get("/api/v1/whoami", json!({})).await.unwrap();
        proxy.post("/api/v1/whoami", json!({})).await.unwrap();
        proxy.put("/api/v1/whoami", json!({})).await.unwrap();
        proxy.delete("/api/v1/whoami", json!({})).await.unwrap();
    }

    #[test]
    fn test_missing_token_is_configuration_error() {
        let error = OAuthProxy::new(&Credentials::new()).unwrap_err();

        let client_error = error.downcast_ref::<ClientError>().unwrap();
        assert!(matches!(client_error, ClientError::ConfigurationError(_)));
    }

    #[test]
    fn test_default_base_url_points_at_oauth_tree() {
        let credentials = Credentials::new().with_oauth_token("session-token");
        let proxy = OAuthProxy::new(&credentials).unwrap();

        assert_eq!(proxy.base_url(), OAUTH_BASE_URL);
    }

    #[test]
    fn test_debug_redacts_the_token() {
        let credentials = Credentials::new().with_oauth_token("session-token");
        let proxy = OAuthProxy::new(&credentials).unwrap();

        let rendered = format!("{proxy:?}");

        assert!(rendered.contains("[REDACTED]"));
        assert!(!rendered.contains("session-token"));
    }
}
