//! Typed façade over the V API endpoints.
//!
//! [`VClient`] pairs each remote operation with a path builder and a typed
//! decode of the unwrapped payload. Everything network-facing lives in the
//! [`VProxy`] implementations; this module never touches headers or query
//! strings itself.

use std::collections::HashMap;

use anyhow::Result;
use log::debug;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};

use venlone_client::{ApiKeyProxy, ClientError, OAuthProxy, VProxy};
use venlone_common::{
    Agent, AgentDetail, AgentDistance, AgentLocation, BulkOptions, Credentials, Team, TeamMember,
};

/// Typed client for the V agent verification API.
///
/// Wraps a [`VProxy`] transport and decodes each endpoint's payload into
/// its record type. Construction picks the transport from the supplied
/// credentials; the API key is checked before the OAuth session token.
pub struct VClient {
    proxy: Box<dyn VProxy>,
}

impl std::fmt::Debug for VClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VClient")
            .field("base_url", &self.proxy.base_url())
            .finish_non_exhaustive()
    }
}

impl VClient {
    /// Create a client from credentials.
    ///
    /// An API key selects query string authentication against
    /// `https://v.enl.one`; otherwise an OAuth session token selects
    /// header authentication against `https://v.enl.one/oauth`. The
    /// `base_url` field overrides either default.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use venlone::{Credentials, VClient};
    ///
    /// let credentials = Credentials::new().with_apikey("your-api-key");
    /// let client = VClient::new(credentials)?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::MissingCredentials`] when neither secret is
    /// present, and a configuration error when the base URL override does
    /// not parse or the transport cannot be built. No network activity
    /// happens here.
    pub fn new(credentials: Credentials) -> Result<Self> {
        let proxy: Box<dyn VProxy> = if credentials.apikey.is_some() {
            Box::new(ApiKeyProxy::new(&credentials)?)
        } else if credentials.oauth_token.is_some() {
            Box::new(OAuthProxy::new(&credentials)?)
        } else {
            return Err(ClientError::MissingCredentials.into());
        };
        debug!("V client ready, talking to {}", proxy.base_url());

        Ok(Self { proxy })
    }

    /// Create a client around a custom transport.
    ///
    /// The seam for test doubles and for deployments with their own
    /// authentication story.
    #[must_use]
    pub fn from_proxy(proxy: Box<dyn VProxy>) -> Self {
        Self { proxy }
    }

    /// Get the base URL requests are issued against.
    #[must_use]
    pub fn base_url(&self) -> &str {
        self.proxy.base_url()
    }

    /// Fetch the trust record for an agent.
    ///
    /// # Arguments
    ///
    /// * `enlid` - The agent's Enlightened id or in-game name
    ///
    /// # Errors
    ///
    /// Returns a validation error when the API rejects the id, and a
    /// transport error when the exchange itself fails.
    pub async fn trust(&self, enlid: &str) -> Result<Agent> {
        let data = self
            .proxy
            .get(&format!("/api/v1/agent/{enlid}/trust"), json!({}))
            .await?;
        decode(data)
    }

    /// Search for agents.
    ///
    /// The query's fields pass through as query string parameters, so any
    /// serializable struct or a `serde_json::json!` object works.
    ///
    /// # Errors
    ///
    /// Returns a serialization error when the query cannot be rendered,
    /// plus the failure modes of [`trust`](Self::trust).
    pub async fn search<Q: Serialize + Sync>(&self, query: &Q) -> Result<Vec<Agent>> {
        let params = serde_json::to_value(query).map_err(ClientError::SerializationError)?;
        let data = self.proxy.get("/api/v1/search", params).await?;
        decode(data)
    }

    /// Measure the vouch chain between two agents.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`trust`](Self::trust).
    pub async fn distance(&self, enlid1: &str, enlid2: &str) -> Result<AgentDistance> {
        let data = self
            .proxy
            .get(&format!("/api/v1/agent/{enlid1}/{enlid2}"), json!({}))
            .await?;
        decode(data)
    }

    /// Fetch details for a batch of agents, keyed by the queried id.
    ///
    /// `options` selects how the ids in the body are interpreted
    /// (Telegram ids, Google ids, or V's own enlids).
    ///
    /// # Errors
    ///
    /// Same failure modes as [`trust`](Self::trust).
    pub async fn bulk_info(
        &self,
        ids: &[String],
        options: BulkOptions,
    ) -> Result<HashMap<String, AgentDetail>> {
        let endpoint = format!("/api/v1/bulk/agent/info{}", options.path_suffix());
        let data = self.proxy.post(&endpoint, json!(ids)).await?;
        decode(data)
    }

    /// Fetch details for a batch of agents as a flat array.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`trust`](Self::trust).
    pub async fn bulk_info_array(
        &self,
        ids: &[String],
        options: BulkOptions,
    ) -> Result<Vec<AgentDetail>> {
        let endpoint = format!("/api/v1/bulk/agent/info{}/array", options.path_suffix());
        let data = self.proxy.post(&endpoint, json!(ids)).await?;
        decode(data)
    }

    /// Fetch the last known location for an agent.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`trust`](Self::trust).
    pub async fn location(&self, enlid: &str) -> Result<AgentLocation> {
        let data = self
            .proxy
            .get(&format!("/api/v1/agent/{enlid}/location"), json!({}))
            .await?;
        decode(data)
    }

    /// Fetch the record of the authenticated agent.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`trust`](Self::trust).
    pub async fn whoami(&self) -> Result<AgentDetail> {
        let data = self.proxy.get("/api/v1/whoami", json!({})).await?;
        decode(data)
    }

    /// List the teams visible to the authenticated agent.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`trust`](Self::trust).
    pub async fn list_teams(&self) -> Result<Vec<Team>> {
        let data = self.proxy.get("/api/v2/teams", json!({})).await?;
        decode(data)
    }

    /// Fetch the member roster of a team.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`trust`](Self::trust).
    pub async fn team_details(&self, teamid: u32) -> Result<Vec<TeamMember>> {
        let data = self
            .proxy
            .get(&format!("/api/v2/teams/{teamid}"), json!({}))
            .await?;
        decode(data)
    }
}

/// Decode an unwrapped payload into its typed shape.
fn decode<T: DeserializeOwned>(data: Value) -> Result<T> {
    Ok(serde_json::from_value(data).map_err(ClientError::SerializationError)?)
}
