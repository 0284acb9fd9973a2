use serde::{Deserialize, Serialize};

/// Trust profile of a single agent.
///
/// This is the record behind the trust endpoint and the building block of
/// every richer agent shape: verification standing, moderation flags, and
/// the agent's registered S2 cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Agent {
    /// Stable enlightened id of the agent.
    pub enlid: String,
    /// Verification level reached on V.
    pub vlevel: u8,
    /// Verification points accumulated.
    pub vpoints: i64,
    /// Current in-game agent name.
    pub agent: String,
    /// In-game level.
    pub level: u8,
    /// Whether the agent is quarantined pending review.
    pub quarantine: bool,
    /// Whether the account is active.
    pub active: bool,
    /// Whether the agent is blacklisted.
    pub blacklisted: bool,
    /// Whether the agent passed identity verification.
    pub verified: bool,
    /// Whether the agent has been flagged by the community.
    pub flagged: bool,
    /// Whether Niantic banned the account.
    pub banned_by_nia: bool,
    /// S2 cell the agent is registered in.
    pub cellid: String,
}

/// Extended agent record returned by identity-bearing endpoints.
///
/// Wraps the base [`Agent`] trust fields and adds the identity, contact,
/// and location attributes the caller is entitled to see. All additions
/// are optional; the server omits what the agent has not shared.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentDetail {
    /// Base trust fields, flattened into the same JSON object.
    #[serde(flatten)]
    pub agent: Agent,
    /// Google account id, when shared.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gid: Option<String>,
    /// Telegram username, when shared.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub telegramid: Option<String>,
    /// Numeric Telegram id, when shared.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub telegram: Option<i64>,
    /// Email address, when shared.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Latitude of the last reported location.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lat: Option<f64>,
    /// Longitude of the last reported location.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lon: Option<f64>,
    /// Distance in kilometers from the reference point of the query.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance: Option<f64>,
}

/// Last reported location of an agent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentLocation {
    /// Latitude in decimal degrees.
    pub lat: f64,
    /// Longitude in decimal degrees.
    pub lon: f64,
    /// Distance in kilometers from the reference point of the query.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance: Option<f64>,
}

/// Verification path between two agents.
///
/// The verification graph is walked from one agent to the other; `hops`
/// lists the agents along the chain, in order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentDistance {
    /// Id of the agent the path starts from.
    #[serde(rename = "fromEnlid")]
    pub from_enlid: String,
    /// Id of the agent the path leads to.
    #[serde(rename = "targetEnlid")]
    pub target_enlid: String,
    /// Agents along the verification chain.
    pub hops: Vec<Agent>,
}

/// Options for the bulk agent info endpoints.
///
/// Each flag appends a path segment selecting the id space the posted ids
/// are resolved in. The telegram segment always precedes the google one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BulkOptions {
    /// Resolve the posted ids as Telegram ids.
    #[serde(default)]
    pub telegram_id: bool,
    /// Resolve the posted ids as Google ids.
    #[serde(default)]
    pub google_id: bool,
}

impl BulkOptions {
    /// Creates options resolving ids as enlightened ids.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            telegram_id: false,
            google_id: false,
        }
    }

    /// Resolve the posted ids as Telegram ids.
    ///
    /// # Arguments
    ///
    /// * `telegram_id` - Whether to switch the lookup to Telegram ids
    #[must_use]
    pub const fn with_telegram_id(mut self, telegram_id: bool) -> Self {
        self.telegram_id = telegram_id;
        self
    }

    /// Resolve the posted ids as Google ids.
    ///
    /// # Arguments
    ///
    /// * `google_id` - Whether to switch the lookup to Google ids
    #[must_use]
    pub const fn with_google_id(mut self, google_id: bool) -> Self {
        self.google_id = google_id;
        self
    }

    /// Path segments these options append to the bulk endpoints.
    #[must_use]
    pub const fn path_suffix(self) -> &'static str {
        match (self.telegram_id, self.google_id) {
            (false, false) => "",
            (true, false) => "/telegramid",
            (false, true) => "/gid",
            (true, true) => "/telegramid/gid",
        }
    }
}
