use serde::{Deserialize, Serialize};

use crate::agent::AgentDetail;

/// A role an agent holds within a team.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    /// Numeric role id.
    pub id: u32,
    /// Display name of the role.
    pub name: String,
}

/// Team summary as seen by the querying agent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    /// Numeric team id.
    pub teamid: u32,
    /// Display name of the team.
    pub team: String,
    /// Roles the querying agent holds in this team.
    pub roles: Vec<Role>,
    /// Whether the querying agent administers this team.
    pub admin: bool,
}

/// Roster entry of a team.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamMember {
    /// Identity and trust fields of the member, flattened into the same
    /// JSON object.
    #[serde(flatten)]
    pub detail: AgentDetail,
    /// Roles the member holds in this team.
    pub roles: Vec<Role>,
    /// Whether the member administers the team.
    pub admin: bool,
}
