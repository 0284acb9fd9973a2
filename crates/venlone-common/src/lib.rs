//! # venlone-common
//!
//! Common types for the V (v.enl.one) agent verification API.
//!
//! This crate provides the wire-level records shared by the venlone client
//! crates:
//! - Agent trust, identity, location, and verification distance records
//! - Team and role records
//! - Login credentials and bulk lookup options
//!
//! ## Example
//!
//! ```
//! use venlone_common::{BulkOptions, Credentials};
//!
//! // Credentials carry either an API key or an OAuth session token
//! let credentials = Credentials::new().with_apikey("my-api-key");
//!
//! // Bulk lookups select their id space through path segments
//! let options = BulkOptions::new().with_telegram_id(true);
//! assert_eq!(options.path_suffix(), "/telegramid");
//! ```

/// Agent trust, identity, and location records.
///
/// Mirrors the JSON shapes returned by the agent endpoints.
pub mod agent;
/// Login credentials for the two authentication strategies.
pub mod credentials;
/// Team and role records returned by the v2 team endpoints.
pub mod team;

pub use agent::{Agent, AgentDetail, AgentDistance, AgentLocation, BulkOptions};
pub use credentials::Credentials;
pub use team::{Role, Team, TeamMember};
