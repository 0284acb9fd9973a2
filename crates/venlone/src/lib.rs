//! # venlone
//!
//! A typed Rust client for the V (v.enl.one) agent verification API.
//!
//! V tracks verification status, vouch levels, and team membership for
//! Ingress Enlightened agents. This crate wraps the API behind a typed
//! client, hiding the authentication mechanics and the response envelope.
//!
//! ## Quick Start
//!
//! ```no_run
//! use venlone::{Credentials, VClient};
//!
//! # async fn example() -> anyhow::Result<()> {
//! // Authenticate with an API key
//! let credentials = Credentials::new().with_apikey("your-api-key");
//! let client = VClient::new(credentials)?;
//!
//! // Pull the verification record for an agent
//! let agent = client.trust("PrimeAgent").await?;
//! println!("{} is vouched to level {}", agent.agent, agent.vlevel);
//! # Ok(())
//! # }
//! ```
//!
//! ## Features
//!
//! - **Two Authentication Strategies**: API key or OAuth session token behind one interface
//! - **Typed Records**: Agent, team, and location payloads decoded into structs
//! - **Envelope Handling**: `{status, message, data}` unwrapped, validation failures surfaced as errors
//! - **Custom Transports**: Bring your own [`VProxy`] for tests and staging setups

pub mod client;

pub use venlone_client::*;
pub use venlone_common::*;

pub use client::VClient;
