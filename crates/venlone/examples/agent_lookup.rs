//! Agent Lookup Demo
//!
//! Looks up the verification record and last known location for an agent,
//! and optionally measures the vouch distance to a second agent. Works
//! with either authentication strategy.
//!
//! # Usage
//!
//! ```bash
//! # With an API key
//! cargo run --example agent_lookup -- \
//!     --apikey your-key --enlid PrimeAgent
//!
//! # With an OAuth session token
//! cargo run --example agent_lookup -- \
//!     --oauth-token your-session-token --enlid PrimeAgent
//!
//! # Vouch distance between two agents
//! cargo run --example agent_lookup -- \
//!     --apikey your-key --enlid E1 --target E2
//! ```

use anyhow::Result;
use clap::Parser;

use venlone::{Credentials, VClient};

#[derive(Parser, Debug)]
#[command(author, version, about = "Agent Lookup Demo")]
struct Args {
    /// API key for query string authentication
    #[arg(long)]
    apikey: Option<String>,

    /// OAuth session token for header authentication
    #[arg(long)]
    oauth_token: Option<String>,

    /// Agent to look up (enlid or in-game name)
    #[arg(long, default_value = "PrimeAgent")]
    enlid: String,

    /// Second agent for a vouch distance measurement
    #[arg(long)]
    target: Option<String>,

    /// Base URL override for staging deployments
    #[arg(long)]
    base_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();

    let mut credentials = Credentials::new();
    if let Some(apikey) = &args.apikey {
        credentials = credentials.with_apikey(apikey);
    }
    if let Some(token) = &args.oauth_token {
        credentials = credentials.with_oauth_token(token);
    }
    if let Some(base_url) = &args.base_url {
        credentials = credentials.with_base_url(base_url);
    }

    let client = VClient::new(credentials)?;

    println!("Agent Lookup Demo");
    println!("=================");
    println!("Base URL: {}", client.base_url());
    println!();

    let agent = client.trust(&args.enlid).await?;
    println!("Agent:     {} (L{})", agent.agent, agent.level);
    println!("Enlid:     {}", agent.enlid);
    println!("V level:   {} ({} points)", agent.vlevel, agent.vpoints);
    println!("Verified:  {}", agent.verified);
    println!("Active:    {}", agent.active);
    println!("Cell:      {}", agent.cellid);

    match client.location(&args.enlid).await {
        Ok(location) => {
            println!("Location:  {:.4}, {:.4}", location.lat, location.lon);
        }
        Err(error) => {
            println!("Location:  unavailable ({error})");
        }
    }

    if let Some(target) = &args.target {
        println!();
        let distance = client.distance(&args.enlid, target).await?;
        println!(
            "Vouch chain {} -> {} ({} hops):",
            distance.from_enlid,
            distance.target_enlid,
            distance.hops.len(),
        );
        for (i, hop) in distance.hops.iter().enumerate() {
            println!("  {}. {} (V{})", i + 1, hop.agent, hop.vlevel);
        }
    }

    Ok(())
}
