//! Team Roster Demo
//!
//! Shows the authenticated agent's record, lists the teams visible to
//! them, and prints the member roster of one team.
//!
//! # Usage
//!
//! ```bash
//! # List teams
//! cargo run --example team_roster -- --apikey your-key
//!
//! # Print one roster
//! cargo run --example team_roster -- --apikey your-key --teamid 42
//! ```

use anyhow::Result;
use clap::Parser;

use venlone::{Credentials, VClient};

#[derive(Parser, Debug)]
#[command(author, version, about = "Team Roster Demo")]
struct Args {
    /// API key for query string authentication
    #[arg(long)]
    apikey: Option<String>,

    /// OAuth session token for header authentication
    #[arg(long)]
    oauth_token: Option<String>,

    /// Team to print the roster for (defaults to the first listed team)
    #[arg(long)]
    teamid: Option<u32>,

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

    println!("Team Roster Demo");
    println!("================");
    println!("Base URL: {}", client.base_url());
    println!();

    let me = client.whoami().await?;
    println!("Signed in as {} (V{})", me.agent.agent, me.agent.vlevel);
    println!();

    let teams = client.list_teams().await?;
    if teams.is_empty() {
        println!("No teams visible to this account.");
        return Ok(());
    }

    println!("Teams:");
    for team in &teams {
        let marker = if team.admin { " (admin)" } else { "" };
        println!("  {:>5}  {}{}", team.teamid, team.team, marker);
    }

    let teamid = args.teamid.unwrap_or(teams[0].teamid);
    println!();
    println!("Roster for team {teamid}:");
    let roster = client.team_details(teamid).await?;
    for member in &roster {
        let mut tags: Vec<String> = member.roles.iter().map(|role| role.name.clone()).collect();
        if member.admin {
            tags.push("admin".to_string());
        }
        let suffix = if tags.is_empty() {
            String::new()
        } else {
            format!(" [{}]", tags.join(", "))
        };
        println!(
            "  {} (V{}){}",
            member.detail.agent.agent,
            member.detail.agent.vlevel,
            suffix,
        );
    }

    Ok(())
}
