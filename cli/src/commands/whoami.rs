//! WHOAMI command - Show the authenticated user.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{HumanReadable, make_request, output};

/// Arguments for the whoami command.
#[derive(Args)]
pub struct WhoamiArgs {
    // No additional arguments needed
}

/// Response from the me endpoint.
#[derive(Debug, Deserialize, Serialize)]
pub struct WhoamiResponse {
    pub id: Uuid,
    pub email: String,
}

impl HumanReadable for WhoamiResponse {
    fn print_human(&self) {
        println!("{}", "Authenticated".green().bold());
        println!();
        println!("  {} {}", "ID:".cyan(), self.id);
        println!("  {} {}", "Email:".cyan(), self.email);
    }
}

/// Execute the whoami command.
pub async fn execute(
    client: &reqwest::Client,
    base_url: &str,
    human: bool,
    _args: WhoamiArgs,
) -> Result<()> {
    let url = format!("{}/api/auth/me", base_url);

    let response: WhoamiResponse = make_request(client.get(&url)).await?;

    output(&response, human)
}
