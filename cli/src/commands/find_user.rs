//! FIND-USER command - Look up a user by email address.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{HumanReadable, make_request, output};

/// Arguments for the find-user command.
#[derive(Args)]
pub struct FindUserArgs {
    /// Email address to look up (exact match)
    pub email: String,
}

/// Matching users. Empty when nobody has that email.
#[derive(Debug, Deserialize, Serialize)]
pub struct FindUserResponse(pub Vec<FoundUser>);

#[derive(Debug, Deserialize, Serialize)]
pub struct FoundUser {
    pub id: Uuid,
    pub email: String,
}

impl HumanReadable for FindUserResponse {
    fn print_human(&self) {
        if self.0.is_empty() {
            println!("{}", "(No matching user)".dimmed());
            return;
        }

        for user in &self.0 {
            println!("  {} {}", "ID:".cyan(), user.id);
            println!("  {} {}", "Email:".cyan(), user.email);
        }
    }
}

/// Execute the find-user command.
pub async fn execute(
    client: &reqwest::Client,
    base_url: &str,
    human: bool,
    args: FindUserArgs,
) -> Result<()> {
    let url = format!("{}/api/auth/users", base_url);

    let response: FindUserResponse =
        make_request(client.get(&url).query(&[("email", &args.email)])).await?;

    output(&response, human)
}
