//! REGISTER command - Create a new account.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{HumanReadable, make_request, output};

/// Arguments for the register command.
#[derive(Args)]
pub struct RegisterArgs {
    /// Email address for the new account
    pub email: String,

    /// Password (at least 6 characters)
    pub password: String,
}

/// Request body for registration.
#[derive(Serialize)]
struct RegisterRequest {
    email: String,
    password: String,
}

/// Response from registration.
#[derive(Debug, Deserialize, Serialize)]
pub struct RegisterResponse {
    pub message: String,
    pub user: RegisteredUser,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct RegisteredUser {
    pub id: Uuid,
    pub email: String,
}

impl HumanReadable for RegisterResponse {
    fn print_human(&self) {
        println!("{}", "Account created successfully!".green().bold());
        println!();
        println!("  {} {}", "ID:".cyan(), self.user.id);
        println!("  {} {}", "Email:".cyan(), self.user.email);
        println!();
        println!("  {}", "Run `notelet login` to obtain a token.".dimmed());
    }
}

/// Execute the register command.
pub async fn execute(
    client: &reqwest::Client,
    base_url: &str,
    human: bool,
    args: RegisterArgs,
) -> Result<()> {
    let url = format!("{}/api/auth/register", base_url);

    let request_body = RegisterRequest {
        email: args.email,
        password: args.password,
    };

    let response: RegisterResponse = make_request(client.post(&url).json(&request_body)).await?;

    output(&response, human)
}
