//! LOGIN command - Exchange credentials for a Bearer token.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use serde::{Deserialize, Serialize};

use super::{HumanReadable, make_request, output};

/// Arguments for the login command.
#[derive(Args)]
pub struct LoginArgs {
    /// Email address
    pub email: String,

    /// Password
    pub password: String,
}

/// Request body for login.
#[derive(Serialize)]
struct LoginRequest {
    email: String,
    password: String,
}

/// Response from login.
#[derive(Debug, Deserialize, Serialize)]
pub struct LoginResponse {
    pub message: String,
    pub access_token: String,
    pub token_type: String,
}

impl HumanReadable for LoginResponse {
    fn print_human(&self) {
        println!("{}", "Logged in successfully!".green().bold());
        println!();
        println!("  {} {}", "Token:".cyan(), self.access_token);
        println!();
        println!(
            "  {}",
            "Export it: export NOTELET_TOKEN=<token above>".dimmed()
        );
    }
}

/// Execute the login command.
pub async fn execute(
    client: &reqwest::Client,
    base_url: &str,
    human: bool,
    args: LoginArgs,
) -> Result<()> {
    let url = format!("{}/api/auth/login", base_url);

    let request_body = LoginRequest {
        email: args.email,
        password: args.password,
    };

    let response: LoginResponse = make_request(client.post(&url).json(&request_body)).await?;

    output(&response, human)
}
