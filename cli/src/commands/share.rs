//! SHARE command - Grant another user read access to a note.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{HumanReadable, make_request, output};

/// Arguments for the share command.
#[derive(Args)]
pub struct ShareArgs {
    /// Note ID to share
    pub note_id: Uuid,

    /// User ID to share the note with (look it up with find-user)
    pub user_id: Uuid,
}

/// Request body for sharing a note.
#[derive(Serialize)]
struct ShareRequest {
    user_id: String,
}

/// Response from sharing a note.
#[derive(Debug, Deserialize, Serialize)]
pub struct ShareResponse {
    pub message: String,
    pub shared_with: SharedWith,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct SharedWith {
    pub id: Uuid,
    pub email: String,
}

impl HumanReadable for ShareResponse {
    fn print_human(&self) {
        println!("{}", "Note shared successfully!".green().bold());
        println!();
        println!("  {} {}", "With:".cyan(), self.shared_with.email);
        println!("  {} {}", "User ID:".cyan(), self.shared_with.id);
    }
}

/// Execute the share command.
pub async fn execute(
    client: &reqwest::Client,
    base_url: &str,
    human: bool,
    args: ShareArgs,
) -> Result<()> {
    let url = format!("{}/api/notes/{}/share", base_url, args.note_id);

    let request_body = ShareRequest {
        user_id: args.user_id.to_string(),
    };

    let response: ShareResponse = make_request(client.post(&url).json(&request_body)).await?;

    output(&response, human)
}
