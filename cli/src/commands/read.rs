//! READ command - Fetch a single note.

use anyhow::Result;
use chrono::{DateTime, Utc};
use clap::Args;
use colored::Colorize;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{HumanReadable, format_timestamp, make_request, output};

/// Arguments for the read command.
#[derive(Args)]
pub struct ReadArgs {
    /// Note ID to fetch
    pub note_id: Uuid,
}

/// Response from fetching a note.
#[derive(Debug, Deserialize, Serialize)]
pub struct ReadNoteResponse {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub tags: Option<String>,
    pub visibility: String,
    pub owner_id: Uuid,
    pub owner_email: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl HumanReadable for ReadNoteResponse {
    fn print_human(&self) {
        println!(
            "{} {}",
            self.title.green().bold(),
            format!("[{}]", self.visibility).dimmed()
        );
        println!("{}", "=".repeat(80));
        println!();
        println!("{}", self.content);
        println!();
        if let Some(tags) = &self.tags {
            println!("  {} {}", "Tags:".cyan(), tags);
        }
        if let Some(email) = &self.owner_email {
            println!("  {} {}", "Owner:".cyan(), email);
        }
        println!(
            "  {} {}",
            "Created:".cyan(),
            format_timestamp(&self.created_at)
        );
        println!(
            "  {} {}",
            "Updated:".cyan(),
            format_timestamp(&self.updated_at)
        );
    }
}

/// Execute the read command.
pub async fn execute(
    client: &reqwest::Client,
    base_url: &str,
    human: bool,
    args: ReadArgs,
) -> Result<()> {
    let url = format!("{}/api/notes/{}", base_url, args.note_id);

    let response: ReadNoteResponse = make_request(client.get(&url)).await?;

    output(&response, human)
}
