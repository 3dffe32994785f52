//! EDIT command - Update a note you own.

use anyhow::{Result, bail};
use chrono::{DateTime, Utc};
use clap::Args;
use colored::Colorize;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{HumanReadable, format_timestamp, make_request, output};

/// Arguments for the edit command.
#[derive(Args)]
pub struct EditArgs {
    /// Note ID to edit
    pub note_id: Uuid,

    /// New title
    #[arg(long)]
    pub title: Option<String>,

    /// New content
    #[arg(long)]
    pub content: Option<String>,

    /// New comma-separated tags (pass an empty string to clear)
    #[arg(long)]
    pub tags: Option<String>,

    /// New visibility: private, shared, or public
    #[arg(long)]
    pub visibility: Option<String>,
}

/// Request body for updating a note. Omitted fields are left unchanged.
#[derive(Serialize)]
struct EditNoteRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tags: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    visibility: Option<String>,
}

/// Response from updating a note.
#[derive(Debug, Deserialize, Serialize)]
pub struct EditNoteResponse {
    pub id: Uuid,
    pub title: String,
    pub visibility: String,
    pub updated_at: DateTime<Utc>,
}

impl HumanReadable for EditNoteResponse {
    fn print_human(&self) {
        println!("{}", "Note updated successfully!".green().bold());
        println!();
        println!("  {} {}", "ID:".cyan(), self.id);
        println!("  {} {}", "Title:".cyan(), self.title);
        println!("  {} {}", "Visibility:".cyan(), self.visibility);
        println!(
            "  {} {}",
            "Updated:".cyan(),
            format_timestamp(&self.updated_at)
        );
    }
}

/// Execute the edit command.
pub async fn execute(
    client: &reqwest::Client,
    base_url: &str,
    human: bool,
    args: EditArgs,
) -> Result<()> {
    if args.title.is_none()
        && args.content.is_none()
        && args.tags.is_none()
        && args.visibility.is_none()
    {
        bail!("Nothing to update: pass --title, --content, --tags, or --visibility");
    }

    let url = format!("{}/api/notes/{}", base_url, args.note_id);

    let request_body = EditNoteRequest {
        title: args.title,
        content: args.content,
        tags: args.tags,
        visibility: args.visibility,
    };

    let response: EditNoteResponse = make_request(client.put(&url).json(&request_body)).await?;

    output(&response, human)
}
