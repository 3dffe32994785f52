//! CREATE command - Create a new note.

use anyhow::Result;
use chrono::{DateTime, Utc};
use clap::Args;
use colored::Colorize;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{HumanReadable, format_timestamp, make_request, output};

/// Arguments for the create command.
#[derive(Args)]
pub struct CreateArgs {
    /// Title for the new note (up to 255 characters)
    pub title: String,

    /// Note content
    pub content: String,

    /// Comma-separated tags
    #[arg(long)]
    pub tags: Option<String>,

    /// Visibility: private, shared, or public (default private)
    #[arg(long)]
    pub visibility: Option<String>,
}

/// Request body for creating a note.
#[derive(Serialize)]
struct CreateNoteRequest {
    title: String,
    content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    tags: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    visibility: Option<String>,
}

/// Response from creating a note.
#[derive(Debug, Deserialize, Serialize)]
pub struct CreateNoteResponse {
    pub id: Uuid,
    pub title: String,
    pub visibility: String,
    pub created_at: DateTime<Utc>,
}

impl HumanReadable for CreateNoteResponse {
    fn print_human(&self) {
        println!("{}", "Note created successfully!".green().bold());
        println!();
        println!("  {} {}", "ID:".cyan(), self.id);
        println!("  {} {}", "Title:".cyan(), self.title);
        println!("  {} {}", "Visibility:".cyan(), self.visibility);
        println!(
            "  {} {}",
            "Created:".cyan(),
            format_timestamp(&self.created_at)
        );
    }
}

/// Execute the create command.
pub async fn execute(
    client: &reqwest::Client,
    base_url: &str,
    human: bool,
    args: CreateArgs,
) -> Result<()> {
    let url = format!("{}/api/notes", base_url);

    let request_body = CreateNoteRequest {
        title: args.title,
        content: args.content,
        tags: args.tags,
        visibility: args.visibility,
    };

    let response: CreateNoteResponse = make_request(client.post(&url).json(&request_body)).await?;

    output(&response, human)
}
