//! LIST command - List notes visible to the authenticated user.

use anyhow::Result;
use chrono::{DateTime, Utc};
use clap::Args;
use colored::Colorize;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{HumanReadable, format_timestamp, make_request, output};

/// Arguments for the list command.
#[derive(Args)]
pub struct ListArgs {
    /// Filter by visibility: all, private, shared, or public
    #[arg(long)]
    pub status: Option<String>,

    /// Case-insensitive substring search over title and tags
    #[arg(long, short)]
    pub query: Option<String>,

    /// Number of notes to skip
    #[arg(long, default_value = "0")]
    pub skip: i64,

    /// Page size
    #[arg(long, default_value = "10")]
    pub limit: i64,
}

/// Response from listing notes.
#[derive(Debug, Deserialize, Serialize)]
pub struct ListNotesResponse {
    pub total: i64,
    pub notes: Vec<NoteSummary>,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct NoteSummary {
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

impl HumanReadable for ListNotesResponse {
    fn print_human(&self) {
        println!("{}", "Notes".green().bold());
        println!("{}", "=".repeat(80));
        println!();

        if self.notes.is_empty() {
            println!("  {}", "(No notes)".dimmed());
            return;
        }

        for note in &self.notes {
            println!(
                "  {} {}",
                note.title.bold(),
                format!("[{}]", note.visibility).dimmed()
            );
            println!("    {} {}", "ID:".cyan(), note.id);
            if let Some(email) = &note.owner_email {
                println!("    {} {}", "Owner:".cyan(), email);
            }
            if let Some(tags) = &note.tags {
                println!("    {} {}", "Tags:".cyan(), tags);
            }
            println!(
                "    {} {}",
                "Updated:".cyan(),
                format_timestamp(&note.updated_at)
            );
            println!();
        }

        println!(
            "  {} {} of {}",
            "Showing:".cyan(),
            self.notes.len(),
            self.total
        );
    }
}

/// Execute the list command.
pub async fn execute(
    client: &reqwest::Client,
    base_url: &str,
    human: bool,
    args: ListArgs,
) -> Result<()> {
    let url = format!("{}/api/notes", base_url);

    let mut params: Vec<(&str, String)> = vec![
        ("skip", args.skip.to_string()),
        ("limit", args.limit.to_string()),
    ];
    if let Some(status) = &args.status {
        params.push(("status", status.clone()));
    }
    if let Some(query) = &args.query {
        params.push(("q", query.clone()));
    }

    let response: ListNotesResponse = make_request(client.get(&url).query(&params)).await?;

    output(&response, human)
}
