//! DELETE command - Delete a note you own.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use uuid::Uuid;

use super::make_request_empty;

/// Arguments for the delete command.
#[derive(Args)]
pub struct DeleteArgs {
    /// Note ID to delete
    pub note_id: Uuid,
}

/// Execute the delete command.
pub async fn execute(
    client: &reqwest::Client,
    base_url: &str,
    human: bool,
    args: DeleteArgs,
) -> Result<()> {
    let url = format!("{}/api/notes/{}", base_url, args.note_id);

    make_request_empty(client.delete(&url)).await?;

    if human {
        println!("{}", "Note deleted.".green().bold());
    } else {
        println!("{}", serde_json::json!({ "deleted": args.note_id }));
    }
    Ok(())
}
