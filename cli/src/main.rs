//! Command-line interface for the notelet service.
//!
//! Commands:
//! - register: Create an account
//! - login: Obtain a Bearer token
//! - whoami: Show the authenticated user
//! - find-user: Look up a user by email (for sharing)
//! - list: List visible notes with filters and search
//! - create: Create a note
//! - read: Fetch a single note
//! - edit: Update a note
//! - delete: Delete a note
//! - share: Share a note with another user
//!
//! Configuration via environment:
//! - NOTELET_URL: Base URL of the notelet server (default: http://localhost:3000)
//! - NOTELET_TOKEN: JWT Bearer token for authentication

mod commands;

use clap::{Parser, Subcommand};

use commands::{
    create::CreateArgs, delete::DeleteArgs, edit::EditArgs, find_user::FindUserArgs,
    list::ListArgs, login::LoginArgs, read::ReadArgs, register::RegisterArgs, share::ShareArgs,
    whoami::WhoamiArgs,
};

/// Notelet CLI
///
/// Interact with a notelet server from the command line. Emits JSON by
/// default; pass --human for formatted output.
#[derive(Parser)]
#[command(name = "notelet")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Output human-readable formatted text instead of JSON
    #[arg(long, global = true)]
    human: bool,

    /// Notelet server URL
    #[arg(
        long,
        env = "NOTELET_URL",
        default_value = "http://localhost:3000",
        global = true
    )]
    url: String,

    /// JWT Bearer token for authentication
    #[arg(long, env = "NOTELET_TOKEN", global = true)]
    token: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Register a new account
    Register(RegisterArgs),

    /// Log in and print a Bearer token
    Login(LoginArgs),

    /// Show the authenticated user
    Whoami(WhoamiArgs),

    /// Look up a user by email
    FindUser(FindUserArgs),

    /// List notes visible to you
    List(ListArgs),

    /// Create a note
    Create(CreateArgs),

    /// Read a single note
    Read(ReadArgs),

    /// Edit a note you own
    Edit(EditArgs),

    /// Delete a note you own
    Delete(DeleteArgs),

    /// Share a note with another user
    Share(ShareArgs),
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let client = match commands::build_client(cli.token.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let result = match cli.command {
        Commands::Register(args) => {
            commands::register::execute(&client, &cli.url, cli.human, args).await
        }
        Commands::Login(args) => commands::login::execute(&client, &cli.url, cli.human, args).await,
        Commands::Whoami(args) => {
            commands::whoami::execute(&client, &cli.url, cli.human, args).await
        }
        Commands::FindUser(args) => {
            commands::find_user::execute(&client, &cli.url, cli.human, args).await
        }
        Commands::List(args) => commands::list::execute(&client, &cli.url, cli.human, args).await,
        Commands::Create(args) => {
            commands::create::execute(&client, &cli.url, cli.human, args).await
        }
        Commands::Read(args) => commands::read::execute(&client, &cli.url, cli.human, args).await,
        Commands::Edit(args) => commands::edit::execute(&client, &cli.url, cli.human, args).await,
        Commands::Delete(args) => {
            commands::delete::execute(&client, &cli.url, cli.human, args).await
        }
        Commands::Share(args) => commands::share::execute(&client, &cli.url, cli.human, args).await,
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
