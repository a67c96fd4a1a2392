//! CLI administration tool for snipline.
//!
//! Manages short links directly against the configured storage and cache,
//! without going through API Gateway.
//!
//! # Usage
//!
//! ```bash
//! # Create a short link
//! cargo run --bin snipline-admin -- link create https://example.com/some/long/path
//!
//! # Show a link
//! cargo run --bin snipline-admin -- link show aZ3kP9qX
//!
//! # Delete a link (asks for confirmation unless --yes)
//! cargo run --bin snipline-admin -- link delete aZ3kP9qX
//!
//! # Check storage and cache connectivity
//! cargo run --bin snipline-admin -- check
//! ```
//!
//! # Environment Variables
//!
//! Same as the services; see `snipline::config`.

use snipline::application::services::LinkService;
use snipline::config::load_from_env;
use snipline::error::AppError;
use snipline::infrastructure::bootstrap::build_link_service;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;

/// CLI tool for managing snipline links.
#[derive(Parser)]
#[command(name = "snipline-admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Manage short links
    Link {
        #[command(subcommand)]
        action: LinkAction,
    },

    /// Check storage and cache connectivity
    Check,
}

/// Link management subcommands.
#[derive(Subcommand)]
enum LinkAction {
    /// Create a short link for a long URL
    Create {
        /// URL to shorten
        url: String,
    },

    /// Show a stored link
    Show {
        /// Short link id
        id: String,
    },

    /// Delete a short link
    Delete {
        /// Short link id
        id: String,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = load_from_env()?;
    let service = build_link_service(&config).await?;

    match cli.command {
        Commands::Link { action } => handle_link_action(action, &service).await?,
        Commands::Check => handle_check(&service).await,
    }

    Ok(())
}

/// Dispatches link management commands.
async fn handle_link_action(action: LinkAction, service: &LinkService) -> Result<()> {
    match action {
        LinkAction::Create { url } => create_link(service, url).await,
        LinkAction::Show { id } => show_link(service, &id).await,
        LinkAction::Delete { id, yes } => delete_link(service, &id, yes).await,
    }
}

/// Validates the URL, stores a new link, and prints it.
///
/// # Errors
///
/// Fails on a rejected URL so the process exits non-zero.
async fn create_link(service: &LinkService, url: String) -> Result<()> {
    println!("{}", "🔗 Create Short Link".bright_blue().bold());
    println!();

    let link = service
        .build_link(url)
        .map_err(|e| anyhow::anyhow!("Invalid URL: {}", e))?;

    service
        .create(&link)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to create link: {}", e))?;

    println!("{}", "✅ Link created successfully!".green().bold());
    println!();
    print_link_details(&link);

    Ok(())
}

/// Prints a stored link, or a notice if the id is unknown.
async fn show_link(service: &LinkService, id: &str) -> Result<()> {
    match service.get(id).await {
        Ok(link) => {
            println!("{}", "🔗 Short Link".bright_blue().bold());
            println!();
            print_link_details(&link);
            Ok(())
        }
        Err(AppError::NotFound { .. }) => {
            println!("{} {}", "⚠️  No link with id".yellow(), id.cyan());
            Ok(())
        }
        Err(e) => Err(anyhow::anyhow!("Failed to load link: {}", e)),
    }
}

/// Deletes a link after showing it and asking for confirmation.
///
/// # Safety
///
/// - Requires confirmation (default: No) unless `--yes`
/// - Unknown ids are reported and nothing is deleted
async fn delete_link(service: &LinkService, id: &str, skip_confirm: bool) -> Result<()> {
    println!("{}", "🗑️  Delete Short Link".bright_blue().bold());
    println!();

    let link = match service.get(id).await {
        Ok(link) => link,
        Err(AppError::NotFound { .. }) => {
            println!("{} {}", "⚠️  No link with id".yellow(), id.cyan());
            return Ok(());
        }
        Err(e) => return Err(anyhow::anyhow!("Failed to load link: {}", e)),
    };

    print_link_details(&link);
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Delete this link?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    service
        .delete(id)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to delete link: {}", e))?;

    println!();
    println!("{}", "✅ Link deleted successfully!".green().bold());
    println!();

    Ok(())
}

/// Reports storage and cache reachability.
async fn handle_check(service: &LinkService) {
    println!("{}", "🔍 Checking collaborators...".bright_blue().bold());
    println!();

    print_check("Storage", service.storage_healthy().await);
    print_check("Cache", service.cache_healthy().await);
    println!();
}

fn print_check(name: &str, healthy: bool) {
    let status = if healthy {
        "OK".green().bold()
    } else {
        "UNREACHABLE".red().bold()
    };
    println!("  {:<8} {}", name.bright_white(), status);
}

fn print_link_details(link: &snipline::domain::entities::Link) {
    println!("  Id:      {}", link.id.bright_yellow().bold());
    println!("  URL:     {}", link.original_url.cyan());
    println!(
        "  Created: {}",
        link.created_at
            .format("%Y-%m-%d %H:%M:%S UTC")
            .to_string()
            .bright_black()
    );
}
