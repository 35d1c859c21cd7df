//! CLI administration tool for TinyLink.
//!
//! Manages links directly in PostgreSQL without going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # List all links
//! cargo run --bin tinylink-admin -- links list
//!
//! # Show stats for one link
//! cargo run --bin tinylink-admin -- links show abc123
//!
//! # Create a link with a custom code
//! cargo run --bin tinylink-admin -- links create https://example.com --code docs01
//!
//! # Delete a link
//! cargo run --bin tinylink-admin -- links delete abc123
//!
//! # Check database connection
//! cargo run --bin tinylink-admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (or `DB_*` components): PostgreSQL connection string
//! - `BASE_URL`: used to print short URLs

use tinylink::config::Config;
use tinylink::prelude::*;
use tinylink::server::connect_pool;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing TinyLink.
#[derive(Parser)]
#[command(name = "tinylink-admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Manage links
    Links {
        #[command(subcommand)]
        action: LinkAction,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Link management subcommands.
#[derive(Subcommand)]
enum LinkAction {
    /// List all links, newest first
    List,

    /// Show stats for a link
    Show {
        /// Short code
        code: String,
    },

    /// Create a new link
    Create {
        /// Destination URL (http or https)
        url: String,

        /// Custom short code (6-8 alphanumeric characters)
        #[arg(short, long)]
        code: Option<String>,
    },

    /// Delete a link
    Delete {
        /// Short code
        code: String,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,
}

type PgLinkService = LinkService<PgLinkRepository>;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = Config::from_env().context("Failed to load configuration")?;
    let pool = connect_pool(&config).await?;

    match cli.command {
        Commands::Links { action } => {
            let service = LinkService::new(Arc::new(PgLinkRepository::new(Arc::new(pool))));
            handle_link_action(action, &service, &config.base_url).await?
        }
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

/// Dispatches link management commands.
async fn handle_link_action(
    action: LinkAction,
    service: &PgLinkService,
    base_url: &str,
) -> Result<()> {
    match action {
        LinkAction::List => list_links(service).await,
        LinkAction::Show { code } => show_link(service, base_url, &code).await,
        LinkAction::Create { url, code } => create_link(service, base_url, url, code).await,
        LinkAction::Delete { code, yes } => delete_link(service, &code, yes).await,
    }
}

/// Lists all links as a table.
///
/// # Output Format
///
/// ```text
/// Links
///
///   Code      Clicks   Created            Target
///   ---------------------------------------------------------------
///   docs01    12       2025-01-15 10:30   https://docs.example.com
/// ```
async fn list_links(service: &PgLinkService) -> Result<()> {
    println!("{}", "Links".bright_blue().bold());
    println!();

    let links = service
        .list_links()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list links: {}", e))?;

    if links.is_empty() {
        println!("{}", "  No links found".yellow());
        println!();
        println!(
            "  Create one with: {} links create <url>",
            "tinylink-admin".bright_cyan()
        );
        return Ok(());
    }

    println!(
        "  {:<9} {:<8} {:<18} {}",
        "Code".bright_white().bold(),
        "Clicks".bright_white().bold(),
        "Created".bright_white().bold(),
        "Target".bright_white().bold()
    );
    println!("  {}", "-".repeat(75).bright_black());

    for link in &links {
        println!(
            "  {:<9} {:<8} {:<18} {}",
            link.code.cyan(),
            link.total_clicks.to_string().bright_green(),
            link.created_at
                .format("%Y-%m-%d %H:%M")
                .to_string()
                .bright_black(),
            link.target_url
        );
    }

    println!();
    println!("  Total: {}", links.len().to_string().bright_white().bold());
    println!();

    Ok(())
}

/// Prints the stats of a single link.
async fn show_link(service: &PgLinkService, base_url: &str, code: &str) -> Result<()> {
    let link = service
        .get_link_stats(code)
        .await
        .map_err(|e| anyhow::anyhow!("{}: {}", code, e))?;

    print_link(&link, &service.short_url(base_url, &link.code));

    Ok(())
}

/// Creates a link through the same validation as the HTTP API.
async fn create_link(
    service: &PgLinkService,
    base_url: &str,
    url: String,
    code: Option<String>,
) -> Result<()> {
    let link = service
        .create_link(url, code)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to create link: {}", e))?;

    println!("{}", "Link created".green().bold());
    println!();
    print_link(&link, &service.short_url(base_url, &link.code));

    Ok(())
}

/// Deletes a link after confirmation (default: No).
async fn delete_link(service: &PgLinkService, code: &str, skip_confirm: bool) -> Result<()> {
    let link = service
        .get_link_stats(code)
        .await
        .map_err(|e| anyhow::anyhow!("{}: {}", code, e))?;

    println!("  Code:   {}", link.code.cyan());
    println!("  Target: {}", link.target_url);
    println!("  Clicks: {}", link.total_clicks);
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Delete this link? Its stats are removed too")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "Cancelled".red());
            return Ok(());
        }
    }

    service
        .delete_link(code)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to delete link: {}", e))?;

    println!("{}", "Link deleted".green().bold());

    Ok(())
}

fn print_link(link: &Link, short_url: &str) {
    let last_clicked = link
        .last_clicked
        .map(|ts| ts.format("%Y-%m-%d %H:%M:%S UTC").to_string())
        .unwrap_or_else(|| "Never".to_string());

    println!("  Code:         {}", link.code.cyan().bold());
    println!("  Short URL:    {}", short_url.bright_yellow());
    println!("  Target:       {}", link.target_url);
    println!(
        "  Clicks:       {}",
        link.total_clicks.to_string().bright_green().bold()
    );
    println!("  Last clicked: {}", last_clicked);
    println!(
        "  Created:      {}",
        link.created_at.format("%Y-%m-%d %H:%M:%S UTC")
    );
    println!();
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            let links_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM links")
                .fetch_one(pool)
                .await?;

            println!("{}", "Database connection OK".green().bold());
            println!(
                "  Links: {}",
                links_count.to_string().bright_green().bold()
            );
        }
    }

    Ok(())
}
