//! # board
//!
//! Command-line front end for the Postboard data layer.
//!
//! ## Commands
//!
//! - `list`: Load posts and print the (optionally filtered) list
//! - `show`: Load one post with its comments
//! - `add`: Load posts, then add one locally
//!
//! ## Example
//!
//! ```bash
//! # List every post whose title contains "qui"
//! board list --query qui
//!
//! # Show post 1 and its comments
//! board show 1
//!
//! # Try it offline against built-in demo data
//! board --mock add --title "Hello" --body "First post"
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use postboard_client::{
    ClientConfig, HttpRemote, LoaderStore, PostsApp, PostsStore, RemoteClient, SearchStore,
};

mod commands;
mod demo;

use commands::{add, list, show};

/// Command-line front end for the Postboard data layer.
#[derive(Parser, Debug)]
#[command(name = "board")]
#[command(version, about, long_about = None)]
struct Cli {
    /// TOML file with client settings
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Override the API base URL
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Use built-in demo data instead of the network
    #[arg(long, global = true)]
    mock: bool,

    /// Log at debug level
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Load posts and print them
    List {
        /// Only show posts whose title contains this text
        #[arg(long, short)]
        query: Option<String>,
    },

    /// Show one post with its comments
    Show {
        /// Post id
        id: u64,
    },

    /// Add a post locally (not sent to the API)
    Add {
        /// Post title
        #[arg(long, short)]
        title: String,

        /// Post body
        #[arg(long, short)]
        body: String,

        /// Filter the printed list with this text
        #[arg(long, short)]
        query: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut config = match &cli.config {
        Some(path) => ClientConfig::from_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => ClientConfig::default(),
    };
    if let Some(base_url) = &cli.base_url {
        config = config.with_base_url(base_url);
    }

    if cli.mock {
        dispatch(demo::remote(), cli.command).await
    } else {
        let remote = HttpRemote::new(&config).context("Failed to create HTTP client")?;
        tracing::debug!(base_url = %remote.base_url(), "using HTTP remote");
        dispatch(remote, cli.command).await
    }
}

/// Logs go to stderr; stdout carries command output only.
fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Run `command` against any remote.
async fn dispatch<R: RemoteClient>(remote: R, command: Commands) -> Result<()> {
    let app = PostsApp::new(
        remote,
        LoaderStore::new(),
        PostsStore::new(),
        SearchStore::new(),
    );

    match command {
        Commands::List { query } => list::run(&app, query.as_deref()).await,
        Commands::Show { id } => show::run(&app, id).await,
        Commands::Add { title, body, query } => {
            add::run(&app, &title, &body, query.as_deref()).await
        }
    }
}
