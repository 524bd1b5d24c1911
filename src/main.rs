//! CLI entry point for blog-service

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use blog_service::InMemoryBlogService;

#[derive(Parser)]
#[command(name = "blog-service")]
#[command(version)]
#[command(about = "Serve markdown blog posts described by a JSON manifest", long_about = None)]
struct Cli {
    /// Directory holding blog-config.json and the markdown sources
    #[arg(short = 'D', long, global = true, default_value = "blog")]
    dir: PathBuf,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List loaded posts
    #[command(alias = "ls")]
    List,

    /// Print the rendered HTML of a post
    Show {
        /// Slug of the post
        slug: String,
    },

    /// Start the JSON API server
    #[command(alias = "s")]
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value = "4000")]
        port: u16,

        /// IP address to bind to
        #[arg(short, long, default_value = "localhost")]
        ip: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "blog_service=debug,info"
    } else {
        "blog_service=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let service = InMemoryBlogService::new(&cli.dir)?;

    match cli.command {
        Commands::List => {
            blog_service::commands::list::run(&service)?;
        }

        Commands::Show { slug } => {
            blog_service::commands::show::run(&service, &slug)?;
        }

        Commands::Serve { port, ip } => {
            tracing::info!("Starting server at http://{}:{}", ip, port);
            blog_service::server::start(service, &ip, port).await?;
        }
    }

    Ok(())
}
