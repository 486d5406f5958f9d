//! Blog category pages - static export and SSR server
//!
//! ## Running
//!
//! Export every category page:
//! ```bash
//! GRAPHCMS_ENDPOINT=https://... blog-web export --out-dir dist
//! ```
//!
//! Serve pages, rendering unknown categories on demand:
//! ```bash
//! GRAPHCMS_ENDPOINT=https://... blog-web serve --port 3000
//! ```

use anyhow::{Context, Result};
use blog_web::{export::export_site, server, CategoryResolver, Config};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "blog-web", about = "Category pages for a headless CMS blog")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render every known category page to static HTML
    Export {
        /// Output directory (defaults to OUT_DIR or ./dist)
        #[arg(long)]
        out_dir: Option<PathBuf>,
    },
    /// Serve category pages over HTTP
    Serve {
        /// Port to listen on (defaults to PORT or 3000)
        #[arg(long)]
        port: Option<u16>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,blog_web=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let config = Config::from_env().context("Failed to load configuration")?;
    if config.graphcms_endpoint.is_none() {
        tracing::warn!("GRAPHCMS_ENDPOINT is not set, pages will render without posts");
    }

    let resolver = CategoryResolver::from_config(&config);

    match cli.command {
        Command::Export { out_dir } => {
            let out_dir = out_dir.unwrap_or(config.out_dir);
            tracing::info!(out_dir = %out_dir.display(), "Exporting category pages");
            let report = export_site(&resolver, &out_dir).await?;
            if report.paths_degraded {
                tracing::warn!("Category list unavailable, no category pages were exported");
            }
        }
        Command::Serve { port } => {
            let port = port.unwrap_or(config.port);
            let state = Arc::new(server::AppState::load(resolver).await);
            let app = server::build_app(state);

            let addr = format!("0.0.0.0:{}", port);
            tracing::info!("Starting server on {}", addr);
            tracing::info!("Health check: http://localhost:{}/health", port);

            let listener = tokio::net::TcpListener::bind(&addr)
                .await
                .context("Failed to bind to address")?;

            axum::serve(listener, app).await.context("Server error")?;
        }
    }

    Ok(())
}
