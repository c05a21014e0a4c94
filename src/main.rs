//! Interactive App: a simple interactive web application.
//!
//! This is the application entry point. It initializes tracing, resolves
//! configuration from the environment and CLI flags, sets up the Axum router
//! with all routes, and starts the HTTP server.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use interactive_app::config::{AppConfig, DEFAULT_LOG_FILTER};
use interactive_app::http::start_server;
use interactive_app::routes::create_router;
use interactive_app::state::AppState;

/// Interactive App: a simple web application for deployment exercises
#[derive(Parser, Debug)]
#[command(name = "interactive-app", version, about)]
struct Args {
    /// Host to bind the HTTP listener to
    #[arg(long)]
    host: Option<String>,

    /// Port to bind the HTTP listener to
    #[arg(short, long)]
    port: Option<u16>,

    /// Directory holding index.html and the static assets
    #[arg(long)]
    frontend_dir: Option<std::path::PathBuf>,

    /// Log level filter (e.g., "interactive_app=debug,tower_http=info")
    #[arg(short, long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command line arguments
    let args = Args::parse();

    // Initialize tracing with priority: CLI > env > default
    let log_filter = args
        .log_level
        .or_else(|| std::env::var("RUST_LOG").ok())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&log_filter))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Resolve configuration: environment first, CLI overrides on top
    let mut config = AppConfig::from_env();
    if let Some(host) = args.host {
        config.host = host;
    }
    if let Some(port) = args.port {
        config.port = port;
    }
    if let Some(frontend_dir) = args.frontend_dir {
        config.frontend_dir = frontend_dir;
    }

    tracing::info!(
        host = %config.host,
        port = config.port,
        environment = %config.environment,
        frontend_dir = %config.frontend_dir.display(),
        "Loaded configuration"
    );

    // A missing index.html is a packaging defect; flag it early so it shows
    // up in deploy logs, but keep serving (the API and probe still work)
    if !config.index_path().is_file() {
        tracing::warn!(
            path = %config.index_path().display(),
            "index.html not found; root page will return 500"
        );
    }

    // Create application state and router
    let state = AppState::new(config.clone());
    let app = create_router(state);

    // Start server; blocks until SIGTERM/Ctrl+C
    start_server(app, &config).await?;

    Ok(())
}
