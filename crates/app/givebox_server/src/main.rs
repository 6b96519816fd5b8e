//! Givebox donation API server binary.

use std::sync::Arc;

use clap::Parser;
use givebox_core::session::SessionRegistry;
use sqlx::postgres::PgPoolOptions;
use tracing::info;

/// CLI arguments for the donation API server.
#[derive(Parser, Debug)]
#[command(name = "givebox_server", about = "Givebox donation API server")]
struct Args {
    /// Port to listen on.
    #[arg(long, env = "PORT", default_value_t = 8080)]
    port: u16,

    /// PostgreSQL connection URL.
    #[arg(
        long,
        env = "DATABASE_URL",
        default_value = "postgres://localhost:5432/givebox"
    )]
    database_url: String,

    /// Password exchanged for an admin session token. No default: the
    /// server refuses to start without one.
    #[arg(long, env = "ADMIN_PASSWORD")]
    admin_password: String,

    /// Comma-separated origin allow-list for CORS. Unset allows any
    /// origin.
    #[arg(long, env = "ALLOWED_ORIGINS")]
    allowed_origins: Option<String>,

    /// Maximum number of database connections in the pool.
    #[arg(long, default_value_t = 5)]
    max_connections: u32,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,givebox_api=debug,givebox_core=debug".parse().unwrap()),
        )
        .init();

    let args = Args::parse();

    info!(port = args.port, "starting givebox_server");

    let pool = PgPoolOptions::new()
        .max_connections(args.max_connections)
        .acquire_timeout(std::time::Duration::from_secs(30))
        .connect(&args.database_url)
        .await?;

    // Run database migrations.
    info!("running database migrations");
    givebox_api::migrate(&pool).await?;

    let config = givebox_api::config::ApiConfig {
        bind_addr: format!("0.0.0.0:{}", args.port),
        admin_password: args.admin_password,
        allowed_origins: args
            .allowed_origins
            .map(|list| {
                list.split(',')
                    .map(str::trim)
                    .filter(|origin| !origin.is_empty())
                    .map(String::from)
                    .collect()
            })
            .unwrap_or_default(),
    };

    let state = givebox_api::AppState {
        pool,
        config: config.clone(),
        sessions: Arc::new(SessionRegistry::new()),
    };

    let app = givebox_api::router(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    info!(addr = %listener.local_addr()?, "REST API listening");

    axum::serve(listener, app).await?;

    Ok(())
}
