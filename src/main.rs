use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use clap::{Parser, Subcommand};
use mealdraft::routes::AppState;
use mealdraft::source::SheetClient;
use mealdraft::{config::Config, db, observability, routes};
use mealdraft_plan::{Event, Planner, RecentSelections};
use tokio::sync::RwLock;
use tower_http::trace::TraceLayer;

/// mealdraft - meal plan drafting with ingredient aggregation
#[derive(Parser)]
#[command(name = "mealdraft")]
#[command(about = "Draft weekly meal plans and aggregate their shopping lists", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Server host address (overrides config file)
        #[arg(long)]
        host: Option<String>,

        /// Server port (overrides config file)
        #[arg(long)]
        port: Option<u16>,
    },
    /// Create the database and apply migrations
    Migrate,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    observability::init_observability("mealdraft", &config.observability.log_level)?;

    match cli.command {
        Commands::Serve { host, port } => serve_command(config, host, port).await,
        Commands::Migrate => migrate_command(config).await,
    }
}

#[tracing::instrument(skip(config))]
async fn serve_command(
    config: Config,
    host_override: Option<String>,
    port_override: Option<u16>,
) -> Result<()> {
    let host = host_override.unwrap_or(config.server.host);
    let port = port_override.unwrap_or(config.server.port);

    let pool = db::create_pool(&config.database.url, config.database.max_connections).await?;
    db::migrate(&pool).await?;

    let sheet = SheetClient::new(
        &config.source.url,
        Duration::from_secs(config.source.timeout_secs),
    )?;

    // The catalog is fetched once up front; /source/retry re-runs it.
    let mut planner = Planner::default();
    planner.apply(Event::FetchStarted);
    let (meals, origin, notice) = sheet.load_catalog().await;
    tracing::info!(meals = meals.len(), origin = ?origin, "catalog ready");
    planner.apply(Event::CatalogLoaded {
        meals,
        origin,
        notice,
    });

    let state = AppState {
        recent: RecentSelections::new(pool.clone()),
        pool,
        sheet,
        planner: Arc::new(RwLock::new(planner)),
        plan_size: config.plan.size,
    };

    let app = routes::router(state).layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(format!("{host}:{port}")).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;

    Ok(())
}

async fn migrate_command(config: Config) -> Result<()> {
    let pool = db::create_pool(&config.database.url, config.database.max_connections).await?;
    db::migrate(&pool).await?;

    Ok(())
}
