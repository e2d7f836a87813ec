pub mod config;
pub mod db;
pub mod error;
pub mod observability;
pub mod routes;
pub mod source;

pub use routes::AppState;

use std::sync::Arc;
use std::time::Duration;

use mealdraft_catalog::Meal;
use mealdraft_plan::{DataOrigin, Event, Planner, RecentSelections};
use tokio::sync::RwLock;

/// Build the router around a preloaded catalog, for integration tests that
/// should not touch the network.
pub async fn create_app(pool: sqlx::SqlitePool, meals: Vec<Meal>) -> anyhow::Result<axum::Router> {
    RecentSelections::migrate(&pool).await?;

    let mut planner = Planner::default();
    planner.apply(Event::CatalogLoaded {
        meals,
        origin: DataOrigin::Live,
        notice: None,
    });

    // Unroutable on purpose: retrying in tests exercises the fallback path.
    let sheet = source::SheetClient::new("http://127.0.0.1:9/dataEntry", Duration::from_secs(1))?;

    let state = AppState {
        recent: RecentSelections::new(pool.clone()),
        pool,
        sheet,
        planner: Arc::new(RwLock::new(planner)),
        plan_size: mealdraft_plan::DEFAULT_PLAN_SIZE,
    };

    Ok(routes::router(state))
}
