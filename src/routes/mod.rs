mod health;
mod index;
mod plan;
mod source;

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use mealdraft_plan::{Planner, RecentSelections};
use sqlx::SqlitePool;
use tokio::sync::RwLock;

use crate::source::SheetClient;

#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub sheet: SheetClient,
    pub recent: RecentSelections,
    pub planner: Arc<RwLock<Planner>>,
    pub plan_size: usize,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        // Health check endpoints (probe against the pool directly)
        .route("/health", get(health::health))
        .route("/ready", get(health::ready))
        .with_state(state.pool.clone())
        .merge(
            Router::new()
                .route("/", get(index::page))
                .route("/plan/generate", post(plan::generate))
                .route("/plan/refresh/{id}", post(plan::refresh))
                .route("/plan/accept", post(plan::accept))
                .route("/plan/back", post(plan::back))
                .route("/plan/summary", get(plan::summary))
                .route("/source/retry", post(source::retry))
                .with_state(state),
        )
}
