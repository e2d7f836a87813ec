use axum::extract::State;
use axum::response::Redirect;
use mealdraft_plan::Event;

use crate::routes::AppState;

/// POST /source/retry - re-run the sheet fetch. The lock is released while
/// the request is in flight; health endpoints and page reads stay
/// responsive.
pub async fn retry(State(state): State<AppState>) -> Redirect {
    {
        let mut planner = state.planner.write().await;
        planner.apply(Event::FetchStarted);
    }

    let (meals, origin, notice) = state.sheet.load_catalog().await;

    let mut planner = state.planner.write().await;
    planner.apply(Event::CatalogLoaded {
        meals,
        origin,
        notice,
    });

    Redirect::to("/")
}
