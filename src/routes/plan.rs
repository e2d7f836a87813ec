use askama::Template;
use axum::extract::{Path, State};
use axum::response::{Html, IntoResponse, Redirect, Response};
use mealdraft_plan::Event;
use mealdraft_shopping::aggregate;

use crate::error::AppError;
use crate::routes::AppState;

/// POST /plan/generate - draw a fresh random draft, biased away from the
/// ids accepted last time.
pub async fn generate(State(state): State<AppState>) -> Result<Redirect, AppError> {
    let exclude = state.recent.load().await;
    let mut planner = state.planner.write().await;

    if planner.meals.is_empty() {
        return Ok(Redirect::to("/"));
    }

    let selection = {
        let mut rng = rand::rng();
        mealdraft_plan::draw_plan(&planner.meals, state.plan_size, &exclude, &mut rng)
    };
    planner.apply(Event::PlanDrawn(selection));

    Ok(Redirect::to("/"))
}

/// POST /plan/refresh/{id} - swap one card for a random meal that is not
/// currently on the board. No-op when the catalog is exhausted.
pub async fn refresh(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Redirect, AppError> {
    let mut planner = state.planner.write().await;

    let replacement = {
        let mut rng = rand::rng();
        mealdraft_plan::replacement_for(&planner.meals, &planner.selected, &mut rng)
    };
    if let Some(replacement) = replacement {
        planner.apply(Event::MealSwapped {
            slot: id,
            replacement,
        });
    }

    Ok(Redirect::to("/"))
}

/// POST /plan/accept - freeze the draft, persist its ids, go to the summary.
pub async fn accept(State(state): State<AppState>) -> Result<Redirect, AppError> {
    let ids = {
        let mut planner = state.planner.write().await;
        if planner.selected.is_empty() {
            return Ok(Redirect::to("/"));
        }
        planner.apply(Event::PlanAccepted);
        planner
            .accepted
            .iter()
            .map(|m| m.id.clone())
            .collect::<Vec<_>>()
    };

    state.recent.save(&ids).await?;

    Ok(Redirect::to("/plan/summary"))
}

/// POST /plan/back - return to selection; the accepted plan stays around.
pub async fn back(State(state): State<AppState>) -> Redirect {
    let mut planner = state.planner.write().await;
    planner.apply(Event::ReturnedToSelection);

    Redirect::to("/")
}

#[derive(Template)]
#[template(path = "summary.html")]
struct SummaryTemplate {
    meals: Vec<OverviewRow>,
    shopping: Vec<ShoppingRow>,
}

struct OverviewRow {
    meal_name: String,
    book: String,
    page: String,
}

struct ShoppingRow {
    name: String,
    total: String,
    details: String,
}

/// GET /plan/summary - meal overview plus the aggregated shopping list.
pub async fn summary(State(state): State<AppState>) -> Result<Response, AppError> {
    let planner = state.planner.read().await;

    if planner.accepted.is_empty() {
        return Ok(Redirect::to("/").into_response());
    }

    let meals = planner
        .accepted
        .iter()
        .map(|meal| OverviewRow {
            meal_name: meal.meal_name.clone(),
            book: meal.book.clone(),
            page: meal.page.clone(),
        })
        .collect();

    let shopping = aggregate(&planner.accepted)
        .into_iter()
        .map(|entry| ShoppingRow {
            total: format_total(entry.quantity, &entry.unit),
            details: entry
                .items
                .iter()
                .map(|item| item.raw.as_str())
                .collect::<Vec<_>>()
                .join(", "),
            name: entry.name,
        })
        .collect();

    let template = SummaryTemplate { meals, shopping };
    Ok(Html(template.render()?).into_response())
}

/// "600 g", "2" for unitless lines, "As needed" when nothing was parseable.
fn format_total(quantity: f64, unit: &str) -> String {
    if quantity <= 0.0 {
        return "As needed".to_string();
    }

    let amount = if quantity.fract() == 0.0 {
        format!("{}", quantity as i64)
    } else {
        format!("{quantity}")
    };

    if unit.is_empty() {
        amount
    } else {
        format!("{amount} {unit}")
    }
}
