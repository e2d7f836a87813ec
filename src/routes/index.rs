use askama::Template;
use axum::extract::State;
use axum::response::{Html, IntoResponse};
use mealdraft_catalog::Meal;
use mealdraft_plan::{DataOrigin, Phase};

use crate::error::AppError;
use crate::routes::AppState;

#[derive(Template)]
#[template(path = "index.html")]
struct IndexTemplate {
    notice: Option<String>,
    fallback: bool,
    meal_count: usize,
    cards: Vec<MealCard>,
    reviewing: bool,
}

struct MealCard {
    id: String,
    meal_name: String,
    book: String,
    page: String,
    serves: String,
}

impl From<&Meal> for MealCard {
    fn from(meal: &Meal) -> Self {
        Self {
            id: meal.id.clone(),
            meal_name: meal.meal_name.clone(),
            book: meal.book.clone(),
            page: meal.page.clone(),
            serves: meal.serves.clone(),
        }
    }
}

/// GET / - the selection view: notice banner, generate button and the
/// current draft as a card grid.
pub async fn page(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let planner = state.planner.read().await;

    let template = IndexTemplate {
        notice: planner.notice.clone(),
        fallback: planner.origin == DataOrigin::Fallback,
        meal_count: planner.meals.len(),
        cards: planner.selected.iter().map(MealCard::from).collect(),
        reviewing: planner.phase == Phase::Reviewing,
    };

    Ok(Html(template.render()?))
}
