use crate::meal::Meal;
use crate::row::RawRow;

/// Fold a flat row stream back into meal records.
///
/// Rows are processed in input order. A header row (non-empty meal name)
/// starts a new meal; a continuation row (empty name, non-empty ingredient)
/// extends the most recently started meal. Continuation rows arriving before
/// any header, and rows carrying neither field, are dropped silently.
pub fn reconstruct(rows: &[RawRow]) -> Vec<Meal> {
    let mut meals: Vec<Meal> = Vec::new();
    let mut buffers: Vec<Vec<String>> = Vec::new();

    for row in rows {
        if row.is_header() {
            meals.push(Meal::from_header(row));
            buffers.push(row.ingredient_line().into_iter().collect());
        } else if let Some(line) = row.ingredient_line() {
            // The cursor is simply the last started meal, not a lookup by id.
            if let Some(buffer) = buffers.last_mut() {
                buffer.push(line);
            }
        }
    }

    for (meal, buffer) in meals.iter_mut().zip(buffers) {
        meal.ingredients_list = buffer.join("\n");
    }

    meals
}
