use crate::meal::Meal;

/// Built-in fallback dataset, served when the live sheet is unreachable or
/// malformed so the app always has something to plan with.
pub fn sample_meals() -> Vec<Meal> {
    vec![
        Meal {
            id: "1".to_owned(),
            meal_name: "Spaghetti Bolognese".to_owned(),
            category: "Pasta".to_owned(),
            specialist: "Italian".to_owned(),
            main_ingredient: "Beef".to_owned(),
            book: "The Italian Cookbook".to_owned(),
            page: "45".to_owned(),
            serves: "4".to_owned(),
            ingredients_list: "400g minced beef\n2 tbsp olive oil\n1 onion, chopped\n2 garlic cloves, crushed\n400g canned tomatoes\n300g spaghetti".to_owned(),
        },
        Meal {
            id: "2".to_owned(),
            meal_name: "Chicken Curry".to_owned(),
            category: "Asian".to_owned(),
            specialist: "Indian".to_owned(),
            main_ingredient: "Chicken".to_owned(),
            book: "Indian Cooking".to_owned(),
            page: "78".to_owned(),
            serves: "4".to_owned(),
            ingredients_list: "500g chicken\n2 tbsp curry powder\n1 onion\n2 garlic cloves\n400ml coconut milk".to_owned(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_ids_are_unique() {
        let meals = sample_meals();
        assert!(meals.len() >= 2);
        let mut ids: Vec<_> = meals.iter().map(|m| m.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), meals.len());
    }
}
