use std::collections::HashMap;

use mealdraft_catalog::Meal;

use crate::parser::{ParsedIngredient, parse_ingredient};

/// One shopping list entry: everything that parsed to the same
/// `(name, unit)` pair, with the summed quantity and the contributing
/// lines kept for display.
#[derive(Debug, Clone, PartialEq)]
pub struct AggregatedIngredient {
    pub name: String,
    pub quantity: f64,
    pub unit: String,
    pub items: Vec<ParsedIngredient>,
}

/// Merge the ingredient lines of the given meals into a shopping list.
///
/// Groups accumulate in encounter order (meal order, then line order) so
/// repeated runs over the same input produce identical output; the final
/// list is sorted by name, with unit as tiebreak.
pub fn aggregate(meals: &[Meal]) -> Vec<AggregatedIngredient> {
    let mut groups: Vec<AggregatedIngredient> = Vec::new();
    let mut index: HashMap<(String, String), usize> = HashMap::new();

    for meal in meals {
        for line in meal.ingredient_lines() {
            let parsed = parse_ingredient(line);
            let key = (parsed.name.clone(), parsed.unit.clone());

            match index.get(&key) {
                Some(&at) => {
                    groups[at].quantity += parsed.quantity;
                    groups[at].items.push(parsed);
                }
                None => {
                    index.insert(key, groups.len());
                    groups.push(AggregatedIngredient {
                        name: parsed.name.clone(),
                        quantity: parsed.quantity,
                        unit: parsed.unit.clone(),
                        items: vec![parsed],
                    });
                }
            }
        }
    }

    groups.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.unit.cmp(&b.unit)));
    groups
}
