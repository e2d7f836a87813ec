use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

/// Leading decimal quantity, an optional single-word unit, then the rest of
/// the line. The unit group is optional so "2 eggs" matches with no unit
/// rather than swallowing "eggs" and leaving the name empty.
static RE_QUANTITY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+(?:\.\d+)?)\s*([A-Za-z]+)?\s+(.+)$").unwrap());

/// Words accepted as measurement units. A word following the quantity that
/// is not in this list is part of the ingredient name ("2 garlic cloves" is
/// two of "garlic cloves", not "garlic" units of cloves).
static UNIT_WORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    HashSet::from([
        "g",
        "gram",
        "grams",
        "kg",
        "kilogram",
        "kilograms",
        "mg",
        "ml",
        "milliliter",
        "milliliters",
        "millilitre",
        "millilitres",
        "cl",
        "l",
        "liter",
        "liters",
        "litre",
        "litres",
        "tsp",
        "teaspoon",
        "teaspoons",
        "tbsp",
        "tablespoon",
        "tablespoons",
        "cup",
        "cups",
        "oz",
        "ounce",
        "ounces",
        "lb",
        "lbs",
        "pound",
        "pounds",
    ])
});

/// One ingredient line broken into its parts. `raw` keeps the trimmed
/// original for display; `name` is the lowercased dedup key.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedIngredient {
    pub quantity: f64,
    pub unit: String,
    pub name: String,
    pub raw: String,
}

/// Parse one free-text ingredient line. Total: anything without a leading
/// number falls through to a zero-quantity entry with the whole line as
/// its name.
pub fn parse_ingredient(line: &str) -> ParsedIngredient {
    let raw = line.trim();

    if let Some(caps) = RE_QUANTITY.captures(raw) {
        let quantity: f64 = caps[1].parse().unwrap_or(0.0);
        let rest = caps[3].trim();

        let (unit, name) = match caps.get(2).map(|m| m.as_str()) {
            Some(word) if is_unit_word(word) => (word.to_lowercase(), rest.to_lowercase()),
            Some(word) => (String::new(), format!("{word} {rest}").to_lowercase()),
            None => (String::new(), rest.to_lowercase()),
        };

        return ParsedIngredient {
            quantity,
            unit,
            name,
            raw: raw.to_owned(),
        };
    }

    ParsedIngredient {
        quantity: 0.0,
        unit: String::new(),
        name: raw.to_lowercase(),
        raw: raw.to_owned(),
    }
}

fn is_unit_word(word: &str) -> bool {
    UNIT_WORDS.contains(word.to_lowercase().as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quantity_glued_to_unit() {
        let parsed = parse_ingredient("400g minced beef");
        assert_eq!(parsed.quantity, 400.0);
        assert_eq!(parsed.unit, "g");
        assert_eq!(parsed.name, "minced beef");
        assert_eq!(parsed.raw, "400g minced beef");
    }

    #[test]
    fn quantity_with_spaced_unit() {
        let parsed = parse_ingredient("2 tbsp olive oil");
        assert_eq!(parsed.quantity, 2.0);
        assert_eq!(parsed.unit, "tbsp");
        assert_eq!(parsed.name, "olive oil");
    }

    #[test]
    fn non_unit_word_stays_in_the_name() {
        let parsed = parse_ingredient("2 garlic cloves");
        assert_eq!(parsed.quantity, 2.0);
        assert_eq!(parsed.unit, "");
        assert_eq!(parsed.name, "garlic cloves");
    }

    #[test]
    fn single_word_after_quantity_is_the_name() {
        let parsed = parse_ingredient("2 eggs");
        assert_eq!(parsed.quantity, 2.0);
        assert_eq!(parsed.unit, "");
        assert_eq!(parsed.name, "eggs");
    }

    #[test]
    fn no_leading_number_falls_through() {
        let parsed = parse_ingredient("pinch of salt");
        assert_eq!(parsed.quantity, 0.0);
        assert_eq!(parsed.unit, "");
        assert_eq!(parsed.name, "pinch of salt");
        assert_eq!(parsed.raw, "pinch of salt");
    }

    #[test]
    fn decimal_quantities() {
        let parsed = parse_ingredient("2.5 kg potatoes");
        assert_eq!(parsed.quantity, 2.5);
        assert_eq!(parsed.unit, "kg");
        assert_eq!(parsed.name, "potatoes");
    }

    #[test]
    fn punctuation_breaks_the_unit_word() {
        let parsed = parse_ingredient("1 onion, chopped");
        assert_eq!(parsed.quantity, 1.0);
        assert_eq!(parsed.unit, "");
        assert_eq!(parsed.name, "onion, chopped");
    }

    #[test]
    fn name_is_lowercased_raw_is_not() {
        let parsed = parse_ingredient("  400g Canned Tomatoes  ");
        assert_eq!(parsed.name, "canned tomatoes");
        assert_eq!(parsed.raw, "400g Canned Tomatoes");
    }

    #[test]
    fn bare_number_has_no_name_match() {
        let parsed = parse_ingredient("42");
        assert_eq!(parsed.quantity, 0.0);
        assert_eq!(parsed.name, "42");
    }
}
