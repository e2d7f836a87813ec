use crate::row::RawRow;

/// A reconstructed meal record.
///
/// All descriptive fields are plain strings, empty when the source row left
/// them out. `ingredients_list` holds the raw ingredient lines joined with
/// newlines, in the order the rows arrived.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Meal {
    pub id: String,
    pub meal_name: String,
    pub category: String,
    pub specialist: String,
    pub main_ingredient: String,
    pub book: String,
    pub page: String,
    pub serves: String,
    pub ingredients_list: String,
}

impl Meal {
    pub(crate) fn from_header(row: &RawRow) -> Self {
        fn text(field: &Option<String>) -> String {
            field.clone().unwrap_or_default()
        }

        Self {
            id: row.id.to_string(),
            meal_name: text(&row.meal_name),
            category: text(&row.category),
            specialist: text(&row.specialist),
            main_ingredient: text(&row.main_ingredient),
            book: text(&row.book),
            page: text(&row.page),
            serves: text(&row.serves),
            ingredients_list: String::new(),
        }
    }

    /// Non-blank ingredient lines, in input order.
    pub fn ingredient_lines(&self) -> impl Iterator<Item = &str> {
        self.ingredients_list
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
    }
}
