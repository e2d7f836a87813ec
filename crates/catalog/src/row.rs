use serde::{Deserialize, Deserializer};

/// Top-level shape returned by the sheet API.
#[derive(Debug, Deserialize)]
pub struct SheetResponse {
    #[serde(rename = "dataEntry")]
    pub data_entry: Vec<RawRow>,
}

/// One denormalized row from the sheet.
///
/// A row either introduces a meal (non-empty `meal_name`) or continues the
/// previous one with an extra ingredient. Every field except `id` is
/// optional; the sheet serves `page`, `serves` and `quantity` as either a
/// JSON number or a string, so those are normalized to text on the way in.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawRow {
    pub id: i64,
    pub meal_name: Option<String>,
    pub category: Option<String>,
    pub specialist: Option<String>,
    pub main_ingredient: Option<String>,
    pub book: Option<String>,
    #[serde(deserialize_with = "text_or_number")]
    pub page: Option<String>,
    #[serde(deserialize_with = "text_or_number")]
    pub serves: Option<String>,
    pub ingredients: Option<String>,
    #[serde(deserialize_with = "text_or_number")]
    pub quantity: Option<String>,
    pub measurement: Option<String>,
}

impl RawRow {
    /// Whether this row starts a new meal.
    pub(crate) fn is_header(&self) -> bool {
        self.meal_name
            .as_deref()
            .is_some_and(|name| !name.trim().is_empty())
    }

    /// Compose the ingredient line this row contributes, if any:
    /// `"<quantity> <measurement> <ingredient>"` with missing parts omitted.
    pub(crate) fn ingredient_line(&self) -> Option<String> {
        let ingredient = self
            .ingredients
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())?;

        let line = [
            self.quantity.as_deref(),
            self.measurement.as_deref(),
            Some(ingredient),
        ]
        .into_iter()
        .flatten()
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ");

        Some(line)
    }
}

fn text_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum TextOrNumber {
        Text(String),
        Number(f64),
    }

    let value = Option::<TextOrNumber>::deserialize(deserializer)?;
    Ok(value.map(|v| match v {
        TextOrNumber::Text(text) => text,
        TextOrNumber::Number(n) if n.fract() == 0.0 && n.abs() < 1e15 => {
            format!("{}", n as i64)
        }
        TextOrNumber::Number(n) => n.to_string(),
    }))
}
