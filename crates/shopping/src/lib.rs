//! Shopping list domain: free-text ingredient parsing and aggregation.

mod aggregation;
mod parser;

pub use aggregation::{AggregatedIngredient, aggregate};
pub use parser::{ParsedIngredient, parse_ingredient};
