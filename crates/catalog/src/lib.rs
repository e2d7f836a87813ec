//! Meal catalog: raw sheet rows and their reconstruction into meal records.

mod meal;
mod reconstruct;
mod row;
mod sample;

pub use meal::Meal;
pub use reconstruct::reconstruct;
pub use row::{RawRow, SheetResponse};
pub use sample::sample_meals;
