use serde::{Deserialize, Serialize};

/// Entry in the built-in food reference table. Calories are always stored
/// per 100 g; `unit`/`default_qty` are the serving suggestion shown to
/// clients and the default for calorie lookups.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct FoodItem {
    pub id: u32,
    pub name: &'static str,
    pub category: MealSlot,
    pub calories_per_100g: u32,
    pub unit: QuantityUnit,
    pub default_qty: f64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MealSlot {
    Breakfast,
    Lunch,
    Snack,
    Dinner,
    All,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum QuantityUnit {
    G,
    Kg,
    Ml,
    Piece,
    Slice,
    Cup,
    Bowl,
}
