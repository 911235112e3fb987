//! Built-in food reference table and calorie/unit conversion. The catalog
//! is compiled in; there is no food CRUD surface.

use crate::models::food::{FoodItem, MealSlot, QuantityUnit};

/// Convert a quantity in the given unit to its gram equivalent.
///
/// Countable units (piece, slice, cup, bowl) use a fixed 100 g per unit;
/// catalog calorie densities were calibrated against that convention.
/// Milliliters assume liquid density of 1 g/ml.
pub fn gram_equivalent(quantity: f64, unit: QuantityUnit) -> f64 {
    match unit {
        QuantityUnit::G => quantity,
        QuantityUnit::Kg => quantity * 1000.0,
        QuantityUnit::Ml => quantity,
        QuantityUnit::Piece | QuantityUnit::Slice | QuantityUnit::Cup | QuantityUnit::Bowl => {
            quantity * 100.0
        }
    }
}

/// Calories for a quantity of food, rounded to the nearest whole calorie.
pub fn calories_for(calories_per_100g: u32, quantity: f64, unit: QuantityUnit) -> u32 {
    let grams = gram_equivalent(quantity, unit);
    (f64::from(calories_per_100g) * grams / 100.0).round() as u32
}

pub fn find_food(id: u32) -> Option<&'static FoodItem> {
    FOOD_CATALOG.iter().find(|f| f.id == id)
}

/// Case-insensitive name search with an optional meal-slot filter.
/// Items in the `all` slot match every slot filter.
pub fn search(query: Option<&str>, category: Option<MealSlot>) -> Vec<&'static FoodItem> {
    let needle = query.map(str::to_lowercase);
    FOOD_CATALOG
        .iter()
        .filter(|item| match category {
            Some(slot) => item.category == slot || item.category == MealSlot::All,
            None => true,
        })
        .filter(|item| match &needle {
            Some(q) => item.name.to_lowercase().contains(q),
            None => true,
        })
        .collect()
}

macro_rules! food {
    ($id:expr, $name:expr, $cat:ident, $cal:expr, $unit:ident, $qty:expr) => {
        FoodItem {
            id: $id,
            name: $name,
            category: MealSlot::$cat,
            calories_per_100g: $cal,
            unit: QuantityUnit::$unit,
            default_qty: $qty,
        }
    };
}

pub static FOOD_CATALOG: [FoodItem; 50] = [
    // Breakfast
    food!(1, "Paratha (Plain)", Breakfast, 320, Piece, 1.0),
    food!(2, "Idli", Breakfast, 58, Piece, 2.0),
    food!(3, "Dosa (Plain)", Breakfast, 168, Piece, 1.0),
    food!(4, "Poha", Breakfast, 110, G, 100.0),
    food!(5, "Upma", Breakfast, 95, G, 100.0),
    food!(6, "Bread Toast", Breakfast, 264, Slice, 2.0),
    food!(7, "Omelette", Breakfast, 154, Piece, 1.0),
    food!(8, "Oats", Breakfast, 68, G, 50.0),
    food!(9, "Cornflakes", Breakfast, 357, G, 30.0),
    food!(10, "Banana", Breakfast, 89, Piece, 1.0),
    // Rice & grains
    food!(11, "White Rice", Lunch, 130, G, 150.0),
    food!(12, "Brown Rice", Lunch, 112, G, 150.0),
    food!(13, "Roti (Wheat)", Lunch, 297, Piece, 2.0),
    food!(14, "Chapati", Lunch, 297, Piece, 2.0),
    food!(15, "Naan", Lunch, 262, Piece, 1.0),
    // Curries & gravies
    food!(16, "Dal (Lentils)", Lunch, 93, G, 150.0),
    food!(17, "Paneer Curry", Lunch, 265, G, 150.0),
    food!(18, "Chicken Curry", Lunch, 180, G, 150.0),
    food!(19, "Mutton Curry", Lunch, 217, G, 150.0),
    food!(20, "Fish Curry", Lunch, 130, G, 150.0),
    food!(21, "Chole (Chickpeas)", Lunch, 164, G, 150.0),
    food!(22, "Rajma (Kidney Beans)", Lunch, 127, G, 150.0),
    food!(23, "Mixed Vegetables", Lunch, 65, G, 150.0),
    // Snacks
    food!(24, "Samosa", Snack, 252, Piece, 1.0),
    food!(25, "Pakora", Snack, 250, Piece, 3.0),
    food!(26, "Vada Pav", Snack, 286, Piece, 1.0),
    food!(27, "Chips (Potato)", Snack, 536, G, 30.0),
    food!(28, "Biscuits", Snack, 450, Piece, 4.0),
    food!(29, "Namkeen", Snack, 520, G, 30.0),
    food!(30, "Fruit Salad", Snack, 47, G, 150.0),
    food!(31, "Nuts Mix", Snack, 607, G, 30.0),
    food!(32, "Sandwich", Snack, 265, Piece, 1.0),
    // Dinner
    food!(33, "Biryani", Dinner, 200, G, 200.0),
    food!(34, "Khichdi", Dinner, 120, G, 200.0),
    food!(35, "Pulao", Dinner, 150, G, 200.0),
    food!(36, "Fried Rice", Dinner, 163, G, 200.0),
    food!(37, "Pasta", Dinner, 131, G, 150.0),
    food!(38, "Pizza", Dinner, 266, Slice, 2.0),
    food!(39, "Burger", Dinner, 295, Piece, 1.0),
    food!(40, "Grilled Chicken", Dinner, 165, G, 150.0),
    // Common additions
    food!(41, "Yogurt (Curd)", All, 60, G, 100.0),
    food!(42, "Salad", All, 20, G, 100.0),
    food!(43, "Pickle", All, 100, G, 20.0),
    food!(44, "Papad", All, 372, Piece, 1.0),
    food!(45, "Raita", All, 55, G, 100.0),
    // Drinks
    food!(46, "Tea (with sugar)", All, 30, Cup, 1.0),
    food!(47, "Coffee (with sugar)", All, 40, Cup, 1.0),
    food!(48, "Milk", All, 61, Ml, 200.0),
    food!(49, "Fresh Juice", All, 45, Ml, 200.0),
    food!(50, "Soft Drink", All, 41, Ml, 250.0),
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_grams_scaling_exact() {
        // 200 kcal per 100g, 150g serving -> 300 kcal.
        assert_eq!(calories_for(200, 150.0, QuantityUnit::G), 300);
    }

    #[test]
    fn test_unit_conversions() {
        // 1 kg at 130/100g -> 1300.
        assert_eq!(calories_for(130, 1.0, QuantityUnit::Kg), 1300);
        // 2 pieces at 58/100g, 100g each -> 116.
        assert_eq!(calories_for(58, 2.0, QuantityUnit::Piece), 116);
        // 2 slices at 266/100g -> 532.
        assert_eq!(calories_for(266, 2.0, QuantityUnit::Slice), 532);
        // 200 ml at 61/100g, 1 ml = 1 g -> 122.
        assert_eq!(calories_for(61, 200.0, QuantityUnit::Ml), 122);
        // 1 cup at 30/100g -> 30.
        assert_eq!(calories_for(30, 1.0, QuantityUnit::Cup), 30);
        // 1 bowl at 120/100g -> 120.
        assert_eq!(calories_for(120, 1.0, QuantityUnit::Bowl), 120);
    }

    #[test]
    fn test_rounding_to_nearest_calorie() {
        // 68/100g * 50g = 34.0
        assert_eq!(calories_for(68, 50.0, QuantityUnit::G), 34);
        // 536/100g * 30g = 160.8 -> 161
        assert_eq!(calories_for(536, 30.0, QuantityUnit::G), 161);
        // 357/100g * 30g = 107.1 -> 107
        assert_eq!(calories_for(357, 30.0, QuantityUnit::G), 107);
    }

    #[test]
    fn test_doubling_quantity_doubles_calories_within_rounding() {
        let foods = [(320u32, 1.5), (89, 2.0), (47, 75.0), (607, 12.5)];
        for unit in [QuantityUnit::G, QuantityUnit::Piece, QuantityUnit::Ml] {
            for (density, qty) in foods {
                let single = calories_for(density, qty, unit) as i64;
                let double = calories_for(density, qty * 2.0, unit) as i64;
                assert!((double - 2 * single).abs() <= 1);
            }
        }
    }

    #[test]
    fn test_catalog_ids_unique_and_complete() {
        let ids: HashSet<u32> = FOOD_CATALOG.iter().map(|f| f.id).collect();
        assert_eq!(ids.len(), 50);
        assert_eq!(FOOD_CATALOG.len(), 50);
        for id in 1..=50 {
            assert!(find_food(id).is_some());
        }
        assert!(find_food(51).is_none());
    }

    #[test]
    fn test_search_by_name() {
        let hits = search(Some("rice"), None);
        let names: Vec<&str> = hits.iter().map(|f| f.name).collect();
        assert_eq!(names, vec!["White Rice", "Brown Rice", "Fried Rice"]);
    }

    #[test]
    fn test_search_slot_includes_all_items() {
        let hits = search(None, Some(MealSlot::Breakfast));
        assert_eq!(hits.len(), 20);
        assert!(hits.iter().any(|f| f.name == "Tea (with sugar)"));
        assert!(hits.iter().all(|f| {
            f.category == MealSlot::Breakfast || f.category == MealSlot::All
        }));
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let hits = search(Some("PANEER"), None);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Paneer Curry");
    }
}
