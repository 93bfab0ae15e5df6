//! Testing utilities for menufind
//!
//! Small in-memory catalogs shared by the unit tests.
//!
//! Only available when compiled with `cfg(test)`.

use crate::catalog::{Catalog, CategoryGroup, EntrySource};

/// Three categories with one item each
///
/// | id | category | name             |
/// |----|----------|------------------|
/// | #0 | mains    | Margherita Pizza |
/// | #1 | starters | Caesar Salad     |
/// | #2 | desserts | Tiramisu         |
#[must_use]
pub fn sample_groups() -> Vec<CategoryGroup> {
    vec![
        CategoryGroup::new(
            "mains",
            vec![EntrySource::new(
                "Margherita Pizza",
                "Tomato, fresh mozzarella and basil",
                "$14",
            )],
        )
        .with_title("Mains"),
        CategoryGroup::new(
            "starters",
            vec![EntrySource::new(
                "Caesar Salad",
                "Romaine, parmesan, croutons",
                "$9",
            )],
        )
        .with_title("Starters"),
        CategoryGroup::new(
            "desserts",
            vec![EntrySource::new(
                "Tiramisu",
                "Espresso-soaked ladyfingers with mascarpone",
                "$8",
            )],
        )
        .with_title("Desserts"),
    ]
}

#[must_use]
pub fn sample_catalog() -> Catalog {
    Catalog::build(sample_groups())
}

/// Eight cakes followed by two items that do not mention cake
#[must_use]
pub fn dessert_catalog() -> Catalog {
    let cakes = [
        "Carrot Cake",
        "Cheesecake",
        "Chocolate Cake",
        "Lemon Drizzle Cake",
        "Red Velvet Cake",
        "Pancakes",
        "Cupcake Trio",
        "Angel Food Cake",
    ];

    let mut items: Vec<EntrySource> = cakes
        .iter()
        .enumerate()
        .map(|(i, name)| EntrySource::new(*name, "Baked in house", format!("${}", 5 + i)))
        .collect();
    items.push(EntrySource::new("Gelato", "Two scoops", "$4"));
    items.push(EntrySource::new("Fruit Bowl", "Seasonal fruit", "$5"));

    Catalog::build(vec![CategoryGroup::new("desserts", items)])
}
