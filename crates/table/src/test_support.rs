//! Fixtures shared by the unit tests of this crate.

use proptest::prelude::*;
use shelfview_catalog::{CategoryLabel, DisplayProduct, Sex};
use shelfview_core::ProductId;

pub fn display_product(id: u32, name: &str, category: &str, owner: &str) -> DisplayProduct {
    DisplayProduct {
        id: ProductId::new(id),
        name: name.to_string(),
        category: CategoryLabel::new("*", category),
        owner_name: owner.to_string(),
        owner_sex: if owner == "Anna" { Sex::Female } else { Sex::Male },
    }
}

pub fn sample_products() -> Vec<DisplayProduct> {
    vec![
        display_product(1, "Milk", "Dairy", "Anna"),
        display_product(2, "Bread", "Bakery", "Max"),
        display_product(3, "Kefir", "Dairy", "Anna"),
        display_product(4, "Bagel", "Bakery", "Max"),
        display_product(5, "Apple", "Fruits", "Roma"),
        display_product(6, "Buttermilk", "Dairy", "Anna"),
    ]
}

const TITLES: [&str; 4] = ["Dairy", "Bakery", "Fruits", "Drinks"];
const OWNERS: [&str; 3] = ["Anna", "Max", "Roma"];

/// Arbitrary product lists with unique ids and a small shared vocabulary, so that
/// filters hit and sort keys tie often.
pub fn arb_products() -> impl Strategy<Value = Vec<DisplayProduct>> {
    proptest::collection::vec(
        (
            prop_oneof![Just("Milk"), Just("milk"), Just("Bread"), Just("Ice cream"), Just("Apple")],
            0..TITLES.len(),
            0..OWNERS.len(),
        ),
        0..24,
    )
    .prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, (name, title, owner))| {
                display_product(i as u32 + 1, name, TITLES[title], OWNERS[owner])
            })
            .collect()
    })
}

pub fn arb_title() -> impl Strategy<Value = String> {
    proptest::sample::select(TITLES.to_vec()).prop_map(str::to_string)
}

pub fn arb_owner() -> impl Strategy<Value = Option<String>> {
    proptest::option::of(proptest::sample::select(OWNERS.to_vec()).prop_map(str::to_string))
}
