//! Static relation data: the embedded seed set and the JSON directory loader.

use std::path::Path;

use serde::de::DeserializeOwned;
use shelfview_core::{DomainError, DomainResult};

use crate::relations::Relations;

pub const USERS_FILE: &str = "users.json";
pub const CATEGORIES_FILE: &str = "categories.json";
pub const PRODUCTS_FILE: &str = "products.json";

const SEED_USERS: &str = include_str!("../data/users.json");
const SEED_CATEGORIES: &str = include_str!("../data/categories.json");
const SEED_PRODUCTS: &str = include_str!("../data/products.json");

fn decode<T: DeserializeOwned>(source: &str, raw: &str) -> DomainResult<Vec<T>> {
    serde_json::from_str(raw).map_err(|e| DomainError::data_source(format!("{source}: {e}")))
}

impl Relations {
    /// Decode the three relations from JSON arrays.
    pub fn from_json(users: &str, categories: &str, products: &str) -> DomainResult<Self> {
        Ok(Self::new(
            decode(USERS_FILE, users)?,
            decode(CATEGORIES_FILE, categories)?,
            decode(PRODUCTS_FILE, products)?,
        ))
    }

    /// The seed data compiled into the binary.
    pub fn seed() -> DomainResult<Self> {
        Self::from_json(SEED_USERS, SEED_CATEGORIES, SEED_PRODUCTS)
    }

    /// Load `users.json`, `categories.json` and `products.json` from `dir`.
    pub fn from_dir(dir: impl AsRef<Path>) -> DomainResult<Self> {
        let dir = dir.as_ref();
        let read = |name: &str| {
            let path = dir.join(name);
            std::fs::read_to_string(&path)
                .map_err(|e| DomainError::data_source(format!("{}: {e}", path.display())))
        };

        let relations = Self::from_json(
            &read(USERS_FILE)?,
            &read(CATEGORIES_FILE)?,
            &read(PRODUCTS_FILE)?,
        )?;

        tracing::debug!(
            dir = %dir.display(),
            users = relations.users.len(),
            categories = relations.categories.len(),
            products = relations.products.len(),
            "loaded relations"
        );

        Ok(relations)
    }
}
