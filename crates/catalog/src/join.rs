//! Product join: Product → Category → User, denormalized for display.

use std::collections::HashMap;

use shelfview_core::{CategoryId, DomainError, DomainResult, Entity, ProductId, UserId};

use crate::relations::{Category, Relations, Sex, User};

/// Structured category label.
///
/// Rendered as `"{icon} - {title}"`, but filtering always goes through `title`, so
/// a title containing `" - "` is never ambiguous.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CategoryLabel {
    pub icon: String,
    pub title: String,
}

impl CategoryLabel {
    pub fn new(icon: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            icon: icon.into(),
            title: title.into(),
        }
    }
}

impl core::fmt::Display for CategoryLabel {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} - {}", self.icon, self.title)
    }
}

/// Read-only join of a product with its category and the category owner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayProduct {
    pub id: ProductId,
    pub name: String,
    pub category: CategoryLabel,
    pub owner_name: String,
    pub owner_sex: Sex,
}

impl Entity for DisplayProduct {
    type Id = ProductId;

    fn id(&self) -> Self::Id {
        self.id
    }
}

fn index_by_id<'a, T>(relation: &'static str, rows: &'a [T]) -> DomainResult<HashMap<T::Id, &'a T>>
where
    T: Entity,
    T::Id: core::fmt::Display,
{
    let mut index = HashMap::with_capacity(rows.len());
    for row in rows {
        if index.insert(row.id(), row).is_some() {
            return Err(DomainError::duplicate(relation, row.id()));
        }
    }
    Ok(index)
}

/// Join the relations into display rows, in product relation order.
///
/// Fails if any id is duplicated within its relation, or if a product's category or a
/// category's owner does not exist. Every category is checked, including categories
/// without products.
pub fn join(relations: &Relations) -> DomainResult<Vec<DisplayProduct>> {
    let users: HashMap<UserId, &User> = index_by_id("user", &relations.users)?;
    let categories: HashMap<CategoryId, &Category> =
        index_by_id("category", &relations.categories)?;
    index_by_id("product", &relations.products)?;

    for category in &relations.categories {
        if !users.contains_key(&category.owner_id) {
            return Err(DomainError::dangling(
                "category",
                category.id,
                format!("user {}", category.owner_id),
            ));
        }
    }

    let rows = relations
        .products
        .iter()
        .map(|product| {
            let category = categories.get(&product.category_id).ok_or_else(|| {
                DomainError::dangling(
                    "product",
                    product.id,
                    format!("category {}", product.category_id),
                )
            })?;
            let owner = users.get(&category.owner_id).ok_or_else(|| {
                DomainError::dangling("category", category.id, format!("user {}", category.owner_id))
            })?;

            Ok(DisplayProduct {
                id: product.id,
                name: product.name.clone(),
                category: CategoryLabel::new(category.icon.clone(), category.title.clone()),
                owner_name: owner.name.clone(),
                owner_sex: owner.sex,
            })
        })
        .collect::<DomainResult<Vec<_>>>()?;

    tracing::debug!(
        users = relations.users.len(),
        categories = relations.categories.len(),
        products = rows.len(),
        "joined product relations"
    );

    Ok(rows)
}
