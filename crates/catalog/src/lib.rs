//! Catalog relations and the product join.
//!
//! This crate owns the three static relations (users, categories, products), the
//! embedded seed data, and the join that turns them into display rows. It is pure
//! domain logic apart from [`Relations::from_dir`], which reads JSON files.

pub mod join;
pub mod relations;
pub mod seed;

pub use join::{CategoryLabel, DisplayProduct, join};
pub use relations::{Category, Product, Relations, Sex, User};
