//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// Every relation row (user, category, product) and the joined display row is an
/// entity: two rows with the same id are the same record.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Copy + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> Self::Id;
}
