//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// An entity is identified by its id, not by its field values: two
/// products with the same name and price are still distinct inventory
/// entries.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}
