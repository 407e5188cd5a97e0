//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// A value object is defined entirely by its attribute values: two
/// [`Money`](crate::Money) amounts of 25.50 are the same amount, whereas
/// two customers named "Jane Smith" are not the same customer. Value
/// objects are immutable; "modifying" one means constructing a new value.
///
/// The bounds are the minimum the domain relies on: cheap copies
/// (`Clone`), comparison by value (`PartialEq`), and debuggability.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
