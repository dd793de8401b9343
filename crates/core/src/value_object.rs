//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. To "modify" one,
/// construct a new one. A validated price is a value object; a product record
/// is an [`Entity`](crate::Entity).
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
