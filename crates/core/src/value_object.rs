//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects carry no identity of their own; two with the same attribute
/// values are interchangeable. "Modifying" one means building a new value.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
