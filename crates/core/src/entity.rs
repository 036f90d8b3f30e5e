//! Identity-bearing domain objects.

/// Marker + minimal interface for entities.
///
/// An entity keeps its identity while its attributes change: an order keeps
/// its id as products come and go. Identifiers here are small `Copy` values,
/// so the accessor returns them by value.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Copy + Eq + core::hash::Hash + core::fmt::Debug;

    /// The identifier this entity was created with.
    fn id(&self) -> Self::Id;
}
