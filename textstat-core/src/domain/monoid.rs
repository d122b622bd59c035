//! Core monoid trait and reduction helpers
//!
//! Partial statistics from independent chunks are combined through a monoid,
//! which is what allows chunks to be scanned in any order on any thread.

use smallvec::SmallVec;

/// A mathematical monoid structure that enables parallel computation
///
/// A monoid is an algebraic structure with an associative binary operation
/// and an identity element:
/// - Associativity: (a ⊕ b) ⊕ c = a ⊕ (b ⊕ c)
/// - Identity: a ⊕ identity = identity ⊕ a = a
///
/// The chunked analyzer relies on these properties to split the line sequence,
/// scan the pieces independently, and merge the partial results in any order.
pub trait Monoid: Clone + Send + Sync {
    /// Returns the identity element of the monoid
    ///
    /// The identity element must satisfy: a.combine(Self::identity()) == a
    /// for all values a of this type.
    fn identity() -> Self;

    /// Combines two elements of the monoid
    ///
    /// This operation must be associative: a.combine(b.combine(c)) == a.combine(b).combine(c)
    /// for all values a, b, c of this type.
    fn combine(&self, other: &Self) -> Self;
}

/// Extension trait for monoids that can be reduced from collections
pub trait MonoidReduce: Monoid {
    /// Reduces a collection of monoid elements to a single result
    ///
    /// Uses tree reduction to maintain O(log n) depth even with many elements.
    fn reduce<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = Self>,
    {
        // Use SmallVec to avoid heap allocation for small collections
        let mut items: SmallVec<[Self; 16]> = iter.into_iter().collect();

        // Tree reduction: combine pairs until only one remains
        while items.len() > 1 {
            let mut next_level = SmallVec::<[Self; 16]>::new();

            for pair in items.chunks(2) {
                match pair {
                    [left, right] => next_level.push(left.combine(right)),
                    [single] => next_level.push(single.clone()),
                    _ => {}
                }
            }

            items = next_level;
        }

        items.into_iter().next().unwrap_or_else(Self::identity)
    }
}
