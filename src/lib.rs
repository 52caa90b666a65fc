//! # ringset
//!
//! Insertion-ordered sets built on a sentinel ring.
//!
//! ## Overview
//!
//! An ordered set holds unique elements and remembers the order in which
//! each distinct element was first added. Re-adding an element never moves
//! it, and every set operation produces its result in a well defined order.
//!
//! - [`OrderedSet`]: linear-scan membership. Elements only need `PartialEq`.
//! - [`IndexedOrderedSet`]: the same ring plus a hashed index for O(1)
//!   membership. Elements need `Clone + Hash + Eq`.
//!
//! Both types support membership, `add`/`discard`/`remove`, ordered
//! iteration, order-insensitive equality, the subset/superset/disjoint
//! predicates, and union, intersection, difference and symmetric difference
//! (also as the `|`, `&`, `-` and `^` operators).
//!
//! ## Feature Flags
//!
//! - `indexed` (default): [`IndexedOrderedSet`], backed by `rustc-hash`
//! - `tracing`: emit `tracing` events from slot management and failed removals
//! - `full`: enable all features
//!
//! ## Example
//!
//! ```rust
//! use ringset::prelude::*;
//!
//! let set_a: OrderedSet<i32> = [1, 2, 3].into();
//! let set_b: OrderedSet<i32> = [4, 3, 2].into();
//!
//! let union: Vec<i32> = (&set_a | &set_b).into_iter().collect();
//! assert_eq!(union, vec![1, 2, 3, 4]);
//!
//! // Equality ignores order
//! assert_eq!(OrderedSet::from([1, 2, 3]), OrderedSet::from([3, 2, 1]));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```rust
/// use ringset::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::OrderedSetError;
    #[cfg(feature = "indexed")]
    pub use crate::indexed::IndexedOrderedSet;
    pub use crate::ordered_set::OrderedSet;
}

mod error;
#[cfg(feature = "indexed")]
mod indexed;
mod ordered_set;
mod ring;

pub use error::OrderedSetError;
#[cfg(feature = "indexed")]
pub use indexed::IndexedOrderedSet;
pub use ordered_set::OrderedSet;
pub use ring::{IntoIter, Iter};
