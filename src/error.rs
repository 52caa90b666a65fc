//! Error types for the ordered sets.
//!
//! Only one operation can fail: removing an element that is not present.
//! Every other operation is total.

/// Represents errors returned by fallible set operations.
///
/// # Examples
///
/// ```rust
/// use ringset::{OrderedSet, OrderedSetError};
///
/// let mut set: OrderedSet<i32> = [1, 2].into();
/// assert_eq!(set.remove(&3), Err(OrderedSetError::NotFound));
/// assert_eq!(
///     format!("{}", OrderedSetError::NotFound),
///     "element not found in ordered set"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderedSetError {
    /// The element passed to `remove` is not a member of the set.
    NotFound,
}

impl std::fmt::Display for OrderedSetError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound => write!(formatter, "element not found in ordered set"),
        }
    }
}

impl std::error::Error for OrderedSetError {}
