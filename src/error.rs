//! Errors returned by [`PolyList`](crate::PolyList) operations.

/// Errors returned by fallible [`PolyList`](crate::PolyList) operations.
///
/// Operations whose result is naturally optional, such as
/// [`pop_head`](crate::PolyList::pop_head) or
/// [`find_by_type`](crate::PolyList::find_by_type), return an [`Option`]
/// instead.
#[derive(Copy, Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The operation requires a non-empty list, but the list was empty.
    #[error("the list is empty")]
    Empty,

    /// No element in the list matched the requested identity or type.
    #[error("no matching element was found in the list")]
    NotFound,
}
