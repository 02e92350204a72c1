//! Common query contract shared by the matchers

/// A location matcher: raw user text in, ordered suggestions out.
///
/// Implementors are read-only after construction, so a single instance can
/// serve concurrent searches through a shared reference.
///
/// ```rust
/// use thaigeo::{HierarchyMatcher, LocationSearch};
///
/// fn first_name<S: LocationSearch>(m: &S, q: &str) -> usize {
///     m.search(q).len()
/// }
///
/// let m = HierarchyMatcher::new();
/// assert!(first_name(&m, "Nonthaburi") <= m.limit());
/// ```
pub trait LocationSearch {
    type Item;

    /// Maximum number of suggestions a single search returns.
    fn limit(&self) -> usize;

    /// Suggestions for `query` in scan order, never more than [`limit`](Self::limit).
    ///
    /// Empty or whitespace-only queries yield no suggestions.
    fn search(&self, query: &str) -> Vec<Self::Item>;
}
