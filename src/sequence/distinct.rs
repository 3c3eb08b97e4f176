//! Deduplicating adapter.
//!
//! The seen-set hasher follows the crate's hash feature flags:
//!
//! - `fxhash`: `rustc_hash::FxHashSet`
//! - `ahash`: `ahash::AHashSet`
//! - neither: `std::collections::HashSet`

use std::hash::Hash;
use std::rc::Rc;

use super::{Cursor, Sequence, View};

#[cfg(feature = "fxhash")]
type SeenSet<T> = rustc_hash::FxHashSet<T>;

#[cfg(all(feature = "ahash", not(feature = "fxhash")))]
type SeenSet<T> = ahash::AHashSet<T>;

#[cfg(not(any(feature = "fxhash", feature = "ahash")))]
type SeenSet<T> = std::collections::HashSet<T>;

/// A view yielding each distinct element of its parent once, in
/// first-occurrence order.
pub struct Deduplicated<T> {
    parent: View<T>,
}

/// Returns a view of the distinct elements of `view`.
///
/// With `allow_short_circuit`, a view that reports
/// [`Sequence::is_distinct`] (sets, integer ranges) is returned unchanged.
/// Passing `false` always wraps, which is never wrong, only slower.
///
/// # Examples
///
/// ```rust
/// use lazyflow::sequence::{self, Sequence, View};
/// use std::rc::Rc;
///
/// let source: View<i32> = Rc::new(Rc::<[i32]>::from(vec![1, 1, 2, 1, 3, 2]));
/// let view = sequence::distinct(&source, true);
/// assert_eq!(view.cursor().collect::<Vec<_>>(), vec![1, 2, 3]);
/// ```
pub fn distinct<T>(view: &View<T>, allow_short_circuit: bool) -> View<T>
where
    T: Eq + Hash + Clone + 'static,
{
    if allow_short_circuit && view.is_distinct() {
        return Rc::clone(view);
    }
    Rc::new(Deduplicated {
        parent: Rc::clone(view),
    })
}

impl<T> Sequence<T> for Deduplicated<T>
where
    T: Eq + Hash + Clone + 'static,
{
    fn cursor(&self) -> Cursor<T> {
        Box::new(DistinctCursor {
            parent: self.parent.cursor(),
            seen: SeenSet::default(),
        })
    }
}

impl<T> std::fmt::Debug for Deduplicated<T> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.debug_struct("Deduplicated").finish_non_exhaustive()
    }
}

/// Cursor of a [`Deduplicated`] view.
///
/// The seen-set belongs to this one cursor; a new cursor starts empty.
pub struct DistinctCursor<T> {
    parent: Cursor<T>,
    seen: SeenSet<T>,
}

impl<T: Eq + Hash + Clone> Iterator for DistinctCursor<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let element = self.parent.next()?;
            if !self.seen.contains(&element) {
                self.seen.insert(element.clone());
                return Some(element);
            }
        }
    }
}

impl<T> std::fmt::Debug for DistinctCursor<T> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("DistinctCursor")
            .field("seen", &self.seen.len())
            .finish_non_exhaustive()
    }
}
