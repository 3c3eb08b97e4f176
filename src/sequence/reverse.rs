//! Reversing adapter.

use std::rc::Rc;

use smallvec::SmallVec;

use super::{Cursor, Sequence, View};

/// Number of elements buffered inline before the reverse buffer spills to
/// the heap.
const INLINE_CAPACITY: usize = 8;

/// A view iterating its parent back to front.
pub struct Reversed<T> {
    parent: View<T>,
}

/// Returns a view of `view` in reverse order.
///
/// A [`Reversible`](super::Reversible) parent is reversed natively. Any
/// other parent is drained into a buffer first, on every iteration; an
/// unbounded parent never finishes draining.
///
/// # Examples
///
/// ```rust
/// use lazyflow::sequence::{self, Sequence, View};
///
/// let source: View<i32> = sequence::calling(|| vec![1, 2, 3]);
/// let view = sequence::reverse(&source);
/// assert_eq!(view.cursor().collect::<Vec<_>>(), vec![3, 2, 1]);
/// ```
pub fn reverse<T: 'static>(view: &View<T>) -> View<T> {
    Rc::new(Reversed {
        parent: Rc::clone(view),
    })
}

impl<T: 'static> Sequence<T> for Reversed<T> {
    fn cursor(&self) -> Cursor<T> {
        if let Some(reversible) = self.parent.as_reversible() {
            return reversible.reverse_cursor();
        }
        let buffer: SmallVec<[T; INLINE_CAPACITY]> = self.parent.cursor().collect();
        Box::new(buffer.into_iter().rev())
    }
}

impl<T> std::fmt::Debug for Reversed<T> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.debug_struct("Reversed").finish_non_exhaustive()
    }
}
