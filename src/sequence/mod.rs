//! Lazy, re-iterable sequence views.
//!
//! This module provides the adapter layer underneath [`Flow`](crate::flow::Flow):
//!
//! - [`Sequence`]: a view that can produce a fresh [`Cursor`] on demand
//! - Capability traits queried by the adapters before falling back to a
//!   linear scan: [`Measurable`], [`Indexable`], [`Reversible`] and
//!   [`MembershipTestable`], plus the [`Sequence::is_distinct`] marker
//! - Native sources: `Rc<[T]>`, `Rc<RefCell<Vec<T>>>`, integer ranges
//!   (`Range` and `RangeInclusive`), hash and btree sets, and [`Empty`]
//! - Adapters: [`Calling`], [`Mapped`], [`Filtered`], [`FlatMapped`],
//!   [`Deduplicated`], [`Reversed`] and [`Sliced`]
//!
//! No adapter iterates when it is built. Every call to
//! [`Sequence::cursor`] re-derives a brand-new cursor from the wrapped
//! source, so a view can be iterated any number of times.
//!
//! # Examples
//!
//! ```rust
//! use lazyflow::sequence::{self, Sequence, View};
//! use std::rc::Rc;
//!
//! let numbers: View<i32> = Rc::new(0..10);
//! let evens = sequence::filter(&numbers, Rc::new(|element: &i32| element % 2 == 0));
//! let squares = sequence::map(&evens, Rc::new(|element: i32| element * element));
//!
//! assert_eq!(squares.cursor().collect::<Vec<_>>(), vec![0, 4, 16, 36, 64]);
//! // Views are re-iterable
//! assert_eq!(sequence::count(&*squares), 5);
//! ```

use std::rc::Rc;

mod calling;
mod distinct;
mod flat_map;
mod query;
mod reverse;
mod slice;
mod source;
mod transform;

pub use calling::{Calling, calling};
pub use distinct::{Deduplicated, DistinctCursor, distinct};
pub use flat_map::{FlatMapCursor, FlatMapped, flat_map};
pub use query::{contains, count, get};
pub use reverse::{Reversed, reverse};
pub use slice::{Slice, Sliced, slice};
pub use source::{BTreeSetCursor, Empty, HashSetCursor, LiveListCursor, empty};
pub use transform::{Filtered, Mapped, filter, map};

/// A single-use, pull-based iteration handle.
///
/// Cursors own reference-counted handles to their source, so they are
/// independent of the view that produced them.
pub type Cursor<T> = Box<dyn Iterator<Item = T>>;

/// A shared, type-erased sequence view.
pub type View<T> = Rc<dyn Sequence<T>>;

/// A view that can produce a fresh iteration cursor on demand.
///
/// `cursor` is the only required method. The `as_*` accessors expose optional
/// capabilities; the defaults report that the capability is absent, and
/// every adapter has a correct fallback for that case.
///
/// # Examples
///
/// Implementing a capability-free source:
///
/// ```rust
/// use lazyflow::sequence::{self, Cursor, Sequence};
///
/// struct Countdown(u32);
///
/// impl Sequence<u32> for Countdown {
///     fn cursor(&self) -> Cursor<u32> {
///         Box::new((0..self.0).rev())
///     }
/// }
///
/// // No `Measurable` capability: counting falls back to a linear scan.
/// assert_eq!(sequence::count(&Countdown(3)), 3);
/// assert_eq!(sequence::get(&Countdown(3), -1), Ok(0));
/// ```
pub trait Sequence<T> {
    /// Begins a brand-new iteration over the current state of the source.
    fn cursor(&self) -> Cursor<T>;

    /// Returns the definite-size capability, if the source has one.
    fn as_measurable(&self) -> Option<&dyn Measurable> {
        None
    }

    /// Returns the direct indexed access capability, if the source has one.
    fn as_indexable(&self) -> Option<&dyn Indexable<T>> {
        None
    }

    /// Returns the constant-overhead reverse iteration capability, if the
    /// source has one.
    fn as_reversible(&self) -> Option<&dyn Reversible<T>> {
        None
    }

    /// Returns the native membership test capability, if the source has one.
    fn as_membership(&self) -> Option<&dyn MembershipTestable<T>> {
        None
    }

    /// Returns `true` if the source never yields the same element twice.
    ///
    /// Sets and integer ranges report `true`, which lets
    /// [`distinct`] return them unchanged.
    fn is_distinct(&self) -> bool {
        false
    }
}

/// A source with a definite number of elements.
pub trait Measurable {
    /// Returns the number of elements the next cursor would yield.
    ///
    /// # Panics
    ///
    /// Implementations panic if the number of elements does not fit in a
    /// `usize`, as [`ExactSizeIterator::len`] does.
    fn length(&self) -> usize;
}

/// A source with direct indexed access.
pub trait Indexable<T>: Measurable {
    /// Returns the element at `index`, or `None` past the end.
    fn at(&self, index: usize) -> Option<T>;

    /// Returns the element `offset` positions before the last one, or
    /// `None` past the front. `at_back(0)` is the last element.
    ///
    /// The default resolves against [`Measurable::length`]; sources whose
    /// length may not fit in a `usize` override it.
    fn at_back(&self, offset: usize) -> Option<T> {
        let index = self.length().checked_sub(offset)?.checked_sub(1)?;
        self.at(index)
    }
}

/// A source that can iterate back to front without buffering.
pub trait Reversible<T> {
    /// Begins a brand-new iteration from the last element to the first.
    fn reverse_cursor(&self) -> Cursor<T>;
}

/// A source with a native membership test.
pub trait MembershipTestable<T> {
    /// Returns `true` if the source currently holds `element`.
    fn contains(&self, element: &T) -> bool;
}
