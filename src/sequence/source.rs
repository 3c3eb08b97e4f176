//! Native sources: fixed element slices, live lists, integer ranges
//! (half-open and inclusive), sets, and the empty view.
//!
//! Sources wrapped in `Rc<RefCell<_>>` are live: every cursor reads the
//! container's state at the moment the cursor is requested, so mutations
//! made between two iterations are visible to the second one.

use std::cell::RefCell;
use std::collections::{BTreeSet, HashSet};
use std::hash::Hash;
use std::ops::{Bound, Range, RangeInclusive};
use std::rc::Rc;

use super::{Cursor, Indexable, Measurable, MembershipTestable, Reversible, Sequence, View};

// =============================================================================
// Empty
// =============================================================================

/// A view that ends immediately, every time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Empty;

/// Returns a view with no elements.
///
/// # Examples
///
/// ```rust
/// use lazyflow::sequence::{self, Sequence, View};
///
/// let nothing: View<String> = sequence::empty();
/// assert_eq!(nothing.cursor().next(), None);
/// ```
pub fn empty<T: 'static>() -> View<T> {
    Rc::new(Empty)
}

impl<T: 'static> Sequence<T> for Empty {
    fn cursor(&self) -> Cursor<T> {
        Box::new(std::iter::empty())
    }

    fn as_measurable(&self) -> Option<&dyn Measurable> {
        Some(self)
    }

    fn as_indexable(&self) -> Option<&dyn Indexable<T>> {
        Some(self)
    }

    fn as_reversible(&self) -> Option<&dyn Reversible<T>> {
        Some(self)
    }

    fn as_membership(&self) -> Option<&dyn MembershipTestable<T>> {
        Some(self)
    }

    fn is_distinct(&self) -> bool {
        true
    }
}

impl Measurable for Empty {
    fn length(&self) -> usize {
        0
    }
}

impl<T> Indexable<T> for Empty {
    fn at(&self, _index: usize) -> Option<T> {
        None
    }
}

impl<T: 'static> Reversible<T> for Empty {
    fn reverse_cursor(&self) -> Cursor<T> {
        Box::new(std::iter::empty())
    }
}

impl<T> MembershipTestable<T> for Empty {
    fn contains(&self, _element: &T) -> bool {
        false
    }
}

// =============================================================================
// Fixed elements
// =============================================================================

impl<T: Clone + 'static> Sequence<T> for Rc<[T]> {
    fn cursor(&self) -> Cursor<T> {
        let elements = Rc::clone(self);
        Box::new((0..elements.len()).map(move |index| elements[index].clone()))
    }

    fn as_measurable(&self) -> Option<&dyn Measurable> {
        Some(self)
    }

    fn as_indexable(&self) -> Option<&dyn Indexable<T>> {
        Some(self)
    }

    fn as_reversible(&self) -> Option<&dyn Reversible<T>> {
        Some(self)
    }
}

impl<T> Measurable for Rc<[T]> {
    fn length(&self) -> usize {
        self.len()
    }
}

impl<T: Clone> Indexable<T> for Rc<[T]> {
    fn at(&self, index: usize) -> Option<T> {
        self.get(index).cloned()
    }
}

impl<T: Clone + 'static> Reversible<T> for Rc<[T]> {
    fn reverse_cursor(&self) -> Cursor<T> {
        let elements = Rc::clone(self);
        Box::new(
            (0..elements.len())
                .rev()
                .map(move |index| elements[index].clone()),
        )
    }
}

// =============================================================================
// Live list
// =============================================================================

/// Cursor over a shared, externally mutable list.
///
/// The list is borrowed only for the duration of each `next` call, so the
/// owner may push to it between pulls.
pub struct LiveListCursor<T> {
    list: Rc<RefCell<Vec<T>>>,
    index: usize,
}

impl<T: Clone> Iterator for LiveListCursor<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let element = self.list.borrow().get(self.index).cloned()?;
        self.index += 1;
        Some(element)
    }
}

impl<T> std::fmt::Debug for LiveListCursor<T> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("LiveListCursor")
            .field("index", &self.index)
            .finish_non_exhaustive()
    }
}

impl<T: Clone + 'static> Sequence<T> for Rc<RefCell<Vec<T>>> {
    fn cursor(&self) -> Cursor<T> {
        Box::new(LiveListCursor {
            list: Rc::clone(self),
            index: 0,
        })
    }

    fn as_measurable(&self) -> Option<&dyn Measurable> {
        Some(self)
    }

    fn as_indexable(&self) -> Option<&dyn Indexable<T>> {
        Some(self)
    }

    fn as_reversible(&self) -> Option<&dyn Reversible<T>> {
        Some(self)
    }
}

impl<T> Measurable for Rc<RefCell<Vec<T>>> {
    fn length(&self) -> usize {
        self.borrow().len()
    }
}

impl<T: Clone> Indexable<T> for Rc<RefCell<Vec<T>>> {
    fn at(&self, index: usize) -> Option<T> {
        self.borrow().get(index).cloned()
    }
}

impl<T: Clone + 'static> Reversible<T> for Rc<RefCell<Vec<T>>> {
    fn reverse_cursor(&self) -> Cursor<T> {
        let list = Rc::clone(self);
        let length = list.borrow().len();
        Box::new(
            (0..length)
                .rev()
                .filter_map(move |index| list.borrow().get(index).cloned()),
        )
    }
}

// =============================================================================
// Integer ranges
// =============================================================================

macro_rules! range_sequence {
    ($range:ident => $($integer:ty),* $(,)?) => {
        $(
            impl Sequence<$integer> for $range<$integer> {
                fn cursor(&self) -> Cursor<$integer> {
                    Box::new(self.clone())
                }

                fn as_measurable(&self) -> Option<&dyn Measurable> {
                    Some(self)
                }

                fn as_indexable(&self) -> Option<&dyn Indexable<$integer>> {
                    Some(self)
                }

                fn as_reversible(&self) -> Option<&dyn Reversible<$integer>> {
                    Some(self)
                }

                fn as_membership(&self) -> Option<&dyn MembershipTestable<$integer>> {
                    Some(self)
                }

                fn is_distinct(&self) -> bool {
                    true
                }
            }

            impl Measurable for $range<$integer> {
                fn length(&self) -> usize {
                    match Iterator::size_hint(self) {
                        (length, Some(upper)) if length == upper => length,
                        _ => panic!(
                            "length of {} does not fit in usize",
                            stringify!($range<$integer>)
                        ),
                    }
                }
            }

            impl Indexable<$integer> for $range<$integer> {
                fn at(&self, index: usize) -> Option<$integer> {
                    self.clone().nth(index)
                }

                fn at_back(&self, offset: usize) -> Option<$integer> {
                    self.clone().nth_back(offset)
                }
            }

            impl Reversible<$integer> for $range<$integer> {
                fn reverse_cursor(&self) -> Cursor<$integer> {
                    Box::new(self.clone().rev())
                }
            }

            impl MembershipTestable<$integer> for $range<$integer> {
                fn contains(&self, element: &$integer) -> bool {
                    <$range<$integer>>::contains(self, element)
                }
            }
        )*
    };
}

range_sequence!(Range => i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
range_sequence!(RangeInclusive => i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

// =============================================================================
// Sets
// =============================================================================

// Shared sets cannot change while a cursor holds the `Rc`, so their cursors
// clone elements on demand. Live set cursors copy the elements out when they
// are created; the borrow of a live set cannot outlive a single call.

/// Size of the first batch a [`HashSetCursor`] clones out of its set.
const FIRST_BATCH: usize = 8;

/// Cursor over a shared hash set.
///
/// Elements are cloned in batches that double in size, so pulling `k`
/// elements clones at most `2k + 8` of them and the whole walk stays linear.
pub struct HashSetCursor<T> {
    set: Rc<HashSet<T>>,
    position: usize,
    batch: std::vec::IntoIter<T>,
}

impl<T: Clone> Iterator for HashSetCursor<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(element) = self.batch.next() {
            return Some(element);
        }
        if self.position >= self.set.len() {
            return None;
        }
        let size = self.position.max(FIRST_BATCH);
        let batch: Vec<T> = self
            .set
            .iter()
            .skip(self.position)
            .take(size)
            .cloned()
            .collect();
        self.position += batch.len();
        self.batch = batch.into_iter();
        self.batch.next()
    }
}

impl<T> std::fmt::Debug for HashSetCursor<T> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("HashSetCursor")
            .field("position", &self.position)
            .finish_non_exhaustive()
    }
}

/// Cursor over a shared btree set, in either direction.
///
/// Each step looks up the neighbor of the previously yielded element, so
/// only the elements actually pulled are cloned.
pub struct BTreeSetCursor<T> {
    set: Rc<BTreeSet<T>>,
    previous: Option<T>,
    descending: bool,
}

impl<T: Ord + Clone> Iterator for BTreeSetCursor<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let element = match (&self.previous, self.descending) {
            (None, false) => self.set.first(),
            (None, true) => self.set.last(),
            (Some(previous), false) => self
                .set
                .range::<T, _>((Bound::Excluded(previous), Bound::Unbounded))
                .next(),
            (Some(previous), true) => self
                .set
                .range::<T, _>((Bound::Unbounded, Bound::Excluded(previous)))
                .next_back(),
        }
        .cloned()?;
        self.previous = Some(element.clone());
        Some(element)
    }
}

impl<T> std::fmt::Debug for BTreeSetCursor<T> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("BTreeSetCursor")
            .field("started", &self.previous.is_some())
            .field("descending", &self.descending)
            .finish_non_exhaustive()
    }
}

impl<T: Eq + Hash + Clone + 'static> Sequence<T> for Rc<HashSet<T>> {
    fn cursor(&self) -> Cursor<T> {
        Box::new(HashSetCursor {
            set: Rc::clone(self),
            position: 0,
            batch: Vec::new().into_iter(),
        })
    }

    fn as_measurable(&self) -> Option<&dyn Measurable> {
        Some(self)
    }

    fn as_membership(&self) -> Option<&dyn MembershipTestable<T>> {
        Some(self)
    }

    fn is_distinct(&self) -> bool {
        true
    }
}

impl<T> Measurable for Rc<HashSet<T>> {
    fn length(&self) -> usize {
        self.len()
    }
}

impl<T: Eq + Hash> MembershipTestable<T> for Rc<HashSet<T>> {
    fn contains(&self, element: &T) -> bool {
        (**self).contains(element)
    }
}

impl<T: Eq + Hash + Clone + 'static> Sequence<T> for Rc<RefCell<HashSet<T>>> {
    fn cursor(&self) -> Cursor<T> {
        let snapshot: Vec<T> = self.borrow().iter().cloned().collect();
        Box::new(snapshot.into_iter())
    }

    fn as_measurable(&self) -> Option<&dyn Measurable> {
        Some(self)
    }

    fn as_membership(&self) -> Option<&dyn MembershipTestable<T>> {
        Some(self)
    }

    fn is_distinct(&self) -> bool {
        true
    }
}

impl<T> Measurable for Rc<RefCell<HashSet<T>>> {
    fn length(&self) -> usize {
        self.borrow().len()
    }
}

impl<T: Eq + Hash> MembershipTestable<T> for Rc<RefCell<HashSet<T>>> {
    fn contains(&self, element: &T) -> bool {
        self.borrow().contains(element)
    }
}

impl<T: Ord + Clone + 'static> Sequence<T> for Rc<BTreeSet<T>> {
    fn cursor(&self) -> Cursor<T> {
        Box::new(BTreeSetCursor {
            set: Rc::clone(self),
            previous: None,
            descending: false,
        })
    }

    fn as_measurable(&self) -> Option<&dyn Measurable> {
        Some(self)
    }

    fn as_reversible(&self) -> Option<&dyn Reversible<T>> {
        Some(self)
    }

    fn as_membership(&self) -> Option<&dyn MembershipTestable<T>> {
        Some(self)
    }

    fn is_distinct(&self) -> bool {
        true
    }
}

impl<T> Measurable for Rc<BTreeSet<T>> {
    fn length(&self) -> usize {
        self.len()
    }
}

impl<T: Ord + Clone + 'static> Reversible<T> for Rc<BTreeSet<T>> {
    fn reverse_cursor(&self) -> Cursor<T> {
        Box::new(BTreeSetCursor {
            set: Rc::clone(self),
            previous: None,
            descending: true,
        })
    }
}

impl<T: Ord> MembershipTestable<T> for Rc<BTreeSet<T>> {
    fn contains(&self, element: &T) -> bool {
        (**self).contains(element)
    }
}

impl<T: Ord + Clone + 'static> Sequence<T> for Rc<RefCell<BTreeSet<T>>> {
    fn cursor(&self) -> Cursor<T> {
        let snapshot: Vec<T> = self.borrow().iter().cloned().collect();
        Box::new(snapshot.into_iter())
    }

    fn as_measurable(&self) -> Option<&dyn Measurable> {
        Some(self)
    }

    fn as_reversible(&self) -> Option<&dyn Reversible<T>> {
        Some(self)
    }

    fn as_membership(&self) -> Option<&dyn MembershipTestable<T>> {
        Some(self)
    }

    fn is_distinct(&self) -> bool {
        true
    }
}

impl<T> Measurable for Rc<RefCell<BTreeSet<T>>> {
    fn length(&self) -> usize {
        self.borrow().len()
    }
}

impl<T: Ord + Clone + 'static> Reversible<T> for Rc<RefCell<BTreeSet<T>>> {
    fn reverse_cursor(&self) -> Cursor<T> {
        let snapshot: Vec<T> = self.borrow().iter().rev().cloned().collect();
        Box::new(snapshot.into_iter())
    }
}

impl<T: Ord> MembershipTestable<T> for Rc<RefCell<BTreeSet<T>>> {
    fn contains(&self, element: &T) -> bool {
        self.borrow().contains(element)
    }
}
