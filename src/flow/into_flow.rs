//! Conversions accepted by [`Flow::create`].

use std::cell::RefCell;
use std::collections::{BTreeSet, HashSet};
use std::hash::Hash;
use std::ops::{Range, RangeInclusive};
use std::rc::Rc;

use super::Flow;

/// Conversion into a [`Flow`].
///
/// Owned collections are moved behind an `Rc` and become fixed sources.
/// `Rc<RefCell<_>>` containers stay live: every iteration of the resulting
/// flow observes the container as it is at that moment.
///
/// # Examples
///
/// ```rust
/// use lazyflow::flow::{Flow, IntoFlow};
/// use std::collections::BTreeSet;
///
/// let flow: Flow<char> = BTreeSet::from(['c', 'a', 'b']).into_flow();
/// assert_eq!(flow.to_list(), vec!['a', 'b', 'c']);
/// ```
pub trait IntoFlow<T> {
    /// Wraps `self` in a flow.
    fn into_flow(self) -> Flow<T>;
}

impl<T: 'static> IntoFlow<T> for Flow<T> {
    fn into_flow(self) -> Flow<T> {
        self
    }
}

impl<T: Clone + 'static> IntoFlow<T> for Vec<T> {
    fn into_flow(self) -> Flow<T> {
        Flow::from_sequence(Rc::<[T]>::from(self))
    }
}

impl<T: Clone + 'static, const N: usize> IntoFlow<T> for [T; N] {
    fn into_flow(self) -> Flow<T> {
        Flow::from_sequence(Rc::<[T]>::from(self))
    }
}

impl<T: Clone + 'static> IntoFlow<T> for Rc<[T]> {
    fn into_flow(self) -> Flow<T> {
        Flow::from_sequence(self)
    }
}

impl<T: Clone + 'static> IntoFlow<T> for Rc<RefCell<Vec<T>>> {
    fn into_flow(self) -> Flow<T> {
        Flow::from_sequence(self)
    }
}

macro_rules! range_into_flow {
    ($range:ident => $($integer:ty),* $(,)?) => {
        $(
            impl IntoFlow<$integer> for $range<$integer> {
                fn into_flow(self) -> Flow<$integer> {
                    Flow::from_sequence(self)
                }
            }
        )*
    };
}

range_into_flow!(Range => i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
range_into_flow!(RangeInclusive => i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl<T: Eq + Hash + Clone + 'static> IntoFlow<T> for HashSet<T> {
    fn into_flow(self) -> Flow<T> {
        Flow::from_sequence(Rc::new(self))
    }
}

impl<T: Eq + Hash + Clone + 'static> IntoFlow<T> for Rc<HashSet<T>> {
    fn into_flow(self) -> Flow<T> {
        Flow::from_sequence(self)
    }
}

impl<T: Eq + Hash + Clone + 'static> IntoFlow<T> for Rc<RefCell<HashSet<T>>> {
    fn into_flow(self) -> Flow<T> {
        Flow::from_sequence(self)
    }
}

impl<T: Ord + Clone + 'static> IntoFlow<T> for BTreeSet<T> {
    fn into_flow(self) -> Flow<T> {
        Flow::from_sequence(Rc::new(self))
    }
}

impl<T: Ord + Clone + 'static> IntoFlow<T> for Rc<BTreeSet<T>> {
    fn into_flow(self) -> Flow<T> {
        Flow::from_sequence(self)
    }
}

impl<T: Ord + Clone + 'static> IntoFlow<T> for Rc<RefCell<BTreeSet<T>>> {
    fn into_flow(self) -> Flow<T> {
        Flow::from_sequence(self)
    }
}
