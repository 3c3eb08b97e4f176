//! Queries that force iteration: indexed access, counting and membership.
//!
//! Each query asks for the matching capability first and falls back to a
//! linear scan over a fresh cursor.

use crate::error::OutOfRangeError;

use super::Sequence;

/// Returns the element at `index`; negative indices count from the end.
///
/// An [`Indexable`](super::Indexable) source is accessed directly, from the
/// back for a negative index. Otherwise a negative index is first resolved
/// against [`count`], which may cost a full pass, and the element is reached
/// by a linear scan.
///
/// # Errors
///
/// Returns [`OutOfRangeError`] if there is no element at `index`.
///
/// # Examples
///
/// ```rust
/// use lazyflow::error::OutOfRangeError;
/// use lazyflow::sequence::{self, View};
///
/// let view: View<i32> = sequence::calling(|| 10..13);
/// assert_eq!(sequence::get(&*view, 1), Ok(11));
/// assert_eq!(sequence::get(&*view, -1), Ok(12));
/// assert_eq!(sequence::get(&*view, -4), Err(OutOfRangeError { index: -4 }));
/// ```
pub fn get<T, S>(view: &S, index: isize) -> Result<T, OutOfRangeError>
where
    S: Sequence<T> + ?Sized,
{
    let out_of_range = OutOfRangeError { index };
    if let Some(indexable) = view.as_indexable() {
        let element = if index < 0 {
            indexable.at_back(index.unsigned_abs() - 1)
        } else {
            indexable.at(index.unsigned_abs())
        };
        return element.ok_or(out_of_range);
    }
    let position = if index < 0 {
        resolve(index, count(view)).ok_or(out_of_range)?
    } else {
        index.unsigned_abs()
    };
    view.cursor().nth(position).ok_or(out_of_range)
}

/// Converts a possibly negative index into an offset from the front.
fn resolve(index: isize, length: usize) -> Option<usize> {
    if index >= 0 {
        Some(index.unsigned_abs())
    } else {
        length.checked_sub(index.unsigned_abs())
    }
}

/// Returns the number of elements a fresh cursor would yield.
pub fn count<T, S>(view: &S) -> usize
where
    S: Sequence<T> + ?Sized,
{
    match view.as_measurable() {
        Some(measurable) => measurable.length(),
        None => view.cursor().count(),
    }
}

/// Returns `true` if the view currently yields an element equal to
/// `element`, stopping at the first match.
pub fn contains<T, S>(view: &S, element: &T) -> bool
where
    T: PartialEq,
    S: Sequence<T> + ?Sized,
{
    match view.as_membership() {
        Some(membership) => membership.contains(element),
        None => view.cursor().any(|candidate| candidate == *element),
    }
}
