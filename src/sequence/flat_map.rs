//! Flattening adapter.

use std::rc::Rc;

use super::{Cursor, Sequence, View};

/// A view expanding every parent element into zero or more elements.
pub struct FlatMapped<T, F> {
    parent: View<T>,
    function: Rc<F>,
}

/// Returns a view of the concatenation of `function(element)` for every
/// element of `view`, parent-major with sub-order preserved.
///
/// # Examples
///
/// ```rust
/// use lazyflow::sequence::{self, Sequence, View};
/// use std::rc::Rc;
///
/// let source: View<i32> = Rc::new(1..4);
/// let view = sequence::flat_map(&source, Rc::new(|element: i32| [element, element]));
/// assert_eq!(view.cursor().collect::<Vec<_>>(), vec![1, 1, 2, 2, 3, 3]);
/// ```
pub fn flat_map<T, U, F, I>(view: &View<T>, function: Rc<F>) -> View<U>
where
    T: 'static,
    U: 'static,
    F: Fn(T) -> I + 'static,
    I: IntoIterator<Item = U> + 'static,
    I::IntoIter: 'static,
{
    Rc::new(FlatMapped {
        parent: Rc::clone(view),
        function,
    })
}

impl<T, U, F, I> Sequence<U> for FlatMapped<T, F>
where
    T: 'static,
    U: 'static,
    F: Fn(T) -> I + 'static,
    I: IntoIterator<Item = U> + 'static,
    I::IntoIter: 'static,
{
    fn cursor(&self) -> Cursor<U> {
        Box::new(FlatMapCursor::<T, F, I> {
            parent: self.parent.cursor(),
            function: Rc::clone(&self.function),
            flattening: None,
        })
    }
}

impl<T, F> std::fmt::Debug for FlatMapped<T, F> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.debug_struct("FlatMapped").finish_non_exhaustive()
    }
}

/// Cursor of a [`FlatMapped`] view.
///
/// Holds the sub-cursor of the parent element currently being flattened;
/// it is cleared once exhausted, before the next parent element is pulled.
pub struct FlatMapCursor<T, F, I: IntoIterator> {
    parent: Cursor<T>,
    function: Rc<F>,
    flattening: Option<I::IntoIter>,
}

impl<T, F, I> Iterator for FlatMapCursor<T, F, I>
where
    F: Fn(T) -> I,
    I: IntoIterator,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(flattening) = &mut self.flattening {
                if let Some(element) = flattening.next() {
                    return Some(element);
                }
                self.flattening = None;
            }
            let element = self.parent.next()?;
            self.flattening = Some((self.function)(element).into_iter());
        }
    }
}

impl<T, F, I: IntoIterator> std::fmt::Debug for FlatMapCursor<T, F, I> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("FlatMapCursor")
            .field("flattening", &self.flattening.is_some())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sequence::calling;
    use rstest::rstest;
    use std::cell::Cell;
    use std::panic::{self, AssertUnwindSafe};

    #[rstest]
    fn test_flat_map_flattens_nested_lists() {
        let source: View<Vec<i32>> = Rc::new(Rc::<[Vec<i32>]>::from(vec![
            vec![1],
            vec![],
            vec![2, 3],
        ]));
        let view = flat_map(&source, Rc::new(|element: Vec<i32>| element));
        assert_eq!(view.cursor().collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    #[rstest]
    fn test_flat_map_skips_leading_and_trailing_empties() {
        let source: View<i32> = Rc::new(0..4);
        let view = flat_map(
            &source,
            Rc::new(|element: i32| if element % 3 == 0 { vec![] } else { vec![element] }),
        );
        assert_eq!(view.cursor().collect::<Vec<_>>(), vec![1, 2]);
    }

    #[rstest]
    fn test_flat_map_clears_sub_cursor_after_exhaustion() {
        let source: View<i32> = Rc::new(1..3);
        let view = flat_map(&source, Rc::new(|element: i32| 0..element));
        let mut cursor = view.cursor();
        assert_eq!(cursor.next(), Some(0));
        assert_eq!(cursor.next(), Some(0));
        assert_eq!(cursor.next(), Some(1));
        assert_eq!(cursor.next(), None);
        assert_eq!(cursor.next(), None);
    }

    #[rstest]
    #[should_panic(expected = "no expansion for 2")]
    fn test_flat_map_propagates_panic_from_function() {
        let source: View<i32> = Rc::new(0..5);
        let view = flat_map(
            &source,
            Rc::new(|element: i32| {
                assert!(element != 2, "no expansion for {element}");
                vec![element]
            }),
        );
        let _ = view.cursor().count();
    }

    #[rstest]
    fn test_flat_map_panic_stops_parent_pulls() {
        let pulled = Rc::new(Cell::new(0));
        let counter = Rc::clone(&pulled);
        let source = calling(move || {
            let counter = Rc::clone(&counter);
            (0..).inspect(move |_| counter.set(counter.get() + 1))
        });
        let view = flat_map(
            &source,
            Rc::new(|element: i32| {
                assert!(element != 2, "no expansion for {element}");
                [element, element]
            }),
        );

        let mut yielded = Vec::new();
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
            for element in view.cursor() {
                yielded.push(element);
            }
        }));

        assert!(outcome.is_err());
        assert_eq!(yielded, vec![0, 0, 1, 1]);
        assert_eq!(pulled.get(), 3);
    }

    #[rstest]
    fn test_flat_map_over_empty_parent() {
        let source: View<i32> = crate::sequence::empty();
        let view = flat_map(&source, Rc::new(|element: i32| vec![element; 3]));
        assert_eq!(view.cursor().count(), 0);
    }
}
