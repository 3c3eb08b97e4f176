//! Element-wise transforms delegating to `Iterator::map` and
//! `Iterator::filter`.

use std::rc::Rc;

use super::{Cursor, Sequence, View};

/// A view applying a function to every element of its parent.
pub struct Mapped<T, F> {
    parent: View<T>,
    function: Rc<F>,
}

/// Returns a view of `function` applied to every element of `view`.
///
/// `function` is shared with every cursor the view hands out and is
/// expected to be pure; it runs again on each iteration.
pub fn map<T, U, F>(view: &View<T>, function: Rc<F>) -> View<U>
where
    T: 'static,
    U: 'static,
    F: Fn(T) -> U + 'static,
{
    Rc::new(Mapped {
        parent: Rc::clone(view),
        function,
    })
}

impl<T, U, F> Sequence<U> for Mapped<T, F>
where
    T: 'static,
    U: 'static,
    F: Fn(T) -> U + 'static,
{
    fn cursor(&self) -> Cursor<U> {
        let function = Rc::clone(&self.function);
        Box::new(self.parent.cursor().map(move |element| function(element)))
    }
}

impl<T, F> std::fmt::Debug for Mapped<T, F> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.debug_struct("Mapped").finish_non_exhaustive()
    }
}

/// A view keeping only the elements of its parent that satisfy a predicate.
pub struct Filtered<T, P> {
    parent: View<T>,
    predicate: Rc<P>,
}

/// Returns a view of the elements of `view` for which `predicate` holds.
pub fn filter<T, P>(view: &View<T>, predicate: Rc<P>) -> View<T>
where
    T: 'static,
    P: Fn(&T) -> bool + 'static,
{
    Rc::new(Filtered {
        parent: Rc::clone(view),
        predicate,
    })
}

impl<T, P> Sequence<T> for Filtered<T, P>
where
    T: 'static,
    P: Fn(&T) -> bool + 'static,
{
    fn cursor(&self) -> Cursor<T> {
        let predicate = Rc::clone(&self.predicate);
        Box::new(
            self.parent
                .cursor()
                .filter(move |element| predicate(element)),
        )
    }
}

impl<T, P> std::fmt::Debug for Filtered<T, P> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.debug_struct("Filtered").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;

    #[rstest]
    fn test_map_is_lazy() {
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        let source: View<i32> = Rc::new(0..5);
        let view = map(
            &source,
            Rc::new(move |element: i32| {
                counter.set(counter.get() + 1);
                element + 1
            }),
        );

        assert_eq!(calls.get(), 0);
        let mut cursor = view.cursor();
        assert_eq!(cursor.next(), Some(1));
        assert_eq!(calls.get(), 1);
    }

    #[rstest]
    fn test_map_changes_element_type() {
        let source: View<i32> = Rc::new(1..4);
        let view = map(&source, Rc::new(|element: i32| element.to_string()));
        assert_eq!(view.cursor().collect::<Vec<_>>(), vec!["1", "2", "3"]);
    }

    #[rstest]
    fn test_filter_keeps_matching_elements() {
        let source: View<i32> = Rc::new(0..10);
        let view = filter(&source, Rc::new(|element: &i32| *element <= 3));
        assert_eq!(view.cursor().collect::<Vec<_>>(), vec![0, 1, 2, 3]);
        assert_eq!(view.cursor().collect::<Vec<_>>(), vec![0, 1, 2, 3]);
    }

    #[rstest]
    fn test_transforms_have_no_capabilities() {
        let source: View<i32> = Rc::new(0..10);
        let view = filter(&source, Rc::new(|_: &i32| true));
        assert!(view.as_measurable().is_none());
        assert!(view.as_indexable().is_none());
        assert!(!view.is_distinct());
    }
}
