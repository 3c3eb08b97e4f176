//! Factory-backed, re-callable views.

use std::marker::PhantomData;
use std::rc::Rc;

use super::{Cursor, Sequence, View};

/// A view that invokes its factory for every cursor request.
///
/// Nothing is cached: each iteration starts from whatever the factory
/// returns at that moment. A factory that hands out the same single-use
/// iterator every time (for example a shared, already drained one) is
/// only seen in full by the first iteration; later iterations observe it
/// exhausted.
pub struct Calling<F, I> {
    factory: F,
    _marker: PhantomData<fn() -> I>,
}

impl<F, I> Calling<F, I> {
    /// Wraps a zero-argument factory.
    pub const fn new(factory: F) -> Self {
        Self {
            factory,
            _marker: PhantomData,
        }
    }
}

/// Returns a view that calls `factory` each time it is iterated.
///
/// # Examples
///
/// ```rust
/// use lazyflow::sequence::{self, Sequence};
///
/// let view = sequence::calling(|| (0..3).map(|element| element * 10));
/// assert_eq!(view.cursor().collect::<Vec<_>>(), vec![0, 10, 20]);
/// assert_eq!(view.cursor().collect::<Vec<_>>(), vec![0, 10, 20]);
/// ```
pub fn calling<T, F, I>(factory: F) -> View<T>
where
    T: 'static,
    F: Fn() -> I + 'static,
    I: IntoIterator<Item = T> + 'static,
    I::IntoIter: 'static,
{
    Rc::new(Calling::new(factory))
}

impl<T, F, I> Sequence<T> for Calling<F, I>
where
    F: Fn() -> I,
    I: IntoIterator<Item = T>,
    I::IntoIter: 'static,
{
    fn cursor(&self) -> Cursor<T> {
        Box::new((self.factory)().into_iter())
    }
}

impl<F, I> std::fmt::Debug for Calling<F, I> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.debug_struct("Calling").finish_non_exhaustive()
    }
}
