//! Slicing adapter.
//!
//! A negative step reverses the whole parent first and then takes a
//! positive-step slice of the reversed view; `start` and `stop` count from
//! the front of the reversed view. For mixed bounds this differs from
//! two-sided slice semantics: `start = 2, stop = 5, step = -1` over `0..10`
//! yields `7, 6, 5`, where two-sided slicing yields nothing.

use std::rc::Rc;

use crate::error::InvalidArgumentError;

use super::{Cursor, Sequence, View, empty, reverse};

/// Validated slice bounds.
///
/// `start` defaults to `0`, `stop` to "until the end", `step` to `1`.
///
/// # Examples
///
/// ```rust
/// use lazyflow::error::InvalidArgumentError;
/// use lazyflow::sequence::Slice;
///
/// let bounds = Slice::new(Some(2), Some(8), Some(3)).unwrap();
/// assert_eq!(bounds.start(), 2);
/// assert_eq!(bounds.stop(), Some(8));
///
/// assert_eq!(
///     Slice::new(None, None, Some(0)),
///     Err(InvalidArgumentError::DegenerateStep)
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Slice {
    start: usize,
    stop: Option<usize>,
    step: isize,
}

impl Slice {
    /// Validates slice bounds.
    ///
    /// # Errors
    ///
    /// - [`InvalidArgumentError::DegenerateStep`] if `step` is `Some(0)`
    /// - [`InvalidArgumentError::NegativeBound`] if `start` or `stop` is
    ///   negative
    pub const fn new(
        start: Option<isize>,
        stop: Option<isize>,
        step: Option<isize>,
    ) -> Result<Self, InvalidArgumentError> {
        let step = match step {
            Some(0) => return Err(InvalidArgumentError::DegenerateStep),
            Some(step) => step,
            None => 1,
        };
        let start = match start {
            Some(start) if start < 0 => {
                return Err(InvalidArgumentError::NegativeBound {
                    bound: "start",
                    value: start,
                });
            }
            Some(start) => start.unsigned_abs(),
            None => 0,
        };
        let stop = match stop {
            Some(stop) if stop < 0 => {
                return Err(InvalidArgumentError::NegativeBound {
                    bound: "stop",
                    value: stop,
                });
            }
            Some(stop) => Some(stop.unsigned_abs()),
            None => None,
        };
        Ok(Self { start, stop, step })
    }

    /// Bounds dropping the first `start` elements.
    pub const fn from_start(start: usize) -> Self {
        Self {
            start,
            stop: None,
            step: 1,
        }
    }

    /// Bounds keeping at most the first `stop` elements.
    pub const fn until(stop: usize) -> Self {
        Self {
            start: 0,
            stop: Some(stop),
            step: 1,
        }
    }

    /// Returns the first position taken.
    pub const fn start(&self) -> usize {
        self.start
    }

    /// Returns the exclusive end position, if any.
    pub const fn stop(&self) -> Option<usize> {
        self.stop
    }

    /// Returns the step, never zero.
    pub const fn step(&self) -> isize {
        self.step
    }

    /// Returns `true` if slicing with these bounds changes nothing.
    pub const fn is_identity(&self) -> bool {
        self.start == 0 && self.stop.is_none() && self.step == 1
    }

    /// Returns `true` if these bounds select nothing from any source.
    pub const fn is_empty(&self) -> bool {
        match self.stop {
            Some(stop) => self.start >= stop,
            None => false,
        }
    }

    const fn mirrored(self) -> Self {
        Self {
            step: self.step.saturating_neg(),
            ..self
        }
    }
}

/// A view taking every `step`-th element of its parent from `start` up to
/// `stop`.
pub struct Sliced<T> {
    parent: View<T>,
    start: usize,
    stop: Option<usize>,
    step: usize,
}

/// Returns a view of `view` restricted to `bounds`.
///
/// Identity bounds return `view` itself and empty bounds return
/// [`empty`](super::empty) without touching the parent.
///
/// # Examples
///
/// ```rust
/// use lazyflow::sequence::{self, Sequence, Slice, View};
/// use std::rc::Rc;
///
/// let source: View<i32> = Rc::new(0..10);
///
/// let every_third = sequence::slice(&source, Slice::new(Some(1), Some(8), Some(3)).unwrap());
/// assert_eq!(every_third.cursor().collect::<Vec<_>>(), vec![1, 4, 7]);
///
/// let backwards = sequence::slice(&source, Slice::new(None, Some(3), Some(-1)).unwrap());
/// assert_eq!(backwards.cursor().collect::<Vec<_>>(), vec![9, 8, 7]);
/// ```
pub fn slice<T: 'static>(view: &View<T>, bounds: Slice) -> View<T> {
    if bounds.is_identity() {
        return Rc::clone(view);
    }
    if bounds.is_empty() {
        return empty();
    }
    if bounds.step < 0 {
        return slice(&reverse(view), bounds.mirrored());
    }
    Rc::new(Sliced {
        parent: Rc::clone(view),
        start: bounds.start,
        stop: bounds.stop,
        step: bounds.step.unsigned_abs(),
    })
}

impl<T: 'static> Sequence<T> for Sliced<T> {
    fn cursor(&self) -> Cursor<T> {
        let cursor = self.parent.cursor();
        let bounded: Cursor<T> = match self.stop {
            Some(stop) => Box::new(cursor.take(stop)),
            None => cursor,
        };
        Box::new(bounded.skip(self.start).step_by(self.step))
    }
}

impl<T> std::fmt::Debug for Sliced<T> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("Sliced")
            .field("start", &self.start)
            .field("stop", &self.stop)
            .field("step", &self.step)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sequence::calling;
    use rstest::rstest;
    use std::cell::Cell;

    fn collect(view: &View<i32>) -> Vec<i32> {
        view.cursor().collect()
    }

    #[rstest]
    #[case(None, None, None, (0..10).collect())]
    #[case(None, None, Some(1), (0..10).collect())]
    #[case(Some(5), Some(2), None, vec![])]
    #[case(Some(3), None, None, (3..10).collect())]
    #[case(None, Some(4), None, vec![0, 1, 2, 3])]
    #[case(Some(1), Some(9), Some(2), vec![1, 3, 5, 7])]
    #[case(Some(8), Some(100), None, vec![8, 9])]
    #[case(Some(20), None, None, vec![])]
    #[case(None, None, Some(-1), (0..10).rev().collect())]
    #[case(None, None, Some(-3), vec![9, 6, 3, 0])]
    #[case(Some(2), Some(5), Some(-1), vec![7, 6, 5])]
    fn test_slice_over_list(
        #[case] start: Option<isize>,
        #[case] stop: Option<isize>,
        #[case] step: Option<isize>,
        #[case] expected: Vec<i32>,
    ) {
        let source: View<i32> = Rc::new(Rc::<[i32]>::from((0..10).collect::<Vec<_>>()));
        let bounds = Slice::new(start, stop, step).unwrap();
        assert_eq!(collect(&slice(&source, bounds)), expected);
    }

    #[rstest]
    fn test_slice_identity_returns_same_view() {
        let source: View<i32> = Rc::new(0..10);
        let view = slice(&source, Slice::new(None, None, None).unwrap());
        assert!(Rc::ptr_eq(&view, &source));
    }

    #[rstest]
    fn test_slice_empty_bounds_never_iterate() {
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        let source = calling(move || {
            counter.set(counter.get() + 1);
            0..10
        });
        let view = slice(&source, Slice::new(Some(5), Some(2), None).unwrap());
        assert_eq!(view.cursor().count(), 0);
        assert_eq!(calls.get(), 0);
    }

    #[rstest]
    fn test_slice_stops_pulling_at_stop() {
        let pulled = Rc::new(Cell::new(0));
        let counter = Rc::clone(&pulled);
        let source = calling(move || {
            let counter = Rc::clone(&counter);
            (0..).inspect(move |_| counter.set(counter.get() + 1))
        });
        let view = slice(&source, Slice::until(3));
        assert_eq!(view.cursor().collect::<Vec<i32>>(), vec![0, 1, 2]);
        assert_eq!(pulled.get(), 3);
    }

    #[rstest]
    #[case(Some(0), InvalidArgumentError::DegenerateStep)]
    fn test_slice_rejects_zero_step(
        #[case] step: Option<isize>,
        #[case] expected: InvalidArgumentError,
    ) {
        assert_eq!(Slice::new(None, None, step), Err(expected));
    }

    #[rstest]
    fn test_slice_rejects_negative_bounds() {
        assert_eq!(
            Slice::new(Some(-1), None, None),
            Err(InvalidArgumentError::NegativeBound {
                bound: "start",
                value: -1
            })
        );
        assert_eq!(
            Slice::new(None, Some(-2), None),
            Err(InvalidArgumentError::NegativeBound {
                bound: "stop",
                value: -2
            })
        );
    }

    #[rstest]
    fn test_mirrored_step_never_overflows() {
        let bounds = Slice::new(None, None, Some(isize::MIN)).unwrap();
        assert_eq!(bounds.mirrored().step(), isize::MAX);
    }
}
