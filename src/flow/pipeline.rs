//! The `Flow<T>` facade.

use std::collections::HashSet;
use std::hash::Hash;
use std::rc::Rc;

use crate::error::{EmptyFlowError, InvalidArgumentError, OutOfRangeError};
use crate::sequence::{self, Cursor, Sequence, Slice, View};

use super::IntoFlow;

/// A fluent, lazily evaluated, re-iterable sequence pipeline.
///
/// A `Flow` holds exactly one [`View`]. Chain operations (`map`, `filter`,
/// `slice`, ...) never iterate: each returns a new `Flow` whose view rebuilds
/// the requested adapter around this flow's view every time it is iterated.
/// Terminal operations (`count`, `to_list`, `reduce`, ...) iterate once, from
/// a fresh cursor.
///
/// Flows are immutable. Cloning a flow shares its view.
///
/// # Examples
///
/// ```rust
/// use lazyflow::flow::Flow;
///
/// let words = Flow::of(["apple", "kiwi", "banana", "fig", "kiwi"]);
///
/// let short = words
///     .filter(|word| word.len() <= 4)
///     .distinct()
///     .map(str::to_uppercase);
///
/// assert_eq!(short.to_list(), vec!["KIWI", "FIG"]);
/// // The pipeline can be run again
/// assert_eq!(short.count(), 2);
/// ```
pub struct Flow<T> {
    view: View<T>,
}

// Views are reference counted with `Rc`.
static_assertions::assert_not_impl_any!(Flow<i32>: Send, Sync);
static_assertions::assert_not_impl_any!(Flow<String>: Send, Sync);

// =============================================================================
// Construction
// =============================================================================

impl<T: 'static> Flow<T> {
    /// Creates a flow over `source`.
    ///
    /// A `Flow` passed in is returned as it is.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyflow::flow::Flow;
    /// use std::cell::RefCell;
    /// use std::rc::Rc;
    ///
    /// let data = Rc::new(RefCell::new(vec![1, 2, 3]));
    /// let flow = Flow::create(Rc::clone(&data));
    /// assert_eq!(flow.count(), 3);
    ///
    /// // Flows are views, not copies
    /// data.borrow_mut().push(4);
    /// assert_eq!(flow.count(), 4);
    /// ```
    pub fn create(source: impl IntoFlow<T>) -> Self {
        source.into_flow()
    }

    /// Creates a flow over an existing view.
    pub const fn from_view(view: View<T>) -> Self {
        Self { view }
    }

    /// Creates a flow over a caller-implemented sequence.
    pub fn from_sequence<S: Sequence<T> + 'static>(sequence: S) -> Self {
        Self::from_view(Rc::new(sequence))
    }

    /// Creates a flow over a fixed, ordered list of elements.
    ///
    /// See also the [`flow!`](crate::flow!) macro.
    pub fn of<I>(elements: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Clone,
    {
        let elements: Rc<[T]> = elements.into_iter().collect();
        Self::from_view(Rc::new(elements))
    }

    /// Creates a flow that calls `factory` every time it is iterated.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyflow::flow::Flow;
    ///
    /// let flow = Flow::calling(|| (0..10).map(|element| element * 2));
    /// assert_eq!(flow.count(), 10);
    /// assert_eq!(flow.count(), 10);
    /// ```
    pub fn calling<F, I>(factory: F) -> Self
    where
        F: Fn() -> I + 'static,
        I: IntoIterator<Item = T> + 'static,
        I::IntoIter: 'static,
    {
        Self::from_view(sequence::calling(factory))
    }

    /// Creates a flow with no elements.
    pub fn empty() -> Self {
        Self::from_view(sequence::empty())
    }

    /// Returns the view this flow wraps.
    pub const fn view(&self) -> &View<T> {
        &self.view
    }

    /// Begins a fresh iteration.
    pub fn iter(&self) -> Cursor<T> {
        self.view.cursor()
    }

    /// Wraps `build` in a calling view: the adapter is rebuilt around this
    /// flow's view on every iteration of the returned flow.
    fn derive<U, B>(&self, build: B) -> Flow<U>
    where
        U: 'static,
        B: Fn(&View<T>) -> View<U> + 'static,
    {
        let view = Rc::clone(&self.view);
        Flow::calling(move || build(&view).cursor())
    }
}

// =============================================================================
// Chain operations
// =============================================================================

impl<T: 'static> Flow<T> {
    /// Reverses the flow.
    ///
    /// Sources without native reverse iteration are buffered in full on
    /// every iteration: reversing an unbounded `calling` flow never returns.
    #[must_use]
    pub fn reverse(&self) -> Self {
        self.derive(sequence::reverse)
    }

    /// Keeps every `step`-th element from `start` up to `stop` (exclusive).
    ///
    /// `start` defaults to `0`, `step` to `1`. A negative step reverses the
    /// whole flow first, then slices the reversed flow with `-step`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidArgumentError`] for a zero step or a negative
    /// `start`/`stop`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyflow::flow::Flow;
    ///
    /// let flow = Flow::create(0..10);
    /// assert_eq!(flow.slice(Some(1), Some(6), Some(2)).unwrap().to_list(), vec![1, 3, 5]);
    /// assert_eq!(flow.slice(None, Some(3), Some(-1)).unwrap().to_list(), vec![9, 8, 7]);
    /// assert!(flow.slice(None, None, Some(0)).is_err());
    /// ```
    pub fn slice(
        &self,
        start: Option<isize>,
        stop: Option<isize>,
        step: Option<isize>,
    ) -> Result<Self, InvalidArgumentError> {
        let bounds = Slice::new(start, stop, step)?;
        Ok(self.derive(move |view| sequence::slice(view, bounds)))
    }

    /// Drops the first `count` elements.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidArgumentError::NegativeCount`] if `count` is negative.
    pub fn skip(&self, count: isize) -> Result<Self, InvalidArgumentError> {
        match count {
            count if count < 0 => Err(InvalidArgumentError::NegativeCount {
                operation: "skip",
                count,
            }),
            0 => Ok(self.clone()),
            _ => {
                let bounds = Slice::from_start(count.unsigned_abs());
                Ok(self.derive(move |view| sequence::slice(view, bounds)))
            }
        }
    }

    /// Keeps at most the first `count` elements.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidArgumentError::NegativeCount`] if `count` is negative.
    pub fn limit(&self, count: isize) -> Result<Self, InvalidArgumentError> {
        match count {
            count if count < 0 => Err(InvalidArgumentError::NegativeCount {
                operation: "limit",
                count,
            }),
            0 => Ok(Self::empty()),
            _ => {
                let bounds = Slice::until(count.unsigned_abs());
                Ok(self.derive(move |view| sequence::slice(view, bounds)))
            }
        }
    }

    /// Keeps the first occurrence of every element.
    ///
    /// A flow created directly over a set or an integer range is already
    /// distinct, so its elements are passed through without a seen-set.
    #[must_use]
    pub fn distinct(&self) -> Self
    where
        T: Eq + Hash + Clone,
    {
        self.derive(|view| sequence::distinct(view, true))
    }

    /// Transforms every element.
    #[must_use]
    pub fn map<U, F>(&self, function: F) -> Flow<U>
    where
        U: 'static,
        F: Fn(T) -> U + 'static,
    {
        let function = Rc::new(function);
        self.derive(move |view| sequence::map(view, Rc::clone(&function)))
    }

    /// Expands every element into zero or more elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyflow::flow::Flow;
    ///
    /// let flow = Flow::create(1_u8..4).flat_map(|element| vec![element; usize::from(element)]);
    /// assert_eq!(flow.to_list(), vec![1, 2, 2, 3, 3, 3]);
    /// ```
    #[must_use]
    pub fn flat_map<U, I, F>(&self, function: F) -> Flow<U>
    where
        U: 'static,
        I: IntoIterator<Item = U> + 'static,
        I::IntoIter: 'static,
        F: Fn(T) -> I + 'static,
    {
        let function = Rc::new(function);
        self.derive(move |view| sequence::flat_map(view, Rc::clone(&function)))
    }

    /// Keeps the elements for which `predicate` holds.
    #[must_use]
    pub fn filter<P>(&self, predicate: P) -> Self
    where
        P: Fn(&T) -> bool + 'static,
    {
        let predicate = Rc::new(predicate);
        self.derive(move |view| sequence::filter(view, Rc::clone(&predicate)))
    }
}

// =============================================================================
// Terminal operations
// =============================================================================

impl<T: 'static> Flow<T> {
    /// Returns the element at `index`; negative indices count from the end.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfRangeError`] if there is no such element.
    pub fn get(&self, index: isize) -> Result<T, OutOfRangeError> {
        sequence::get(&*self.view, index)
    }

    /// Returns the first element.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfRangeError`] if the flow is empty.
    pub fn first(&self) -> Result<T, OutOfRangeError> {
        self.get(0)
    }

    /// Returns the last element.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfRangeError`] if the flow is empty.
    pub fn last(&self) -> Result<T, OutOfRangeError> {
        self.get(-1)
    }

    /// Returns the element at `index`, or `default` if there is none.
    pub fn get_or(&self, index: isize, default: T) -> T {
        self.get(index).unwrap_or(default)
    }

    /// Returns the first element, or `default` if the flow is empty.
    pub fn first_or(&self, default: T) -> T {
        self.first().unwrap_or(default)
    }

    /// Returns the last element, or `default` if the flow is empty.
    pub fn last_or(&self, default: T) -> T {
        self.last().unwrap_or(default)
    }

    /// Folds the elements left to right, starting from the first element.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyFlowError`] if the flow is empty. Use
    /// [`fold`](Self::fold) to supply a starting value instead.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyflow::error::EmptyFlowError;
    /// use lazyflow::flow::Flow;
    ///
    /// assert_eq!(Flow::of([1, 2, 3]).reduce(|left, right| left + right), Ok(6));
    /// assert_eq!(Flow::<i32>::empty().reduce(|left, right| left + right), Err(EmptyFlowError));
    /// ```
    pub fn reduce<F>(&self, function: F) -> Result<T, EmptyFlowError>
    where
        F: FnMut(T, T) -> T,
    {
        let mut cursor = self.iter();
        let first = cursor.next().ok_or(EmptyFlowError)?;
        Ok(cursor.fold(first, function))
    }

    /// Folds the elements left to right, starting from `start`.
    ///
    /// An empty flow returns `start` unchanged.
    pub fn fold<B, F>(&self, start: B, function: F) -> B
    where
        F: FnMut(B, T) -> B,
    {
        self.iter().fold(start, function)
    }

    /// Returns the number of elements.
    ///
    /// Sources with a definite size answer without iterating.
    pub fn count(&self) -> usize {
        sequence::count(&*self.view)
    }

    /// Returns `true` if any element equals `element`.
    pub fn contains(&self, element: &T) -> bool
    where
        T: PartialEq,
    {
        sequence::contains(&*self.view, element)
    }

    /// Returns `true` if `predicate` holds for any element, stopping at the
    /// first match.
    pub fn any<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        self.iter().any(|element| predicate(&element))
    }

    /// Returns `true` if `predicate` holds for every element, stopping at the
    /// first mismatch.
    pub fn all<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        self.iter().all(|element| predicate(&element))
    }

    /// Collects the elements into a `Vec`, in order.
    pub fn to_list(&self) -> Vec<T> {
        self.iter().collect()
    }

    /// Collects the elements into a fixed-size boxed slice, in order.
    pub fn to_tuple(&self) -> Box<[T]> {
        self.iter().collect()
    }

    /// Collects the elements into a `HashSet`.
    pub fn to_set(&self) -> HashSet<T>
    where
        T: Eq + Hash,
    {
        self.iter().collect()
    }

    /// Hands a fresh cursor to a whole-sequence aggregator and returns its
    /// result.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyflow::flow::Flow;
    ///
    /// let flow = Flow::create(1..5);
    /// assert_eq!(flow.digest(|cursor| cursor.sum::<i32>()), 10);
    /// assert_eq!(flow.digest(|cursor| cursor.max()), Some(4));
    /// ```
    pub fn digest<R, F>(&self, aggregator: F) -> R
    where
        F: FnOnce(Cursor<T>) -> R,
    {
        aggregator(self.iter())
    }

    /// Calls `action` once per element, in order.
    pub fn for_each<F>(&self, action: F)
    where
        F: FnMut(T),
    {
        self.iter().for_each(action);
    }
}

// =============================================================================
// Trait implementations
// =============================================================================

impl<T> Clone for Flow<T> {
    fn clone(&self) -> Self {
        Self {
            view: Rc::clone(&self.view),
        }
    }
}

impl<T: 'static> Default for Flow<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> std::fmt::Debug for Flow<T> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.debug_struct("Flow").finish_non_exhaustive()
    }
}

impl<T: Clone + 'static> FromIterator<T> for Flow<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::of(iter)
    }
}

impl<T: 'static> IntoIterator for &Flow<T> {
    type Item = T;
    type IntoIter = Cursor<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;

    #[rstest]
    fn test_chain_operations_do_not_iterate() {
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        let flow = Flow::calling(move || {
            counter.set(counter.get() + 1);
            0..10
        });

        let _pipeline = flow
            .map(|element| element + 1)
            .filter(|element| element % 2 == 0)
            .flat_map(|element| [element, element])
            .distinct()
            .reverse()
            .slice(Some(1), Some(4), None)
            .unwrap()
            .skip(1)
            .unwrap()
            .limit(2)
            .unwrap();

        assert_eq!(calls.get(), 0);
    }

    #[rstest]
    fn test_each_terminal_operation_iterates_once() {
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        let flow = Flow::calling(move || {
            counter.set(counter.get() + 1);
            0..10
        })
        .map(|element| element * 2);

        assert_eq!(flow.to_list().len(), 10);
        assert_eq!(calls.get(), 1);
        assert!(flow.any(|element| *element == 4));
        assert_eq!(calls.get(), 2);
    }

    #[rstest]
    fn test_derived_flows_leave_their_source_untouched() {
        let flow = Flow::of([3, 1, 2]);
        let reversed = flow.reverse();
        assert_eq!(reversed.to_list(), vec![2, 1, 3]);
        assert_eq!(flow.to_list(), vec![3, 1, 2]);
    }

    #[rstest]
    fn test_skip_zero_shares_the_view() {
        let flow = Flow::create(0..10_i32);
        let skipped = flow.skip(0).unwrap();
        assert!(Rc::ptr_eq(skipped.view(), flow.view()));
    }

    #[rstest]
    fn test_limit_zero_is_empty_without_iterating() {
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        let flow = Flow::calling(move || {
            counter.set(counter.get() + 1);
            0..10
        });
        assert_eq!(flow.limit(0).unwrap().count(), 0);
        assert_eq!(calls.get(), 0);
    }

    #[rstest]
    fn test_flow_is_iterable_by_reference() {
        let flow = Flow::of(["a", "b"]);
        let mut seen = Vec::new();
        for element in &flow {
            seen.push(element);
        }
        assert_eq!(seen, vec!["a", "b"]);
    }

    #[rstest]
    fn test_from_iterator_collects_into_flow() {
        let flow: Flow<i32> = (1..=3).collect();
        assert_eq!(flow.last(), Ok(3));
    }

    #[rstest]
    fn test_debug_does_not_print_elements() {
        let flow = Flow::of([42]);
        assert_eq!(format!("{flow:?}"), "Flow { .. }");
    }

    #[rstest]
    fn test_default_is_empty() {
        let flow: Flow<String> = Flow::default();
        assert_eq!(flow.count(), 0);
    }
}
