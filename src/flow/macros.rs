//! The `flow!` macro.

/// Creates a [`Flow`](crate::flow::Flow) over the listed elements, in order.
///
/// # Syntax
///
/// - `flow![]` - An empty flow
/// - `flow![a, b, c]` - A flow yielding `a`, `b`, `c`
///
/// # Examples
///
/// ```rust
/// use lazyflow::flow;
/// use lazyflow::flow::Flow;
///
/// let flow = flow![3, 1, 2];
/// assert_eq!(flow.reverse().to_list(), vec![2, 1, 3]);
///
/// let empty: Flow<i32> = flow![];
/// assert_eq!(empty.count(), 0);
/// ```
#[macro_export]
macro_rules! flow {
    () => {
        $crate::flow::Flow::empty()
    };

    ($($element:expr),+ $(,)?) => {
        $crate::flow::Flow::of([$($element),+])
    };
}
