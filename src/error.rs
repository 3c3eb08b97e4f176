//! Error types for flows and sequence views.
//!
//! Each failure mode has its own type so that an operation only promises the
//! errors it can actually produce:
//!
//! - [`OutOfRangeError`]: indexed access with no element at that index
//! - [`EmptyFlowError`]: unseeded reduction over an empty flow
//! - [`InvalidArgumentError`]: rejected arguments to `skip`, `limit` or `slice`
//!
//! [`FlowError`] unifies them for callers that mix operations and want to
//! propagate with `?`.

/// Represents an indexed access beyond the bounds of a sequence.
///
/// # Examples
///
/// ```rust
/// use lazyflow::error::OutOfRangeError;
///
/// let error = OutOfRangeError { index: -4 };
/// assert_eq!(format!("{error}"), "index -4 is out of range");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutOfRangeError {
    /// The index as the caller passed it, before negative-index resolution.
    pub index: isize,
}

impl std::fmt::Display for OutOfRangeError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "index {} is out of range", self.index)
    }
}

impl std::error::Error for OutOfRangeError {}

/// Represents an operation that needs at least one element but found none.
///
/// Raised by an unseeded `reduce` over an empty flow. A seeded reduction
/// (`fold`) never raises it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyFlowError;

impl std::fmt::Display for EmptyFlowError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "flow is empty, and no initial value was given")
    }
}

impl std::error::Error for EmptyFlowError {}

/// Represents an argument rejected when a pipeline stage is built.
///
/// # Examples
///
/// ```rust
/// use lazyflow::error::InvalidArgumentError;
///
/// let error = InvalidArgumentError::NegativeCount {
///     operation: "skip",
///     count: -1,
/// };
/// assert_eq!(format!("{error}"), "skip: count must not be negative, got -1");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidArgumentError {
    /// `skip` or `limit` was given a negative count.
    NegativeCount {
        /// The operation that rejected the count.
        operation: &'static str,
        /// The rejected count.
        count: isize,
    },
    /// A slice step of zero.
    DegenerateStep,
    /// A negative slice start or stop.
    NegativeBound {
        /// Either `"start"` or `"stop"`.
        bound: &'static str,
        /// The rejected value.
        value: isize,
    },
}

impl std::fmt::Display for InvalidArgumentError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NegativeCount { operation, count } => write!(
                formatter,
                "{operation}: count must not be negative, got {count}"
            ),
            Self::DegenerateStep => write!(formatter, "slice: step cannot be zero"),
            Self::NegativeBound { bound, value } => write!(
                formatter,
                "slice: {bound} must not be negative, got {value}"
            ),
        }
    }
}

impl std::error::Error for InvalidArgumentError {}

/// Represents any error raised by this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowError {
    /// Indexed access beyond bounds.
    OutOfRange(OutOfRangeError),
    /// Unseeded reduction over an empty flow.
    EmptyFlow(EmptyFlowError),
    /// A pipeline stage was built with a rejected argument.
    InvalidArgument(InvalidArgumentError),
}

impl std::fmt::Display for FlowError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OutOfRange(error) => write!(formatter, "{error}"),
            Self::EmptyFlow(error) => write!(formatter, "{error}"),
            Self::InvalidArgument(error) => write!(formatter, "{error}"),
        }
    }
}

impl std::error::Error for FlowError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::OutOfRange(error) => Some(error),
            Self::EmptyFlow(error) => Some(error),
            Self::InvalidArgument(error) => Some(error),
        }
    }
}

impl From<OutOfRangeError> for FlowError {
    fn from(error: OutOfRangeError) -> Self {
        Self::OutOfRange(error)
    }
}

impl From<EmptyFlowError> for FlowError {
    fn from(error: EmptyFlowError) -> Self {
        Self::EmptyFlow(error)
    }
}

impl From<InvalidArgumentError> for FlowError {
    fn from(error: InvalidArgumentError) -> Self {
        Self::InvalidArgument(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::error::Error;

    #[rstest]
    fn test_out_of_range_error_display() {
        let error = OutOfRangeError { index: 10 };
        assert_eq!(format!("{error}"), "index 10 is out of range");
    }

    #[rstest]
    fn test_empty_flow_error_display() {
        assert_eq!(
            format!("{EmptyFlowError}"),
            "flow is empty, and no initial value was given"
        );
    }

    #[rstest]
    #[case(
        InvalidArgumentError::NegativeCount { operation: "limit", count: -3 },
        "limit: count must not be negative, got -3"
    )]
    #[case(InvalidArgumentError::DegenerateStep, "slice: step cannot be zero")]
    #[case(
        InvalidArgumentError::NegativeBound { bound: "stop", value: -2 },
        "slice: stop must not be negative, got -2"
    )]
    fn test_invalid_argument_error_display(
        #[case] error: InvalidArgumentError,
        #[case] expected: &str,
    ) {
        assert_eq!(format!("{error}"), expected);
    }

    #[rstest]
    fn test_flow_error_display_delegates() {
        let error = FlowError::from(OutOfRangeError { index: -1 });
        assert_eq!(format!("{error}"), "index -1 is out of range");
    }

    #[rstest]
    fn test_flow_error_from_conversions() {
        assert_eq!(
            FlowError::from(EmptyFlowError),
            FlowError::EmptyFlow(EmptyFlowError)
        );
        assert_eq!(
            FlowError::from(InvalidArgumentError::DegenerateStep),
            FlowError::InvalidArgument(InvalidArgumentError::DegenerateStep)
        );
    }

    #[rstest]
    fn test_flow_error_source_is_inner_error() {
        let error = FlowError::from(EmptyFlowError);
        let source = error.source().map(ToString::to_string);
        assert_eq!(
            source.as_deref(),
            Some("flow is empty, and no initial value was given")
        );
    }

    #[rstest]
    fn test_leaf_errors_have_no_source() {
        assert!(OutOfRangeError { index: 0 }.source().is_none());
        assert!(EmptyFlowError.source().is_none());
        assert!(InvalidArgumentError::DegenerateStep.source().is_none());
    }
}
