//! # lazyflow
//!
//! Fluent, lazily evaluated, re-iterable sequence pipelines.
//!
//! ## Overview
//!
//! A [`Flow`](flow::Flow) wraps a source (a list, a live `Rc<RefCell<Vec<T>>>`,
//! an integer range, a set, or a factory closure) and exposes chainable
//! operations that build new lazy views without touching the source:
//!
//! - **Chain operations**: `map`, `filter`, `flat_map`, `distinct`,
//!   `reverse`, `slice`, `skip`, `limit`
//! - **Terminal operations**: `get`/`first`/`last` (with negative indices),
//!   `reduce`, `fold`, `count`, `contains`, `any`, `all`, `to_list`,
//!   `to_tuple`, `to_set`, `digest`, `for_each`
//!
//! Sources that can answer a query directly (length, indexed access,
//! reverse iteration, membership) are asked directly; everything else falls
//! back to a linear scan. See [`sequence`] for the view layer.
//!
//! ## Feature Flags
//!
//! - `flow` (default): the [`flow`] facade and the [`flow!`] macro
//! - `fxhash`: deduplicate with `rustc_hash::FxHashSet`
//! - `ahash`: deduplicate with `ahash::AHashSet`
//!
//! ## Example
//!
//! ```rust
//! use lazyflow::prelude::*;
//!
//! let squares = Flow::create(0..10_i32).map(|element| element * element);
//! assert_eq!(squares.last(), Ok(81));
//! assert_eq!(squares.filter(|element| element % 2 == 1).to_list(), vec![1, 9, 25, 49, 81]);
//!
//! let letters = flow!['b', 'a', 'b', 'c'].distinct();
//! assert_eq!(letters.to_list(), vec!['b', 'a', 'c']);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports the facade, the view traits and the error types.
///
/// # Usage
///
/// ```rust
/// use lazyflow::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{EmptyFlowError, FlowError, InvalidArgumentError, OutOfRangeError};
    pub use crate::sequence::{
        Cursor, Indexable, Measurable, MembershipTestable, Reversible, Sequence, View,
    };

    #[cfg(feature = "flow")]
    pub use crate::flow;

    #[cfg(feature = "flow")]
    pub use crate::flow::{Flow, IntoFlow};
}

pub mod error;
pub mod sequence;

#[cfg(feature = "flow")]
pub mod flow;
