//! Chainable pipeline facade over [`sequence`](crate::sequence) views.
//!
//! This module provides:
//!
//! - [`Flow`]: an immutable, re-iterable pipeline with lazy chain operations
//!   and eager terminal operations
//! - [`IntoFlow`]: the conversion accepted by [`Flow::create`]
//! - [`flow!`](crate::flow!): a flow over a literal list of elements
//!
//! Building a chain never touches the source. Each terminal operation
//! requests a fresh cursor, so mutations of a live source made between two
//! terminal calls are visible to the second one.
//!
//! # Examples
//!
//! ```rust
//! use lazyflow::flow::Flow;
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! let scores = Rc::new(RefCell::new(vec![72, 95, 88]));
//! let passing = Flow::create(Rc::clone(&scores)).filter(|score| *score >= 80);
//!
//! assert_eq!(passing.count(), 2);
//! scores.borrow_mut().push(91);
//! assert_eq!(passing.to_list(), vec![95, 88, 91]);
//! ```

mod into_flow;
mod macros;
mod pipeline;

pub use into_flow::IntoFlow;
pub use pipeline::Flow;
