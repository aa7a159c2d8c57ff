//! Generic aggregates over capability-constrained element types
//!
//! This crate is the algorithm layer. Every aggregate is written once and
//! states its requirements as capability bounds from [`aggregates_core`], so
//! an element type without the needed operations is rejected when the
//! calling code is compiled.
//!
//! - [`collection`]: [`sum`], [`mean`], [`variance`], [`max_element`] and
//!   [`transform_reduce`] over any [`SizedCollection`]
//! - [`variadic`]: the fixed-arity forms, reached through
//!   [`sum_variadic!`], [`mean_variadic!`], [`variance_variadic!`] and
//!   [`max_variadic!`]
//!
//! # Example
//!
//! ```rust
//! use aggregates_reduce::{max_element, mean, sum, variance, max_variadic};
//!
//! let data = vec![1, 2, 3, 4];
//! assert_eq!(sum(&data), 10);
//! assert_eq!(mean(&data), 2.5);
//! assert_eq!(variance(&data), 1.25);
//! assert_eq!(max_element(&data).unwrap(), 4);
//!
//! assert_eq!(max_variadic!(1, 2.5, 3), 3.0);
//! ```

pub mod collection;
pub mod variadic;

pub use aggregates_core::{Error, MeanT, Result, SizedCollection};
pub use collection::{max_element, mean, sum, transform_reduce, variance};
pub use variadic::ArgList;
