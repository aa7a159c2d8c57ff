//! Core traits and types for generic aggregates
//!
//! This crate is the capability layer: it classifies element types by the
//! operations they expose and maps them to the types their aggregates are
//! computed in. It performs no computation of its own.
//!
//! # Architecture Overview
//!
//! - [`capability`]: the [`Addable`], [`Comparable`], [`DivisibleByCount`] and
//!   [`Numeric`] predicates, checked as trait bounds at build time
//! - [`promote`]: the [`MeanT`] promotion rule for mean and variance
//! - [`common`]: pairwise [`CommonType`] unification for fixed-arity lists
//! - [`collection`]: the [`SizedCollection`] container abstraction
//! - [`error`]: the single runtime error, empty input to `max_element`
//!
//! # Example
//!
//! ```rust
//! use aggregates_core::{Numeric, Promote, SizedCollection};
//!
//! fn describe<C>(c: &C) -> usize
//! where
//!     C: SizedCollection + ?Sized,
//!     C::Item: Numeric + Promote,
//! {
//!     c.len()
//! }
//!
//! assert_eq!(describe(&vec![1, 2, 3]), 3);
//! ```

pub mod capability;
pub mod collection;
pub mod common;
pub mod error;
pub mod promote;

// Re-export core types
pub use error::{Error, Result};

pub use capability::{Addable, Comparable, DivisibleByCount, Numeric};
pub use collection::SizedCollection;
pub use common::{unify, Common, CommonType};
pub use promote::{MeanT, Promote};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
