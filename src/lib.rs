//! Generic aggregates over capability-constrained element types
//!
//! Sum, mean, population variance, maximum and map-reduce, written once and
//! usable with any element type that exposes the operators they need:
//! built-in integers and floats, or user-defined algebraic types such as
//! [`Vector3`].
//!
//! The workspace is split the same way the work is:
//!
//! - [`aggregates_core`]: capability traits, the mean/variance promotion rule, common-type
//!   unification and the error type
//! - [`aggregates_reduce`]: the collection-based and fixed-arity aggregates
//! - [`aggregates_vector`]: the [`Vector3`] demonstration type
//!
//! # Example
//!
//! ```rust
//! use numeric_aggregates::prelude::*;
//!
//! let a = vec![1, 2, 3, 4];
//! assert_eq!(sum(&a), 10);
//! assert_eq!(mean(&a), 2.5);
//! assert_eq!(transform_reduce(&a, |x| x * 2), 20);
//!
//! let v = vec![
//!     Vector3::new(1.0, 0.0, 0.0),
//!     Vector3::new(0.0, 1.0, 0.0),
//!     Vector3::new(0.0, 0.0, 1.0),
//! ];
//! assert_eq!(sum(&v), Vector3::new(1.0, 1.0, 1.0));
//! assert_eq!(max_element(&v)?, Vector3::new(1.0, 0.0, 0.0));
//!
//! assert_eq!(mean_variadic!(1, 2, 3), 2.0);
//! # Ok::<(), numeric_aggregates::Error>(())
//! ```

// Re-export workspace crates
pub use aggregates_core;
pub use aggregates_reduce;
pub use aggregates_vector;

pub use aggregates_core::{Error, Result};
pub use aggregates_reduce::{
    max_element, max_variadic, mean, mean_variadic, sum, sum_variadic, transform_reduce,
    variance, variance_variadic,
};
pub use aggregates_vector::Vector3;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        max_element, max_variadic, mean, mean_variadic, sum, sum_variadic, transform_reduce,
        variance, variance_variadic, Vector3,
    };

    // Capability traits
    pub use aggregates_core::{
        Addable, Comparable, DivisibleByCount, MeanT, Numeric, Promote, SizedCollection,
    };

    pub use crate::{Error, Result};
}
