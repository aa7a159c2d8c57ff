//! Capability predicates for element types
//!
//! Every aggregate states what it needs from its element type through these
//! traits. Qualification is structural: a type that exposes the required
//! operators gets the capability through a blanket implementation, without
//! declaring anything. A type that lacks them is rejected when the calling
//! code is compiled.
//!
//! | Capability | Requires |
//! |------------|--------|
//! | [`Addable`] | `T + T -> T`, zero value |
//! | [`Comparable`] | `T < T`, `T > T` |
//! | [`DivisibleByCount`] | `T / usize` |
//! | [`Numeric`] | [`Addable`] + [`Comparable`] + `T - T -> T` + `T * T -> T` |
//!
//! # Examples
//!
//! ```rust
//! use aggregates_core::{Addable, Comparable, Numeric};
//!
//! fn require_numeric<T: Numeric>() {}
//!
//! require_numeric::<i32>();
//! require_numeric::<f64>();
//! ```
//!
//! Strings can be compared but not added with `+` to another `String`:
//!
//! ```compile_fail
//! use aggregates_core::Addable;
//!
//! fn require_addable<T: Addable>() {}
//!
//! require_addable::<String>();
//! ```

use num_traits::{NumCast, Zero};
use std::ops::{Mul, Sub};

/// `T + T -> T`, with a zero to start accumulation from.
///
/// The zero is part of the capability because every fold in this workspace
/// starts from a zero-initialised accumulator.
pub trait Addable: Zero + Clone {}

impl<T: Zero + Clone> Addable for T {}

/// `T < T` and `T > T`.
pub trait Comparable: PartialOrd {}

impl<T: PartialOrd> Comparable for T {}

/// Addable and Comparable, closed under subtraction and multiplication.
pub trait Numeric: Addable + Comparable + Sub<Output = Self> + Mul<Output = Self> {}

impl<T> Numeric for T where T: Addable + Comparable + Sub<Output = T> + Mul<Output = T> {}

/// Division by an element count.
///
/// The result type is left open; the aggregates only need it to be usable as
/// their own result.
pub trait DivisibleByCount: Sized {
    /// Type produced by the division
    type Output;

    /// Divide `self` by `count`
    fn div_count(self, count: usize) -> Self::Output;
}

macro_rules! impl_divisible_float {
    ($($t:ty),*) => {
        $(
            impl DivisibleByCount for $t {
                type Output = $t;

                #[inline]
                fn div_count(self, count: usize) -> $t {
                    self / count as $t
                }
            }
        )*
    };
}

macro_rules! impl_divisible_int {
    ($($t:ty),*) => {
        $(
            impl DivisibleByCount for $t {
                type Output = $t;

                /// Truncating integer division. A count beyond the range of
                /// the type always truncates to zero.
                #[inline]
                fn div_count(self, count: usize) -> $t {
                    match <$t as NumCast>::from(count) {
                        Some(n) => self / n,
                        None => 0,
                    }
                }
            }
        )*
    };
}

impl_divisible_float!(f32, f64);
impl_divisible_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
