//! Result-type promotion for division-producing aggregates
//!
//! Mean and variance divide an accumulated sum by a count. Dividing in an
//! integer type would truncate, so integer element types are promoted to
//! `f64` before accumulation. Floating-point types and user-defined algebraic
//! types keep their own type.
//!
//! This is the single mapping used by both the collection-based and the
//! fixed-arity aggregates.
//!
//! ```rust
//! use aggregates_core::{MeanT, Promote};
//!
//! let mean: MeanT<i32> = 7i32.promote() / 2.0;
//! assert_eq!(mean, 3.5f64);
//!
//! let same: MeanT<f32> = 1.5f32.promote();
//! assert_eq!(same, 1.5f32);
//! ```

use crate::capability::{Addable, DivisibleByCount};

/// Maps an element type to the type its mean and variance are computed in
pub trait Promote: Sized {
    /// Accumulator and result type for mean/variance
    type Output: Addable + DivisibleByCount<Output = Self::Output>;

    /// Convert an element into the promoted type
    fn promote(self) -> Self::Output;
}

/// Result type of `mean`/`variance` over elements of type `T`
pub type MeanT<T> = <T as Promote>::Output;

macro_rules! impl_promote_identity {
    ($($t:ty),*) => {
        $(
            impl Promote for $t {
                type Output = $t;

                #[inline]
                fn promote(self) -> $t {
                    self
                }
            }
        )*
    };
}

macro_rules! impl_promote_to_f64 {
    ($($t:ty),*) => {
        $(
            impl Promote for $t {
                type Output = f64;

                #[inline]
                fn promote(self) -> f64 {
                    self as f64
                }
            }
        )*
    };
}

impl_promote_identity!(f32, f64);
impl_promote_to_f64!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
