//! Common-type unification for fixed-arity argument lists
//!
//! Before a fixed-arity aggregate folds its arguments, every argument is
//! converted to one shared type. `CommonType` gives that type for a pair;
//! longer lists fold it left to right.
//!
//! The common type of a pair is the narrowest type both convert to without
//! loss. When no such type exists among the supported primitives, the widest
//! one (`f64`) is used. `isize` and `usize` are ranked as at least 32 and at
//! most 64 bits wide, so the result never depends on the target.
//!
//! | Pair | Common type |
//! |------|-------------|
//! | `T`, `T` | `T` |
//! | same-signedness integers | the wider one |
//! | signed + unsigned, a signed type fits both | the smallest such signed type |
//! | `u64`/`usize` + signed up to 64 bits | `i128` |
//! | `u128` + any signed integer | `f64` |
//! | 8/16-bit integer + `f32` | `f32` |
//! | wider integer + `f32` | `f64` |
//! | anything + `f64` | `f64` |
//!
//! ```rust
//! use aggregates_core::Common;
//! use std::any::TypeId;
//!
//! assert_eq!(TypeId::of::<Common<i32, f64>>(), TypeId::of::<f64>());
//! assert_eq!(TypeId::of::<Common<u8, i8>>(), TypeId::of::<i16>());
//! assert_eq!(TypeId::of::<Common<u16, f32>>(), TypeId::of::<f32>());
//! assert_eq!(TypeId::of::<Common<usize, usize>>(), TypeId::of::<usize>());
//! ```

use num_traits::AsPrimitive;

/// The shared type of `Self` and `Rhs`
pub trait CommonType<Rhs> {
    /// Unified type both operands convert into
    type Output: Copy + 'static;
}

/// Shorthand for `<A as CommonType<B>>::Output`
pub type Common<A, B> = <A as CommonType<B>>::Output;

/// Convert a value into a unified type
#[inline]
pub fn unify<T, U>(value: T) -> U
where
    T: AsPrimitive<U>,
    U: Copy + 'static,
{
    value.as_()
}

macro_rules! common_self {
    ($($t:ty),*) => {
        $(
            impl CommonType<$t> for $t {
                type Output = $t;
            }
        )*
    };
}

macro_rules! common_pair {
    ($($a:ty, $b:ty => $out:ty;)*) => {
        $(
            impl CommonType<$b> for $a {
                type Output = $out;
            }

            impl CommonType<$a> for $b {
                type Output = $out;
            }
        )*
    };
}

common_self!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

common_pair! {
    // signed with signed
    i8, i16 => i16;
    i8, i32 => i32;
    i8, i64 => i64;
    i8, i128 => i128;
    i8, isize => isize;
    i16, i32 => i32;
    i16, i64 => i64;
    i16, i128 => i128;
    i16, isize => isize;
    i32, i64 => i64;
    i32, i128 => i128;
    i32, isize => isize;
    i64, i128 => i128;
    i64, isize => i64;
    i128, isize => i128;

    // unsigned with unsigned
    u8, u16 => u16;
    u8, u32 => u32;
    u8, u64 => u64;
    u8, u128 => u128;
    u8, usize => usize;
    u16, u32 => u32;
    u16, u64 => u64;
    u16, u128 => u128;
    u16, usize => usize;
    u32, u64 => u64;
    u32, u128 => u128;
    u32, usize => usize;
    u64, u128 => u128;
    u64, usize => u64;
    u128, usize => u128;

    // signed with unsigned
    i8, u8 => i16;
    i8, u16 => i32;
    i8, u32 => i64;
    i8, u64 => i128;
    i8, u128 => f64;
    i8, usize => i128;
    i16, u8 => i16;
    i16, u16 => i32;
    i16, u32 => i64;
    i16, u64 => i128;
    i16, u128 => f64;
    i16, usize => i128;
    i32, u8 => i32;
    i32, u16 => i32;
    i32, u32 => i64;
    i32, u64 => i128;
    i32, u128 => f64;
    i32, usize => i128;
    i64, u8 => i64;
    i64, u16 => i64;
    i64, u32 => i64;
    i64, u64 => i128;
    i64, u128 => f64;
    i64, usize => i128;
    i128, u8 => i128;
    i128, u16 => i128;
    i128, u32 => i128;
    i128, u64 => i128;
    i128, u128 => f64;
    i128, usize => i128;
    isize, u8 => isize;
    isize, u16 => isize;
    isize, u32 => i64;
    isize, u64 => i128;
    isize, u128 => f64;
    isize, usize => i128;

    // integers with f32
    i8, f32 => f32;
    i16, f32 => f32;
    u8, f32 => f32;
    u16, f32 => f32;
    i32, f32 => f64;
    i64, f32 => f64;
    i128, f32 => f64;
    isize, f32 => f64;
    u32, f32 => f64;
    u64, f32 => f64;
    u128, f32 => f64;
    usize, f32 => f64;

    // anything with f64
    i8, f64 => f64;
    i16, f64 => f64;
    i32, f64 => f64;
    i64, f64 => f64;
    i128, f64 => f64;
    isize, f64 => f64;
    u8, f64 => f64;
    u16, f64 => f64;
    u32, f64 => f64;
    u64, f64 => f64;
    u128, f64 => f64;
    usize, f64 => f64;
    f32, f64 => f64;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::any::TypeId;

    fn common_id<A: CommonType<B>, B>() -> TypeId {
        TypeId::of::<Common<A, B>>()
    }

    #[test]
    fn test_common_type_is_symmetric() {
        assert_eq!(common_id::<i8, u32>(), common_id::<u32, i8>());
        assert_eq!(common_id::<f32, i64>(), common_id::<i64, f32>());
        assert_eq!(common_id::<u16, u64>(), common_id::<u64, u16>());
    }

    #[test]
    fn test_lossless_widening() {
        assert_eq!(common_id::<i16, i32>(), TypeId::of::<i32>());
        assert_eq!(common_id::<u32, i32>(), TypeId::of::<i64>());
        assert_eq!(common_id::<i8, f32>(), TypeId::of::<f32>());
        assert_eq!(common_id::<i32, f32>(), TypeId::of::<f64>());
    }

    #[test]
    fn test_widest_fallback() {
        assert_eq!(common_id::<u128, i64>(), TypeId::of::<f64>());
        assert_eq!(common_id::<i8, u128>(), TypeId::of::<f64>());
        assert_eq!(common_id::<i128, u128>(), TypeId::of::<f64>());
    }

    #[test]
    fn test_u64_with_signed_widens_to_i128() {
        assert_eq!(common_id::<u64, i64>(), TypeId::of::<i128>());
        assert_eq!(common_id::<i8, u64>(), TypeId::of::<i128>());
    }

    #[test]
    fn test_pointer_width_types() {
        assert_eq!(common_id::<usize, usize>(), TypeId::of::<usize>());
        assert_eq!(common_id::<isize, isize>(), TypeId::of::<isize>());
        assert_eq!(common_id::<usize, u32>(), TypeId::of::<usize>());
        assert_eq!(common_id::<usize, u64>(), TypeId::of::<u64>());
        assert_eq!(common_id::<isize, i16>(), TypeId::of::<isize>());
        assert_eq!(common_id::<isize, i64>(), TypeId::of::<i64>());
        assert_eq!(common_id::<usize, isize>(), TypeId::of::<i128>());
        assert_eq!(common_id::<usize, f64>(), TypeId::of::<f64>());
        assert_eq!(common_id::<isize, f32>(), TypeId::of::<f64>());
    }

    #[test]
    fn test_128_bit_types() {
        assert_eq!(common_id::<i128, i128>(), TypeId::of::<i128>());
        assert_eq!(common_id::<u128, u8>(), TypeId::of::<u128>());
        assert_eq!(common_id::<i128, usize>(), TypeId::of::<i128>());
        assert_eq!(common_id::<u128, f32>(), TypeId::of::<f64>());
    }

    #[test]
    fn test_unify_converts() {
        let x: f64 = unify(3i32);
        assert_eq!(x, 3.0);
        let y: i64 = unify(u32::MAX);
        assert_eq!(y, 4_294_967_295);
    }
}
