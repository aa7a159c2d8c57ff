//! Fixed-arity aggregates
//!
//! The same aggregates as [`crate::collection`], over an argument list whose
//! length is fixed at build time. Arguments may have different types as long
//! as they unify: the list is converted to the left-to-right fold of the
//! pairwise [`CommonType`] before anything is computed.
//!
//! Argument lists are tuples of one to twelve elements. The
//! [`sum_variadic!`](crate::sum_variadic), [`mean_variadic!`](crate::mean_variadic),
//! [`variance_variadic!`](crate::variance_variadic) and
//! [`max_variadic!`](crate::max_variadic) macros build the tuple and reject an
//! empty argument list:
//!
//! ```compile_fail
//! use aggregates_reduce::sum_variadic;
//!
//! let _ = sum_variadic!();
//! ```
//!
//! Because a list is never empty, none of these aggregates can fail.

use aggregates_core::{
    unify, Addable, CommonType, Comparable, DivisibleByCount, MeanT, Numeric, Promote,
};
use num_traits::{AsPrimitive, Zero};

/// A non-empty, fixed-length argument list that unifies to one type
pub trait ArgList {
    /// Type every argument is converted to
    type Common: Copy + 'static;

    /// All arguments after the first, unified
    type Tail: AsRef<[Self::Common]>;

    /// Number of arguments
    const LEN: usize;

    /// Convert every argument to [`ArgList::Common`], split into the first
    /// argument and the rest
    fn into_common(self) -> (Self::Common, Self::Tail);
}

type Unified<P, Z> = <<P as ArgList>::Common as CommonType<Z>>::Output;

impl<A> ArgList for (A,)
where
    A: CommonType<A> + AsPrimitive<<A as CommonType<A>>::Output>,
{
    type Common = <A as CommonType<A>>::Output;
    type Tail = [Self::Common; 0];
    const LEN: usize = 1;

    #[inline]
    fn into_common(self) -> (Self::Common, Self::Tail) {
        (unify::<_, Self::Common>(self.0), [])
    }
}

macro_rules! impl_arg_list {
    ($len:literal; $prefix:ty; $($p:ident $pi:tt),+; $last:ident $li:tt) => {
        impl<$($p,)+ $last> ArgList for ($($p,)+ $last,)
        where
            $prefix: ArgList,
            <$prefix as ArgList>::Common: CommonType<$last>,
            $($p: AsPrimitive<Unified<$prefix, $last>>,)+
            $last: AsPrimitive<Unified<$prefix, $last>>,
        {
            type Common = Unified<$prefix, $last>;
            type Tail = [Self::Common; $len - 1];
            const LEN: usize = $len;

            #[inline]
            fn into_common(self) -> (Self::Common, Self::Tail) {
                let [head, tail @ ..] = [
                    $(unify::<_, Self::Common>(self.$pi),)+
                    unify::<_, Self::Common>(self.$li),
                ];
                (head, tail)
            }
        }
    };
}

impl_arg_list!(2; (A,); A 0; B 1);
impl_arg_list!(3; (A, B); A 0, B 1; C 2);
impl_arg_list!(4; (A, B, C); A 0, B 1, C 2; D 3);
impl_arg_list!(5; (A, B, C, D); A 0, B 1, C 2, D 3; E 4);
impl_arg_list!(6; (A, B, C, D, E); A 0, B 1, C 2, D 3, E 4; F 5);
impl_arg_list!(7; (A, B, C, D, E, F); A 0, B 1, C 2, D 3, E 4, F 5; G 6);
impl_arg_list!(8; (A, B, C, D, E, F, G); A 0, B 1, C 2, D 3, E 4, F 5, G 6; H 7);
impl_arg_list!(9; (A, B, C, D, E, F, G, H); A 0, B 1, C 2, D 3, E 4, F 5, G 6, H 7; I 8);
impl_arg_list!(10; (A, B, C, D, E, F, G, H, I); A 0, B 1, C 2, D 3, E 4, F 5, G 6, H 7, I 8; J 9);
impl_arg_list!(11; (A, B, C, D, E, F, G, H, I, J); A 0, B 1, C 2, D 3, E 4, F 5, G 6, H 7, I 8, J 9; K 10);
impl_arg_list!(12; (A, B, C, D, E, F, G, H, I, J, K); A 0, B 1, C 2, D 3, E 4, F 5, G 6, H 7, I 8, J 9, K 10; L 11);

/// Left fold with `+`, starting from the first argument
#[inline]
pub fn sum<L>(args: L) -> L::Common
where
    L: ArgList,
    L::Common: Addable,
{
    let (head, tail) = args.into_common();
    tail.as_ref().iter().fold(head, |acc, &x| acc + x)
}

/// Mean in the promoted type, divided by the argument count
#[inline]
pub fn mean<L>(args: L) -> MeanT<L::Common>
where
    L: ArgList,
    L::Common: Addable + Promote,
{
    let (head, tail) = args.into_common();
    promoted_mean(head, tail.as_ref(), L::LEN)
}

/// Population variance in the promoted type
///
/// Integer lists are computed in `f64`, everything else in the common type.
#[inline]
pub fn variance<L>(args: L) -> MeanT<L::Common>
where
    L: ArgList,
    L::Common: Numeric + Promote,
    MeanT<L::Common>: Numeric,
{
    let (head, tail) = args.into_common();
    let tail = tail.as_ref();
    let m = promoted_mean(head, tail, L::LEN);

    std::iter::once(&head)
        .chain(tail)
        .fold(<MeanT<L::Common> as Zero>::zero(), |acc, &x| {
            let d = x.promote() - m.clone();
            acc + d.clone() * d
        })
        .div_count(L::LEN)
}

/// Largest argument by `>`; ties keep the earliest
#[inline]
pub fn max<L>(args: L) -> L::Common
where
    L: ArgList,
    L::Common: Comparable,
{
    let (head, tail) = args.into_common();
    tail.as_ref()
        .iter()
        .fold(head, |max, &x| if x > max { x } else { max })
}

fn promoted_mean<T: Promote + Copy>(head: T, tail: &[T], count: usize) -> MeanT<T> {
    tail.iter()
        .fold(head.promote(), |acc, &x| acc + x.promote())
        .div_count(count)
}

/// Sum of one or more arguments, unified to their common type
///
/// ```rust
/// use aggregates_reduce::sum_variadic;
///
/// assert_eq!(sum_variadic!(1, 2, 3), 6);
/// ```
#[macro_export]
macro_rules! sum_variadic {
    ($($arg:expr),+ $(,)?) => {
        $crate::variadic::sum(($($arg,)+))
    };
}

/// Mean of one or more arguments; integer lists produce `f64`
///
/// ```rust
/// use aggregates_reduce::mean_variadic;
///
/// assert_eq!(mean_variadic!(1, 2, 3), 2.0);
/// ```
#[macro_export]
macro_rules! mean_variadic {
    ($($arg:expr),+ $(,)?) => {
        $crate::variadic::mean(($($arg,)+))
    };
}

/// Population variance of one or more arguments
///
/// ```rust
/// use aggregates_reduce::variance_variadic;
///
/// assert_eq!(variance_variadic!(1, 2, 3), 2.0 / 3.0);
/// ```
#[macro_export]
macro_rules! variance_variadic {
    ($($arg:expr),+ $(,)?) => {
        $crate::variadic::variance(($($arg,)+))
    };
}

/// Largest of one or more arguments, unified to their common type
///
/// ```rust
/// use aggregates_reduce::max_variadic;
///
/// assert_eq!(max_variadic!(1, 2.5, 3), 3.0);
/// ```
#[macro_export]
macro_rules! max_variadic {
    ($($arg:expr),+ $(,)?) => {
        $crate::variadic::max(($($arg,)+))
    };
}
