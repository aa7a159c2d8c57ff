//! Collection-based aggregates
//!
//! Each aggregate is written once and works for any [`SizedCollection`]
//! whose element type has the capabilities it asks for. Elements are visited
//! in the container's natural order and are never reordered, so results on
//! exact types match a plain left-to-right fold bit for bit.
//!
//! | Aggregate | Requires | Empty input |
//! |-----------|----------|-------------|
//! | [`sum`] | [`Addable`] | zero |
//! | [`mean`] | [`Addable`] + [`DivisibleByCount`] | zero of [`MeanT`] |
//! | [`variance`] | [`Numeric`] + [`DivisibleByCount`] | zero of [`MeanT`] |
//! | [`max_element`] | [`Comparable`] | [`Error::EmptyInput`] |
//! | [`transform_reduce`] | [`Addable`] on the mapped type | zero |

use aggregates_core::{
    Addable, Comparable, DivisibleByCount, Error, MeanT, Numeric, Promote, Result,
    SizedCollection,
};
use num_traits::Zero;

/// Sum of all elements, folded left from zero
///
/// # Examples
///
/// ```rust
/// use aggregates_reduce::sum;
///
/// assert_eq!(sum(&vec![1, 2, 3, 4]), 10);
/// assert_eq!(sum(&Vec::<f64>::new()), 0.0);
/// ```
///
/// String slices have no `+`:
///
/// ```compile_fail
/// use aggregates_reduce::sum;
///
/// let words = vec!["hola", "mundo"];
/// let _ = sum(&words);
/// ```
pub fn sum<C>(c: &C) -> C::Item
where
    C: SizedCollection + ?Sized,
    C::Item: Addable,
{
    log::trace!("sum over {} elements", c.len());
    c.iter()
        .fold(<C::Item as Zero>::zero(), |acc, x| acc + x.clone())
}

/// Arithmetic mean, accumulated in the promoted type
///
/// Integer elements produce an `f64` mean. An empty collection yields the
/// promoted type's zero rather than an error.
///
/// # Examples
///
/// ```rust
/// use aggregates_reduce::mean;
///
/// assert_eq!(mean(&vec![1, 2, 3, 4]), 2.5);
/// assert_eq!(mean(&Vec::<i32>::new()), 0.0);
/// ```
///
/// A type that can only be compared is rejected:
///
/// ```compile_fail
/// use aggregates_reduce::mean;
///
/// #[derive(Clone, PartialEq, PartialOrd)]
/// struct Rank(u32);
///
/// let _ = mean(&vec![Rank(1), Rank(2)]);
/// ```
pub fn mean<C>(c: &C) -> MeanT<C::Item>
where
    C: SizedCollection + ?Sized,
    C::Item: Addable + DivisibleByCount + Promote,
{
    let n = c.len();
    log::trace!("mean over {n} elements");
    if n == 0 {
        return <MeanT<C::Item> as Zero>::zero();
    }

    c.iter()
        .fold(<MeanT<C::Item> as Zero>::zero(), |acc, x| {
            acc + x.clone().promote()
        })
        .div_count(n)
}

/// Population variance (divides by `n`, not `n - 1`)
///
/// Two passes: the mean first, then the squared deviations from it, both in
/// the promoted type.
///
/// # Examples
///
/// ```rust
/// use aggregates_reduce::variance;
///
/// assert_eq!(variance(&vec![1, 2, 3, 4]), 1.25);
/// ```
///
/// ```compile_fail
/// use aggregates_reduce::variance;
///
/// let _ = variance(&vec![String::from("a"), String::from("b")]);
/// ```
pub fn variance<C>(c: &C) -> MeanT<C::Item>
where
    C: SizedCollection + ?Sized,
    C::Item: Numeric + DivisibleByCount + Promote,
    MeanT<C::Item>: Numeric,
{
    let n = c.len();
    log::trace!("variance over {n} elements");
    if n == 0 {
        return <MeanT<C::Item> as Zero>::zero();
    }

    let m = mean(c);
    c.iter()
        .fold(<MeanT<C::Item> as Zero>::zero(), |acc, x| {
            let d = x.clone().promote() - m.clone();
            acc + d.clone() * d
        })
        .div_count(n)
}

/// Largest element by `>`
///
/// Ties keep the earliest maximal element. This is the only collection
/// aggregate that rejects empty input.
///
/// # Examples
///
/// ```rust
/// use aggregates_reduce::max_element;
///
/// assert_eq!(max_element(&vec![3, 1, 4, 1, 5, 9, 2, 6]).unwrap(), 9);
/// assert!(max_element(&Vec::<i32>::new()).is_err());
/// ```
///
/// A type with `+` but no ordering is rejected:
///
/// ```compile_fail
/// use aggregates_reduce::max_element;
///
/// #[derive(Clone)]
/// struct Offset(i32);
///
/// impl std::ops::Add for Offset {
///     type Output = Offset;
///     fn add(self, rhs: Offset) -> Offset {
///         Offset(self.0 + rhs.0)
///     }
/// }
///
/// let _ = max_element(&vec![Offset(1), Offset(2)]);
/// ```
pub fn max_element<C>(c: &C) -> Result<C::Item>
where
    C: SizedCollection + ?Sized,
    C::Item: Comparable + Clone,
{
    let mut iter = c.iter();
    let Some(mut max) = iter.next() else {
        log::debug!("max_element called on an empty collection");
        return Err(Error::empty_input("max_element"));
    };

    for x in iter {
        if x > max {
            max = x;
        }
    }
    Ok(max.clone())
}

/// Map every element, then sum the mapped values from zero
///
/// # Examples
///
/// ```rust
/// use aggregates_reduce::transform_reduce;
///
/// assert_eq!(transform_reduce(&vec![1, 2, 3, 4], |x| x * 2), 20);
/// ```
pub fn transform_reduce<C, F, R>(c: &C, mut f: F) -> R
where
    C: SizedCollection + ?Sized,
    F: FnMut(&C::Item) -> R,
    R: Addable,
{
    log::trace!("transform_reduce over {} elements", c.len());
    c.iter().fold(R::zero(), |acc, x| acc + f(x))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::collections::{LinkedList, VecDeque};

    #[test]
    fn test_sum_integers() {
        assert_eq!(sum(&vec![1, 2, 3, 4]), 10);
        assert_eq!(sum(&[-5i64, 5, 7]), 7);
    }

    #[test]
    fn test_sum_empty_is_zero() {
        assert_eq!(sum(&Vec::<i32>::new()), 0);
        assert_eq!(sum(&Vec::<f32>::new()), 0.0);
    }

    #[test]
    fn test_sum_keeps_element_type() {
        let total: u8 = sum(&[100u8, 100, 55]);
        assert_eq!(total, 255);
    }

    #[test]
    fn test_mean_integers_promote() {
        let m: f64 = mean(&vec![1, 2, 3, 4]);
        assert_eq!(m, 2.5);
        assert_eq!(mean(&[1u32, 2]), 1.5);
    }

    #[test]
    fn test_mean_float_stays_float() {
        let m: f32 = mean(&[1.0f32, 2.0, 4.5]);
        assert_relative_eq!(m, 2.5f32);
    }

    #[test]
    fn test_mean_empty_is_zero() {
        assert_eq!(mean(&Vec::<i32>::new()), 0.0);
        assert_eq!(mean(&Vec::<f32>::new()), 0.0f32);
    }

    #[test]
    fn test_variance_is_population() {
        assert_eq!(variance(&vec![1, 2, 3, 4]), 1.25);
        assert_relative_eq!(variance(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]), 4.0);
    }

    #[test]
    fn test_variance_constant_and_empty() {
        assert_eq!(variance(&[3i16; 5]), 0.0);
        assert_eq!(variance(&Vec::<i32>::new()), 0.0);
        assert_eq!(variance(&[42.0]), 0.0);
    }

    #[test]
    fn test_max_element() {
        assert_eq!(max_element(&vec![3, 1, 4, 1, 5, 9, 2, 6]), Ok(9));
        assert_eq!(max_element(&[-2.5, -1.0, -7.0]), Ok(-1.0));
    }

    #[test]
    fn test_max_element_empty_is_error() {
        let empty: Vec<i32> = Vec::new();
        assert_eq!(max_element(&empty), Err(Error::empty_input("max_element")));
    }

    #[test]
    fn test_max_element_works_on_strings() {
        let words = vec!["pera", "uva", "manzana"];
        assert_eq!(max_element(&words), Ok("uva"));
    }

    #[test]
    fn test_max_element_keeps_first_of_ties() {
        // Ordered by key only, so equal keys compare neither greater nor less.
        #[derive(Clone, Debug, PartialEq)]
        struct Keyed(u32, &'static str);

        impl PartialOrd for Keyed {
            fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
                self.0.partial_cmp(&other.0)
            }
        }

        let data = vec![Keyed(1, "a"), Keyed(3, "first"), Keyed(3, "second"), Keyed(2, "b")];
        assert_eq!(max_element(&data).unwrap().1, "first");
    }

    #[test]
    fn test_transform_reduce() {
        assert_eq!(transform_reduce(&vec![1, 2, 3, 4], |x| x * 2), 20);
        let lengths = transform_reduce(&["ab", "cde"], |s| s.len());
        assert_eq!(lengths, 5);
    }

    #[test]
    fn test_transform_reduce_empty_is_zero() {
        let r: f64 = transform_reduce(&Vec::<i32>::new(), |&x| x as f64);
        assert_eq!(r, 0.0);
    }

    #[test]
    fn test_other_containers() {
        let list: LinkedList<i32> = [1, 2, 3, 4].into_iter().collect();
        assert_eq!(sum(&list), 10);
        assert_eq!(mean(&list), 2.5);

        let deque: VecDeque<f64> = VecDeque::from(vec![1.0, 3.0]);
        assert_eq!(variance(&deque), 1.0);
        assert_eq!(max_element(&deque), Ok(3.0));

        let slice: &[u16] = &[4, 8];
        assert_eq!(sum(slice), 12);
    }
}
