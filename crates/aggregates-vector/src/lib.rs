//! A 3-component vector for the generic aggregates
//!
//! [`Vector3`] is a plain user-defined algebraic type. It exposes exactly the
//! operators the capability traits require, so it goes through `sum`, `mean`,
//! `variance`, `max_element` and the fixed-arity forms the same way `f64`
//! does.
//!
//! ```rust
//! use aggregates_core::{DivisibleByCount, Numeric};
//! use aggregates_vector::Vector3;
//!
//! fn require_numeric<T: Numeric + DivisibleByCount>() {}
//! require_numeric::<Vector3>();
//!
//! let v = Vector3::new(1.0, 2.0, 2.0);
//! assert_eq!(v.magnitude(), 3.0);
//! assert_eq!(v.to_string(), "(1,2,2)");
//! ```

use aggregates_core::{CommonType, DivisibleByCount, Promote};
use num_traits::{AsPrimitive, Zero};
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, AddAssign, Div, Mul, Sub};

/// Three `f64` components
///
/// Arithmetic is component-wise. Ordering is by magnitude: `a < b` when `a`
/// is strictly shorter than `b`. Two different vectors of the same length
/// are neither less nor greater than each other.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vector3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vector3 {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Euclidean length
    pub fn magnitude(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }
}

impl Add for Vector3 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl AddAssign for Vector3 {
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
        self.z += rhs.z;
    }
}

impl Sub for Vector3 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

/// Component-wise (Hadamard) product
impl Mul for Vector3 {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self::new(self.x * rhs.x, self.y * rhs.y, self.z * rhs.z)
    }
}

impl Div<usize> for Vector3 {
    type Output = Self;

    fn div(self, count: usize) -> Self::Output {
        let n = count as f64;
        Self::new(self.x / n, self.y / n, self.z / n)
    }
}

impl PartialOrd for Vector3 {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self == other {
            return Some(Ordering::Equal);
        }
        match self.magnitude().partial_cmp(&other.magnitude()) {
            Some(Ordering::Equal) => None,
            ord => ord,
        }
    }
}

/// Components print with six significant digits, in fixed or scientific
/// notation by exponent, like C's `%g`. An explicit precision (`{:.3}`)
/// prints every component with that many decimals instead.
impl fmt::Display for Vector3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(p) = f.precision() {
            return write!(f, "({:.*},{:.*},{:.*})", p, self.x, p, self.y, p, self.z);
        }
        f.write_str("(")?;
        write_general(f, self.x)?;
        f.write_str(",")?;
        write_general(f, self.y)?;
        f.write_str(",")?;
        write_general(f, self.z)?;
        f.write_str(")")
    }
}

const SIGNIFICANT_DIGITS: i32 = 6;

fn write_general(f: &mut fmt::Formatter<'_>, v: f64) -> fmt::Result {
    if v == 0.0 || !v.is_finite() {
        return write!(f, "{v}");
    }

    // Round first so a carry (9.999999 -> 1.00000e1) moves the exponent.
    let sci = format!("{:.*e}", (SIGNIFICANT_DIGITS - 1) as usize, v);
    let (mantissa, exp) = sci.split_once('e').ok_or(fmt::Error)?;
    let exp: i32 = exp.parse().map_err(|_| fmt::Error)?;

    if exp < -4 || exp >= SIGNIFICANT_DIGITS {
        let sign = if exp < 0 { '-' } else { '+' };
        write!(f, "{}e{sign}{:02}", trim_fraction(mantissa), exp.abs())
    } else {
        let decimals = (SIGNIFICANT_DIGITS - 1 - exp) as usize;
        f.write_str(trim_fraction(&format!("{v:.decimals$}")))
    }
}

fn trim_fraction(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}

impl Zero for Vector3 {
    fn zero() -> Self {
        Self::default()
    }

    fn is_zero(&self) -> bool {
        self.x == 0.0 && self.y == 0.0 && self.z == 0.0
    }
}

impl DivisibleByCount for Vector3 {
    type Output = Self;

    #[inline]
    fn div_count(self, count: usize) -> Self {
        self / count
    }
}

impl Promote for Vector3 {
    type Output = Self;

    #[inline]
    fn promote(self) -> Self {
        self
    }
}

impl CommonType<Vector3> for Vector3 {
    type Output = Vector3;
}

impl AsPrimitive<Vector3> for Vector3 {
    #[inline]
    fn as_(self) -> Vector3 {
        self
    }
}
