//! Mixed float / big-integer comparison
//!
//! Thresholds and candidates may each be a native float or an
//! arbitrary-precision integer. Comparison is by mathematical value, so
//! `Numeric::from(5) < Numeric::from(BigInt::from(6))` holds without any
//! lossy coercion. Unordered pairs (NaN on either side) make every relational
//! operator return false, which the range checks rely on.

use std::cmp::Ordering;
use std::fmt;

use num_bigint::BigInt;
use num_traits::{FromPrimitive, Signed, Zero};

/// A number in either native or arbitrary-precision form.
#[derive(Debug, Clone)]
pub enum Numeric {
    /// IEEE-754 double.
    Float(f64),
    /// Arbitrary-precision integer.
    BigInt(BigInt),
}

impl Numeric {
    /// Sign test without allocating.
    #[must_use]
    pub fn signum_ordering(&self) -> Option<Ordering> {
        match self {
            Numeric::Float(f) => f.partial_cmp(&0.0),
            Numeric::BigInt(b) if b.is_zero() => Some(Ordering::Equal),
            Numeric::BigInt(b) if b.is_negative() => Some(Ordering::Less),
            Numeric::BigInt(_) => Some(Ordering::Greater),
        }
    }
}

/// Compares a float against a big integer by exact value.
fn cmp_float_bigint(f: f64, b: &BigInt) -> Option<Ordering> {
    if f.is_nan() {
        return None;
    }
    if f.is_infinite() {
        return Some(if f > 0.0 {
            Ordering::Greater
        } else {
            Ordering::Less
        });
    }

    let whole = f.trunc();
    let whole_int = BigInt::from_f64(whole)?;
    match whole_int.cmp(b) {
        Ordering::Equal => (f - whole).partial_cmp(&0.0),
        other => Some(other),
    }
}

impl PartialEq for Numeric {
    fn eq(&self, other: &Self) -> bool {
        self.partial_cmp(other) == Some(Ordering::Equal)
    }
}

impl PartialOrd for Numeric {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Numeric::Float(a), Numeric::Float(b)) => a.partial_cmp(b),
            (Numeric::BigInt(a), Numeric::BigInt(b)) => Some(a.cmp(b)),
            (Numeric::Float(a), Numeric::BigInt(b)) => cmp_float_bigint(*a, b),
            (Numeric::BigInt(a), Numeric::Float(b)) => {
                cmp_float_bigint(*b, a).map(Ordering::reverse)
            }
        }
    }
}

impl fmt::Display for Numeric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Numeric::Float(v) => write!(f, "{v}"),
            Numeric::BigInt(v) => write!(f, "{v}"),
        }
    }
}

macro_rules! numeric_from_lossless {
    ($($t:ty),* $(,)?) => {
        $(
            impl From<$t> for Numeric {
                #[inline]
                fn from(v: $t) -> Self {
                    Numeric::Float(f64::from(v))
                }
            }
        )*
    };
}

numeric_from_lossless!(i8, i16, i32, u8, u16, u32, f32, f64);

macro_rules! numeric_from_wide {
    ($($t:ty),* $(,)?) => {
        $(
            impl From<$t> for Numeric {
                #[inline]
                fn from(v: $t) -> Self {
                    Numeric::Float(v as f64)
                }
            }
        )*
    };
}

numeric_from_wide!(i64, u64, isize, usize);

impl From<BigInt> for Numeric {
    fn from(v: BigInt) -> Self {
        Numeric::BigInt(v)
    }
}

impl From<&BigInt> for Numeric {
    fn from(v: &BigInt) -> Self {
        Numeric::BigInt(v.clone())
    }
}
