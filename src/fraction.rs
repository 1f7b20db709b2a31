//! Reduced fractions and best rational approximation.
//!
//! Used to print achieved ratios like `1.8` as `9/5` in diagnostics.

use core::fmt;

/// Greatest common divisor. `gcd(0, 0) == 0`.
pub(crate) fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }
    a
}

/// A non-negative fraction in lowest terms.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Fraction {
    /// Numerator.
    pub numer: u64,
    /// Denominator.
    pub denom: u64,
}

impl Fraction {
    /// Create a fraction, reduced to lowest terms.
    pub fn new(numer: u64, denom: u64) -> Self {
        let d = gcd(numer, denom);
        if d <= 1 {
            return Self { numer, denom };
        }
        Self {
            numer: numer / d,
            denom: denom / d,
        }
    }

    /// Value as a real number.
    pub fn to_f64(&self) -> f64 {
        self.numer as f64 / self.denom as f64
    }

    /// Closest fraction with denominator at most `max_denom` (values below 1 are treated as 1).
    ///
    /// Walks the continued fraction expansion until the next convergent's
    /// denominator would exceed the limit, then picks whichever of the last
    /// convergent and the largest admissible semiconvergent is closer. Ties go
    /// to the convergent.
    pub fn limit_denominator(&self, max_denom: u64) -> Self {
        let max_denom = max_denom.max(1);
        if self.denom <= max_denom {
            return *self;
        }

        let (mut p0, mut q0, mut p1, mut q1) = (0u64, 1u64, 1u64, 0u64);
        let (mut n, mut d) = (self.numer, self.denom);
        while d != 0 {
            let a = n / d;
            let q2 = q0.saturating_add(a.saturating_mul(q1));
            if q2 > max_denom {
                break;
            }
            (p0, q0, p1, q1) = (p1, q1, p0 + a * p1, q2);
            (n, d) = (d, n - a * d);
        }

        let k = (max_denom - q0) / q1;
        let semi = Self::new(p0 + k * p1, q0 + k * q1);
        let conv = Self::new(p1, q1);
        if self.distance_cmp(&conv, &semi) != core::cmp::Ordering::Greater {
            conv
        } else {
            semi
        }
    }

    /// Compare `|a - self|` with `|b - self|` exactly.
    fn distance_cmp(&self, a: &Self, b: &Self) -> core::cmp::Ordering {
        let (n, d) = (self.numer as i128, self.denom as i128);
        // |a.n/a.d - n/d| = |a.n*d - n*a.d| / (a.d*d); the shared `d` cancels.
        let da = (a.numer as i128 * d - n * a.denom as i128).abs() * b.denom as i128;
        let db = (b.numer as i128 * d - n * b.denom as i128).abs() * a.denom as i128;
        da.cmp(&db)
    }
}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.denom == 1 {
            write!(f, "{}", self.numer)
        } else {
            write!(f, "{}/{}", self.numer, self.denom)
        }
    }
}
