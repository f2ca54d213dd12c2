use super::EPSILON;

/// Epsilon-based comparison predicates.
///
/// The epsilon is an explicit field rather than a hidden module default,
/// so individual call sites and tests can tune it without process-wide
/// side effects. [`Tolerance::default`] uses [`EPSILON`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerance {
    /// Threshold below which a difference counts as zero.
    pub eps: f64,
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::new(EPSILON)
    }
}

impl Tolerance {
    /// Creates a tolerance with the given epsilon.
    #[must_use]
    pub const fn new(eps: f64) -> Self {
        Self { eps }
    }

    /// Returns `true` if `x` is within epsilon of zero.
    #[must_use]
    pub fn zero(&self, x: f64) -> bool {
        x.abs() < self.eps
    }

    /// Returns `true` if every component is within epsilon of zero.
    #[must_use]
    pub fn all_zero(&self, xs: &[f64]) -> bool {
        xs.iter().all(|&x| self.zero(x))
    }

    /// Returns `true` if `a` and `b` are within epsilon of each other.
    #[must_use]
    pub fn identical(&self, a: f64, b: f64) -> bool {
        self.zero(a - b)
    }

    /// Returns `true` if every pair of components is within epsilon.
    ///
    /// Slices of different lengths never compare identical.
    #[must_use]
    pub fn identical_all(&self, a: &[f64], b: &[f64]) -> bool {
        a.len() == b.len() && a.iter().zip(b).all(|(&x, &y)| self.identical(x, y))
    }

    /// Returns `true` iff `a + eps < b`.
    #[must_use]
    pub fn smaller(&self, a: f64, b: f64) -> bool {
        a + self.eps < b
    }

    /// Returns `true` iff `b + eps < a`.
    #[must_use]
    pub fn bigger(&self, a: f64, b: f64) -> bool {
        self.smaller(b, a)
    }
}
