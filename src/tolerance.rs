//! Approximate floating-point comparison.
//!
//! Rank values go through a plotting library and JSON serialization before
//! they land in a plot, so exact equality is too strict. [`Tolerance`] makes
//! the comparison bounds explicit.

/// Default relative tolerance.
pub const DEFAULT_RELATIVE_TOLERANCE: f64 = 1e-6;

/// Default absolute tolerance, used when the expected value is near zero.
pub const DEFAULT_ABSOLUTE_TOLERANCE: f64 = 1e-12;

/// Relative and absolute bounds for [`Tolerance::approx_eq()`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tolerance {
    pub relative: f64,
    pub absolute: f64,
}

impl Default for Tolerance {
    fn default() -> Self {
        Self {
            relative: DEFAULT_RELATIVE_TOLERANCE,
            absolute: DEFAULT_ABSOLUTE_TOLERANCE,
        }
    }
}

impl Tolerance {
    pub fn new(relative: f64, absolute: f64) -> Self {
        Self { relative, absolute }
    }

    /// Whether `actual` is within tolerance of `expected`.
    ///
    /// The allowed difference is `max(relative * |expected|, absolute)`. An
    /// infinite `expected` only matches the identical infinity, and NaN never
    /// matches anything.
    pub fn approx_eq(&self, actual: f64, expected: f64) -> bool {
        if actual == expected {
            return true;
        }
        if !expected.is_finite() || !actual.is_finite() {
            return false;
        }
        let allowed = (self.relative * expected.abs()).max(self.absolute);
        (actual - expected).abs() <= allowed
    }
}
