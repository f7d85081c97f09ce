use super::Error;

/// A point and its residual.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct Point {
    pub(super) x: f64,
    pub(super) residual: f64,
}

impl Point {
    /// Evaluates `f` at `x`, rejecting non-finite residuals.
    pub(super) fn eval(f: &impl Fn(f64) -> f64, x: f64) -> Result<Self, Error> {
        let residual = f(x);
        if residual.is_finite() {
            Ok(Self { x, residual })
        } else {
            Err(Error::NonFiniteResidual { x, residual })
        }
    }

    /// The point with the smaller residual magnitude, preferring `self` on
    /// ties.
    pub(super) fn closer(self, other: Self) -> Self {
        if other.residual.abs() < self.residual.abs() {
            other
        } else {
            self
        }
    }
}

/// An interval `[low, high]` whose ends have residuals of opposite sign.
///
/// Only the low end's residual is kept; the high end is implied to have the
/// other sign.
#[derive(Debug, Clone, Copy)]
pub(super) struct Bracket {
    low: Point,
    high: f64,
}

impl Bracket {
    /// Orders raw bracket ends, rejecting non-finite or equal values.
    pub(super) fn ends(ends: [f64; 2]) -> Result<(f64, f64), Error> {
        let [a, b] = ends;
        for value in [a, b] {
            if !value.is_finite() {
                return Err(Error::NonFiniteEnd { value });
            }
        }

        #[allow(clippy::float_cmp)]
        if a == b {
            return Err(Error::EmptyBracket { value: a });
        }

        Ok((a.min(b), a.max(b)))
    }

    /// Builds a bracket from evaluated ends.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoSignChange`] if the residuals share a sign.
    pub(super) fn new(low: Point, high: Point) -> Result<Self, Error> {
        if low.residual.signum() == high.residual.signum() {
            return Err(Error::NoSignChange {
                left: low.x,
                right: high.x,
                left_residual: low.residual,
                right_residual: high.residual,
            });
        }
        Ok(Self { low, high: high.x })
    }

    pub(super) fn midpoint(&self) -> f64 {
        0.5 * (self.low.x + self.high)
    }

    pub(super) fn width(&self) -> f64 {
        self.high - self.low.x
    }

    pub(super) fn bounds(&self) -> [f64; 2] {
        [self.low.x, self.high]
    }

    /// Keeps whichever half still straddles the sign change.
    pub(super) fn narrow(&mut self, mid: Point) {
        if mid.residual.signum() == self.low.residual.signum() {
            self.low = mid;
        } else {
            self.high = mid.x;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(x: f64, residual: f64) -> Point {
        Point { x, residual }
    }

    #[test]
    fn ends_are_ordered() {
        assert_eq!(Bracket::ends([3.0, -1.0]), Ok((-1.0, 3.0)));
    }

    #[test]
    fn narrowing_keeps_the_sign_change() {
        let mut bracket = Bracket::new(point(0.0, -4.0), point(4.0, 12.0)).unwrap();

        bracket.narrow(point(2.0, 0.5));
        assert_eq!(bracket.bounds(), [0.0, 2.0]);

        bracket.narrow(point(1.0, -1.5));
        assert_eq!(bracket.bounds(), [1.0, 2.0]);
        assert_eq!(bracket.width(), 1.0);
    }

    #[test]
    fn closer_prefers_smaller_residual() {
        let a = point(1.0, -0.3);
        let b = point(2.0, 0.1);
        assert_eq!(a.closer(b), b);
        assert_eq!(b.closer(a), b);
    }
}
