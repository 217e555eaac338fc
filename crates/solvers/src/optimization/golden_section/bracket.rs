use super::Error;

/// The inverse golden ratio: φ⁻¹ = (√5 - 1) / 2
pub(super) const INV_PHI: f64 = 0.618_033_988_749_895;

/// Golden section search bracket.
///
/// Maintains the outer interval [left, right] and two interior points
/// positioned according to the golden ratio.
#[derive(Debug, Clone, Copy)]
pub(super) struct GoldenBracket {
    /// Outer left bound.
    pub(super) left: f64,

    /// Outer right bound.
    pub(super) right: f64,

    /// Inner left point at `right - φ⁻¹ * width`.
    pub(super) inner_left: f64,

    /// Inner right point at `left + φ⁻¹ * width`.
    pub(super) inner_right: f64,
}

impl GoldenBracket {
    /// Creates a bracket from bounds with interior points positioned by the golden ratio.
    ///
    /// Fails unless both bounds are finite and `low < high`.
    pub(super) fn new(bracket: [f64; 2]) -> Result<Self, Error> {
        let [low, high] = bracket;
        if !low.is_finite() || !high.is_finite() || low >= high {
            return Err(Error::InvalidBracket { low, high });
        }

        let width = high - low;
        Ok(Self {
            left: low,
            right: high,
            inner_left: high - INV_PHI * width,
            inner_right: low + INV_PHI * width,
        })
    }

    /// Returns the width of the current bounds.
    pub(super) fn width(&self) -> f64 {
        self.right - self.left
    }

    /// Returns the midpoint of the current bounds.
    pub(super) fn midpoint(&self) -> f64 {
        0.5 * (self.left + self.right)
    }

    /// Shrinks the bounds to `[left, inner_right]`.
    ///
    /// The old `inner_left` becomes the new `inner_right`, and the new
    /// `inner_left` is the point returned by [`Self::new_inner_left`].
    pub(super) fn shrink_right(&mut self) {
        let x = self.new_inner_left();
        self.right = self.inner_right;
        self.inner_right = self.inner_left;
        self.inner_left = x;
    }

    /// Shrinks the bounds to `[inner_left, right]`.
    ///
    /// The old `inner_right` becomes the new `inner_left`, and the new
    /// `inner_right` is the point returned by [`Self::new_inner_right`].
    pub(super) fn shrink_left(&mut self) {
        let x = self.new_inner_right();
        self.left = self.inner_left;
        self.inner_left = self.inner_right;
        self.inner_right = x;
    }

    /// Returns x for new `inner_left` after shrinking right (without mutating).
    pub(super) fn new_inner_left(&self) -> f64 {
        let new_right = self.inner_right;
        new_right - INV_PHI * (new_right - self.left)
    }

    /// Returns x for new `inner_right` after shrinking left (without mutating).
    pub(super) fn new_inner_right(&self) -> f64 {
        let new_left = self.inner_left;
        new_left + INV_PHI * (self.right - new_left)
    }

    /// Returns the outer bounds as `[left, right]`.
    pub(super) fn bounds(&self) -> [f64; 2] {
        [self.left, self.right]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn inverse_golden_ratio_matches_closed_form() {
        assert_relative_eq!(INV_PHI, (5.0_f64.sqrt() - 1.0) / 2.0);
    }

    #[test]
    fn bracket_initialized_with_golden_ratio_points() {
        let bracket = GoldenBracket::new([0.0, 1.0]).unwrap();

        assert_relative_eq!(bracket.left, 0.0);
        assert_relative_eq!(bracket.right, 1.0);
        assert_relative_eq!(bracket.width(), 1.0);

        // inner_left ≈ 0.382, inner_right ≈ 0.618
        assert_relative_eq!(bracket.inner_left, 1.0 - INV_PHI);
        assert_relative_eq!(bracket.inner_right, INV_PHI);

        // They should divide the interval in golden ratio
        assert_relative_eq!(
            bracket.inner_left / (1.0 - bracket.inner_left),
            INV_PHI,
            epsilon = 1e-12
        );
        assert_relative_eq!(
            (bracket.right - bracket.inner_left) / bracket.width(),
            INV_PHI,
            epsilon = 1e-12
        );
    }

    #[test]
    fn rejects_reversed_equal_and_non_finite_bounds() {
        for bounds in [
            [1.0, -2.0],
            [3.0, 3.0],
            [f64::NAN, 1.0],
            [0.0, f64::INFINITY],
        ] {
            assert!(
                matches!(GoldenBracket::new(bounds), Err(Error::InvalidBracket { .. })),
                "bounds {bounds:?} should be rejected"
            );
        }
    }

    #[test]
    fn shrink_left_reuses_point_and_computes_new_inner_right() {
        let mut bracket = GoldenBracket::new([0.0, 1.0]).unwrap();
        let old_inner_right = bracket.inner_right;
        let expected_x = bracket.new_inner_right();

        bracket.shrink_left();

        // Old inner_left becomes new left bound
        assert_relative_eq!(bracket.left, 1.0 - INV_PHI);
        assert_relative_eq!(bracket.right, 1.0);

        // Old inner_right becomes new inner_left
        assert_relative_eq!(bracket.inner_left, old_inner_right);

        // New inner_right is exactly the previewed point
        assert_eq!(bracket.inner_right, expected_x);
        assert_relative_eq!(bracket.inner_right, bracket.left + INV_PHI * bracket.width());
    }

    #[test]
    fn shrink_right_reuses_point_and_computes_new_inner_left() {
        let mut bracket = GoldenBracket::new([0.0, 1.0]).unwrap();
        let old_inner_left = bracket.inner_left;
        let expected_x = bracket.new_inner_left();

        bracket.shrink_right();

        // Old inner_right becomes new right bound
        assert_relative_eq!(bracket.left, 0.0);
        assert_relative_eq!(bracket.right, INV_PHI);

        // Old inner_left becomes new inner_right
        assert_relative_eq!(bracket.inner_right, old_inner_left);

        assert_eq!(bracket.inner_left, expected_x);
        assert_relative_eq!(
            bracket.inner_left,
            bracket.right - INV_PHI * bracket.width(),
            epsilon = 1e-15
        );
    }

    #[test]
    fn each_shrink_scales_width_by_inverse_golden_ratio() {
        let mut bracket = GoldenBracket::new([2.0, 12.0]).unwrap();

        bracket.shrink_left();
        assert_relative_eq!(bracket.width(), 10.0 * INV_PHI, max_relative = 1e-12);

        bracket.shrink_right();
        assert_relative_eq!(bracket.width(), 10.0 * INV_PHI.powi(2), max_relative = 1e-12);
    }
}
