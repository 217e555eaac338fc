use super::bracket::GoldenBracket;
use super::{Config, Point};

/// Direction to shrink the bracket and where to evaluate next.
#[derive(Debug, Clone, Copy)]
pub(super) enum ShrinkDirection {
    /// Shrink left bound; payload is x for new `inner_right`.
    ShrinkLeft(f64),

    /// Shrink right bound; payload is x for new `inner_left`.
    ShrinkRight(f64),
}

/// Bracket plus the scored interior points.
///
/// `left` and `right` hold the objectives at `bracket.inner_left` and
/// `bracket.inner_right`.
#[derive(Debug)]
pub(super) struct State {
    bracket: GoldenBracket,
    left: Point,
    right: Point,
}

impl State {
    pub(super) fn new(bracket: GoldenBracket, left: Point, right: Point) -> Self {
        Self {
            bracket,
            left,
            right,
        }
    }

    pub(super) fn left(&self) -> Point {
        self.left
    }

    pub(super) fn right(&self) -> Point {
        self.right
    }

    pub(super) fn bracket(&self) -> &GoldenBracket {
        &self.bracket
    }

    /// Pure query: which direction to shrink and where to evaluate next.
    ///
    /// Ties keep the left part of the bracket.
    pub(super) fn next_action<F: Fn(f64) -> f64>(&self, transform: &F) -> ShrinkDirection {
        let left_score = transform(self.left.objective);
        let right_score = transform(self.right.objective);

        if left_score <= right_score {
            // Left is at least as good → shrink right
            ShrinkDirection::ShrinkRight(self.bracket.new_inner_left())
        } else {
            // Right is better → shrink left
            ShrinkDirection::ShrinkLeft(self.bracket.new_inner_right())
        }
    }

    /// Apply shrink and update interior point with new evaluation.
    pub(super) fn apply(&mut self, direction: ShrinkDirection, point: Point) {
        match direction {
            ShrinkDirection::ShrinkRight(_) => {
                // [left, inner_right] becomes the new bracket and the old
                // inner_left becomes the new inner_right
                self.bracket.shrink_right();
                self.right = self.left;
                self.left = point;
            }
            ShrinkDirection::ShrinkLeft(_) => {
                // [inner_left, right] becomes the new bracket and the old
                // inner_right becomes the new inner_left
                self.bracket.shrink_left();
                self.left = self.right;
                self.right = point;
            }
        }
    }

    pub(super) fn is_converged(&self, config: &Config) -> bool {
        let x_ref = self.bracket.midpoint().abs();
        self.bracket.width() <= config.x_abs_tol() + config.x_rel_tol() * x_ref
    }
}
