use optiprice_core::Observer;

use crate::traits::{CanStopEarly, HasObjective};

/// Stops a search once the objective stops improving.
///
/// After each successful evaluation the observer compares the objective with
/// the best seen so far. If it fails to improve on the best by more than
/// `min_improvement` for `patience` consecutive evaluations, the observer asks
/// the solver to stop early. Failed evaluations (NaN objectives) are ignored.
#[derive(Debug, Clone)]
pub struct StallObserver {
    sign: f64,
    min_improvement: f64,
    patience: usize,
    best: Option<f64>,
    stalled: usize,
}

impl StallObserver {
    /// Creates an observer for a maximization search.
    #[must_use]
    pub fn maximizing(min_improvement: f64, patience: usize) -> Self {
        Self::with_sign(1.0, min_improvement, patience)
    }

    /// Creates an observer for a minimization search.
    #[must_use]
    pub fn minimizing(min_improvement: f64, patience: usize) -> Self {
        Self::with_sign(-1.0, min_improvement, patience)
    }

    fn with_sign(sign: f64, min_improvement: f64, patience: usize) -> Self {
        Self {
            sign,
            min_improvement: min_improvement.abs(),
            patience: patience.max(1),
            best: None,
            stalled: 0,
        }
    }
}

impl<E: HasObjective, A: CanStopEarly> Observer<E, A> for StallObserver {
    fn observe(&mut self, event: &E) -> Option<A> {
        let objective = event.objective();
        if !objective.is_finite() {
            return None;
        }

        let score = self.sign * objective;
        let improved = self
            .best
            .is_none_or(|best| score > best + self.min_improvement);
        self.best = Some(self.best.map_or(score, |best| best.max(score)));

        if improved {
            self.stalled = 0;
            return None;
        }

        self.stalled += 1;
        (self.stalled >= self.patience).then(A::stop_early)
    }
}
