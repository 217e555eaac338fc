use optiprice_core::Snapshot;

/// Indicates whether the solver converged or hit the iteration limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Converged according to the configured tolerances.
    Converged,

    /// Reached the iteration limit without converging.
    ///
    /// The reported `x` is the best estimate available but does not meet the
    /// requested tolerance.
    MaxIters,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of a golden section search.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution<I, O> {
    /// Final solver status.
    pub status: Status,

    /// Midpoint of the final bracket, the estimate of the optimum x.
    pub x: f64,

    /// Objective value at the reported x.
    pub objective: f64,

    /// Snapshot at the reported x.
    pub snapshot: Snapshot<I, O>,

    /// Final bracket as `[left, right]`.
    pub bracket: [f64; 2],

    /// Number of shrink iterations performed.
    pub iters: usize,
}

impl<I, O> Solution<I, O> {
    /// Returns `true` if the search met its tolerance.
    #[must_use]
    pub fn is_converged(&self) -> bool {
        self.status == Status::Converged
    }

    /// Returns the width of the final bracket.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.bracket[1] - self.bracket[0]
    }
}
