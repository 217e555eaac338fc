use optiprice_core::{Model, Observer, OptimizationProblem};
use optiprice_solvers::optimization::golden_section::{Action, Event};
use tracing::{debug, warn};

/// Logs each golden section event through `tracing`.
///
/// Successful evaluations are logged at `debug`, failures at `warn`.
/// The observer never returns an action, so it does not alter the search.
#[derive(Debug, Clone, Default)]
pub struct TraceObserver {
    label: Option<String>,
    evaluations: usize,
}

impl TraceObserver {
    /// Creates an unlabeled observer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an observer whose log lines carry `label`, e.g. a product name.
    #[must_use]
    pub fn labeled(label: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
            evaluations: 0,
        }
    }

    /// Returns the number of events observed so far.
    #[must_use]
    pub fn evaluations(&self) -> usize {
        self.evaluations
    }
}

impl<M, P> Observer<Event<'_, M, P>, Action> for TraceObserver
where
    M: Model,
    P: OptimizationProblem<1, Input = M::Input, Output = M::Output>,
{
    fn observe(&mut self, event: &Event<'_, M, P>) -> Option<Action> {
        self.evaluations += 1;
        let label = self.label.as_deref().unwrap_or("search");

        match event {
            Event::Evaluated { point, other, .. } => debug!(
                label,
                evaluation = self.evaluations,
                x = point.x,
                objective = point.objective,
                other_x = other.x,
                other_objective = other.objective,
                "golden section evaluation"
            ),
            Event::ModelFailed { x, error, .. } => warn!(
                label,
                evaluation = self.evaluations,
                x = *x,
                error = %error,
                "model failed during golden section search"
            ),
            Event::ProblemFailed { x, error, .. } => warn!(
                label,
                evaluation = self.evaluations,
                x = *x,
                error = %error,
                "objective failed during golden section search"
            ),
            Event::NonFinite { x, objective, .. } => warn!(
                label,
                evaluation = self.evaluations,
                x = *x,
                objective = *objective,
                "non-finite objective during golden section search"
            ),
        }

        None
    }
}
