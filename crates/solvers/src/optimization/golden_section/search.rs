use optiprice_core::{Model, Observer, OptimizationProblem};

use crate::optimization::evaluate;

use super::{
    Action, Config, Error, Event, Point, Solution,
    bracket::GoldenBracket,
    init::{InitResult, init},
    solution::Status,
    state::{ShrinkDirection, State},
};

/// Core golden section search implementation.
///
/// The `transform` function is applied to objective values before
/// comparison, allowing the same algorithm to handle both minimization
/// (transform = identity) and maximization (transform = negation).
pub(super) fn search<M, P, Obs, F>(
    model: &M,
    problem: &P,
    bracket: [f64; 2],
    config: &Config,
    mut observer: Obs,
    transform: F,
) -> Result<Solution<M::Input, M::Output>, Error>
where
    M: Model,
    P: OptimizationProblem<1, Input = M::Input, Output = M::Output>,
    Obs: for<'a> Observer<Event<'a, M, P>, Action>,
    F: Fn(f64) -> f64,
{
    let bracket = GoldenBracket::new(bracket)?;

    let mut state = match init(model, problem, &bracket, &mut observer, &transform)? {
        InitResult::Continue(state) => state,
        InitResult::StopEarly(state) => {
            return finish(model, problem, &state, Status::StoppedByObserver, 0);
        }
    };

    let mut iters = 0;
    while !state.is_converged(config) {
        if iters == config.max_iters() {
            return finish(model, problem, &state, Status::MaxIters, iters);
        }
        iters += 1;

        let direction = state.next_action(&transform);
        let (eval_x, other) = match direction {
            ShrinkDirection::ShrinkLeft(x) => (x, state.right()),
            ShrinkDirection::ShrinkRight(x) => (x, state.left()),
        };

        let point = match eval_and_observe(model, problem, eval_x, other, &mut observer)? {
            EvalOutcome::Continue(point) => point,
            EvalOutcome::AssumeWorse => Point::new(eval_x, transform(f64::INFINITY)),
            EvalOutcome::StopEarly => {
                return finish(model, problem, &state, Status::StoppedByObserver, iters);
            }
        };

        state.apply(direction, point);
    }

    finish(model, problem, &state, Status::Converged, iters)
}

/// Evaluates the bracket midpoint and packages the solution.
fn finish<M, P>(
    model: &M,
    problem: &P,
    state: &State,
    status: Status,
    iters: usize,
) -> Result<Solution<M::Input, M::Output>, Error>
where
    M: Model,
    P: OptimizationProblem<1, Input = M::Input, Output = M::Output>,
{
    let x = state.bracket().midpoint();
    let eval = evaluate(model, problem, [x]).map_err(|e| Error::from_eval(x, e))?;

    Ok(Solution {
        status,
        x,
        objective: eval.objective,
        snapshot: eval.snapshot,
        bracket: state.bracket().bounds(),
        iters,
    })
}

// ============================================================================
// Eval + observe helper
// ============================================================================

enum EvalOutcome {
    Continue(Point),
    AssumeWorse,
    StopEarly,
}

/// Evaluate at `x`, emit event, and handle observer action.
fn eval_and_observe<M, P, Obs>(
    model: &M,
    problem: &P,
    x: f64,
    other: Point,
    observer: &mut Obs,
) -> Result<EvalOutcome, Error>
where
    M: Model,
    P: OptimizationProblem<1, Input = M::Input, Output = M::Output>,
    Obs: for<'a> Observer<Event<'a, M, P>, Action>,
{
    match evaluate(model, problem, [x]) {
        Ok(eval) => {
            let point = Point::from(&eval);
            let event = Event::Evaluated {
                point,
                input: &eval.snapshot.input,
                output: &eval.snapshot.output,
                other,
            };
            match observer.observe(&event) {
                Some(Action::StopEarly) => Ok(EvalOutcome::StopEarly),
                Some(Action::AssumeWorse) => Ok(EvalOutcome::AssumeWorse),
                None => Ok(EvalOutcome::Continue(point)),
            }
        }
        Err(e) => match Event::<M, P>::emit_failure(x, other, &e, observer) {
            Some(Action::StopEarly) => Ok(EvalOutcome::StopEarly),
            Some(Action::AssumeWorse) => Ok(EvalOutcome::AssumeWorse),
            None => Err(Error::from_eval(x, e)),
        },
    }
}
