use optiprice_core::{Model, Observer, OptimizationProblem};

use crate::optimization::{EvalError, evaluate};

use super::{Action, Error, Event, Point, bracket::GoldenBracket, state::State};

pub(super) enum InitResult {
    Continue(State),
    StopEarly(State),
}

/// Initialize state by evaluating both interior points.
///
/// Only the second point (or failure) triggers an observer event, since an
/// event needs a valid `other` point.
///
/// If both evaluations fail, one failure event (with a synthetic `other`) is
/// emitted for observer awareness and the first failure is returned as an
/// error: there is no valid point to keep.
pub(super) fn init<M, P, Obs, F>(
    model: &M,
    problem: &P,
    bracket: &GoldenBracket,
    observer: &mut Obs,
    transform: &F,
) -> Result<InitResult, Error>
where
    M: Model,
    P: OptimizationProblem<1, Input = M::Input, Output = M::Output>,
    Obs: for<'a> Observer<Event<'a, M, P>, Action>,
    F: Fn(f64) -> f64,
{
    let left = evaluate(model, problem, [bracket.inner_left]);
    let right = evaluate(model, problem, [bracket.inner_right]);

    match (left, right) {
        (Err(left_err), Err(_)) => {
            let synthetic_other = Point::new(bracket.inner_right, f64::NAN);
            Event::<M, P>::emit_failure(bracket.inner_left, synthetic_other, &left_err, observer);
            Err(Error::from_eval(bracket.inner_left, left_err))
        }

        (Ok(left_eval), Ok(right_eval)) => {
            let left_pt = Point::from(&left_eval);
            let right_pt = Point::from(&right_eval);
            let event = Event::Evaluated {
                point: right_pt,
                input: &right_eval.snapshot.input,
                output: &right_eval.snapshot.output,
                other: left_pt,
            };
            let state = match observer.observe(&event) {
                Some(Action::StopEarly) => {
                    return Ok(InitResult::StopEarly(State::new(*bracket, left_pt, right_pt)));
                }
                Some(Action::AssumeWorse) => {
                    let worse = Point::new(right_pt.x, transform(f64::INFINITY));
                    State::new(*bracket, left_pt, worse)
                }
                None => State::new(*bracket, left_pt, right_pt),
            };
            Ok(InitResult::Continue(state))
        }

        (Ok(ok_eval), Err(err)) => recover::<M, P, Obs, F>(
            *bracket,
            Point::from(&ok_eval),
            bracket.inner_right,
            err,
            observer,
            transform,
        ),

        (Err(err), Ok(ok_eval)) => recover::<M, P, Obs, F>(
            *bracket,
            Point::from(&ok_eval),
            bracket.inner_left,
            err,
            observer,
            transform,
        ),
    }
}

/// Handles the case where exactly one interior point failed.
fn recover<M, P, Obs, F>(
    bracket: GoldenBracket,
    ok_pt: Point,
    failed_x: f64,
    err: EvalError<M::Error, P::Error>,
    observer: &mut Obs,
    transform: &F,
) -> Result<InitResult, Error>
where
    M: Model,
    P: OptimizationProblem<1, Input = M::Input, Output = M::Output>,
    Obs: for<'a> Observer<Event<'a, M, P>, Action>,
    F: Fn(f64) -> f64,
{
    let worse = Point::new(failed_x, transform(f64::INFINITY));
    let (left_pt, right_pt) = if ok_pt.x < worse.x {
        (ok_pt, worse)
    } else {
        (worse, ok_pt)
    };

    match Event::<M, P>::emit_failure(failed_x, ok_pt, &err, observer) {
        Some(Action::StopEarly) => Ok(InitResult::StopEarly(State::new(
            bracket, left_pt, right_pt,
        ))),
        Some(Action::AssumeWorse) => Ok(InitResult::Continue(State::new(
            bracket, left_pt, right_pt,
        ))),
        None => Err(Error::from_eval(failed_x, err)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use optiprice_core::FnModel;
    use thiserror::Error;

    use crate::optimization::OutputObjective;

    fn identity_transform(x: f64) -> f64 {
        x
    }

    fn identity() -> FnModel<fn(f64) -> f64> {
        FnModel(|x| x)
    }

    fn unwrap_continue(result: InitResult) -> State {
        match result {
            InitResult::Continue(s) => s,
            InitResult::StopEarly(_) => panic!("unexpected stop"),
        }
    }

    #[test]
    fn both_ok_keeps_both_points() {
        let bracket = GoldenBracket::new([0.0, 10.0]).unwrap();

        let result = init(&identity(), &OutputObjective, &bracket, &mut (), &identity_transform)
            .expect("should succeed");
        let state = unwrap_continue(result);

        assert_relative_eq!(state.left().x, bracket.inner_left, epsilon = 1e-10);
        assert_relative_eq!(state.right().x, bracket.inner_right, epsilon = 1e-10);
        assert_relative_eq!(state.left().objective, bracket.inner_left, epsilon = 1e-10);
    }

    #[test]
    fn both_ok_observer_can_stop() {
        let bracket = GoldenBracket::new([0.0, 10.0]).unwrap();
        let mut observer = |_: &Event<'_, _, _>| Some(Action::StopEarly);

        let result = init(
            &identity(),
            &OutputObjective,
            &bracket,
            &mut observer,
            &identity_transform,
        )
        .expect("should succeed");

        assert!(matches!(result, InitResult::StopEarly(_)));
    }

    #[test]
    fn both_ok_observer_can_assume_worse() {
        let bracket = GoldenBracket::new([0.0, 10.0]).unwrap();
        let mut observer = |_: &Event<'_, _, _>| Some(Action::AssumeWorse);

        let result = init(
            &identity(),
            &OutputObjective,
            &bracket,
            &mut observer,
            &identity_transform,
        )
        .expect("should succeed");
        let state = unwrap_continue(result);

        // Right was marked AssumeWorse, so right should have infinite objective
        assert!(state.right().objective.is_infinite());
        assert_relative_eq!(state.left().x, bracket.inner_left, epsilon = 1e-10);
    }

    #[derive(Debug, Error)]
    #[error("fails above {threshold}")]
    struct ThresholdError {
        threshold: f64,
    }

    struct FailsAbove {
        threshold: f64,
    }

    impl Model for FailsAbove {
        type Input = f64;
        type Output = f64;
        type Error = ThresholdError;

        fn call(&self, x: &f64) -> Result<f64, Self::Error> {
            if *x > self.threshold {
                Err(ThresholdError {
                    threshold: self.threshold,
                })
            } else {
                Ok(*x)
            }
        }
    }

    #[test]
    fn one_failed_errors_without_observer_action() {
        // Right point (~6.18) fails, left (~3.82) succeeds
        let model = FailsAbove { threshold: 5.0 };
        let bracket = GoldenBracket::new([0.0, 10.0]).unwrap();

        let result = init(&model, &OutputObjective, &bracket, &mut (), &identity_transform);

        assert!(matches!(result, Err(Error::Model(_))));
    }

    #[test]
    fn one_failed_recovers_with_assume_worse() {
        let model = FailsAbove { threshold: 5.0 };
        let bracket = GoldenBracket::new([0.0, 10.0]).unwrap();

        let mut observer = |event: &Event<'_, _, _>| {
            if matches!(event, Event::ModelFailed { .. }) {
                Some(Action::AssumeWorse)
            } else {
                None
            }
        };

        let result = init(
            &model,
            &OutputObjective,
            &bracket,
            &mut observer,
            &identity_transform,
        )
        .expect("should recover");
        let state = unwrap_continue(result);

        assert!(state.right().objective.is_infinite());
        assert_relative_eq!(state.left().x, bracket.inner_left, epsilon = 1e-10);
    }

    #[test]
    fn one_failed_can_stop_early() {
        let model = FailsAbove { threshold: 5.0 };
        let bracket = GoldenBracket::new([0.0, 10.0]).unwrap();

        let mut observer = |event: &Event<'_, _, _>| {
            if matches!(event, Event::ModelFailed { .. }) {
                Some(Action::StopEarly)
            } else {
                None
            }
        };

        let result = init(
            &model,
            &OutputObjective,
            &bracket,
            &mut observer,
            &identity_transform,
        )
        .expect("should succeed");

        assert!(matches!(result, InitResult::StopEarly(_)));
    }

    #[test]
    fn both_failed_notifies_observer_and_errors() {
        let model = FailsAbove { threshold: -1.0 };
        let bracket = GoldenBracket::new([0.0, 10.0]).unwrap();

        let mut notified = false;
        let mut observer = |event: &Event<'_, _, _>| {
            if matches!(event, Event::ModelFailed { .. }) {
                notified = true;
            }
            None
        };

        let result = init(
            &model,
            &OutputObjective,
            &bracket,
            &mut observer,
            &identity_transform,
        );

        assert!(matches!(result, Err(Error::Model(_))));
        assert!(notified, "observer should be notified when both fail");
    }

    #[test]
    fn nan_objective_is_reported_with_its_x() {
        let model = FnModel(|_: f64| f64::NAN);
        let bracket = GoldenBracket::new([0.0, 10.0]).unwrap();

        let result = init(&model, &OutputObjective, &bracket, &mut (), &identity_transform);

        match result {
            Err(Error::NonFiniteObjective { x, objective }) => {
                assert_relative_eq!(x, bracket.inner_left);
                assert!(objective.is_nan());
            }
            _ => panic!("expected a non-finite objective error"),
        }
    }
}
