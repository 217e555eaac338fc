/// Receives solver events and optionally returns a control action.
///
/// Solvers call [`Observer::observe`] once per event. Returning `None` lets
/// the solver continue with its default behavior; returning `Some(action)`
/// asks it to act on the solver-specific action type `A`.
///
/// The unit type `()` is a no-op observer, and any `FnMut(&E) -> Option<A>`
/// closure is an observer.
pub trait Observer<E, A> {
    /// Observes an event and optionally returns an action.
    fn observe(&mut self, event: &E) -> Option<A>;
}

impl<E, A> Observer<E, A> for () {
    fn observe(&mut self, _event: &E) -> Option<A> {
        None
    }
}

impl<E, A, F> Observer<E, A> for F
where
    F: FnMut(&E) -> Option<A>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    enum Halt {
        Now,
    }

    fn drive<O: Observer<f64, Halt>>(mut observer: O, events: &[f64]) -> Option<usize> {
        events
            .iter()
            .position(|event| observer.observe(event).is_some())
    }

    #[test]
    fn unit_observer_never_acts() {
        assert_eq!(drive((), &[1.0, 2.0, 3.0]), None);
    }

    #[test]
    fn closure_observer_can_act() {
        let observer = |event: &f64| (*event > 1.5).then_some(Halt::Now);

        assert_eq!(drive(observer, &[1.0, 2.0, 3.0]), Some(1));
    }
}
