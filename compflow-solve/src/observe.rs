/// Hook called once per solver iteration.
///
/// The event type `E` describes the iteration (see [`newton::Event`] and
/// [`bisection::Event`]); returning `Some(action)` asks the solver to act on
/// it, for example to stop with the current estimate, while `None` lets the
/// iteration run on.
///
/// Any `FnMut(&E) -> Option<A>` closure is an observer. Pass `()` when no
/// observation is wanted.
///
/// [`newton::Event`]: crate::newton::Event
/// [`bisection::Event`]: crate::bisection::Event
pub trait Observer<E, A> {
    /// Inspects one iteration and optionally requests an action.
    fn observe(&mut self, event: &E) -> Option<A>;
}

impl<E, A, F> Observer<E, A> for F
where
    F: FnMut(&E) -> Option<A>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self(event)
    }
}

impl<E, A> Observer<E, A> for () {
    fn observe(&mut self, _event: &E) -> Option<A> {
        None
    }
}
