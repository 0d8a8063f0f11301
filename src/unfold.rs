//! Sequences that thread an explicit state through a step function.

/// Iterator returned by [`unfold`].
pub struct Unfold<S, F> {
    state: S,
    step: F,
}

/// Return an iterator that owns `state` and runs `step` once on it per pull.
///
/// The step function signals exhaustion by returning `None`.
/// The iterator does not remember exhaustion:
/// the step function is run again on every subsequent pull
/// and has to keep returning `None` itself for the sequence to stay finished.
/// [`successors()`](crate::successors()) builds exactly such a step.
///
/// ~~~
/// use lazyseq::unfold;
///
/// let mut fib = unfold((0u64, 1u64), |(a, b)| {
///     let out = *a;
///     (*a, *b) = (*b, *a + *b);
///     Some(out)
/// });
/// assert_eq!(fib.by_ref().take(6).collect::<Vec<_>>(), [0, 1, 1, 2, 3, 5]);
/// ~~~
pub fn unfold<S, T, F>(state: S, step: F) -> Unfold<S, F>
where
    F: FnMut(&mut S) -> Option<T>,
{
    Unfold { state, step }
}

impl<S, T, F: FnMut(&mut S) -> Option<T>> Iterator for Unfold<S, F> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        (self.step)(&mut self.state)
    }
}
