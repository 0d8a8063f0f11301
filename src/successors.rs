//! The seed-then-successors sequence generator.

use crate::unfold;

enum State<T> {
    /// seed, not yet emitted
    First(T),
    /// last emitted element, input for the next successor call
    Running(T),
    /// the successor returned `None`; absorbing
    Done,
}

/// Return an iterator that yields `first` and then successive results of
/// `next`, ending right before the first `None`.
///
/// The successor for element `k + 1` is run only when element `k + 1` is
/// actually pulled, never while producing element `k`. This is why the state
/// distinguishes the not-yet-emitted seed from the running chain; keeping
/// "the next value to return" instead would force the successor to run one
/// step ahead of consumption. Once the successor returns `None`, the
/// sequence stays exhausted and the successor is never run again.
///
/// A `None` from the successor is the termination signal, not a failure;
/// if the successor panics, the panic propagates unmodified.
///
/// ~~~
/// use lazyseq::successors;
///
/// let doubled: Vec<_> = successors(1u32, |n| n.checked_mul(2)).take(4).collect();
/// assert_eq!(doubled, [1, 2, 4, 8]);
/// ~~~
pub fn successors<T, F>(first: T, mut next: F) -> impl Iterator<Item = T>
where
    T: Clone,
    F: FnMut(&T) -> Option<T>,
{
    unfold(State::First(first), move |state| {
        match core::mem::replace(state, State::Done) {
            State::First(v) => {
                *state = State::Running(v.clone());
                Some(v)
            }
            State::Running(v) => {
                let v = next(&v)?;
                *state = State::Running(v.clone());
                Some(v)
            }
            State::Done => None,
        }
    })
}

#[test]
fn done_is_absorbing() {
    let calls = core::cell::Cell::new(0);
    let mut seq = successors(1u8, |_| {
        calls.set(calls.get() + 1);
        None
    });
    assert_eq!(seq.next(), Some(1));
    assert_eq!(calls.get(), 0);
    assert_eq!(seq.next(), None);
    assert_eq!(seq.next(), None);
    assert_eq!(calls.get(), 1);
}
