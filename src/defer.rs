//! Iterators whose construction is deferred to the first pull.

use once_cell::unsync::Lazy;

/// Iterator returned by [`defer`].
pub struct Defer<I, F>(Lazy<I, F>);

/// Return an iterator that runs `make` at the first pull
/// and yields the elements of the iterator it returns.
///
/// Useful when constructing the underlying iterator is costly
/// and the sequence may never be consumed at all.
///
/// ~~~
/// use lazyseq::defer;
///
/// // the range is not built here ...
/// let squares = defer(|| (0..10).map(|n| n * n));
/// // ... but only once `collect` pulls the first element
/// assert_eq!(squares.collect::<Vec<_>>()[..3], [0, 1, 4]);
/// ~~~
pub fn defer<I: Iterator, F: FnOnce() -> I>(make: F) -> Defer<I, F> {
    Defer(Lazy::new(make))
}

impl<I: Iterator, F: FnOnce() -> I> Iterator for Defer<I, F> {
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        self.0.next()
    }
}
