//! Lazy unfolding sequence generators.
//!
//! This crate builds sequences the way streaming evaluators do: one element
//! per pull, with no work done ahead of the consumer. Its centre is
//! [`successors()`], which yields a seed value and then successive results
//! of a successor function, ending right before the first `None`:
//!
//! ~~~
//! use lazyseq::successors;
//!
//! let mut seq = successors(1, |n| (*n < 5).then(|| n + 1));
//! assert_eq!(seq.by_ref().collect::<Vec<_>>(), [1, 2, 3, 4, 5]);
//! assert_eq!(seq.next(), None);
//! ~~~
//!
//! Unlike the naive formulation whose state is "the next value to return",
//! [`successors()`] never runs the successor function ahead of consumption:
//! after `k + 1` elements have been pulled, it has run exactly `k` times.
//! The lower-level [`unfold()`] threads an explicit state through a step
//! function, and [`defer()`] postpones the *construction* of an iterator to
//! its first pull.
#![no_std]
#![warn(missing_docs)]

mod defer;
mod ord;
mod successors;
mod unfold;

pub use defer::{defer, Defer};
pub use ord::Lt;
pub use successors::successors;
pub use unfold::{unfold, Unfold};
