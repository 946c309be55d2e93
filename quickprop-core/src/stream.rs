//! Lazy streams of generated values.

use crate::arbitrary::{Arbitrary, Generated};
use crate::prng::Prng;
use std::iter::FusedIterator;

/// An infinite, lazy stream of values drawn from an arbitrary.
///
/// The stream owns its generator exclusively. Nothing is generated until
/// [`Iterator::next`] is called, and each call draws exactly one value, so
/// stopping early never advances the generator past what was consumed.
/// Replaying requires a new stream built from the same seed.
pub struct ValueStream<'a, A, R> {
    arbitrary: &'a A,
    rng: R,
}

impl<'a, A, R> ValueStream<'a, A, R>
where
    A: Arbitrary,
    R: Prng,
{
    pub fn new(arbitrary: &'a A, rng: R) -> Self {
        ValueStream { arbitrary, rng }
    }

    /// Limit the stream to at most `runs` values.
    pub fn bounded(self, runs: usize) -> BoundedSource<Self> {
        BoundedSource::new(self, runs)
    }

    /// Give back the generator in its current state.
    pub fn into_rng(self) -> R {
        self.rng
    }
}

impl<A, R> Iterator for ValueStream<'_, A, R>
where
    A: Arbitrary,
    R: Prng,
{
    type Item = Generated<A::Value>;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.arbitrary.generate(&mut self.rng))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

impl<A, R> FusedIterator for ValueStream<'_, A, R>
where
    A: Arbitrary,
    R: Prng,
{
}

/// A source forwarding at most `remaining` pulls to the stream it wraps.
///
/// Once the count reaches zero the source is exhausted and the inner stream
/// is never pulled again.
pub struct BoundedSource<I> {
    inner: I,
    remaining: usize,
}

impl<I> BoundedSource<I> {
    pub fn new(inner: I, runs: usize) -> Self {
        BoundedSource {
            inner,
            remaining: runs,
        }
    }

    pub fn remaining(&self) -> usize {
        self.remaining
    }

    pub fn into_inner(self) -> I {
        self.inner
    }
}

impl<I: Iterator> Iterator for BoundedSource<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, upper) = self.inner.size_hint();
        let lower = lower.min(self.remaining);
        let upper = match upper {
            Some(upper) => upper.min(self.remaining),
            None => self.remaining,
        };
        (lower, Some(upper))
    }
}

impl<I: Iterator> FusedIterator for BoundedSource<I> {}
