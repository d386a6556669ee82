//! The chainable sequence wrapper.
//!
//! A [`LazySequence`] owns a single upstream cursor. Every transformation
//! consumes the wrapper and hands back a new wrapper over the adapted
//! cursor, so chains stay lazy unless a step is inherently eager.

use std::{
    collections::VecDeque,
    ops::{Add, Range, RangeInclusive},
};

use crate::hint::LengthHint;

mod combinatoric;
mod transform;

pub struct LazySequence<'a, T> {
    upstream: Box<dyn Iterator<Item = T> + 'a>,
    hint: LengthHint,
}

impl<'a, T> LazySequence<'a, T> {
    /// Wraps any iterable, recording its size hint as the length estimate.
    pub fn new<I>(source: I) -> Self
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: 'a,
    {
        let upstream = source.into_iter();
        let hint = LengthHint::of(&upstream);
        LazySequence {
            upstream: Box::new(upstream),
            hint,
        }
    }

    /// Yields every element of each source in turn.
    ///
    /// The estimate is the sum of the sources' estimates. Sources that cannot
    /// report a size count as zero, so the result may under-count.
    pub fn from_iterables<S>(sources: S) -> Self
    where
        T: 'a,
        S: IntoIterator,
        S::Item: IntoIterator<Item = T>,
        <S::Item as IntoIterator>::IntoIter: 'a,
    {
        let mut hint = LengthHint::Exact(0);
        let mut upstream: Box<dyn Iterator<Item = T> + 'a> = Box::new(std::iter::empty());
        for part in sources {
            let part = part.into_iter();
            hint = hint + LengthHint::of(&part);
            upstream = Box::new(upstream.chain(part));
        }
        LazySequence { upstream, hint }
    }

    pub fn with_length_hint(mut self, hint: LengthHint) -> Self {
        self.hint = hint;
        self
    }

    /// The advisory count of remaining elements. Only suitable for sizing
    /// allocations.
    pub fn length_hint(&self) -> LengthHint {
        self.hint
    }

    /// Method form of `self + other`.
    pub fn chain<I>(self, other: I) -> Self
    where
        T: 'a,
        I: IntoIterator<Item = T>,
        I::IntoIter: 'a,
    {
        let other = other.into_iter();
        let hint = self.hint + LengthHint::of(&other);
        LazySequence {
            upstream: Box::new(self.upstream.chain(other)),
            hint,
        }
    }

    pub(crate) fn into_upstream(self) -> Box<dyn Iterator<Item = T> + 'a> {
        self.upstream
    }

    /// Re-wraps the output of an adapter applied to this sequence's cursor.
    pub(crate) fn rewrap<U, I, F>(self, adapt: F) -> LazySequence<'a, U>
    where
        F: FnOnce(Box<dyn Iterator<Item = T> + 'a>) -> I,
        I: Iterator<Item = U> + 'a,
    {
        LazySequence::new(adapt(self.into_upstream()))
    }

    /// Like [`rewrap`](Self::rewrap), for adapters that yield exactly one
    /// output per input. The current hint carries over unchanged.
    pub(crate) fn rewrap_same_length<U, I, F>(self, adapt: F) -> LazySequence<'a, U>
    where
        F: FnOnce(Box<dyn Iterator<Item = T> + 'a>) -> I,
        I: Iterator<Item = U> + 'a,
    {
        let hint = self.hint;
        self.rewrap(adapt).with_length_hint(hint)
    }

    /// Drains the sequence into a `Vec` sized by the current hint.
    pub(crate) fn collect_presized(self) -> Vec<T> {
        let mut items = Vec::with_capacity(self.hint.capacity());
        items.extend(self.upstream);
        items
    }
}

impl<T> Iterator for LazySequence<'_, T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let item = self.upstream.next()?;
        self.hint.decrement();
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.upstream.size_hint()
    }
}

impl<T> std::fmt::Debug for LazySequence<'_, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LazySequence")
            .field("length_hint", &self.hint)
            .finish_non_exhaustive()
    }
}

/// Wraps any iterable in a [`LazySequence`].
pub fn wrap<'a, I>(source: I) -> LazySequence<'a, I::Item>
where
    I: IntoIterator,
    I::IntoIter: 'a,
{
    LazySequence::new(source)
}

/// Entry point for method chains on plain iterables: `vec![1, 2].lazy()`.
pub trait IntoLazySequence<'a>: IntoIterator {
    fn lazy(self) -> LazySequence<'a, Self::Item>;
}

impl<'a, I> IntoLazySequence<'a> for I
where
    I: IntoIterator,
    I::IntoIter: 'a,
{
    fn lazy(self) -> LazySequence<'a, Self::Item> {
        LazySequence::new(self)
    }
}

impl<'a, T, I> Add<I> for LazySequence<'a, T>
where
    T: 'a,
    I: IntoIterator<Item = T>,
    I::IntoIter: 'a,
{
    type Output = LazySequence<'a, T>;

    fn add(self, rhs: I) -> Self::Output {
        self.chain(rhs)
    }
}

// Reflected concatenation: `iterable + sequence` keeps the left operand's
// elements first.
macro_rules! impl_reflected_add {
    ($($lhs:ty),* $(,)?) => {
        $(
            impl<'a, T> Add<LazySequence<'a, T>> for $lhs
            where
                T: 'a,
                $lhs: IntoIterator<Item = T>,
                <$lhs as IntoIterator>::IntoIter: 'a,
            {
                type Output = LazySequence<'a, T>;

                fn add(self, rhs: LazySequence<'a, T>) -> Self::Output {
                    LazySequence::new(self).chain(rhs)
                }
            }
        )*
    };
}

impl_reflected_add!(Vec<T>, VecDeque<T>, Option<T>, Range<T>, RangeInclusive<T>);

impl<'a, T, const N: usize> Add<LazySequence<'a, T>> for [T; N]
where
    T: 'a,
{
    type Output = LazySequence<'a, T>;

    fn add(self, rhs: LazySequence<'a, T>) -> Self::Output {
        LazySequence::new(self).chain(rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_and_iterates() {
        let seq = wrap(vec![1, 2, 3]);
        assert_eq!(seq.collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    #[test]
    fn hint_counts_down() {
        let mut seq = wrap(0..3);
        assert_eq!(seq.length_hint(), LengthHint::Exact(3));
        assert_eq!(seq.next(), Some(0));
        assert_eq!(seq.length_hint(), LengthHint::Exact(2));
        seq.next();
        seq.next();
        assert_eq!(seq.length_hint(), LengthHint::Exact(0));
        assert_eq!(seq.next(), None);
        assert_eq!(seq.length_hint(), LengthHint::Exact(0));
    }

    #[test]
    fn exhaustion_leaves_stale_hint_alone() {
        let mut seq = wrap(vec![1, 2]).with_length_hint(LengthHint::Estimate(5));
        assert_eq!(seq.by_ref().count(), 2);
        assert_eq!(seq.next(), None);
        assert_eq!(seq.length_hint(), LengthHint::Estimate(3));
    }

    #[test]
    fn unknown_sources_stay_unknown() {
        let seq = wrap(std::iter::from_fn(|| Some(1)));
        assert_eq!(seq.length_hint(), LengthHint::Unknown);
    }

    #[test]
    fn from_iterables_concatenates_in_order() {
        let seq = LazySequence::from_iterables(vec![vec![1, 2], vec![], vec![3]]);
        assert_eq!(seq.length_hint(), LengthHint::Exact(3));
        assert_eq!(seq.collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    #[test]
    fn from_iterables_undercounts_unknown_parts() {
        let mut remaining = 2;
        let unsized_part = std::iter::from_fn(move || {
            remaining -= 1;
            (remaining >= 0).then_some(9)
        });
        let parts: Vec<Box<dyn Iterator<Item = i32>>> =
            vec![Box::new(0..2), Box::new(unsized_part)];
        let seq = LazySequence::from_iterables(parts);
        assert_eq!(seq.length_hint(), LengthHint::Estimate(2));
        assert_eq!(seq.collect::<Vec<_>>(), vec![0, 1, 9, 9]);
    }

    #[test]
    fn from_iterables_hint_survives_transformation() {
        let seq = LazySequence::from_iterables(vec![vec![1, 2], vec![3]]).map(|x| x + 1);
        assert_eq!(seq.length_hint(), LengthHint::Exact(3));
        assert_eq!(seq.size_hint(), (3, Some(3)));
        assert_eq!(seq.collect::<Vec<_>>(), vec![2, 3, 4]);
    }

    #[test]
    fn overridden_hint_survives_map() {
        let mut remaining = 5;
        let source = std::iter::from_fn(move || {
            remaining -= 1;
            (remaining >= 0).then_some(remaining)
        });
        let mut seq = wrap(source)
            .with_length_hint(LengthHint::Exact(5))
            .map(|x| x * 2);
        assert_eq!(seq.length_hint(), LengthHint::Exact(5));
        seq.next();
        assert_eq!(seq.length_hint(), LengthHint::Exact(4));
    }

    #[test]
    fn concat_forms_agree_on_hints() {
        let added = (wrap(vec![1, 2]) + vec![3]).map(|x| x * 2);
        let folded = LazySequence::from_iterables([vec![1, 2], vec![3]]).map(|x| x * 2);
        assert_eq!(added.length_hint(), folded.length_hint());
        assert_eq!(added.collect::<Vec<_>>(), folded.collect::<Vec<_>>());
    }

    #[test]
    fn add_preserves_order() {
        let seq = wrap(vec![1, 2]) + wrap(vec![3, 4]);
        assert_eq!(seq.length_hint(), LengthHint::Exact(4));
        assert_eq!(seq.collect::<Vec<_>>(), vec![1, 2, 3, 4]);

        let seq = wrap(vec![1]) + vec![2] + (3..5);
        assert_eq!(seq.collect::<Vec<_>>(), vec![1, 2, 3, 4]);
    }

    #[test]
    fn reflected_add_puts_left_operand_first() {
        assert_eq!((vec![0] + wrap(vec![1, 2])).collect::<Vec<_>>(), vec![0, 1, 2]);
        assert_eq!(((0..2) + wrap(vec![5])).collect::<Vec<_>>(), vec![0, 1, 5]);
        assert_eq!(([7, 8] + wrap(vec![9])).collect::<Vec<_>>(), vec![7, 8, 9]);
        assert_eq!((Some(1) + wrap(vec![2])).collect::<Vec<_>>(), vec![1, 2]);
        let deque: VecDeque<_> = [3, 4].into();
        assert_eq!((deque + wrap(0..1)).collect::<Vec<_>>(), vec![3, 4, 0]);
    }

    #[test]
    fn add_uses_only_remaining_elements() {
        let mut left = wrap(vec![1, 2, 3]);
        left.next();
        let seq = left + vec![4];
        assert_eq!(seq.length_hint(), LengthHint::Exact(3));
        assert_eq!(seq.collect::<Vec<_>>(), vec![2, 3, 4]);
    }

    #[test]
    fn borrows_from_the_caller() {
        let data = vec![String::from("a"), String::from("b")];
        let seq = data.iter().lazy().map(|s| s.len());
        assert_eq!(seq.sum::<usize>(), 2);
    }
}
