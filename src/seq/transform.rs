use std::{cmp::Ordering, ops::Add};

use crate::{
    adapters::{Cycle, GroupBy, Transpose, TransposeLongest, Unpack},
    error::{Result, SequenceError},
};

use super::LazySequence;

impl<'a, T> LazySequence<'a, T>
where
    T: 'a,
{
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnMut(&T) -> bool + 'a,
    {
        self.rewrap(|it| it.filter(predicate))
    }

    /// Keeps the elements for which `predicate` is false.
    pub fn filter_false<P>(self, mut predicate: P) -> Self
    where
        P: FnMut(&T) -> bool + 'a,
    {
        self.rewrap(move |it| it.filter(move |item| !predicate(item)))
    }

    pub fn map<U, F>(self, f: F) -> LazySequence<'a, U>
    where
        F: FnMut(T) -> U + 'a,
    {
        self.rewrap_same_length(|it| it.map(f))
    }

    /// Pairs each element with a running index beginning at `start`.
    pub fn enumerate(self, start: usize) -> LazySequence<'a, (usize, T)> {
        self.rewrap_same_length(|it| (start..).zip(it))
    }

    /// Pairs elements with those of `other`, stopping when either runs out.
    pub fn zip<I>(self, other: I) -> LazySequence<'a, (T, I::Item)>
    where
        I: IntoIterator,
        I::IntoIter: 'a,
    {
        self.rewrap(|it| it.zip(other))
    }

    /// Treats every element as a row and yields the columns, stopping at the
    /// shortest row.
    ///
    /// The outer sequence is drained up front to collect the rows; the rows
    /// themselves are advanced lazily.
    pub fn transpose(self) -> LazySequence<'a, Vec<T::Item>>
    where
        T: IntoIterator,
        T::IntoIter: 'a,
    {
        let rows: Vec<_> = self.upstream.map(IntoIterator::into_iter).collect();
        log::debug!("transpose collected {} rows", rows.len());
        LazySequence::new(Transpose::new(rows))
    }

    /// Like [`transpose`](Self::transpose), but continues until the longest
    /// row is exhausted, padding shorter rows with `fill`.
    pub fn zip_longest(self, fill: T::Item) -> LazySequence<'a, Vec<T::Item>>
    where
        T: IntoIterator,
        T::IntoIter: 'a,
        T::Item: Clone + 'a,
    {
        let rows: Vec<_> = self.upstream.map(IntoIterator::into_iter).collect();
        log::debug!("zip_longest collected {} rows", rows.len());
        LazySequence::new(TransposeLongest::new(rows, fill))
    }

    /// Folds the remaining elements left to right, seeded with the first.
    pub fn reduce<F>(self, f: F) -> Result<T>
    where
        F: FnMut(T, T) -> T,
    {
        self.upstream.reduce(f).ok_or(SequenceError::EmptyFold)
    }

    /// Folds the remaining elements onto `initial`. An empty sequence gives
    /// back `initial`.
    pub fn reduce_with<B, F>(self, initial: B, f: F) -> B
    where
        F: FnMut(B, T) -> B,
    {
        self.upstream.fold(initial, f)
    }

    /// Eager: collects everything, then yields it in ascending order, or
    /// descending when `reverse` is set. The sort is stable in both
    /// directions.
    pub fn sorted(self, reverse: bool) -> Self
    where
        T: Ord,
    {
        self.sort_eagerly(T::cmp, reverse)
    }

    /// Eager, stable sort on a derived key.
    pub fn sorted_by_key<K, F>(self, mut key: F, reverse: bool) -> Self
    where
        K: Ord,
        F: FnMut(&T) -> K,
    {
        self.sort_eagerly(move |a, b| key(a).cmp(&key(b)), reverse)
    }

    /// Eager, stable sort with a custom comparison.
    pub fn sorted_by<F>(self, compare: F) -> Self
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        self.sort_eagerly(compare, false)
    }

    fn sort_eagerly<F>(self, mut compare: F, reverse: bool) -> Self
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        let mut items = self.collect_presized();
        log::debug!("sorting {} elements", items.len());
        if reverse {
            // Reversing the comparison, not the output, keeps equal
            // elements in their original order.
            items.sort_by(|a, b| compare(a, b).reverse());
        } else {
            items.sort_by(compare);
        }
        LazySequence::new(items)
    }

    /// Eager: collects everything, then yields back to front.
    pub fn reversed(self) -> Self {
        let items = self.collect_presized();
        log::debug!("reversing {} elements", items.len());
        LazySequence::new(items.into_iter().rev())
    }

    /// Running fold: yields the first element, then `f(total, next)` for each
    /// element after it.
    pub fn accumulate<F>(self, mut f: F) -> Self
    where
        T: Clone,
        F: FnMut(T, T) -> T + 'a,
    {
        self.rewrap_same_length(move |it| {
            it.scan(None, move |total: &mut Option<T>, item| {
                let next = match total.take() {
                    Some(total) => f(total, item),
                    None => item,
                };
                *total = Some(next.clone());
                Some(next)
            })
        })
    }

    /// [`accumulate`](Self::accumulate) with addition.
    pub fn running_sum(self) -> Self
    where
        T: Add<Output = T> + Clone,
    {
        self.accumulate(|total, item| total + item)
    }

    /// Keeps the elements whose matching selector is `true`. Stops when
    /// either side runs out.
    pub fn compress<S>(self, selectors: S) -> Self
    where
        S: IntoIterator<Item = bool>,
        S::IntoIter: 'a,
    {
        let selectors = selectors.into_iter();
        self.rewrap(move |it| {
            it.zip(selectors)
                .filter_map(|(item, keep)| keep.then_some(item))
        })
    }

    /// Skips elements while `predicate` holds, then yields everything else.
    pub fn drop_while<P>(self, predicate: P) -> Self
    where
        P: FnMut(&T) -> bool + 'a,
    {
        self.rewrap(|it| it.skip_while(predicate))
    }

    pub fn take_while<P>(self, predicate: P) -> Self
    where
        P: FnMut(&T) -> bool + 'a,
    {
        self.rewrap(|it| it.take_while(predicate))
    }

    /// Groups runs of equal adjacent elements as `(element, run)` pairs.
    pub fn group_by(self) -> LazySequence<'a, (T, Vec<T>)>
    where
        T: PartialEq + Clone,
    {
        self.group_by_key(T::clone)
    }

    /// Groups runs of adjacent elements that share a key. A key that shows
    /// up again after a different one starts a new group.
    pub fn group_by_key<K, F>(self, key: F) -> LazySequence<'a, (K, Vec<T>)>
    where
        K: PartialEq,
        F: FnMut(&T) -> K + 'a,
    {
        self.rewrap(|it| GroupBy::new(it, key))
    }

    /// Shorthand for `slice_with(0, Some(stop), 1)`.
    pub fn slice(self, stop: usize) -> Self {
        self.rewrap(|it| it.take(stop))
    }

    /// Yields the elements at `start`, `start + step`, ... that come before
    /// `stop`. A missing `stop` runs to the end of the sequence.
    pub fn slice_with(self, start: usize, stop: Option<usize>, step: usize) -> Result<Self> {
        if step == 0 {
            return Err(SequenceError::ZeroStep);
        }
        let skipped = self.upstream.skip(start);
        let window: Box<dyn Iterator<Item = T> + 'a> = match stop {
            Some(stop) => Box::new(skipped.take(stop.saturating_sub(start))),
            None => Box::new(skipped),
        };
        Ok(LazySequence::new(window.step_by(step)))
    }

    /// Calls `f` with the fields of each tuple element as its arguments.
    pub fn star_map<F>(self, mut f: F) -> LazySequence<'a, T::Output>
    where
        T: Unpack<F>,
        F: 'a,
    {
        self.rewrap_same_length(move |it| it.map(move |args| args.unpack_into(&mut f)))
    }

    /// Chains one level of nested iterables into a single sequence.
    pub fn flatten(self) -> LazySequence<'a, T::Item>
    where
        T: IntoIterator,
        T::IntoIter: 'a,
    {
        self.rewrap(|it| it.flatten())
    }

    /// Repeats the elements forever. Elements are saved during the first
    /// pass, so the source is only consumed once.
    pub fn cycle(self) -> Self
    where
        T: Clone,
    {
        self.rewrap(Cycle::new)
    }
}
