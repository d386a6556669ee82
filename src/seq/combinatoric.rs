//! Combinatoric re-wrappers. Each yields its tuples as `Vec<T>`, in the
//! lexicographic order of the input positions.

use itertools::Itertools;

use super::LazySequence;

impl<'a, T> LazySequence<'a, T>
where
    T: Clone + 'a,
{
    /// All `r`-length subsequences, without repeated positions.
    pub fn combinations(self, r: usize) -> LazySequence<'a, Vec<T>> {
        self.rewrap(|it| it.combinations(r))
    }

    /// All `r`-length subsequences, allowing a position to repeat.
    pub fn combinations_with_replacement(self, r: usize) -> LazySequence<'a, Vec<T>> {
        self.rewrap(|it| it.combinations_with_replacement(r))
    }

    /// All `r`-length orderings. With no `r`, orderings use every element.
    ///
    /// Eager when `r` is `None`, since the full length is needed first.
    pub fn permutations(self, r: Option<usize>) -> LazySequence<'a, Vec<T>> {
        match r {
            Some(r) => self.rewrap(|it| it.permutations(r)),
            None => {
                let pool = self.collect_presized();
                log::debug!("permuting a pool of {} elements", pool.len());
                let r = pool.len();
                LazySequence::new(pool.into_iter().permutations(r))
            }
        }
    }

    /// Cartesian product of the sequence with itself, `repeat` times.
    ///
    /// Eager: the pool is collected once and shared by every position.
    pub fn product(self, repeat: usize) -> LazySequence<'a, Vec<T>> {
        let pool = self.collect_presized();
        log::debug!("product of {} elements repeated {repeat} times", pool.len());
        if repeat == 0 {
            // The empty product has exactly one, empty, tuple.
            return LazySequence::new(std::iter::once(Vec::new()));
        }
        LazySequence::new(
            std::iter::repeat(pool.into_iter())
                .take(repeat)
                .multi_cartesian_product(),
        )
    }
}
