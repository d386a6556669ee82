use std::iter::Peekable;

/// Groups runs of consecutive elements sharing a key.
///
/// Each group is collected as it is produced, so a group stays valid after
/// the iterator moves on. Only adjacent elements are grouped; a key that
/// reappears later starts a new group.
pub struct GroupBy<I, F>
where
    I: Iterator,
{
    source: Peekable<I>,
    key: F,
}

impl<I, F> GroupBy<I, F>
where
    I: Iterator,
{
    pub fn new(source: I, key: F) -> Self {
        GroupBy {
            source: source.peekable(),
            key,
        }
    }
}

impl<I, F, K> Iterator for GroupBy<I, F>
where
    I: Iterator,
    F: FnMut(&I::Item) -> K,
    K: PartialEq,
{
    type Item = (K, Vec<I::Item>);

    fn next(&mut self) -> Option<Self::Item> {
        let first = self.source.next()?;
        let group_key = (self.key)(&first);
        let mut group = vec![first];
        while let Some(item) = self
            .source
            .next_if(|candidate| (self.key)(candidate) == group_key)
        {
            group.push(item);
        }
        Some((group_key, group))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, upper) = self.source.size_hint();
        (lower.min(1), upper)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_adjacent_runs() {
        let groups: Vec<_> = GroupBy::new([1, 1, 3, 2, 2, 1].into_iter(), |x: &i32| *x).collect();
        assert_eq!(
            groups,
            vec![(1, vec![1, 1]), (3, vec![3]), (2, vec![2, 2]), (1, vec![1])]
        );
    }

    #[test]
    fn empty_source_has_no_groups() {
        let mut groups = GroupBy::new(std::iter::empty::<i32>(), |x: &i32| *x);
        assert_eq!(groups.next(), None);
    }
}
