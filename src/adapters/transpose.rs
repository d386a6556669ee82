/// Advances a fixed set of rows in lock-step, yielding one column per step
/// until the shortest row runs out.
pub struct Transpose<R> {
    rows: Vec<R>,
    done: bool,
}

impl<R> Transpose<R>
where
    R: Iterator,
{
    pub fn new(rows: Vec<R>) -> Self {
        let done = rows.is_empty();
        Transpose { rows, done }
    }
}

impl<R> Iterator for Transpose<R>
where
    R: Iterator,
{
    type Item = Vec<R::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let column: Option<Vec<_>> = self.rows.iter_mut().map(Iterator::next).collect();
        if column.is_none() {
            self.done = true;
        }
        column
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            return (0, Some(0));
        }
        self.rows
            .iter()
            .map(Iterator::size_hint)
            .fold((usize::MAX, None), |(lower, upper), (row_lower, row_upper)| {
                let upper = match (upper, row_upper) {
                    (Some(a), Some(b)) => Some(std::cmp::min(a, b)),
                    (a, b) => a.or(b),
                };
                (lower.min(row_lower), upper)
            })
    }
}

/// Like [`Transpose`], but runs until the longest row is exhausted, padding
/// finished rows with a fill value.
pub struct TransposeLongest<R>
where
    R: Iterator,
{
    rows: Vec<Option<R>>,
    fill: R::Item,
}

impl<R> TransposeLongest<R>
where
    R: Iterator,
{
    pub fn new(rows: Vec<R>, fill: R::Item) -> Self {
        TransposeLongest {
            rows: rows.into_iter().map(Some).collect(),
            fill,
        }
    }
}

impl<R> Iterator for TransposeLongest<R>
where
    R: Iterator,
    R::Item: Clone,
{
    type Item = Vec<R::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut column = Vec::with_capacity(self.rows.len());
        let mut any_live = false;
        for slot in self.rows.iter_mut() {
            let item = match slot.as_mut().and_then(Iterator::next) {
                Some(item) => {
                    any_live = true;
                    item
                }
                None => {
                    *slot = None;
                    self.fill.clone()
                }
            };
            column.push(item);
        }
        any_live.then_some(column)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.rows
            .iter()
            .flatten()
            .map(Iterator::size_hint)
            .fold((0, Some(0)), |(lower, upper), (row_lower, row_upper)| {
                let upper = match (upper, row_upper) {
                    (Some(a), Some(b)) => Some(std::cmp::max(a, b)),
                    _ => None,
                };
                (lower.max(row_lower), upper)
            })
    }
}
