/// Repeats a source forever, saving each element on the first pass.
///
/// Unlike `Iterator::cycle`, the source does not need to be `Clone`; the
/// elements do.
pub struct Cycle<I>
where
    I: Iterator,
{
    source: Option<I>,
    saved: Vec<I::Item>,
    replay: usize,
}

impl<I> Cycle<I>
where
    I: Iterator,
{
    pub fn new(source: I) -> Self {
        Cycle {
            source: Some(source),
            saved: Vec::new(),
            replay: 0,
        }
    }
}

impl<I> Iterator for Cycle<I>
where
    I: Iterator,
    I::Item: Clone,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        if let Some(source) = &mut self.source {
            match source.next() {
                Some(item) => {
                    self.saved.push(item.clone());
                    return Some(item);
                }
                None => {
                    log::debug!("cycle saved {} elements", self.saved.len());
                    self.source = None;
                }
            }
        }

        let item = self.saved.get(self.replay)?.clone();
        self.replay = (self.replay + 1) % self.saved.len();
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if !self.saved.is_empty() {
            return (usize::MAX, None);
        }
        match &self.source {
            Some(source) => match source.size_hint() {
                (_, Some(0)) => (0, Some(0)),
                (0, _) => (0, None),
                _ => (usize::MAX, None),
            },
            None => (0, Some(0)),
        }
    }
}
