//! Splitting one sequence into several independent cursors.
//!
//! All cursors share one upstream. An element is pulled from the upstream
//! the first time any cursor needs it and is buffered, with a count of the
//! cursors that still have to read it, until the last of them does.

mod counter;

use std::{cell::RefCell, collections::VecDeque, iter::Fuse, rc::Rc};

use self::counter::ReaderCount;
use crate::seq::LazySequence;

struct Pending<T> {
    item: T,
    readers: ReaderCount,
}

struct TeeBuffer<'a, T> {
    upstream: Fuse<Box<dyn Iterator<Item = T> + 'a>>,
    pending: VecDeque<Pending<T>>,
    /// Absolute position of the front of `pending`.
    front: usize,
    live_cursors: usize,
}

impl<'a, T> TeeBuffer<'a, T>
where
    T: Clone,
{
    fn new(upstream: Box<dyn Iterator<Item = T> + 'a>, cursors: usize) -> Self {
        TeeBuffer {
            upstream: upstream.fuse(),
            pending: VecDeque::new(),
            front: 0,
            live_cursors: cursors,
        }
    }

    fn read(&mut self, position: usize) -> Option<T> {
        let offset = position - self.front;
        if offset == self.pending.len() {
            return self.pull();
        }

        let entry = &mut self.pending[offset];
        if !entry.readers.release() {
            return Some(entry.item.clone());
        }

        // Counts never decrease toward the back, so an entry that nobody
        // else needs is always the front one.
        debug_assert_eq!(offset, 0);
        let entry = self.pending.pop_front()?;
        self.front += 1;
        log::trace!("tee released element {}", self.front - 1);
        Some(entry.item)
    }

    fn pull(&mut self) -> Option<T> {
        let item = self.upstream.next()?;
        let others = self.live_cursors - 1;
        if others == 0 {
            self.front += 1;
            return Some(item);
        }
        log::trace!(
            "tee buffered element {} for {others} cursors",
            self.front + self.pending.len()
        );
        self.pending.push_back(Pending {
            item: item.clone(),
            readers: ReaderCount::new(others),
        });
        Some(item)
    }

    /// Gives up the claims of a cursor at `position` on everything it has not
    /// read yet.
    fn detach(&mut self, position: usize) {
        let offset = position - self.front;
        for entry in self.pending.iter_mut().skip(offset) {
            entry.readers.release();
        }
        while self
            .pending
            .front()
            .is_some_and(|entry| entry.readers.is_zero())
        {
            self.pending.pop_front();
            self.front += 1;
        }
        self.live_cursors -= 1;
        log::trace!(
            "tee cursor detached, {} left holding {} buffered",
            self.live_cursors,
            self.pending.len()
        );
    }

    fn remaining_from(&self, position: usize) -> (usize, Option<usize>) {
        let buffered = self.front + self.pending.len() - position;
        let (lower, upper) = self.upstream.size_hint();
        (
            lower.saturating_add(buffered),
            upper.and_then(|upper| upper.checked_add(buffered)),
        )
    }
}

struct TeeCursor<'a, T>
where
    T: Clone,
{
    buffer: Rc<RefCell<TeeBuffer<'a, T>>>,
    position: usize,
}

impl<T> Iterator for TeeCursor<'_, T>
where
    T: Clone,
{
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let item = self.buffer.borrow_mut().read(self.position)?;
        self.position += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.buffer.borrow().remaining_from(self.position)
    }
}

impl<T> Drop for TeeCursor<'_, T>
where
    T: Clone,
{
    fn drop(&mut self) {
        self.buffer.borrow_mut().detach(self.position);
    }
}

impl<'a, T> LazySequence<'a, T>
where
    T: Clone + 'a,
{
    /// Splits the sequence into `n` cursors that each yield every remaining
    /// element, in order, and can be advanced independently.
    ///
    /// Elements are buffered only while some cursor still has to read them,
    /// so cursors that move in rough step keep the buffer small. A cursor
    /// that falls far behind holds everything the others have read since.
    pub fn tee(self, n: usize) -> Vec<LazySequence<'a, T>> {
        if n == 0 {
            return Vec::new();
        }
        let hint = self.length_hint();
        let buffer = Rc::new(RefCell::new(TeeBuffer::new(self.into_upstream(), n)));
        log::debug!("tee split into {n} cursors");
        (0..n)
            .map(|_| {
                let cursor = TeeCursor {
                    buffer: Rc::clone(&buffer),
                    position: 0,
                };
                LazySequence::new(cursor).with_length_hint(hint)
            })
            .collect()
    }
}
