/// Number of tee cursors that still owe a read of one buffered element.
pub struct ReaderCount(usize);

impl ReaderCount {
    pub fn new(readers: usize) -> Self {
        ReaderCount(readers)
    }

    /// Records one read. Returns true once no reader is left.
    pub fn release(&mut self) -> bool {
        self.0 = self.0.checked_sub(1).expect("Reader count underflow");
        self.0 == 0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }
}
