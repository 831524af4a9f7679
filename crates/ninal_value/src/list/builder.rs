use super::List;
use crate::Value;

/// Lists are immutable. Use this to make one element by element.
#[derive(Default)]
pub struct ListBuilder {
    buffer: Vec<Value>,
}

impl ListBuilder {
    pub fn new() -> Self {
        ListBuilder { buffer: Vec::with_capacity(8) }
    }

    pub fn append(&mut self, value: Value) -> &mut Self {
        self.buffer.push(value);

        self
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// A snapshot of the current buffer. Appending to `self` later doesn't change it.
    pub fn to_list(&self) -> List {
        List::of(self.buffer.clone())
    }

    pub fn finish(self) -> List {
        List::of(self.buffer)
    }
}
