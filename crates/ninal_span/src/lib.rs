#![deny(unused_imports)]

mod fmt;
mod render;

#[cfg(test)]
mod tests;

pub use render::{ColorScheme, render_spans};

/// A byte range in the source that's being interpreted.
/// There's only one source per run, so it doesn't have to remember a file.
#[derive(Clone, Copy, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct SpanRange {
    start: usize,  // inclusive
    end: usize,    // exclusive
    is_dummy: bool,
}

impl SpanRange {
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end);

        SpanRange { start, end, is_dummy: false }
    }

    /// Even though it's a dummy, it takes an argument: dummy index.
    /// When you encounter a dummy span while debugging, the index tells you who made it.
    pub fn dummy(dummy_index: usize) -> Self {
        SpanRange {
            start: dummy_index,
            end: dummy_index,
            is_dummy: true,
        }
    }

    pub fn is_dummy(&self) -> bool {
        self.is_dummy
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn end(&self) -> usize {
        self.end
    }

    pub fn first_char(&self) -> SpanRange {
        SpanRange::new(self.start, self.start + 1)
    }

    // `self.end` is exclusive
    pub fn last_char(&self) -> SpanRange {
        SpanRange::new(self.end.max(self.start + 1) - 1, self.end.max(self.start + 1))
    }

    #[must_use = "method returns a new span and does not mutate the original value"]
    pub fn merge(&self, other: SpanRange) -> Self {
        debug_assert!(self.end <= other.end);

        SpanRange::new(self.start, other.end)
    }

    /// (line, column), both 1-based
    pub fn line_col(&self, source: &[u8]) -> (usize, usize) {
        let mut line = 1;
        let mut col = 1;

        for c in source.iter().take(self.start) {
            if *c == b'\n' {
                line += 1;
                col = 1;
            }

            else {
                col += 1;
            }
        }

        (line, col)
    }
}
