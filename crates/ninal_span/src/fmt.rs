use super::SpanRange;
use std::fmt;

impl fmt::Debug for SpanRange {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        if self.is_dummy {
            write!(fmt, "DummySpan({})", self.start)
        }

        else {
            write!(fmt, "Span({}, {})", self.start, self.end)
        }
    }
}
