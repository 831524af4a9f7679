use std::cell::RefCell;
use std::rc::Rc;

/// Where `print` writes to.
pub trait OutputSink {
    fn emit_line(&mut self, line: String);
}

pub struct StdoutSink;

impl OutputSink for StdoutSink {
    fn emit_line(&mut self, line: String) {
        println!("{line}");
    }
}

/// Clones share the same buffer: keep one and give the other to `EvalCtxt`.
#[derive(Clone, Default)]
pub struct BufferedSink {
    lines: Rc<RefCell<Vec<String>>>,
}

impl BufferedSink {
    pub fn new() -> Self {
        BufferedSink::default()
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.borrow().clone()
    }

    pub fn take_lines(&self) -> Vec<String> {
        std::mem::take(&mut *self.lines.borrow_mut())
    }
}

impl OutputSink for BufferedSink {
    fn emit_line(&mut self, line: String) {
        self.lines.borrow_mut().push(line);
    }
}
