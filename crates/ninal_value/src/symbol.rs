use ninal_intern::{InternedString, intern_string, unintern_string};
use ninal_keyword::Keyword;
use std::fmt;

/// Two symbols with the same name are the same symbol.
#[derive(Clone, Copy, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Symbol(InternedString);

impl Symbol {
    pub fn new(name: &[u8]) -> Self {
        Symbol(intern_string(name))
    }

    pub fn name(&self) -> String {
        String::from_utf8_lossy(&unintern_string(self.0)).to_string()
    }

    pub fn as_bytes(&self) -> Vec<u8> {
        unintern_string(self.0)
    }

    pub fn interned(&self) -> InternedString {
        self.0
    }

    pub fn try_into_keyword(&self) -> Option<Keyword> {
        self.0.try_into_keyword()
    }

    pub fn render_error(&self) -> String {
        self.0.render_error()
    }
}

impl From<Keyword> for Symbol {
    fn from(k: Keyword) -> Self {
        Symbol(k.into())
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(fmt, "{}", self.0)
    }
}

impl fmt::Debug for Symbol {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(fmt, "Symbol({})", self.0)
    }
}
