use super::InternedString;
use crate::unintern_string;
use std::fmt;

// symbols in error messages are cut to `head...tail`
const RENDER_LIMIT: usize = 48;
const RENDER_KEEP: usize = 10;

impl InternedString {
    pub fn render_error(&self) -> String {
        let bytes = unintern_string(*self);

        if bytes.len() <= RENDER_LIMIT {
            return String::from_utf8_lossy(&bytes).to_string();
        }

        format!(
            "{}...{}",
            String::from_utf8_lossy(&bytes[..RENDER_KEEP]),
            String::from_utf8_lossy(&bytes[(bytes.len() - RENDER_KEEP)..]),
        )
    }
}

impl fmt::Display for InternedString {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(fmt, "{}", String::from_utf8_lossy(&unintern_string(*self)))
    }
}

impl fmt::Debug for InternedString {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(fmt, "InternedString({}, {:?})", self.0, String::from_utf8_lossy(&unintern_string(*self)))
    }
}
