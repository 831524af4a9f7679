#![deny(unused_imports)]

use log::{debug, info};
use ninal_number::NinalNumber;
use ninal_span::SpanRange;
use ninal_value::{List, ListBuilder, Symbol, Value};

mod error;

#[cfg(test)]
mod tests;

pub use error::{EofIn, ReadError, ReadErrorKind};

/// `(((...)))` deeper than this is an error. Building and evaluating
/// a form recurses once per level, so it bounds their recursion too.
pub const MAX_NESTING: usize = 256;

/// Recursive descent reader. It doesn't tokenize: each `parse_*` reads bytes
/// straight from the buffer and the cursor only moves forward.
pub struct Reader<'a> {
    buffer: &'a [u8],

    // currently reading `self.buffer[self.cursor]`
    cursor: usize,

    // number of unclosed `(`s
    depth: usize,
}

impl<'a> Reader<'a> {
    pub fn new(buffer: &'a [u8]) -> Self {
        Reader { buffer, cursor: 0, depth: 0 }
    }

    /// Resumes reading where a previous reader stopped.
    pub fn starting_at(buffer: &'a [u8], cursor: usize) -> Self {
        Reader { buffer, cursor: cursor.min(buffer.len()), depth: 0 }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// `true` if there's nothing but whitespaces and commas left.
    pub fn at_end(&mut self) -> Result<bool, ReadError> {
        Ok(self.current(true)?.is_none())
    }

    pub fn parse_list(&mut self) -> Result<List, ReadError> {
        let open_at = self.cursor;

        match self.current(true)? {
            Some(b'(') => {},
            Some(c) => {
                return Err(ReadError::expected(b'(', c, SpanRange::new(self.cursor, self.cursor + 1)));
            },
            None => {
                return Err(ReadError::premature_eof(EofIn::List, SpanRange::new(open_at, open_at)));
            },
        }

        // `current` may have skipped some whitespaces
        let open_at = self.cursor;

        if self.depth >= MAX_NESTING {
            return Err(ReadError::too_deeply_nested(MAX_NESTING, SpanRange::new(open_at, open_at + 1)));
        }

        self.depth += 1;
        self.cursor += 1;

        let result = self.parse_elements(open_at);
        self.depth -= 1;

        result
    }

    // reads atoms until the `)` that closes the `(` at `open_at`
    fn parse_elements(&mut self, open_at: usize) -> Result<List, ReadError> {
        let mut builder = ListBuilder::new();

        loop {
            match self.current(true)? {
                Some(b')') => {
                    break;
                },
                Some(_) => {
                    let atom = self.parse_atom()?;
                    builder.append(atom);
                },
                None => {
                    return Err(ReadError::premature_eof(EofIn::List, SpanRange::new(open_at, open_at + 1)));
                },
            }
        }

        self.cursor += 1;

        Ok(builder.finish())
    }

    /// Called right after `current(true)` found `Some(_)`.
    fn parse_atom(&mut self) -> Result<Value, ReadError> {
        match self.current(true)? {
            Some(b'(') => Ok(Value::List(self.parse_list()?)),
            Some(b'0'..=b'9') => self.parse_number(),
            Some(quote @ (b'\'' | b'"')) => self.parse_text(quote),
            Some(_) => self.parse_symbol(),

            // unreachable in practice, but let's not panic on it
            None => Err(ReadError::premature_eof(EofIn::List, SpanRange::new(self.cursor, self.cursor))),
        }
    }

    fn parse_number(&mut self) -> Result<Value, ReadError> {
        let start = self.cursor;

        while let Some(b'0'..=b'9') = self.current(false)? {
            self.cursor += 1;
        }

        let span = SpanRange::new(start, self.cursor);

        match NinalNumber::from_digits(&self.buffer[start..self.cursor]) {
            Ok(n) => Ok(Value::from_number(n)),
            Err(e) => Err(ReadError::invalid_numeral(e, span)),
        }
    }

    // there's no escape: it stops at the next `quote`
    fn parse_text(&mut self, quote: u8) -> Result<Value, ReadError> {
        let open_at = self.cursor;
        self.cursor += 1;

        loop {
            match self.current(false)? {
                Some(c) if c == quote => {
                    break;
                },
                Some(_) => {
                    self.cursor += 1;
                },
                None => {
                    return Err(ReadError::premature_eof(EofIn::Text(quote), SpanRange::new(open_at, open_at + 1)));
                },
            }
        }

        // only ascii bytes at this point
        let text = String::from_utf8_lossy(&self.buffer[(open_at + 1)..self.cursor]).to_string();
        self.cursor += 1;

        Ok(Value::new_text(&text))
    }

    // `(` doesn't terminate a symbol: `a(b` is a single symbol
    fn parse_symbol(&mut self) -> Result<Value, ReadError> {
        let start = self.cursor;

        loop {
            match self.current(false)? {
                None
                | Some(b')' | b' ' | b'\t' | b'\r' | b'\n' | b',') => {
                    break;
                },
                Some(_) => {
                    self.cursor += 1;
                },
            }
        }

        Ok(Value::Symbol(Symbol::new(&self.buffer[start..self.cursor])))
    }

    /// `None` at the end of the buffer. The cursor points to the returned byte.
    fn current(&mut self, skip_space: bool) -> Result<Option<u8>, ReadError> {
        loop {
            let c = match self.buffer.get(self.cursor) {
                Some(c) => *c,
                None => {
                    return Ok(None);
                },
            };

            if c > 127 {
                return Err(ReadError::non_ascii(c, SpanRange::new(self.cursor, self.cursor + 1)));
            }

            if skip_space && is_insignificant(c) {
                self.cursor += 1;
                continue;
            }

            return Ok(Some(c));
        }
    }
}

fn is_insignificant(c: u8) -> bool {
    matches!(c, b' ' | b'\t' | b'\r' | b'\n' | b',')
}

/// Reads every top-level form in `buffer`. It stops at the first error.
pub fn read_all(buffer: &[u8]) -> Result<Vec<List>, ReadError> {
    info!("ninal_reader::read_all(), reading {} bytes", buffer.len());

    let mut reader = Reader::new(buffer);
    let mut result = vec![];

    while !reader.at_end()? {
        let form = reader.parse_list()?;
        debug!("ninal_reader::read_all(), read a form of {} elements, cursor: {}", form.len(), reader.cursor());

        result.push(form);
    }

    Ok(result)
}
