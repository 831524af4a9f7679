use ninal_error::{ExtraErrInfo, NinalError, NinalErrorKind};
use ninal_number::NumericParseError;
use ninal_span::SpanRange;
use smallvec::{SmallVec, smallvec};

#[derive(Clone, Debug)]
pub struct ReadError {
    kind: ReadErrorKind,
    spans: SmallVec<[SpanRange; 1]>,
    extra: ExtraErrInfo,
}

impl ReadError {
    pub fn non_ascii(c: u8, span: SpanRange) -> Self {
        ReadError {
            kind: ReadErrorKind::NonAscii(c),
            spans: smallvec![span],
            extra: ExtraErrInfo::none(),
        }
    }

    pub fn premature_eof(inside: EofIn, span: SpanRange) -> Self {
        ReadError {
            kind: ReadErrorKind::PrematureEof(inside),
            spans: smallvec![span],
            extra: ExtraErrInfo::none(),
        }
    }

    pub fn expected(expected: u8, got: u8, span: SpanRange) -> Self {
        ReadError {
            kind: ReadErrorKind::Expected { expected, got },
            spans: smallvec![span],
            extra: ExtraErrInfo::none(),
        }
    }

    pub fn too_deeply_nested(limit: usize, span: SpanRange) -> Self {
        ReadError {
            kind: ReadErrorKind::TooDeeplyNested { limit },
            spans: smallvec![span],
            extra: ExtraErrInfo::none(),
        }
    }

    pub fn invalid_numeral(e: NumericParseError, span: SpanRange) -> Self {
        ReadError {
            kind: ReadErrorKind::InvalidNumeral(e),
            spans: smallvec![span],
            extra: ExtraErrInfo::none(),
        }
    }
}

impl NinalError<ReadErrorKind> for ReadError {
    fn get_mut_error_info(&mut self) -> &mut ExtraErrInfo {
        &mut self.extra
    }

    fn get_error_info(&self) -> &ExtraErrInfo {
        &self.extra
    }

    fn get_spans(&self) -> &[SpanRange] {
        &self.spans
    }

    fn get_spans_mut(&mut self) -> &mut SmallVec<[SpanRange; 1]> {
        &mut self.spans
    }

    fn err_kind(&self) -> &ReadErrorKind {
        &self.kind
    }

    fn index(&self) -> u32 {
        1
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum EofIn {
    List,

    // the quote character
    Text(u8),
}

#[derive(Clone, Debug, PartialEq)]
pub enum ReadErrorKind {
    NonAscii(u8),
    PrematureEof(EofIn),
    Expected { expected: u8, got: u8 },
    InvalidNumeral(NumericParseError),
    TooDeeplyNested { limit: usize },
}

impl NinalErrorKind for ReadErrorKind {
    fn msg(&self) -> String {
        match self {
            ReadErrorKind::NonAscii(c) => format!("not an ASCII character: `0x{c:02x}`"),
            ReadErrorKind::PrematureEof(EofIn::List) => String::from("premature end of file while reading a list"),
            ReadErrorKind::PrematureEof(EofIn::Text(q)) => format!("premature end of file while reading a text literal starting with `{}`", *q as char),
            ReadErrorKind::Expected { expected, got } => format!("expected `{}`, got `{}`", *expected as char, render_byte(*got)),
            ReadErrorKind::InvalidNumeral(e) => format!("invalid numeral: {e:?}"),
            ReadErrorKind::TooDeeplyNested { limit } => format!("lists are nested deeper than {limit} levels"),
        }
    }

    fn help(&self) -> String {
        match self {
            ReadErrorKind::NonAscii(_) => String::from("Only ASCII source text is supported."),
            ReadErrorKind::PrematureEof(EofIn::List) => String::from("There's an unclosed `(`."),
            ReadErrorKind::PrematureEof(EofIn::Text(q)) => format!("There's no escape in text literals. It ends at the next `{}`.", *q as char),
            ReadErrorKind::Expected { .. } => String::from("Every top-level form is a parenthesized list."),
            _ => String::new(),
        }
    }

    fn index(&self) -> u32 {
        match self {
            ReadErrorKind::NonAscii(_) => 0,
            ReadErrorKind::PrematureEof(_) => 1,
            ReadErrorKind::Expected { .. } => 2,
            ReadErrorKind::InvalidNumeral(_) => 3,
            ReadErrorKind::TooDeeplyNested { .. } => 4,
        }
    }
}

fn render_byte(c: u8) -> String {
    match c {
        b'\n' => String::from("\\n"),
        b'\r' => String::from("\\r"),
        b'\t' => String::from("\\t"),
        c => (c as char).to_string(),
    }
}
