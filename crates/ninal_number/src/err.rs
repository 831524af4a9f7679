#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum NumericParseError {
    Empty,
    NotADigit(u8),
    Overflow,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum NumberError {
    DivisionByZero,
}
