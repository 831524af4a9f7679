use crate::ClapError;
use crate::lex::Token;
use hmath::BigInt;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ArgKind {
    None,
    Integer,
    RawInput,
}

impl ArgKind {
    pub fn render_error(&self) -> &'static str {
        match self {
            ArgKind::None => "nothing",
            ArgKind::Integer => "an integer",
            ArgKind::RawInput => "a code snippet",
        }
    }

    pub fn parse_token(&self, token: &Token) -> Result<Arg, ClapError> {
        match self {
            ArgKind::None => unreachable!(),
            ArgKind::RawInput => Ok(Arg::RawInput(token.buffer.to_string())),
            ArgKind::Integer => match BigInt::from_string(&token.buffer) {
                Ok(n) => Ok(Arg::Integer(n)),
                Err(_) => Err(ClapError::invalid_argument(*self, &token.buffer, token.span)),
            },
        }
    }
}

pub enum Arg {
    Path(String),
    Integer(BigInt),
    RawInput(String),
}
