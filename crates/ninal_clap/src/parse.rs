use crate::{Arg, ArgKind, ClapError, Flag};
use crate::lex::Token;
use ninal_span::SpanRange;

pub struct FlagWithArg {
    // `None` for the input path
    pub flag: Option<Flag>,
    pub flag_span: SpanRange,
    pub arg: Option<Arg>,
    pub arg_span: SpanRange,
}

/// It doesn't stop at the first error.
pub fn parse_cli(tokens: &[Token]) -> (Vec<FlagWithArg>, Vec<ClapError>) {
    let mut result = vec![];
    let mut errors = vec![];
    let mut index = 0;

    while let Some(token) = tokens.get(index) {
        index += 1;

        // a lone `-` is a path
        if !token.buffer.starts_with('-') || token.buffer.len() == 1 {
            result.push(FlagWithArg {
                flag: None,
                flag_span: token.span,
                arg: Some(Arg::Path(token.buffer.to_string())),
                arg_span: token.span,
            });
            continue;
        }

        let flag = match Flag::try_parse(token.buffer.as_bytes()) {
            Some(flag) => flag,
            None => {
                errors.push(ClapError::invalid_flag(&token.buffer, token.span));
                continue;
            },
        };

        match flag.arg_kind() {
            ArgKind::None => {
                result.push(FlagWithArg {
                    flag: Some(flag),
                    flag_span: token.span,
                    arg: None,
                    arg_span: token.span,
                });
            },

            // the next token is an arg even if it looks like a flag: `-v -1`
            kind => match tokens.get(index) {
                Some(arg_token) => {
                    index += 1;

                    match kind.parse_token(arg_token) {
                        Ok(arg) => {
                            result.push(FlagWithArg {
                                flag: Some(flag),
                                flag_span: token.span,
                                arg: Some(arg),
                                arg_span: arg_token.span,
                            });
                        },
                        Err(e) => {
                            errors.push(e);
                        },
                    }
                },
                None => {
                    errors.push(ClapError::no_arg(flag, kind, token.span));
                },
            },
        }
    }

    (result, errors)
}
