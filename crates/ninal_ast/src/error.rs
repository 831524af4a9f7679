use crate::ArgShape;
use ninal_error::{
    ExtraErrInfo,
    NinalError,
    NinalErrorKind,
    concat_commas,
    trim_long_string,
};
use ninal_keyword::Keyword;
use ninal_span::SpanRange;
use ninal_value::{Symbol, Value};
use smallvec::{SmallVec, smallvec};

/// Values don't remember where they're from, so these errors are created without spans.
/// The driver attaches the span of the top-level form.
#[derive(Clone, Debug)]
pub struct AstError {
    kind: AstErrorKind,
    spans: SmallVec<[SpanRange; 1]>,
    extra: ExtraErrInfo,
}

impl AstError {
    pub fn unknown_local_symbol(name: Symbol, suggestions: Vec<Symbol>) -> Self {
        AstError {
            kind: AstErrorKind::UnknownLocalSymbol { name, suggestions },
            spans: smallvec![],
            extra: ExtraErrInfo::none(),
        }
    }

    pub fn wrong_arity(form: Keyword, expected: usize, got: usize) -> Self {
        AstError {
            kind: AstErrorKind::WrongArity { form, expected, got },
            spans: smallvec![],
            extra: ExtraErrInfo::none(),
        }
    }

    /// `index` starts from 1: the head of the form is not an argument.
    pub fn invalid_argument(form: Keyword, index: usize, expected: ArgShape, got: Value) -> Self {
        AstError {
            kind: AstErrorKind::InvalidArgument { form, index, expected, got },
            spans: smallvec![],
            extra: ExtraErrInfo::none(),
        }
    }

    /// `index` is the argument that holds the parameter list.
    pub fn invalid_parameter_name(form: Keyword, index: usize, got: Value) -> Self {
        AstError {
            kind: AstErrorKind::InvalidParameterName { form, index, got },
            spans: smallvec![],
            extra: ExtraErrInfo::none(),
        }
    }

    pub fn too_deeply_nested(limit: usize) -> Self {
        AstError {
            kind: AstErrorKind::TooDeeplyNested { limit },
            spans: smallvec![],
            extra: ExtraErrInfo::none(),
        }
    }
}

impl NinalError<AstErrorKind> for AstError {
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

    fn err_kind(&self) -> &AstErrorKind {
        &self.kind
    }

    fn index(&self) -> u32 {
        2
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum AstErrorKind {
    UnknownLocalSymbol {
        name: Symbol,
        suggestions: Vec<Symbol>,
    },
    WrongArity {
        form: Keyword,
        expected: usize,
        got: usize,
    },
    InvalidArgument {
        form: Keyword,
        index: usize,
        expected: ArgShape,
        got: Value,
    },
    InvalidParameterName {
        form: Keyword,
        index: usize,
        got: Value,
    },
    TooDeeplyNested {
        limit: usize,
    },
}

impl NinalErrorKind for AstErrorKind {
    fn msg(&self) -> String {
        match self {
            AstErrorKind::UnknownLocalSymbol { name, .. } => format!("unknown local symbol `{}`", name.render_error()),
            AstErrorKind::WrongArity { form, expected, got } => format!(
                "`{form}` expects {expected} argument{}, got {got}",
                if *expected == 1 { "" } else { "s" },
            ),
            AstErrorKind::InvalidArgument { form, index, expected, got } => format!(
                "invalid argument {index} of `{form}`: expected {}, got `{}`",
                expected.render_error(),
                trim_long_string(got.to_string(), 16, 16),
            ),
            AstErrorKind::InvalidParameterName { form, index, got } => format!(
                "invalid parameter name in argument {index} of `{form}`: `{}`",
                trim_long_string(got.to_string(), 16, 16),
            ),
            AstErrorKind::TooDeeplyNested { limit } => format!("expressions are nested deeper than {limit} levels"),
        }
    }

    fn help(&self) -> String {
        match self {
            AstErrorKind::UnknownLocalSymbol { suggestions, .. } => match suggestions.len() {
                0 => String::new(),
                1 => format!(
                    "Do you mean `{}`?",
                    suggestions[0].render_error(),
                ),
                _ => format!(
                    "Similar names exist in the current scope: {}",
                    concat_commas(
                        &suggestions.iter().map(
                            |s| s.render_error()
                        ).collect::<Vec<String>>(),
                        "and",
                        "`",
                        "`",
                    ),
                ),
            },
            AstErrorKind::WrongArity { form, .. } => format!("Usage: {}", usage(*form)),
            AstErrorKind::InvalidParameterName { .. } => String::from("Parameters must be symbols."),
            AstErrorKind::InvalidArgument { .. } => String::new(),
            AstErrorKind::TooDeeplyNested { .. } => String::from("Try splitting the form into functions."),
        }
    }

    fn index(&self) -> u32 {
        match self {
            AstErrorKind::UnknownLocalSymbol { .. } => 0,
            AstErrorKind::WrongArity { .. } => 1,
            AstErrorKind::InvalidArgument { .. } => 2,
            AstErrorKind::InvalidParameterName { .. } => 3,
            AstErrorKind::TooDeeplyNested { .. } => 4,
        }
    }
}

fn usage(form: Keyword) -> &'static str {
    match form {
        Keyword::Def => "(def NAME (PARAMS...) BODY)",
        Keyword::If => "(if COND THEN ELSE)",
        Keyword::Var => "(var NAME VALUE)",
        Keyword::Print => "(print VALUE)",
        Keyword::Add => "(+ LHS RHS)",
        Keyword::Sub => "(- LHS RHS)",
        Keyword::Mul => "(* LHS RHS)",
        Keyword::Div => "(/ LHS RHS)",
        Keyword::Lt => "(< LHS RHS)",
        Keyword::Le => "(<= LHS RHS)",
        Keyword::Gt => "(> LHS RHS)",
        Keyword::Ge => "(>= LHS RHS)",
    }
}
