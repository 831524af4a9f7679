use crate::AstError;
use ninal_keyword::Keyword;
use ninal_value::{List, Value};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ArgShape {
    /// any expression
    Value,

    /// a symbol literal
    Symbol,

    /// a list of symbols
    Parameters,
}

impl ArgShape {
    pub fn render_error(&self) -> &'static str {
        match self {
            ArgShape::Value => "a value",
            ArgShape::Symbol => "a symbol",
            ArgShape::Parameters => "a list of parameters",
        }
    }

    fn matches(&self, value: &Value) -> bool {
        match self {
            ArgShape::Value => true,
            ArgShape::Symbol => matches!(value, Value::Symbol(_)),
            ArgShape::Parameters => matches!(value, Value::List(_)),
        }
    }
}

pub fn shapes_of(keyword: Keyword) -> &'static [ArgShape] {
    match keyword {
        Keyword::Def => &[ArgShape::Symbol, ArgShape::Parameters, ArgShape::Value],
        Keyword::If => &[ArgShape::Value, ArgShape::Value, ArgShape::Value],
        Keyword::Var => &[ArgShape::Symbol, ArgShape::Value],
        Keyword::Print => &[ArgShape::Value],
        _ => &[ArgShape::Value, ArgShape::Value],
    }
}

/// `list[0]` is `keyword`.
pub(crate) fn check_arguments(keyword: Keyword, list: &List) -> Result<(), AstError> {
    let shapes = shapes_of(keyword);
    let args = &list.as_slice()[1..];

    if args.len() != shapes.len() {
        return Err(AstError::wrong_arity(keyword, shapes.len(), args.len()));
    }

    for (index, (shape, arg)) in shapes.iter().zip(args.iter()).enumerate() {
        if !shape.matches(arg) {
            return Err(AstError::invalid_argument(keyword, index + 1, *shape, arg.clone()));
        }

        if let (ArgShape::Parameters, Value::List(params)) = (shape, arg) {
            for param in params.iter() {
                if !matches!(param, Value::Symbol(_)) {
                    return Err(AstError::invalid_parameter_name(keyword, index + 1, param.clone()));
                }
            }
        }
    }

    Ok(())
}
