use ninal_error::{
    ExtraErrInfo,
    NinalError,
    NinalErrorKind,
    concat_commas,
    trim_long_string,
};
use ninal_span::SpanRange;
use ninal_value::{Symbol, Value};
use smallvec::{SmallVec, smallvec};

/// Nodes don't have spans. The driver attaches the span of the top-level form.
#[derive(Clone, Debug)]
pub struct EvalError {
    kind: EvalErrorKind,
    spans: SmallVec<[SpanRange; 1]>,
    extra: ExtraErrInfo,
}

impl EvalError {
    fn new(kind: EvalErrorKind) -> Self {
        EvalError {
            kind,
            spans: smallvec![],
            extra: ExtraErrInfo::none(),
        }
    }

    pub fn division_by_zero(dividend: Value) -> Self {
        EvalError::new(EvalErrorKind::DivisionByZero { dividend })
    }

    pub fn invalid_operand_type(operator: String, got: Value) -> Self {
        EvalError::new(EvalErrorKind::InvalidOperandType { operator, got })
    }

    pub fn undefined_function(name: Symbol, suggestions: Vec<Symbol>) -> Self {
        EvalError::new(EvalErrorKind::UndefinedFunction { name, suggestions })
    }

    pub fn wrong_argument_count(name: Symbol, expected: usize, got: usize) -> Self {
        EvalError::new(EvalErrorKind::WrongArgumentCount { name, expected, got })
    }

    pub fn non_boolean_condition(got: Value) -> Self {
        EvalError::new(EvalErrorKind::NonBooleanCondition(got))
    }

    pub fn uninitialized_slot(name: Symbol) -> Self {
        EvalError::new(EvalErrorKind::UninitializedSlot(name))
    }

    pub fn call_depth_limit_exceeded(name: Symbol, limit: usize) -> Self {
        EvalError::new(EvalErrorKind::CallDepthLimitExceeded { name, limit })
    }
}

impl NinalError<EvalErrorKind> for EvalError {
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

    fn err_kind(&self) -> &EvalErrorKind {
        &self.kind
    }

    fn index(&self) -> u32 {
        3
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum EvalErrorKind {
    DivisionByZero {
        dividend: Value,
    },
    InvalidOperandType {
        operator: String,
        got: Value,
    },
    UndefinedFunction {
        name: Symbol,
        suggestions: Vec<Symbol>,
    },
    WrongArgumentCount {
        name: Symbol,
        expected: usize,
        got: usize,
    },
    NonBooleanCondition(Value),

    // reading a `var` before it's evaluated, for example `(if (< 1 0) (var x 1) x)`
    UninitializedSlot(Symbol),
    CallDepthLimitExceeded {
        name: Symbol,
        limit: usize,
    },
}

fn render_value(v: &Value) -> String {
    trim_long_string(v.to_string(), 16, 16)
}

impl NinalErrorKind for EvalErrorKind {
    fn msg(&self) -> String {
        match self {
            EvalErrorKind::DivisionByZero { dividend } => format!("attempt to divide `{}` by zero", render_value(dividend)),
            EvalErrorKind::InvalidOperandType { operator, got } => format!(
                "`{operator}` expects integers, got {} `{}`",
                got.type_name(),
                render_value(got),
            ),
            EvalErrorKind::UndefinedFunction { name, .. } => format!("undefined function `{}`", name.render_error()),
            EvalErrorKind::WrongArgumentCount { name, expected, got } => format!(
                "`{}` expects {expected} argument{}, got {got}",
                name.render_error(),
                if *expected == 1 { "" } else { "s" },
            ),
            EvalErrorKind::NonBooleanCondition(got) => format!(
                "the condition of `if` must be a boolean, got {} `{}`",
                got.type_name(),
                render_value(got),
            ),
            EvalErrorKind::UninitializedSlot(name) => format!("`{}` is read before it's initialized", name.render_error()),
            EvalErrorKind::CallDepthLimitExceeded { name, limit } => format!(
                "call depth limit exceeded while calling `{}` (limit: {limit})",
                name.render_error(),
            ),
        }
    }

    fn help(&self) -> String {
        match self {
            EvalErrorKind::UndefinedFunction { suggestions, .. } => match suggestions.len() {
                0 => String::new(),
                1 => format!(
                    "Do you mean `{}`?",
                    suggestions[0].render_error(),
                ),
                _ => format!(
                    "Similar functions exist: {}",
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
            EvalErrorKind::NonBooleanCondition(_) => String::from("Comparisons (`<`, `<=`, `>`, `>=`) evaluate to booleans."),
            EvalErrorKind::CallDepthLimitExceeded { .. } => String::from("Try `--max-call-depth` to raise the limit."),
            _ => String::new(),
        }
    }

    fn index(&self) -> u32 {
        match self {
            EvalErrorKind::DivisionByZero { .. } => 0,
            EvalErrorKind::InvalidOperandType { .. } => 1,
            EvalErrorKind::UndefinedFunction { .. } => 2,
            EvalErrorKind::WrongArgumentCount { .. } => 3,
            EvalErrorKind::NonBooleanCondition(_) => 4,
            EvalErrorKind::UninitializedSlot(_) => 5,
            EvalErrorKind::CallDepthLimitExceeded { .. } => 6,
        }
    }
}
