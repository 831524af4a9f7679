#![deny(unused_imports)]

use log::{debug, info};
use ninal_error::{ErrorContext, NinalError, trim_long_string};
use ninal_keyword::Keyword;
use ninal_number::{ArithOp, CmpOp};
use ninal_value::{List, Value};
use std::rc::Rc;

mod arg;
mod error;
mod fmt;
mod node;
mod scope;
mod warn;

#[cfg(test)]
mod tests;

pub use arg::ArgShape;
pub use error::{AstError, AstErrorKind};
pub use node::{FuncDef, Node, Unit};
pub use scope::{Scope, Slot};
pub use warn::{AstWarning, AstWarningKind};

use arg::check_arguments;

/// How deep `build` may recurse. The reader's limit is lower, so only
/// values that are not read from source can hit this one.
pub const MAX_NESTING: usize = 1024;

// `build` grows the stack on the heap when less than `STACK_RED_ZONE` is left
const STACK_RED_ZONE: usize = 128 * 1024;
const STACK_GROW_SIZE: usize = 4 * 1024 * 1024;

/// Builds a top-level form in a fresh scope.
pub fn build_unit(form: &List) -> Result<(Unit, Vec<AstWarning>), AstError> {
    info!(
        "ninal_ast::build_unit(), form: {}",
        trim_long_string(form.to_string(), 24, 24),
    );

    let mut scope = Scope::new();
    let body = nested(&mut scope, |scope| build_list(form, scope))?;

    let unit = Unit {
        body,
        frame_size: scope.frame_size(),
    };

    Ok((unit, scope.take_warnings()))
}

pub fn build(value: &Value, scope: &mut Scope) -> Result<Node, AstError> {
    nested(scope, |scope| build_value(value, scope))
}

fn nested<F: FnOnce(&mut Scope) -> Result<Node, AstError>>(scope: &mut Scope, f: F) -> Result<Node, AstError> {
    if scope.depth >= MAX_NESTING {
        return Err(AstError::too_deeply_nested(MAX_NESTING));
    }

    scope.depth += 1;
    let result = stacker::maybe_grow(STACK_RED_ZONE, STACK_GROW_SIZE, || f(&mut *scope));
    scope.depth -= 1;

    result
}

fn build_value(value: &Value, scope: &mut Scope) -> Result<Node, AstError> {
    match value {
        Value::List(list) => build_list(list, scope),
        Value::Symbol(name) => match scope.lookup(*name) {
            Some(slot) => Ok(Node::VarLoad { name: *name, slot }),
            None => Err(AstError::unknown_local_symbol(*name, scope.similar_names(*name))),
        },

        // numbers, texts (and booleans, which the reader never produces)
        _ => Ok(Node::Const(value.clone())),
    }
}

fn build_list(list: &List, scope: &mut Scope) -> Result<Node, AstError> {
    let head = match list.get(0) {
        Some(Value::Symbol(head)) => *head,

        // an empty list, or a list whose head is not a symbol
        _ => {
            return Ok(Node::LiteralList(build_children(list, 0, scope)?));
        },
    };

    let keyword = match head.try_into_keyword() {
        Some(k) => k,

        // a local variable or a function call
        None => {
            if scope.lookup(head).is_some() {
                return Ok(Node::LiteralList(build_children(list, 0, scope)?));
            }

            return Ok(Node::Call {
                name: head,
                args: build_children(list, 1, scope)?,
            });
        },
    };

    check_arguments(keyword, list)?;

    // `check_arguments` checked the length
    let arg = |i: usize| list.get(i).cloned().unwrap_or_else(Value::empty_list);

    match keyword {
        Keyword::Def => build_def(list, scope),
        Keyword::If => Ok(Node::If {
            cond: Box::new(build(&arg(1), scope)?),
            true_branch: Box::new(build(&arg(2), scope)?),
            false_branch: Box::new(build(&arg(3), scope)?),
        }),
        Keyword::Var => {
            let Value::Symbol(name) = arg(1) else {
                return Err(AstError::invalid_argument(keyword, 1, ArgShape::Symbol, arg(1)));
            };

            // the init expression cannot see the new name
            let init = build(&arg(2), scope)?;
            let slot = scope.declare(name);

            Ok(Node::VarStore {
                name,
                slot,
                init: Box::new(init),
            })
        },
        Keyword::Print => Ok(Node::Print(Box::new(build(&arg(1), scope)?))),
        Keyword::Add | Keyword::Sub | Keyword::Mul | Keyword::Div => {
            let op = match keyword {
                Keyword::Add => ArithOp::Add,
                Keyword::Sub => ArithOp::Sub,
                Keyword::Mul => ArithOp::Mul,
                _ => ArithOp::Div,
            };
            let lhs = build(&arg(1), scope)?;
            let rhs = build(&arg(2), scope)?;

            Ok(Node::Arith { op, lhs: Box::new(lhs), rhs: Box::new(rhs) })
        },
        Keyword::Lt | Keyword::Le | Keyword::Gt | Keyword::Ge => {
            let op = match keyword {
                Keyword::Lt => CmpOp::Lt,
                Keyword::Le => CmpOp::Le,
                Keyword::Gt => CmpOp::Gt,
                _ => CmpOp::Ge,
            };
            let lhs = build(&arg(1), scope)?;
            let rhs = build(&arg(2), scope)?;

            Ok(Node::Compare { op, lhs: Box::new(lhs), rhs: Box::new(rhs) })
        },
    }
}

// The body is built right now, but the function is registered only when the node is evaluated.
fn build_def(list: &List, scope: &mut Scope) -> Result<Node, AstError> {
    let Some(Value::Symbol(name)) = list.get(1) else {
        return Err(AstError::invalid_argument(Keyword::Def, 1, ArgShape::Symbol, list.get(1).cloned().unwrap_or_else(Value::empty_list)));
    };
    let Some(Value::List(params)) = list.get(2) else {
        return Err(AstError::invalid_argument(Keyword::Def, 2, ArgShape::Parameters, list.get(2).cloned().unwrap_or_else(Value::empty_list)));
    };
    let Some(body) = list.get(3) else {
        return Err(AstError::wrong_arity(Keyword::Def, 3, list.len().saturating_sub(1)));
    };
    let name = *name;

    let mut body_scope = Scope::nested_in(scope);
    let mut param_slots = Vec::with_capacity(params.len());

    for param in params.iter() {
        match param.try_as_symbol() {
            Some(param) => {
                param_slots.push(body_scope.declare(param));
            },
            None => {
                return Err(AstError::invalid_parameter_name(Keyword::Def, 2, param.clone()));
            },
        }
    }

    let body = match build(body, &mut body_scope) {
        Ok(body) => body,
        Err(mut e) => {
            e.try_set_err_context(Some(ErrorContext::BuildingFunctionBody));

            if !e.get_error_info().has_message() {
                e.set_message(format!("in the body of `{}`", name.render_error()));
            }

            return Err(e);
        },
    };

    for warning in body_scope.take_warnings() {
        scope.push_warning(warning);
    }

    let func = FuncDef {
        name,
        params: param_slots,
        frame_size: body_scope.frame_size(),
        body,
    };

    debug!(
        "ninal_ast::build_def(), built `{name}`:\n{func}",
    );

    Ok(Node::Def(Rc::new(func)))
}

fn build_children(list: &List, offset: usize, scope: &mut Scope) -> Result<Vec<Node>, AstError> {
    let mut result = Vec::with_capacity(list.len().saturating_sub(offset));

    for element in list.iter().skip(offset) {
        result.push(build(element, scope)?);
    }

    Ok(result)
}
