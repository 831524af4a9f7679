#![deny(unused_imports)]

//! A plain recursive evaluator. Each node evaluates to exactly one value,
//! and sub-expressions are evaluated from left to right.

use log::{debug, trace};
use ninal_ast::{FuncDef, Node, Unit};
use ninal_number::NinalNumber;
use ninal_value::{ListBuilder, Value};

mod ctxt;
mod error;
mod frame;
mod sink;

#[cfg(test)]
mod tests;

pub use ctxt::{EvalCtxt, FunctionTable};
pub use error::{EvalError, EvalErrorKind};
pub use frame::Frame;
pub use sink::{BufferedSink, OutputSink, StdoutSink};

// `eval` grows the stack on the heap when less than `STACK_RED_ZONE` is left,
// so the call depth limit is the only limit on recursion
const STACK_RED_ZONE: usize = 128 * 1024;
const STACK_GROW_SIZE: usize = 4 * 1024 * 1024;

/// Evaluates a top-level form in a fresh frame.
pub fn run_unit(unit: &Unit, ctxt: &mut EvalCtxt) -> Result<Value, EvalError> {
    let mut frame = Frame::new(unit.frame_size);

    eval(&unit.body, &mut frame, ctxt)
}

pub fn eval(node: &Node, frame: &mut Frame, ctxt: &mut EvalCtxt) -> Result<Value, EvalError> {
    stacker::maybe_grow(STACK_RED_ZONE, STACK_GROW_SIZE, || eval_node(node, frame, ctxt))
}

fn eval_node(node: &Node, frame: &mut Frame, ctxt: &mut EvalCtxt) -> Result<Value, EvalError> {
    match node {
        Node::Const(v) => Ok(v.clone()),
        Node::LiteralList(elements) => {
            let mut builder = ListBuilder::new();

            for element in elements.iter() {
                builder.append(eval(element, frame, ctxt)?);
            }

            Ok(Value::List(builder.finish()))
        },
        Node::VarLoad { name, slot } => frame.load(*slot, *name),
        Node::VarStore { slot, init, .. } => {
            let value = eval(init, frame, ctxt)?;
            frame.store(*slot, value);

            Ok(Value::empty_list())
        },
        Node::Def(func) => {
            ctxt.register_function(func.clone());

            Ok(Value::empty_list())
        },
        Node::Call { name, args } => {
            let mut values = Vec::with_capacity(args.len());

            for arg in args.iter() {
                values.push(eval(arg, frame, ctxt)?);
            }

            let func = ctxt.get_function(*name)?;

            call_function(&func, values, ctxt)
        },
        Node::Arith { op, lhs, rhs } => {
            let lhs = eval(lhs, frame, ctxt)?;
            let rhs = eval(rhs, frame, ctxt)?;
            let operator = op.to_string();

            let m = as_number(&lhs, &operator)?;
            let n = as_number(&rhs, &operator)?;

            match m.arith(*op, &n) {
                Ok(result) => Ok(Value::from_number(result)),
                Err(_) => Err(EvalError::division_by_zero(lhs)),
            }
        },
        Node::Compare { op, lhs, rhs } => {
            let lhs = eval(lhs, frame, ctxt)?;
            let rhs = eval(rhs, frame, ctxt)?;
            let operator = op.to_string();

            let m = as_number(&lhs, &operator)?;
            let n = as_number(&rhs, &operator)?;

            Ok(Value::Bool(m.compare(*op, &n)))
        },
        Node::Print(value) => {
            let value = eval(value, frame, ctxt)?;
            ctxt.emit_line(value.to_string());

            Ok(Value::empty_list())
        },
        Node::If { cond, true_branch, false_branch } => match eval(cond, frame, ctxt)? {
            Value::Bool(true) => eval(true_branch, frame, ctxt),
            Value::Bool(false) => eval(false_branch, frame, ctxt),
            v => Err(EvalError::non_boolean_condition(v)),
        },
    }
}

/// Every call gets a fresh frame. A function cannot see its caller's frame.
pub fn call_function(func: &FuncDef, args: Vec<Value>, ctxt: &mut EvalCtxt) -> Result<Value, EvalError> {
    if args.len() != func.params.len() {
        return Err(EvalError::wrong_argument_count(func.name, func.params.len(), args.len()));
    }

    if ctxt.call_depth() >= ctxt.max_call_depth() {
        debug!("ninal_interpreter::call_function(), call depth limit exceeded while calling `{}`", func.name);

        return Err(EvalError::call_depth_limit_exceeded(func.name, ctxt.max_call_depth()));
    }

    trace!("ninal_interpreter::call_function(), `{}` at depth {}", func.name, ctxt.call_depth());

    let mut frame = Frame::new(func.frame_size);

    for (slot, arg) in func.params.iter().zip(args.into_iter()) {
        frame.store(*slot, arg);
    }

    ctxt.inc_call_depth();
    let result = eval(&func.body, &mut frame, ctxt);
    ctxt.dec_call_depth();

    result
}

fn as_number(value: &Value, operator: &str) -> Result<NinalNumber, EvalError> {
    match value.try_as_number() {
        Some(n) => Ok(n),
        None => Err(EvalError::invalid_operand_type(operator.to_string(), value.clone())),
    }
}
