use crate::Slot;
use ninal_number::{ArithOp, CmpOp};
use ninal_value::{Symbol, Value};
use std::rc::Rc;

/// Children are fixed once a node is built.
#[derive(Debug)]
pub enum Node {
    Const(Value),

    /// evaluates every element and makes a list out of them
    LiteralList(Vec<Node>),

    VarLoad {
        name: Symbol,
        slot: Slot,
    },

    /// evaluates to `()`
    VarStore {
        name: Symbol,
        slot: Slot,
        init: Box<Node>,
    },

    /// registers the function and evaluates to `()`
    Def(Rc<FuncDef>),

    Call {
        name: Symbol,
        args: Vec<Node>,
    },

    Arith {
        op: ArithOp,
        lhs: Box<Node>,
        rhs: Box<Node>,
    },

    Compare {
        op: CmpOp,
        lhs: Box<Node>,
        rhs: Box<Node>,
    },

    /// evaluates to `()`
    Print(Box<Node>),

    If {
        cond: Box<Node>,
        true_branch: Box<Node>,
        false_branch: Box<Node>,
    },
}

#[derive(Debug)]
pub struct FuncDef {
    pub name: Symbol,

    // `params[i]` is where the i-th argument goes
    pub params: Vec<Slot>,
    pub frame_size: usize,
    pub body: Node,
}

/// A top-level form, ready to be evaluated.
#[derive(Debug)]
pub struct Unit {
    pub body: Node,
    pub frame_size: usize,
}
