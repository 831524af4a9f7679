#![deny(unused_imports)]

use hmath::BigInt;
use ninal_number::NinalNumber;
use std::rc::Rc;

mod fmt;
mod list;
mod symbol;


pub use list::{List, ListBuilder};
pub use symbol::Symbol;

/// Values are immutable. Cloning a `List` or a `Text` only bumps a refcount.
#[derive(Clone)]
pub enum Value {
    Int(i64),
    BigInt(BigInt),

    // comparisons evaluate to this, there's no literal for it
    Bool(bool),
    Text(Rc<str>),
    Symbol(Symbol),
    List(List),
}

impl Value {
    pub fn new_text(s: &str) -> Self {
        Value::Text(Rc::from(s))
    }

    pub fn new_symbol(name: &str) -> Self {
        Value::Symbol(Symbol::new(name.as_bytes()))
    }

    pub fn empty_list() -> Self {
        Value::List(List::empty())
    }

    pub fn from_number(n: NinalNumber) -> Self {
        match n {
            NinalNumber::Small(n) => Value::Int(n),
            NinalNumber::Big(n) => Value::BigInt(n),
        }
    }

    pub fn try_as_number(&self) -> Option<NinalNumber> {
        match self {
            Value::Int(n) => Some(NinalNumber::Small(*n)),
            Value::BigInt(n) => Some(NinalNumber::Big(n.clone())),
            _ => None,
        }
    }

    pub fn try_as_symbol(&self) -> Option<Symbol> {
        match self {
            Value::Symbol(s) => Some(*s),
            _ => None,
        }
    }

    pub fn try_as_list(&self) -> Option<&List> {
        match self {
            Value::List(l) => Some(l),
            _ => None,
        }
    }

    pub fn try_as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// for error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Int(_) | Value::BigInt(_) => "integer",
            Value::Bool(_) => "boolean",
            Value::Text(_) => "text",
            Value::Symbol(_) => "symbol",
            Value::List(_) => "list",
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Int(m), Value::Int(n)) => m == n,
            (Value::BigInt(m), Value::BigInt(n)) => m.eq_bi(n),
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Text(a), Value::Text(b)) => a == b,
            (Value::Symbol(a), Value::Symbol(b)) => a == b,
            (Value::List(a), Value::List(b)) => a == b,
            _ => false,
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Value {
        Value::Bool(b)
    }
}

impl From<List> for Value {
    fn from(l: List) -> Value {
        Value::List(l)
    }
}
