use crate::{List, Value};
use std::fmt;

impl Value {
    // texts inside a list are quoted, so that `(print ("a b"))` isn't confused with `(print (a b))`
    fn render(&self, nested: bool, fmt: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        match self {
            Value::Int(n) => write!(fmt, "{n}"),
            Value::BigInt(n) => write!(fmt, "{}", n.to_string()),
            Value::Bool(b) => write!(fmt, "{b}"),
            Value::Text(s) if nested => write!(fmt, "\"{s}\""),
            Value::Text(s) => write!(fmt, "{s}"),
            Value::Symbol(s) => write!(fmt, "{s}"),
            // lists built at runtime can be nested as deep as the calls that built them
            Value::List(l) => stacker::maybe_grow(32 * 1024, 1024 * 1024, || l.render(fmt)),
        }
    }
}

impl List {
    fn render(&self, fmt: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(fmt, "(")?;

        for (index, element) in self.iter().enumerate() {
            if index > 0 {
                write!(fmt, " ")?;
            }

            element.render(true, fmt)?;
        }

        write!(fmt, ")")
    }
}

impl fmt::Display for Value {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        self.render(false, fmt)
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        match self {
            Value::Int(n) => write!(fmt, "Int({n})"),
            Value::BigInt(n) => write!(fmt, "BigInt({})", n.to_string()),
            Value::Bool(b) => write!(fmt, "Bool({b})"),
            Value::Text(s) => write!(fmt, "Text({s:?})"),
            Value::Symbol(s) => write!(fmt, "{s:?}"),
            Value::List(l) => write!(fmt, "{l:?}"),
        }
    }
}

impl fmt::Display for List {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        self.render(fmt)
    }
}

impl fmt::Debug for List {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        fmt.debug_list().entries(self.iter()).finish()
    }
}
