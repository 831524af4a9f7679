use super::NinalNumber;
use std::fmt;

impl fmt::Display for NinalNumber {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        match self {
            NinalNumber::Small(n) => write!(fmt, "{n}"),
            NinalNumber::Big(n) => write!(fmt, "{}", n.to_string()),
        }
    }
}

impl fmt::Debug for NinalNumber {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        match self {
            NinalNumber::Small(n) => write!(fmt, "Small({n})"),
            NinalNumber::Big(n) => write!(fmt, "Big({})", n.to_string()),
        }
    }
}
