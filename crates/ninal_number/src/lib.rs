#![deny(unused_imports)]

use hmath::BigInt;
use log::trace;

mod err;
mod fmt;
mod op;

#[cfg(test)]
mod tests;

pub use err::{NumberError, NumericParseError};
pub use op::{ArithOp, CmpOp};

/// `Small` is the fast path. Once a computation leaves it, the result stays `Big`
/// even when it would fit in an `i64` again.
#[derive(Clone)]
pub enum NinalNumber {
    Small(i64),
    Big(BigInt),
}

impl NinalNumber {
    // the reader only hands over runs of decimal digits
    pub fn from_digits(s: &[u8]) -> Result<Self, NumericParseError> {
        if s.is_empty() {
            return Err(NumericParseError::Empty);
        }

        if let Some(c) = s.iter().find(|c| !c.is_ascii_digit()) {
            return Err(NumericParseError::NotADigit(*c));
        }

        // only ascii digits at this point
        let s = String::from_utf8_lossy(s);

        match s.parse::<i64>() {
            Ok(n) => Ok(NinalNumber::Small(n)),
            Err(_) => match BigInt::from_string(&s) {
                Ok(n) => Ok(NinalNumber::Big(n)),
                Err(_) => Err(NumericParseError::Overflow),
            },
        }
    }

    pub fn is_small(&self) -> bool {
        matches!(self, NinalNumber::Small(_))
    }

    pub fn to_big(&self) -> BigInt {
        match self {
            // `BigInt::from(i64)` negates its input, which overflows for `i64::MIN`
            NinalNumber::Small(n) => BigInt::from_i128(*n as i128),
            NinalNumber::Big(n) => n.clone(),
        }
    }

    pub fn is_zero(&self) -> bool {
        match self {
            NinalNumber::Small(n) => *n == 0,
            NinalNumber::Big(n) => n.is_zero(),
        }
    }

    pub fn arith(&self, op: ArithOp, other: &NinalNumber) -> Result<NinalNumber, NumberError> {
        if op == ArithOp::Div && other.is_zero() {
            return Err(NumberError::DivisionByZero);
        }

        if let (NinalNumber::Small(m), NinalNumber::Small(n)) = (self, other) {
            let res = match op {
                ArithOp::Add => m.checked_add(*n),
                ArithOp::Sub => m.checked_sub(*n),
                ArithOp::Mul => m.checked_mul(*n),

                // only `i64::MIN / -1` fails here
                ArithOp::Div => m.checked_div(*n),
            };

            if let Some(res) = res {
                return Ok(NinalNumber::Small(res));
            }

            trace!("`{m} {op} {n}` overflowed, widening");
        }

        Ok(NinalNumber::Big(big_arith(op, &self.to_big(), &other.to_big())))
    }

    pub fn compare(&self, op: CmpOp, other: &NinalNumber) -> bool {
        match (self, other) {
            (NinalNumber::Small(m), NinalNumber::Small(n)) => match op {
                CmpOp::Lt => m < n,
                CmpOp::Le => m <= n,
                CmpOp::Gt => m > n,
                CmpOp::Ge => m >= n,
            },
            _ => {
                let m = self.to_big();
                let n = other.to_big();

                match op {
                    CmpOp::Lt => m.lt_bi(&n),
                    CmpOp::Le => !m.gt_bi(&n),
                    CmpOp::Gt => m.gt_bi(&n),
                    CmpOp::Ge => !m.lt_bi(&n),
                }
            },
        }
    }
}

fn big_arith(op: ArithOp, m: &BigInt, n: &BigInt) -> BigInt {
    match op {
        ArithOp::Add => m.add_bi(n),
        ArithOp::Sub => m.sub_bi(n),
        ArithOp::Mul => m.mul_bi(n),
        ArithOp::Div => truncating_div(m, n),
    }
}

// divides the absolute values and fixes the sign afterwards, so the
// result truncates toward zero like `i64` division does
fn truncating_div(m: &BigInt, n: &BigInt) -> BigInt {
    let zero = BigInt::from(0i64);
    let m_neg = m.lt_bi(&zero);
    let n_neg = n.lt_bi(&zero);
    let m_abs = if m_neg { m.neg() } else { m.clone() };
    let n_abs = if n_neg { n.neg() } else { n.clone() };
    let q = m_abs.div_bi(&n_abs);

    if m_neg != n_neg {
        q.neg()
    }

    else {
        q
    }
}

impl PartialEq for NinalNumber {
    fn eq(&self, other: &NinalNumber) -> bool {
        match (self, other) {
            (NinalNumber::Small(m), NinalNumber::Small(n)) => m == n,
            _ => self.to_big().eq_bi(&other.to_big()),
        }
    }
}
